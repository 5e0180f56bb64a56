use std::fmt;

use crate::format::to_exponential;

/// Direction of the force between the two charges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Repulsive,
    Attractive,
}

impl Interaction {
    /// Sign of `q1 * q2`. A zero (or NaN) product reads as attractive.
    pub fn from_product(product: f64) -> Self {
        if product > 0.0 {
            Self::Repulsive
        } else {
            Self::Attractive
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Repulsive => "Repulsive",
            Self::Attractive => "Attractive",
        }
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coulomb force between the two charges, SI units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceReadout {
    /// Newtons, never negative. `inf`/`NaN` when the distance is zero.
    pub magnitude: f64,
    pub interaction: Interaction,
}

/// `k * |q1 * q2| / d²` with charges in coulombs and `distance` in metres.
///
/// A zero distance is not guarded; the result is whatever IEEE division
/// gives and is reported as such.
pub fn coulomb_force(k: f64, q1: f64, q2: f64, distance: f64) -> ForceReadout {
    let product = q1 * q2;
    ForceReadout {
        magnitude: k * product.abs() / (distance * distance),
        interaction: Interaction::from_product(product),
    }
}

impl fmt::Display for ForceReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Force: {} N ({})",
            to_exponential(self.magnitude, 3),
            self.interaction
        )
    }
}
