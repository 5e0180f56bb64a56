//! The three user-editable values, in display units.

use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Q1,
    Q2,
    Distance,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Q1 => "q1",
            Self::Q2 => "q2",
            Self::Distance => "distance",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors while reading the input fields.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid input for {field}: {value:?} is not a number")]
    InvalidInput { field: Field, value: String },

    #[error("Invalid input for distance: {0} m is negative")]
    NegativeDistance(f64),
}

/// Charges in µC, separation in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inputs {
    pub q1_micro: f64,
    pub q2_micro: f64,
    pub distance_m: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self::new(5.0, -5.0, 2.0)
    }
}

impl Inputs {
    pub fn new(q1_micro: f64, q2_micro: f64, distance_m: f64) -> Self {
        Self {
            q1_micro,
            q2_micro,
            distance_m,
        }
    }

    /// Parse the raw text of the three fields.
    pub fn parse(q1: &str, q2: &str, distance: &str) -> Result<Self, InputError> {
        let inputs = Self::new(
            parse_field(Field::Q1, q1)?,
            parse_field(Field::Q2, q2)?,
            parse_field(Field::Distance, distance)?,
        );
        if inputs.distance_m < 0.0 {
            return Err(InputError::NegativeDistance(inputs.distance_m));
        }
        Ok(inputs)
    }
}

pub fn parse_field(field: Field, raw: &str) -> Result<f64, InputError> {
    let invalid = || InputError::InvalidInput {
        field,
        value: raw.to_owned(),
    };
    // `f64::from_str` takes "inf" and "NaN"; neither is a usable reading
    let v: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !v.is_finite() {
        return Err(invalid());
    }
    Ok(v)
}
