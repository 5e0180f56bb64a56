use glam::DVec2;

use crate::config::SceneConfig;
use crate::input::Inputs;

/// Point charge on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Charge {
    /// Canvas pixels, y down.
    pub pos: DVec2,
    /// Coulombs, sign matters.
    pub q: f64,
}

impl Charge {
    pub fn new(pos: DVec2, q: f64) -> Self {
        Self { pos, q }
    }

    pub fn is_positive(&self) -> bool {
        self.q > 0.0
    }
}

/// The two charges of one frame, mirrored about the canvas centre on the
/// horizontal axis. `left` carries q1, `right` carries q2.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChargePair {
    pub left: Charge,
    pub right: Charge,
}

impl ChargePair {
    pub fn place(inputs: &Inputs, cfg: &SceneConfig) -> Self {
        let mid = cfg.center();
        let half = DVec2::new(inputs.distance_m * cfg.pixels_per_meter / 2.0, 0.0);
        Self {
            left: Charge::new(mid - half, inputs.q1_micro * cfg.micro),
            right: Charge::new(mid + half, inputs.q2_micro * cfg.micro),
        }
    }

    pub fn as_array(&self) -> [Charge; 2] {
        [self.left, self.right]
    }
}
