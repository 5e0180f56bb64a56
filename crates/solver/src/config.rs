use crate::draw::Color;

/// Fixed rendering constants for one scene.
///
/// Lengths are canvas pixels unless noted. The defaults reproduce the
/// classic 600x400 two-charge demo.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub width: f64,
    pub height: f64,

    // field grid
    pub grid_spacing: f64,
    /// r² (px²) below which a charge does not contribute at a sample point.
    pub proximity_threshold: f64,
    pub arrow_length: f64,
    pub arrowhead_size: f64,
    /// Spread of each arrowhead stroke from the reversed arrow, radians.
    pub arrowhead_angle: f64,

    // glyphs
    pub charge_radius: f64,
    pub label_font: String,

    // units
    pub pixels_per_meter: f64,
    /// Display unit → coulombs (µC).
    pub micro: f64,
    /// N·m²/C²
    pub coulomb_k: f64,

    // palette
    pub field_color: Color,
    pub positive_color: Color,
    pub negative_color: Color,
    pub label_color: Color,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            grid_spacing: 25.0,
            proximity_threshold: 200.0,
            arrow_length: 12.0,
            arrowhead_size: 5.0,
            arrowhead_angle: std::f64::consts::FRAC_PI_6,
            charge_radius: 12.0,
            label_font: "14px Arial".into(),
            pixels_per_meter: 100.0,
            micro: 1e-6,
            coulomb_k: 8.99e9,
            field_color: Color::BLUE,
            positive_color: Color::RED,
            negative_color: Color::BLUE,
            label_color: Color::WHITE,
        }
    }
}

impl SceneConfig {
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[inline]
    pub fn center(&self) -> glam::DVec2 {
        glam::DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_tracks_size() {
        let cfg = SceneConfig::default().with_size(800.0, 300.0);
        assert_eq!(cfg.center(), glam::DVec2::new(400.0, 150.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: SceneConfig = serde_json::from_str(r#"{ "grid_spacing": 40.0 }"#).unwrap();
        assert_eq!(cfg.grid_spacing, 40.0);
        assert_eq!(cfg.width, 600.0);
        assert_eq!(cfg.positive_color, Color::RED);
    }
}
