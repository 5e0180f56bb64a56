//! Superposed inverse-square field and the arrow grid built from it.

use glam::DVec2;

use crate::charge::Charge;
use crate::config::SceneConfig;

/// One grid point and the net field there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSample {
    pub at: DVec2,
    pub e: DVec2,
}

/// Net field at `p`, unnormalized (q / r² per charge, no Coulomb constant).
///
/// Charges closer than `sqrt(threshold)` to `p` are left out, which also
/// keeps `r² == 0` away from the division.
pub fn sample_field(p: DVec2, charges: &[Charge], threshold: f64) -> DVec2 {
    let mut e = DVec2::ZERO;
    for c in charges {
        let d = p - c.pos;
        let r2 = d.length_squared();
        if r2 < threshold {
            continue;
        }
        let r = r2.sqrt();
        e += (c.q / r2) * (d / r);
    }
    e
}

/// Rescale `e` to `length` keeping its direction. `None` when the field
/// has no direction (zero or non-finite length).
pub fn arrow_vector(e: DVec2, length: f64) -> Option<DVec2> {
    let m = e.length();
    if m == 0.0 || !m.is_finite() {
        return None;
    }
    Some(e * (length / m))
}

/// Walk the sampling grid column by column: x outer, y inner, both starting
/// at 0 and stopping short of the canvas edge.
pub fn grid_points(cfg: &SceneConfig) -> impl Iterator<Item = DVec2> + '_ {
    let step = cfg.grid_spacing;
    let cols = steps_below(cfg.width, step);
    let rows = steps_below(cfg.height, step);
    (0..cols).flat_map(move |ix| {
        (0..rows).map(move |jy| DVec2::new(ix as f64 * step, jy as f64 * step))
    })
}

pub fn sample_grid<'a>(
    charges: &'a [Charge],
    cfg: &'a SceneConfig,
) -> impl Iterator<Item = FieldSample> + 'a {
    grid_points(cfg).map(move |at| FieldSample {
        at,
        e: sample_field(at, charges, cfg.proximity_threshold),
    })
}

// Count of k >= 0 with k * step < extent.
fn steps_below(extent: f64, step: f64) -> usize {
    if !(step > 0.0) || !(extent > 0.0) {
        return 0;
    }
    (extent / step).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const T: f64 = 200.0;

    #[test]
    fn single_positive_charge_points_away() {
        let c = [Charge::new(DVec2::new(100.0, 100.0), 1e-6)];
        let e = sample_field(DVec2::new(130.0, 100.0), &c, T);
        assert!(e.x > 0.0);
        assert_relative_eq!(e.y, 0.0);
        assert_relative_eq!(e.x, 1e-6 / 900.0);
    }

    #[test]
    fn negative_charge_points_toward() {
        let c = [Charge::new(DVec2::new(0.0, 0.0), -2.0)];
        let e = sample_field(DVec2::new(0.0, 50.0), &c, T);
        assert!(e.y < 0.0);
        assert_relative_eq!(e.x, 0.0);
    }

    #[test]
    fn coincident_point_is_excluded() {
        let c = [Charge::new(DVec2::new(25.0, 25.0), 1.0)];
        assert_eq!(sample_field(DVec2::new(25.0, 25.0), &c, T), DVec2::ZERO);
        // just inside the threshold
        assert_eq!(sample_field(DVec2::new(35.0, 25.0), &c, T), DVec2::ZERO);
        // r² = 225, outside
        assert!(sample_field(DVec2::new(40.0, 25.0), &c, T).x > 0.0);
    }

    #[test]
    fn dipole_midpoint_points_from_plus_to_minus() {
        let c = [
            Charge::new(DVec2::new(200.0, 200.0), 5e-6),
            Charge::new(DVec2::new(400.0, 200.0), -5e-6),
        ];
        let e = sample_field(DVec2::new(300.0, 200.0), &c, T);
        assert!(e.x > 0.0);
        assert_relative_eq!(e.y, 0.0);
    }

    #[test]
    fn arrow_has_fixed_length_and_same_direction() {
        let a = arrow_vector(DVec2::new(3e-9, -4e-9), 12.0).unwrap();
        assert_relative_eq!(a.length(), 12.0, epsilon = 1e-12);
        assert_relative_eq!(a.x, 7.2, epsilon = 1e-12);
        assert_relative_eq!(a.y, -9.6, epsilon = 1e-12);
        assert_eq!(arrow_vector(DVec2::ZERO, 12.0), None);
        assert_eq!(arrow_vector(DVec2::new(f64::NAN, 0.0), 12.0), None);
    }

    #[test]
    fn grid_covers_canvas_from_origin() {
        let cfg = SceneConfig::default();
        let pts: Vec<_> = grid_points(&cfg).collect();
        assert_eq!(pts.len(), 24 * 16);
        assert_eq!(pts[0], DVec2::ZERO);
        assert_eq!(pts[1], DVec2::new(0.0, 25.0));
        assert_eq!(*pts.last().unwrap(), DVec2::new(575.0, 375.0));
    }

    #[test]
    fn partial_cells_still_get_a_column() {
        let cfg = SceneConfig::default().with_size(60.0, 25.0);
        let xs: Vec<_> = grid_points(&cfg).map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 25.0, 50.0]);
    }

    #[test]
    fn degenerate_grid_is_empty() {
        let mut cfg = SceneConfig::default();
        cfg.grid_spacing = 0.0;
        assert_eq!(grid_points(&cfg).count(), 0);
    }

    #[test]
    fn sample_grid_pairs_points_with_field() {
        let cfg = SceneConfig::default().with_size(50.0, 50.0);
        let c = [Charge::new(DVec2::new(0.0, 0.0), 1.0)];
        let samples: Vec<_> = sample_grid(&c, &cfg).collect();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0].e, DVec2::ZERO);
        assert!(samples[3].e.x > 0.0 && samples[3].e.y > 0.0);
    }
}
