//! One full frame: clear, field arrows, charge glyphs, force.

use glam::DVec2;

use crate::charge::{Charge, ChargePair};
use crate::config::SceneConfig;
use crate::draw::Surface;
use crate::field::{arrow_vector, sample_grid};
use crate::force::{ForceReadout, coulomb_force};
use crate::format::to_fixed;
use crate::input::Inputs;

/// What a redraw produced besides pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub charges: ChargePair,
    pub force: ForceReadout,
    /// Grid points that got an arrow.
    pub arrows: usize,
}

pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    inputs: &Inputs,
    cfg: &SceneConfig,
) -> Frame {
    surface.clear(cfg.width, cfg.height);

    let charges = ChargePair::place(inputs, cfg);
    let arrows = draw_field(surface, &charges.as_array(), cfg);
    draw_charge(surface, &charges.left, cfg);
    draw_charge(surface, &charges.right, cfg);

    // force uses the unscaled separation, not canvas pixels
    let force = coulomb_force(
        cfg.coulomb_k,
        charges.left.q,
        charges.right.q,
        inputs.distance_m,
    );

    log::debug!(
        "frame q1={:e} q2={:e} d={} m: {} arrows, {}",
        charges.left.q,
        charges.right.q,
        inputs.distance_m,
        arrows,
        force
    );

    Frame {
        charges,
        force,
        arrows,
    }
}

/// Draw a fixed-length arrow at every grid point with a defined field
/// direction. Returns how many were drawn.
pub fn draw_field<S: Surface + ?Sized>(
    surface: &mut S,
    charges: &[Charge],
    cfg: &SceneConfig,
) -> usize {
    let mut drawn = 0;
    for sample in sample_grid(charges, cfg) {
        let Some(a) = arrow_vector(sample.e, cfg.arrow_length) else {
            log::trace!("no field direction at {}", sample.at);
            continue;
        };
        let tip = sample.at + a;
        surface.stroke_line(sample.at, tip, cfg.field_color);
        draw_arrowhead(surface, tip, a, cfg);
        drawn += 1;
    }
    drawn
}

/// Two strokes back from `tip`, each `arrowhead_size` long and
/// `arrowhead_angle` off the reversed `dir`.
pub fn draw_arrowhead<S: Surface + ?Sized>(
    surface: &mut S,
    tip: DVec2,
    dir: DVec2,
    cfg: &SceneConfig,
) {
    let angle = dir.y.atan2(dir.x);
    for spread in [-cfg.arrowhead_angle, cfg.arrowhead_angle] {
        let back = DVec2::from_angle(angle + spread) * cfg.arrowhead_size;
        surface.stroke_line(tip, tip - back, cfg.field_color);
    }
}

pub fn draw_charge<S: Surface + ?Sized>(surface: &mut S, charge: &Charge, cfg: &SceneConfig) {
    let fill = if charge.is_positive() {
        cfg.positive_color
    } else {
        cfg.negative_color
    };
    surface.fill_circle(charge.pos, cfg.charge_radius, fill);
    surface.fill_text(
        &charge_label(charge.q, cfg.micro),
        charge.pos,
        &cfg.label_font,
        cfg.label_color,
    );
}

/// Signed magnitude in display units with one decimal: `+5.0`, `-2.5`, `0.0`.
///
/// Scales by `unit.recip()` rather than dividing, so the default µC unit
/// multiplies by exactly `1e6` and ties land where the page puts them.
pub fn charge_label(q: f64, unit: f64) -> String {
    let v = q * unit.recip();
    let sign = if v > 0.0 { "+" } else { "" };
    format!("{sign}{}", to_fixed(v, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Color, CommandList, DrawCommand};
    use approx::assert_relative_eq;

    #[test]
    fn labels() {
        assert_eq!(charge_label(5e-6, 1e-6), "+5.0");
        assert_eq!(charge_label(-2.5e-6, 1e-6), "-2.5");
        assert_eq!(charge_label(0.0, 1e-6), "0.0");
        assert_eq!(charge_label(-0.0, 1e-6), "0.0");
        assert_eq!(charge_label(1.2e-7, 1e-6), "+0.1");
    }

    #[test]
    fn label_ties_round_up_like_the_page() {
        let cfg = SceneConfig::default();
        let cases = [
            (0.25, "+0.3"),
            (0.75, "+0.8"),
            (1.25, "+1.3"),
            (0.35, "+0.3"),
            (-1.25, "-1.3"),
        ];
        for (v, want) in cases {
            let mut list = CommandList::new();
            render_frame(&mut list, &Inputs::new(v, 1.0, 2.0), &cfg);
            assert_eq!(list.texts().next().map(|(t, _)| t), Some(want), "q1 = {v}");
        }
    }

    #[test]
    fn arrowhead_strokes_fold_back_at_thirty_degrees() {
        let cfg = SceneConfig::default();
        let mut list = CommandList::new();
        let tip = DVec2::new(50.0, 50.0);
        draw_arrowhead(&mut list, tip, DVec2::new(12.0, 0.0), &cfg);

        let strokes: Vec<_> = list.lines().collect();
        assert_eq!(strokes.len(), 2);
        for (from, to, color) in &strokes {
            assert_eq!(*from, tip);
            assert_eq!(*color, Color::BLUE);
            assert_relative_eq!(from.distance(*to), 5.0, epsilon = 1e-12);
            // behind the tip
            assert!(to.x < tip.x);
            let back = *to - *from;
            assert_relative_eq!(back.y.abs().atan2(-back.x), cfg.arrowhead_angle, epsilon = 1e-12);
        }
        assert_relative_eq!(strokes[0].1.y - tip.y, -(strokes[1].1.y - tip.y), epsilon = 1e-12);
    }

    #[test]
    fn glyph_is_disc_then_centered_label() {
        let cfg = SceneConfig::default();
        let mut list = CommandList::new();
        let c = Charge::new(DVec2::new(10.0, 20.0), -3e-6);
        draw_charge(&mut list, &c, &cfg);
        assert_eq!(
            list.commands(),
            &[
                DrawCommand::Circle {
                    center: c.pos,
                    radius: 12.0,
                    color: Color::BLUE,
                },
                DrawCommand::Text {
                    text: "-3.0".into(),
                    at: c.pos,
                    font: "14px Arial".into(),
                    color: Color::WHITE,
                },
            ]
        );
    }

    #[test]
    fn zero_charge_glyph_uses_negative_color() {
        let cfg = SceneConfig::default();
        let mut list = CommandList::new();
        draw_charge(&mut list, &Charge::new(DVec2::ZERO, 0.0), &cfg);
        assert_eq!(list.circles().next().map(|c| c.2), Some(cfg.negative_color));
    }

    #[test]
    fn each_arrow_is_three_strokes() {
        let cfg = SceneConfig::default().with_size(100.0, 100.0);
        let mut list = CommandList::new();
        let n = draw_field(&mut list, &[Charge::new(DVec2::new(50.0, 50.0), 1e-6)], &cfg);
        // 16 grid points, only (50,50) sits on the charge
        assert_eq!(n, 15);
        assert_eq!(list.lines().count(), 45);
    }
}
