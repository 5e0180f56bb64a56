//! Two-charge electrostatic field: sampling, arrows, glyphs and the Coulomb
//! force readout, drawn onto any [`Surface`].
//!
//! ```
//! use coulomb_solver::{CommandList, FieldRenderer, Inputs};
//!
//! let renderer = FieldRenderer::default();
//! let mut frame = CommandList::new();
//! let out = renderer.render(&mut frame, &Inputs::new(5.0, -5.0, 2.0));
//! assert_eq!(out.force.to_string(), "Force: 5.619e-2 N (Attractive)");
//! ```

pub mod charge;
pub mod config;
pub mod draw;
pub mod field;
pub mod force;
pub mod format;
pub mod input;
pub mod render;

pub use charge::{Charge, ChargePair};
pub use config::SceneConfig;
pub use draw::{Color, CommandList, DrawCommand, Surface};
pub use field::{FieldSample, sample_field};
pub use force::{ForceReadout, Interaction, coulomb_force};
pub use input::{Field, InputError, Inputs};
pub use render::Frame;

/// Owns the scene constants and redraws whole frames from input values.
#[derive(Clone, Debug, Default)]
pub struct FieldRenderer {
    cfg: SceneConfig,
}

impl FieldRenderer {
    pub fn new(cfg: SceneConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.cfg
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, inputs: &Inputs) -> Frame {
        render::render_frame(surface, inputs, &self.cfg)
    }

    /// Parse the raw field text and redraw. On bad input the surface is
    /// left cleared and nothing else is drawn.
    pub fn render_text<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        q1: &str,
        q2: &str,
        distance: &str,
    ) -> Result<Frame, InputError> {
        match Inputs::parse(q1, q2, distance) {
            Ok(inputs) => Ok(self.render(surface, &inputs)),
            Err(e) => {
                surface.clear(self.cfg.width, self.cfg.height);
                Err(e)
            }
        }
    }
}
