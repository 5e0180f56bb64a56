use coulomb_solver::{Color, Surface};
use glam::DVec2;
use leptos::logging::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// `Surface` over a `<canvas>` 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
        {
            warn!("arc at {center} r={radius}: {e:?}");
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, at: DVec2, font: &str, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        if let Err(e) = self.ctx.fill_text(text, at.x, at.y) {
            warn!("fill_text {text:?}: {e:?}");
        }
    }
}
