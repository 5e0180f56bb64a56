//! Drawing surface abstraction.
//!
//! The renderer never touches a concrete canvas. It talks to a [`Surface`],
//! which the web front end implements over `CanvasRenderingContext2d` and
//! which [`CommandList`] implements by recording every call, so a frame can
//! be inspected in tests or replayed onto a real surface later.

use glam::DVec2;

/// Opaque sRGB colour.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, accepted by every canvas style setter.
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Something the frame can be drawn on.
///
/// Text is always centred horizontally and vertically on `at`.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Color);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);
    fn fill_text(&mut self, text: &str, at: DVec2, font: &str, color: Color);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f64,
        height: f64,
    },
    Line {
        from: DVec2,
        to: DVec2,
        color: Color,
    },
    Circle {
        center: DVec2,
        radius: f64,
        color: Color,
    },
    Text {
        text: String,
        at: DVec2,
        font: String,
        color: Color,
    },
}

impl DrawCommand {
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            DrawCommand::Clear { width, height } => surface.clear(*width, *height),
            DrawCommand::Line { from, to, color } => surface.stroke_line(*from, *to, *color),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => surface.fill_circle(*center, *radius, *color),
            DrawCommand::Text {
                text,
                at,
                font,
                color,
            } => surface.fill_text(text, *at, font, *color),
        }
    }
}

/// In-memory surface that records what was drawn since the last clear.
#[derive(Clone, Debug, Default)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = (DVec2, DVec2, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, color } => Some((*from, *to, *color)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (DVec2, f64, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, DVec2)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, at, .. } => Some((text.as_str(), *at)),
            _ => None,
        })
    }

    /// Re-issue every recorded command, in order, onto `target`.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for cmd in &self.commands {
            cmd.apply(target);
        }
    }
}

impl Surface for CommandList {
    fn clear(&mut self, width: f64, height: f64) {
        // everything before a clear is invisible
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, at: DVec2, font: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            at,
            font: font.to_owned(),
            color,
        });
    }
}
