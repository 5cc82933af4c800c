//! Drawing-surface abstraction.
//!
//! The chart never talks to a real display: every draw pass goes through a
//! [`RenderBackend`], and [`RenderList`] records the emitted commands so the
//! whole pipeline can run headless (tests, retained-mode backends).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// RGBA color, components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const LIGHT_GRAY: Self = Self::rgb(0.83, 0.83, 0.83);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Horizontal text anchoring relative to the location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical text anchoring relative to the location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// A single text draw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextSpec {
    pub text: String,
    pub loc: DVec2,
    pub size: f64,
    pub align: Align,
    pub v_align: VAlign,
    pub color: Color,
    /// Rotation around `loc` in radians; vertical axis labels use -π/2.
    pub angle: f64,
}

impl TextSpec {
    pub fn new(text: impl Into<String>, loc: DVec2, size: f64) -> Self {
        Self {
            text: text.into(),
            loc,
            size,
            align: Align::default(),
            v_align: VAlign::default(),
            color: Color::BLACK,
            angle: 0.0,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn v_align(mut self, v_align: VAlign) -> Self {
        self.v_align = v_align;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }
}

/// A single image draw; `source` is resolved by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSpec {
    pub source: String,
    pub loc: DVec2,
}

/// Stroke styling for polylines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub width: f64,
    pub color: Color,
    /// On/off dash lengths; `None` draws solid.
    pub dash: Option<(f64, f64)>,
}

/// Primitive draw operations the chart needs from a surface.
///
/// Implementations receive pixel-space coordinates and resolved styling
/// only; how pixels reach the screen is entirely up to the backend.
pub trait RenderBackend {
    /// Clear the whole surface.
    fn clear(&mut self);
    /// Clear a rectangle given its top-left origin and size.
    fn clear_rect(&mut self, origin: DVec2, size: DVec2);
    /// Set the global alpha applied to subsequent draws.
    fn set_alpha(&mut self, alpha: f64);
    /// Filled circle of the given diameter.
    fn draw_point(&mut self, loc: DVec2, color: Color, size: f64);
    fn draw_text(&mut self, spec: TextSpec);
    fn draw_image(&mut self, spec: ImageSpec);
    fn draw_polyline(&mut self, points: &[DVec2], style: LineStyle);
    /// Radial gradient centered at `center`, fading to transparent at `radius`.
    fn draw_halo(&mut self, center: DVec2, radius: f64, color: Color);
}

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    Clear,
    ClearRect {
        origin: DVec2,
        size: DVec2,
    },
    SetAlpha(f64),
    Point {
        loc: DVec2,
        color: Color,
        size: f64,
    },
    Text(TextSpec),
    Image(ImageSpec),
    Polyline {
        points: Vec<DVec2>,
        style: LineStyle,
    },
    Halo {
        center: DVec2,
        radius: f64,
        color: Color,
    },
}

/// Command-recording backend.
///
/// Captures every draw call in order for later replay or inspection; this is
/// what headless tests assert against.
#[derive(Clone, Debug, Default)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn take(self) -> Vec<RenderCommand> {
        self.commands
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl RenderBackend for RenderList {
    fn clear(&mut self) {
        self.commands.push(RenderCommand::Clear);
    }

    fn clear_rect(&mut self, origin: DVec2, size: DVec2) {
        self.commands.push(RenderCommand::ClearRect { origin, size });
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.commands.push(RenderCommand::SetAlpha(alpha));
    }

    fn draw_point(&mut self, loc: DVec2, color: Color, size: f64) {
        self.commands.push(RenderCommand::Point { loc, color, size });
    }

    fn draw_text(&mut self, spec: TextSpec) {
        self.commands.push(RenderCommand::Text(spec));
    }

    fn draw_image(&mut self, spec: ImageSpec) {
        self.commands.push(RenderCommand::Image(spec));
    }

    fn draw_polyline(&mut self, points: &[DVec2], style: LineStyle) {
        self.commands.push(RenderCommand::Polyline {
            points: points.to_vec(),
            style,
        });
    }

    fn draw_halo(&mut self, center: DVec2, radius: f64, color: Color) {
        self.commands.push(RenderCommand::Halo {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_list_records_in_order() {
        let mut list = RenderList::new();
        list.clear();
        list.draw_point(DVec2::new(1.0, 2.0), Color::RED, 5.0);
        list.set_alpha(1.0);

        assert_eq!(list.commands().len(), 3);
        assert_eq!(list.commands()[0], RenderCommand::Clear);
        assert!(matches!(list.commands()[2], RenderCommand::SetAlpha(a) if a == 1.0));
    }
}
