//! Drawing-surface contract and backend-agnostic render primitives.
//!
//! The plot core never rasterises pixels itself. It issues calls against the
//! [`Surface`] trait, which a host backend implements over its own drawing
//! API. [`RenderList`] is a provided `Surface` that records commands for
//! retained-mode backends and for tests.

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Dark grey, used for axes and labels by default.
    pub const DARK_GREY: Self = Self::new(0.35, 0.35, 0.35, 1.0);
    /// Light grey, used for gridlines by default.
    pub const LIGHT_GREY: Self = Self::new(0.8, 0.8, 0.8, 1.0);
    /// Fully transparent sentinel meaning "use the configured default".
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Whether this color is the "use default" sentinel.
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }
}

/// Horizontal anchoring for drawn text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Anchor at the left edge.
    Left,
    /// Anchor at the horizontal center.
    Center,
    /// Anchor at the right edge.
    Right,
}

/// Minimal drawing capability the plot core calls into.
///
/// Implemented by the host over its rasteriser. Coordinates are pixels
/// relative to the drawable surface; calls are assumed infallible.
pub trait Surface {
    /// Draw a solid line between two points.
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color);

    /// Draw a dashed line between two points with an on/off pixel pattern.
    fn draw_dashed_line(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        pattern: [f32; 2],
        color: Color,
    );

    /// Draw an unfilled rectangle outline.
    fn draw_rect_outline(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Fill a rectangle. Used for point markers.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Draw a single line of text anchored at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign, color: Color);
}

/// A recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Solid line segment.
    Line {
        /// Start X.
        x0: f32,
        /// Start Y.
        y0: f32,
        /// End X.
        x1: f32,
        /// End Y.
        y1: f32,
        /// Stroke color.
        color: Color,
    },
    /// Dashed line segment.
    DashedLine {
        /// Start X.
        x0: f32,
        /// Start Y.
        y0: f32,
        /// End X.
        x1: f32,
        /// End Y.
        y1: f32,
        /// On/off dash pattern in pixels.
        pattern: [f32; 2],
        /// Stroke color.
        color: Color,
    },
    /// Rectangle outline.
    RectOutline {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Width in pixels.
        width: f32,
        /// Height in pixels.
        height: f32,
        /// Stroke color.
        color: Color,
    },
    /// Filled rectangle.
    FillRect {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Width in pixels.
        width: f32,
        /// Height in pixels.
        height: f32,
        /// Fill color.
        color: Color,
    },
    /// Text run.
    Text {
        /// Label content.
        text: String,
        /// Anchor X.
        x: f32,
        /// Anchor Y.
        y: f32,
        /// Horizontal anchoring.
        align: TextAlign,
        /// Text color.
        color: Color,
    },
}

/// A [`Surface`] that records commands instead of drawing.
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Access all recorded commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RenderList {
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        self.commands.push(RenderCommand::Line {
            x0,
            y0,
            x1,
            y1,
            color,
        });
    }

    fn draw_dashed_line(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        pattern: [f32; 2],
        color: Color,
    ) {
        self.commands.push(RenderCommand::DashedLine {
            x0,
            y0,
            x1,
            y1,
            pattern,
            color,
        });
    }

    fn draw_rect_outline(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(RenderCommand::RectOutline {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(RenderCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign, color: Color) {
        self.commands.push(RenderCommand::Text {
            text: text.to_owned(),
            x,
            y,
            align,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_list_records_in_order() {
        let mut list = RenderList::new();
        list.draw_line(0.0, 0.0, 1.0, 1.0, Color::BLACK);
        list.draw_text("0.5", 10.0, 20.0, TextAlign::Center, Color::DARK_GREY);
        assert_eq!(list.commands().len(), 2);
        assert!(matches!(list.commands()[1], RenderCommand::Text { .. }));
        list.clear();
        assert!(list.commands().is_empty());
    }

    #[test]
    fn transparent_sentinel() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(!Color::BLACK.is_transparent());
    }
}
