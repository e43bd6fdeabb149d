//! Registered plot series: a named, colored expression.

use crate::expr::Expr;
use crate::render::Color;

/// An expression registered for rendering, with display metadata.
///
/// Insertion order into the plot determines draw order; later series draw on
/// top of earlier ones.
#[derive(Debug, Clone)]
pub struct PlotSeries {
    name: String,
    color: Color,
    expr: Expr,
}

impl PlotSeries {
    /// Create a series. [`Color::TRANSPARENT`] means "use the configured
    /// default color".
    pub fn new(expr: Expr, color: Color, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color,
            expr,
        }
    }

    /// Series name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered color, possibly the transparent sentinel.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Color to draw with, substituting `fallback` for the sentinel.
    pub fn effective_color(&self, fallback: Color) -> Color {
        if self.color.is_transparent() {
            fallback
        } else {
            self.color
        }
    }

    /// The expression this series renders.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_color_falls_back() {
        let series = PlotSeries::new(Expr::x(), Color::TRANSPARENT, "f");
        assert_eq!(series.effective_color(Color::BLACK), Color::BLACK);

        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        let series = PlotSeries::new(Expr::x(), red, "g");
        assert_eq!(series.effective_color(Color::BLACK), red);
    }
}
