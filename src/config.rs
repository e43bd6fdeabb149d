//! Plot configuration.

use crate::render::Color;

/// Polyline sample density: the number of evaluation points used to
/// approximate a continuous expression across the visible X span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grain {
    /// 101 samples.
    Gross = 101,
    /// 201 samples.
    Coarse = 201,
    /// 301 samples.
    #[default]
    Medium = 301,
    /// 501 samples.
    Fine = 501,
    /// 901 samples.
    ExtraFine = 901,
}

impl Grain {
    /// Number of samples for this density.
    pub fn samples(self) -> u32 {
        self as u32
    }
}

/// Configuration for plot layout, density, and default colors.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Margin on the top, right, and bottom edges, in pixels.
    pub outer_border: f32,
    /// Wider left margin reserved for Y axis labels, in pixels.
    pub left_border: f32,
    /// Length of the solid tick marks at the plot edges, in pixels.
    pub mark_length: f32,
    /// Minimum pixel spacing between axis ticks.
    pub min_pixels_per_tick: f32,
    /// Polyline sample density.
    pub grain: Grain,
    /// On/off dash pattern for gridlines, in pixels.
    pub dash_pattern: [f32; 2],
    /// Color of the axes rectangle and tick marks.
    pub frame_color: Color,
    /// Color of the dashed gridlines.
    pub grid_color: Color,
    /// Color of tick labels.
    pub label_color: Color,
    /// Color used for series registered with the transparent sentinel.
    pub default_series_color: Color,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            outer_border: 20.0,
            left_border: 70.0,
            mark_length: 4.0,
            min_pixels_per_tick: 50.0,
            grain: Grain::default(),
            dash_pattern: [4.0, 4.0],
            frame_color: Color::DARK_GREY,
            grid_color: Color::LIGHT_GREY,
            label_color: Color::DARK_GREY,
            default_series_color: Color::BLACK,
        }
    }
}
