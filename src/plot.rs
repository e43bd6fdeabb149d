//! Plot state and rendering orchestration.

use log::debug;

use crate::axis::{almost_equal, format_tick, plan_ticks};
use crate::config::PlotConfig;
use crate::error::RangeError;
use crate::expr::Expr;
use crate::geom::ScreenPoint;
use crate::render::{Color, Surface, TextAlign};
use crate::series::PlotSeries;
use crate::transform::Transform;
use crate::view::DataRange;

/// A 2D line plot over registered expressions.
///
/// The plot owns the visible [`DataRange`], the surface pixel size, and the
/// registered series. Both the range and the pixel size must be set before
/// rendering produces output; either setter rebuilds the coordinate
/// transform so its scale factors never go stale.
///
/// All operations run synchronously on the caller's thread; the host decides
/// when to repaint after a mutating call.
#[derive(Debug, Clone)]
pub struct Plot {
    config: PlotConfig,
    range: Option<DataRange>,
    size: Option<(u32, u32)>,
    transform: Option<Transform>,
    series: Vec<PlotSeries>,
}

impl Plot {
    /// Create a plot with the default configuration.
    pub fn new() -> Self {
        Self::with_config(PlotConfig::default())
    }

    /// Create a plot with an explicit configuration.
    pub fn with_config(config: PlotConfig) -> Self {
        Self {
            config,
            range: None,
            size: None,
            transform: None,
            series: Vec::new(),
        }
    }

    /// Access the configuration.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Set the visible data range from explicit bounds.
    pub fn set_data_range(
        &mut self,
        lo_x: f64,
        hi_x: f64,
        lo_y: f64,
        hi_y: f64,
    ) -> Result<(), RangeError> {
        self.set_range(DataRange::new(lo_x, hi_x, lo_y, hi_y)?)
    }

    /// Set the visible data range.
    ///
    /// Nothing is committed on failure; the previous range, size, and
    /// transform stay in effect.
    pub fn set_range(&mut self, range: DataRange) -> Result<(), RangeError> {
        if let Some((width, height)) = self.size {
            self.transform = Some(Transform::new(range, width, height, &self.config)?);
        }
        debug!(
            "range set to x=[{}, {}] y=[{}, {}]",
            range.x.min, range.x.max, range.y.min, range.y.max
        );
        self.range = Some(range);
        Ok(())
    }

    /// The current visible data range, if set.
    pub fn data_range(&self) -> Option<DataRange> {
        self.range
    }

    /// Set the pixel size of the drawable surface.
    ///
    /// Fails when the borders leave no drawable plot area, even before a
    /// range is set. Nothing is committed on failure.
    pub fn set_pixel_size(&mut self, width: u32, height: u32) -> Result<(), RangeError> {
        let plot_width = width as f32 - self.config.outer_border - self.config.left_border;
        let plot_height = height as f32 - 2.0 * self.config.outer_border;
        if plot_width <= 0.0 || plot_height <= 0.0 {
            return Err(RangeError::ZeroPixelExtent { width, height });
        }
        if let Some(range) = self.range {
            self.transform = Some(Transform::new(range, width, height, &self.config)?);
        }
        debug!("pixel size set to {width}x{height}");
        self.size = Some((width, height));
        Ok(())
    }

    /// The current surface pixel size, if set.
    pub fn pixel_size(&self) -> Option<(u32, u32)> {
        self.size
    }

    /// The current coordinate transform, once range and size are both set.
    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    /// Register an expression for rendering.
    ///
    /// [`Color::TRANSPARENT`] selects the configured default series color.
    /// Later registrations draw on top of earlier ones.
    pub fn add_series(&mut self, expr: impl Into<Expr>, color: Color, name: impl Into<String>) {
        self.series.push(PlotSeries::new(expr.into(), color, name));
    }

    /// Access the registered series in draw order.
    pub fn series(&self) -> &[PlotSeries] {
        &self.series
    }

    /// Translate the visible range by a data-space delta.
    ///
    /// A non-finite delta is rejected before the renderer can ever see a
    /// NaN range. No-op until a range has been set.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64) -> Result<(), RangeError> {
        if let Some(range) = self.range {
            let translated = DataRange::from_ranges(
                range.x.translated(delta_x),
                range.y.translated(delta_y),
            )?;
            self.set_range(translated)?;
        }
        Ok(())
    }

    /// Scale the visible range around a focal point given as fractional
    /// positions within the range. Factors must be positive.
    ///
    /// No-op until a range has been set.
    pub fn zoom(
        &mut self,
        split_x: f64,
        split_y: f64,
        factor_x: f64,
        factor_y: f64,
    ) -> Result<(), RangeError> {
        if let Some(range) = self.range {
            self.set_range(range.zoomed(split_x, split_y, factor_x, factor_y)?)?;
        }
        Ok(())
    }

    /// Draw axes, gridlines, labels, and all registered series.
    ///
    /// Does nothing until both the data range and the pixel size are set.
    pub fn render(&self, surface: &mut dyn Surface) {
        let Some(transform) = self.transform.as_ref() else {
            return;
        };
        self.draw_axes(transform, surface);
        for series in &self.series {
            self.draw_series(series, transform, surface);
        }
    }

    fn draw_axes(&self, transform: &Transform, surface: &mut dyn Surface) {
        let cfg = &self.config;
        let range = transform.range();
        let width = transform.width();
        let height = transform.height();

        surface.draw_rect_outline(
            cfg.left_border - 1.0,
            cfg.outer_border - 1.0,
            transform.plot_width() + 2.0,
            transform.plot_height() + 2.0,
            cfg.frame_color,
        );

        let x_plan = plan_ticks(
            range.x.min,
            range.x.max,
            transform.plot_width(),
            cfg.min_pixels_per_tick,
        );
        for x in x_plan.values(range.x.max) {
            let sx = transform.to_screen_x(x);
            // Gridlines and marks at the range bounds would double-draw the
            // frame edge; labels are still wanted there.
            if !(almost_equal(x, range.x.min) || almost_equal(x, range.x.max)) {
                surface.draw_dashed_line(
                    sx,
                    cfg.outer_border,
                    sx,
                    height - cfg.outer_border,
                    cfg.dash_pattern,
                    cfg.grid_color,
                );
                surface.draw_line(
                    sx,
                    height - cfg.outer_border,
                    sx,
                    height - cfg.outer_border - cfg.mark_length,
                    cfg.frame_color,
                );
                surface.draw_line(
                    sx,
                    cfg.outer_border,
                    sx,
                    cfg.outer_border + cfg.mark_length,
                    cfg.frame_color,
                );
            }
            surface.draw_text(
                &format_tick(x, x_plan.step),
                sx,
                height - cfg.outer_border / 2.0 + 5.0,
                TextAlign::Center,
                cfg.label_color,
            );
        }

        let y_plan = plan_ticks(
            range.y.min,
            range.y.max,
            transform.plot_height(),
            cfg.min_pixels_per_tick,
        );
        for y in y_plan.values(range.y.max) {
            let sy = transform.to_screen_y(y);
            if !(almost_equal(y, range.y.min) || almost_equal(y, range.y.max)) {
                surface.draw_dashed_line(
                    cfg.left_border,
                    sy,
                    width - cfg.outer_border,
                    sy,
                    cfg.dash_pattern,
                    cfg.grid_color,
                );
                surface.draw_line(
                    cfg.left_border,
                    sy,
                    cfg.left_border + cfg.mark_length,
                    sy,
                    cfg.frame_color,
                );
                surface.draw_line(
                    width - cfg.outer_border,
                    sy,
                    width - cfg.outer_border - cfg.mark_length,
                    sy,
                    cfg.frame_color,
                );
            }
            surface.draw_text(
                &format_tick(y, y_plan.step),
                cfg.left_border - 3.0,
                sy,
                TextAlign::Right,
                cfg.label_color,
            );
        }
    }

    fn draw_series(&self, series: &PlotSeries, transform: &Transform, surface: &mut dyn Surface) {
        let color = series.effective_color(self.config.default_series_color);
        let range = transform.range();
        let span = range.x.span();
        let samples = self.config.grain.samples();
        let last_index = f64::from(samples - 1);

        // A NaN sample breaks the polyline rather than joining across the
        // undefined region.
        let mut prev: Option<ScreenPoint> = None;
        for i in 0..samples {
            let x = range.x.min + span * f64::from(i) / last_index;
            let y = series.expr().eval(x);
            if y.is_nan() {
                prev = None;
                continue;
            }
            let point = ScreenPoint::new(transform.to_screen_x(x), transform.to_screen_y(y));
            if let Some(last) = prev {
                surface.draw_line(last.x, last.y, point.x, point.y, color);
            }
            prev = Some(point);
        }
    }
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RenderCommand, RenderList};

    #[test]
    fn render_without_range_or_size_is_empty() {
        let mut plot = Plot::new();
        plot.add_series(Expr::x(), Color::TRANSPARENT, "f");
        let mut list = RenderList::new();
        plot.render(&mut list);
        assert!(list.commands().is_empty());

        plot.set_pixel_size(640, 320).unwrap();
        plot.render(&mut list);
        assert!(list.commands().is_empty());
    }

    #[test]
    fn invalid_range_is_rejected_before_rendering() {
        let mut plot = Plot::new();
        assert!(plot.set_data_range(3.0, -3.0, -1.0, 1.0).is_err());
        assert!(plot.data_range().is_none());
    }

    #[test]
    fn frame_rectangle_position_and_size() {
        let mut plot = Plot::new();
        plot.set_data_range(-3.0, 3.0, -1.0, 1.0).unwrap();
        plot.set_pixel_size(640, 320).unwrap();
        let mut list = RenderList::new();
        plot.render(&mut list);

        let Some(RenderCommand::RectOutline {
            x,
            y,
            width,
            height,
            ..
        }) = list.commands().first()
        else {
            panic!("first command should be the axes rectangle");
        };
        assert_eq!(*x, 69.0);
        assert_eq!(*y, 19.0);
        assert_eq!(*width, 552.0);
        assert_eq!(*height, 282.0);
    }

    #[test]
    fn boundary_ticks_are_labeled_but_not_gridlined() {
        let mut plot = Plot::new();
        plot.set_data_range(-3.0, 3.0, -1.0, 1.0).unwrap();
        plot.set_pixel_size(640, 320).unwrap();
        let mut list = RenderList::new();
        plot.render(&mut list);

        let dashed_x: Vec<f32> = list
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                RenderCommand::DashedLine { x0, x1, .. } if x0 == x1 => Some(*x0),
                _ => None,
            })
            .collect();
        // Vertical gridlines exist, but none at the plot's left or right edge.
        assert!(!dashed_x.is_empty());
        for x in dashed_x {
            assert!(x > 70.5 && x < 619.5, "gridline at boundary: {x}");
        }

        let labels: Vec<&str> = list
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                RenderCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert!(labels.contains(&"-3"));
        assert!(labels.contains(&"3"));
    }

    #[test]
    fn pan_then_inverse_pan_restores_range() {
        let mut plot = Plot::new();
        plot.set_data_range(-3.0, 3.0, -1.0, 1.0).unwrap();
        let before = plot.data_range().unwrap();
        plot.pan(0.5, 0.25).unwrap();
        plot.pan(-0.5, -0.25).unwrap();
        let after = plot.data_range().unwrap();
        assert!((after.x.min - before.x.min).abs() < 1e-12);
        assert!((after.y.max - before.y.max).abs() < 1e-12);
    }

    #[test]
    fn pan_rejects_non_finite_delta() {
        let mut plot = Plot::new();
        plot.set_data_range(-3.0, 3.0, -1.0, 1.0).unwrap();
        plot.set_pixel_size(640, 320).unwrap();
        let before = plot.data_range().unwrap();

        assert!(plot.pan(f64::INFINITY, 0.0).is_err());
        assert!(plot.pan(0.0, f64::NAN).is_err());
        assert_eq!(plot.data_range().unwrap(), before);

        // The renderer still sees the intact range and terminates.
        let mut list = RenderList::new();
        plot.render(&mut list);
        assert!(!list.commands().is_empty());
    }

    #[test]
    fn rejected_resize_commits_nothing() {
        let mut plot = Plot::new();
        plot.set_data_range(-3.0, 3.0, -1.0, 1.0).unwrap();
        plot.set_pixel_size(640, 320).unwrap();

        assert!(plot.set_pixel_size(10, 10).is_err());
        assert_eq!(plot.pixel_size(), Some((640, 320)));

        // A later valid range mutation is unaffected by the failed resize.
        plot.set_data_range(-1.0, 1.0, -1.0, 1.0).unwrap();
        let range = plot.data_range().unwrap();
        assert_eq!(range.x.min, -1.0);

        let mut list = RenderList::new();
        plot.render(&mut list);
        assert!(!list.commands().is_empty());
    }

    #[test]
    fn undersized_surface_rejected_before_range_is_set() {
        let mut plot = Plot::new();
        assert!(plot.set_pixel_size(10, 10).is_err());
        assert_eq!(plot.pixel_size(), None);
        plot.set_pixel_size(640, 320).unwrap();
        plot.set_data_range(-3.0, 3.0, -1.0, 1.0).unwrap();
        assert!(plot.transform().is_some());
    }

    #[test]
    fn rejected_range_leaves_transform_intact() {
        let mut plot = Plot::new();
        plot.set_pixel_size(640, 320).unwrap();
        plot.set_data_range(-3.0, 3.0, -1.0, 1.0).unwrap();
        let before = plot.transform().unwrap().range();
        assert!(plot.set_data_range(1.0, 1.0, -1.0, 1.0).is_err());
        assert_eq!(plot.transform().unwrap().range(), before);
        assert_eq!(plot.data_range().unwrap(), before);
    }

    #[test]
    fn zoom_rejects_non_positive_factors() {
        let mut plot = Plot::new();
        plot.set_data_range(-3.0, 3.0, -1.0, 1.0).unwrap();
        let before = plot.data_range().unwrap();
        assert!(plot.zoom(0.5, 0.5, -0.25, 1.0).is_err());
        assert_eq!(plot.data_range().unwrap(), before);
    }
}
