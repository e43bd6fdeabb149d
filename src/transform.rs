//! Coordinate transforms between data and screen space.

use crate::config::PlotConfig;
use crate::error::RangeError;
use crate::geom::{Point, ScreenPoint};
use crate::view::DataRange;

/// Bidirectional affine mapping between the visible data range and the
/// bordered pixel rectangle of the drawable surface.
///
/// A transform is a snapshot: it is rebuilt whenever the data range or the
/// pixel size changes, so the cached scale factors are never stale against
/// one without the other. The Y axis is inverted; data increases upward,
/// screen pixels increase downward.
#[derive(Debug, Clone)]
pub struct Transform {
    range: DataRange,
    width: f32,
    height: f32,
    left_border: f32,
    outer_border: f32,
    plot_width: f32,
    plot_height: f32,
    /// Pixels per data unit on X.
    x_scale: f64,
    /// Pixels per data unit on Y.
    y_scale: f64,
}

impl Transform {
    /// Create a transform for the given range, pixel size, and borders.
    ///
    /// Fails when the borders leave no drawable plot area. The range itself
    /// is already validated by [`DataRange`] construction, so spans are
    /// positive here.
    pub fn new(
        range: DataRange,
        width: u32,
        height: u32,
        config: &PlotConfig,
    ) -> Result<Self, RangeError> {
        let plot_width = width as f32 - config.outer_border - config.left_border;
        let plot_height = height as f32 - 2.0 * config.outer_border;
        if plot_width <= 0.0 || plot_height <= 0.0 {
            return Err(RangeError::ZeroPixelExtent { width, height });
        }
        Ok(Self {
            range,
            width: width as f32,
            height: height as f32,
            left_border: config.left_border,
            outer_border: config.outer_border,
            plot_width,
            plot_height,
            x_scale: f64::from(plot_width) / range.x.span(),
            y_scale: f64::from(plot_height) / range.y.span(),
        })
    }

    /// The data range this transform was built for.
    pub fn range(&self) -> DataRange {
        self.range
    }

    /// Full surface width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Full surface height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Drawable plot width in pixels (surface width minus borders).
    pub fn plot_width(&self) -> f32 {
        self.plot_width
    }

    /// Drawable plot height in pixels (surface height minus borders).
    pub fn plot_height(&self) -> f32 {
        self.plot_height
    }

    /// Map a data X value to a screen X coordinate.
    pub fn to_screen_x(&self, x: f64) -> f32 {
        ((x - self.range.x.min) * self.x_scale + f64::from(self.left_border)) as f32
    }

    /// Map a data Y value to a screen Y coordinate.
    pub fn to_screen_y(&self, y: f64) -> f32 {
        (f64::from(self.height)
            - f64::from(self.outer_border)
            - (y - self.range.y.min) * self.y_scale) as f32
    }

    /// Map a screen X coordinate back to a data X value.
    pub fn to_data_x(&self, screen_x: f32) -> f64 {
        f64::from(screen_x - self.left_border) / self.x_scale + self.range.x.min
    }

    /// Map a screen Y coordinate back to a data Y value.
    pub fn to_data_y(&self, screen_y: f32) -> f64 {
        (f64::from(self.height) - f64::from(self.outer_border) - f64::from(screen_y))
            / self.y_scale
            + self.range.y.min
    }

    /// Map a data point into screen space.
    pub fn to_screen(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(self.to_screen_x(point.x), self.to_screen_y(point.y))
    }

    /// Map a screen point into data space.
    pub fn to_data(&self, point: ScreenPoint) -> Point {
        Point::new(self.to_data_x(point.x), self.to_data_y(point.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform_640x320() -> Transform {
        let range = DataRange::new(-3.0, 3.0, -1.0, 1.0).unwrap();
        Transform::new(range, 640, 320, &PlotConfig::default()).expect("valid transform")
    }

    #[test]
    fn forward_mapping_hits_plot_corners() {
        let transform = transform_640x320();
        // lo_x lands on the left border, hi_x on the right plot edge.
        assert!((transform.to_screen_x(-3.0) - 70.0).abs() < 1e-4);
        assert!((transform.to_screen_x(3.0) - 620.0).abs() < 1e-4);
        // lo_y lands on the bottom edge, hi_y on the top.
        assert!((transform.to_screen_y(-1.0) - 300.0).abs() < 1e-4);
        assert!((transform.to_screen_y(1.0) - 20.0).abs() < 1e-4);
    }

    #[test]
    fn roundtrip_across_pixel_extent() {
        let transform = transform_640x320();
        for px in 70..=620 {
            let px = px as f32;
            let back = transform.to_screen_x(transform.to_data_x(px));
            assert!((back - px).abs() < 1e-3, "x roundtrip at {px}");
        }
        for py in 20..=300 {
            let py = py as f32;
            let back = transform.to_screen_y(transform.to_data_y(py));
            assert!((back - py).abs() < 1e-3, "y roundtrip at {py}");
        }
    }

    #[test]
    fn monotonicity() {
        let transform = transform_640x320();
        let mut last_x = transform.to_screen_x(-3.0);
        let mut last_y = transform.to_screen_y(-1.0);
        for i in 1..=100 {
            let x = -3.0 + 6.0 * i as f64 / 100.0;
            let y = -1.0 + 2.0 * i as f64 / 100.0;
            let sx = transform.to_screen_x(x);
            let sy = transform.to_screen_y(y);
            assert!(sx > last_x, "to_screen_x not increasing at {x}");
            assert!(sy < last_y, "to_screen_y not decreasing at {y}");
            last_x = sx;
            last_y = sy;
        }
    }

    #[test]
    fn rejects_pixel_size_smaller_than_borders() {
        let range = DataRange::new(-3.0, 3.0, -1.0, 1.0).unwrap();
        let result = Transform::new(range, 80, 30, &PlotConfig::default());
        assert!(matches!(result, Err(RangeError::ZeroPixelExtent { .. })));
    }
}
