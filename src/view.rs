//! Data ranges describing the visible region of the plot.

use crate::error::RangeError;

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range. Bounds are taken as given; validity is checked
    /// when the range enters a [`DataRange`].
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has positive span and finite bounds.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.span() > 0.0
    }

    /// Shift both bounds by a delta.
    pub fn translated(&self, delta: f64) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Value at a fractional position within the range.
    pub fn lerp(&self, frac: f64) -> f64 {
        self.min + self.span() * frac
    }
}

/// Visible rectangular region in data space.
///
/// Pan and zoom produce a fresh `DataRange` rather than mutating bounds one
/// at a time, so a range in circulation is always internally consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRange {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
}

impl DataRange {
    /// Create a data range from explicit bounds.
    ///
    /// Fails when a bound is non-finite or a range is inverted or empty.
    pub fn new(lo_x: f64, hi_x: f64, lo_y: f64, hi_y: f64) -> Result<Self, RangeError> {
        Self::from_ranges(Range::new(lo_x, hi_x), Range::new(lo_y, hi_y))
    }

    /// Create a data range from two axis ranges, validating both.
    pub fn from_ranges(x: Range, y: Range) -> Result<Self, RangeError> {
        if !x.is_valid() {
            return Err(RangeError::InvalidRange {
                axis: "x",
                min: x.min,
                max: x.max,
            });
        }
        if !y.is_valid() {
            return Err(RangeError::InvalidRange {
                axis: "y",
                min: y.min,
                max: y.max,
            });
        }
        Ok(Self { x, y })
    }

    /// Translate the range by a data-space delta (pan).
    pub fn translated(&self, delta_x: f64, delta_y: f64) -> Self {
        Self {
            x: self.x.translated(delta_x),
            y: self.y.translated(delta_y),
        }
    }

    /// Scale the range around a focal point given as fractional positions
    /// within the range. Factors must be positive; a factor below one zooms
    /// in, above one zooms out.
    pub fn zoomed(
        &self,
        split_x: f64,
        split_y: f64,
        factor_x: f64,
        factor_y: f64,
    ) -> Result<Self, RangeError> {
        if factor_x <= 0.0 || factor_y <= 0.0 {
            return Err(RangeError::NonPositiveZoom {
                factor_x,
                factor_y,
            });
        }
        let mid_x = self.x.lerp(split_x);
        let mid_y = self.y.lerp(split_y);
        Self::new(
            mid_x - (mid_x - self.x.min) * factor_x,
            mid_x + (self.x.max - mid_x) * factor_x,
            mid_y - (mid_y - self.y.min) * factor_y,
            mid_y + (self.y.max - mid_y) * factor_y,
        )
    }

    /// Whether x = 0 falls strictly inside the visible X range.
    pub fn is_x_origin_visible(&self) -> bool {
        self.x.min < 0.0 && self.x.max > 0.0
    }
}
