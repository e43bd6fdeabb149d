//! Axis tick planning, boundary tolerance, and label formatting.
//!
//! The planner turns a data range plus a pixel budget into a "nice" starting
//! tick and step. Steps are snapped to 0.5 or 1 times a power of ten, giving
//! two granularities per decade, and the start is aligned to a multiple of
//! the step rather than to the range's arbitrary lower bound.

/// A planned axis division: the first tick at or above alignment, and the
/// distance between consecutive ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPlan {
    /// First tick value.
    pub start: f64,
    /// Distance between ticks.
    pub step: f64,
}

impl TickPlan {
    /// Iterate tick values from `start` while they stay at or below `hi`.
    pub fn values(&self, hi: f64) -> Ticks {
        Ticks {
            start: self.start,
            step: self.step,
            hi,
            index: 0,
        }
    }
}

/// Lazy, finite iterator over planned tick values.
///
/// Values are computed from the tick index so long sweeps do not accumulate
/// floating-point drift.
#[derive(Debug, Clone)]
pub struct Ticks {
    start: f64,
    step: f64,
    hi: f64,
    index: u32,
}

impl Iterator for Ticks {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = self.start + self.step * f64::from(self.index);
        // A non-finite value never satisfies `<= hi`, so it must end the
        // sweep explicitly or a NaN plan would iterate forever.
        if !value.is_finite() || value > self.hi {
            return None;
        }
        self.index += 1;
        Some(value)
    }
}

/// Plan axis ticks for the range `[lo, hi]` rendered across `pixel_extent`
/// pixels, keeping at least `min_pixels_per_tick` pixels between ticks.
///
/// The caller guarantees `lo < hi`; ranges are validated where they enter
/// the plot.
pub fn plan_ticks(lo: f64, hi: f64, pixel_extent: f32, min_pixels_per_tick: f32) -> TickPlan {
    let max_divs = ((pixel_extent / min_pixels_per_tick) as i64).max(1);
    let raw_step = (hi - lo) / max_divs as f64;

    // Normalise into [0.5, 5) by a power of ten, then snap down to one of
    // the two nice granularities per decade.
    let p = (-raw_step.log10() - 1.0).ceil();
    let normalised = raw_step * 10f64.powf(p);
    let step = if normalised > 0.5 { 1.0 } else { 0.5 } * 10f64.powf(-p);

    let start = lo - lo % step;
    TickPlan { start, step }
}

/// Tolerant equality at rendering precision.
///
/// Uses the f32 machine epsilon since screen coordinates are f32; guards
/// against spurious off-by-subpixel gridlines at range boundaries.
pub fn almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < f64::from(f32::EPSILON) * (a + b).abs()
        || (a - b).abs() < f64::from(f32::MIN_POSITIVE)
}

/// Format a tick label at the decimal precision implied by the step.
///
/// The value is rounded to that precision first so float noise such as
/// `0.30000000000000004` never reaches a label.
pub fn format_tick(value: f64, step: f64) -> String {
    if !(step.is_finite() && step > 0.0) {
        return format!("{value}");
    }
    let decimals = (-step.log10().floor()).clamp(0.0, 12.0) as usize;
    let scale = 10f64.powi(decimals as i32);
    let mut rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        // Normalise negative zero.
        rounded = 0.0;
    }
    format!("{rounded:.decimals$}")
}
