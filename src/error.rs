//! Error types for range and viewport mutations.
//!
//! Building expressions never fails; errors surface only when the caller
//! supplies an unusable range, pixel size, or zoom factor. All errors are
//! recoverable by retrying with corrected input.

use thiserror::Error;

/// Errors raised by range, pixel-size, and zoom mutations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    /// A range bound is non-finite, inverted, or empty.
    #[error("invalid {axis} range: min={min}, max={max}")]
    InvalidRange {
        /// Axis the bad range was supplied for.
        axis: &'static str,
        /// Offending lower bound.
        min: f64,
        /// Offending upper bound.
        max: f64,
    },
    /// The pixel size leaves no room for the plot area after borders.
    #[error("pixel size {width}x{height} leaves no drawable plot area")]
    ZeroPixelExtent {
        /// Surface width in pixels.
        width: u32,
        /// Surface height in pixels.
        height: u32,
    },
    /// A zoom factor was zero or negative.
    #[error("zoom factors must be positive: x={factor_x}, y={factor_y}")]
    NonPositiveZoom {
        /// Offending X factor.
        factor_x: f64,
        /// Offending Y factor.
        factor_y: f64,
    },
}
