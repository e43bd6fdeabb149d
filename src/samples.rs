//! Discrete (x, y) sample sequences evaluated by linear interpolation.

use crate::geom::Point;

/// An ordered sequence of samples backing an expression.
///
/// Points must be pushed in ascending X order; the engine performs no
/// re-sort. Queries outside `[first.x, last.x]` evaluate to NaN, which the
/// renderer turns into a polyline break.
#[derive(Debug, Clone, Default)]
pub struct Samples {
    points: Vec<Point>,
}

impl Samples {
    /// Create an empty sample sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence from `(x, y)` pairs, in ascending X order.
    pub fn from_points<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self {
            points: iter
                .into_iter()
                .map(|(x, y)| Point::new(x, y))
                .collect(),
        }
    }

    /// Append a sample. X must not be less than the previous sample's X.
    pub fn push(&mut self, x: f64, y: f64) {
        self.points.push(Point::new(x, y));
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the sequence holds no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Access the raw samples.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Interpolated lookup at `t`.
    ///
    /// Returns NaN outside the sample domain. At the first sample the stored
    /// Y is returned directly, which also guards against a zero leading span
    /// when duplicate X values open the sequence.
    pub(crate) fn eval(&self, t: f64) -> f64 {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return f64::NAN;
        };
        if t < first.x || t > last.x {
            return f64::NAN;
        }

        let upper = self.points.partition_point(|p| p.x < t);
        if upper == 0 {
            return first.y;
        }

        let p1 = self.points[upper];
        let p0 = self.points[upper - 1];
        (p0.y * (p1.x - t) + p1.y * (t - p0.x)) / (p1.x - p0.x)
    }
}
