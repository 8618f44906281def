//! Two-point line equations and their intersection
//!
//! Lines are kept in slope/intercept form `y = k*x + b`, built from two
//! points on the line. This is what the star construction uses to find the
//! inner apex where two of its chords cross.

use nalgebra::Point2;

use super::geometry::ShapeError;

/// Denominators smaller than this are treated as zero
const EPSILON: f64 = 1e-12;

/// A non-vertical line `y = slope * x + intercept`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    pub slope: f64,
    pub intercept: f64,
}

impl Line2 {
    /// Line passing through `a` and `b`
    ///
    /// ```text
    /// k = (y1 - y2) / (x1 - x2)
    /// b = y1 - k * x1
    /// ```
    ///
    /// # Errors
    /// `ShapeError::Degenerate` when the two points share an x coordinate,
    /// i.e. the line is vertical and has no slope.
    pub fn through(a: Point2<f64>, b: Point2<f64>) -> Result<Self, ShapeError> {
        let dx = a.x - b.x;
        if dx.abs() < EPSILON {
            return Err(ShapeError::Degenerate("vertical line has no slope"));
        }

        let slope = (a.y - b.y) / dx;
        let intercept = a.y - slope * a.x;
        Ok(Self { slope, intercept })
    }

    /// Y coordinate of the line at `x`
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Point where both lines meet, solving `k1*x + b1 = k2*x + b2`
    ///
    /// # Errors
    /// `ShapeError::Degenerate` for parallel lines.
    pub fn intersect(&self, other: &Line2) -> Result<Point2<f64>, ShapeError> {
        let dk = self.slope - other.slope;
        if dk.abs() < EPSILON {
            return Err(ShapeError::Degenerate("parallel lines never intersect"));
        }

        let x = (other.intercept - self.intercept) / dk;
        Ok(Point2::new(x, self.y_at(x)))
    }

    /// Whether `p` satisfies the line equation within `tolerance`
    pub fn contains(&self, p: Point2<f64>, tolerance: f64) -> bool {
        (self.y_at(p.x) - p.y).abs() <= tolerance
    }
}
