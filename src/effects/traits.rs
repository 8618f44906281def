//! Effect trait - point transformations applied to shape outlines
//!
//! Effects run after the geometry has produced its vertices and before the
//! renderer traces them.

use nalgebra::Point2;

/// A transformation of 2D points
pub trait Effect {
    /// Transform a single point
    fn apply(&self, point: Point2<f64>) -> Point2<f64>;

    /// Transform a whole vertex list, keeping its length and order
    fn apply_all(&self, points: &[Point2<f64>]) -> Vec<Point2<f64>> {
        points.iter().map(|p| self.apply(*p)).collect()
    }
}
