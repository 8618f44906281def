//! Shape geometry - vertex lists for each shape family
//!
//! Every shape kind maps to one `Geometry` variant. The geometry turns a
//! center and circumscribed radius into the ordered outline the renderer
//! traces. Rotation is applied afterwards, see `effects::Rotate`.

use std::f64::consts::TAU;

use nalgebra::Point2;
use thiserror::Error;

use super::line::Line2;

/// Errors raised while building shape coordinates
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Degenerate geometry: {0}")]
    Degenerate(&'static str),

    #[error("Invalid shape configuration: {0}")]
    InvalidConfiguration(String),
}

/// Coordinate generator for one shape family
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Geometry {
    /// Regular polygon with `vertices` corners on the circumscribed circle
    RegularPolygon { vertices: usize },
    /// Five-pointed star, six points including the inner apex
    Star,
    /// Drawn with the canvas' native circle primitive, no vertices
    Circle,
}

impl Geometry {
    /// Regular polygon geometry
    ///
    /// # Errors
    /// `ShapeError::InvalidConfiguration` if fewer than 3 vertices are asked for.
    pub fn regular_polygon(vertices: usize) -> Result<Self, ShapeError> {
        let geometry = Geometry::RegularPolygon { vertices };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Reject geometries that can never produce an outline
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Geometry::RegularPolygon { vertices } if *vertices < 3 => {
                Err(ShapeError::InvalidConfiguration(format!(
                    "a regular polygon needs at least 3 vertices, got {}",
                    vertices
                )))
            }
            _ => Ok(()),
        }
    }

    /// Number of points `coordinates_for` returns
    pub fn point_count(&self) -> usize {
        match self {
            Geometry::RegularPolygon { vertices } => *vertices,
            Geometry::Star => 6,
            Geometry::Circle => 0,
        }
    }

    /// Unrotated outline of the shape around `center`
    pub fn coordinates_for(
        &self,
        center: Point2<f64>,
        radius: f64,
    ) -> Result<Vec<Point2<f64>>, ShapeError> {
        match self {
            Geometry::RegularPolygon { vertices } => Ok(regular_polygon(center, radius, *vertices)),
            Geometry::Star => star(center, radius),
            Geometry::Circle => Ok(Vec::new()),
        }
    }
}

/// Vertices of a regular n-gon, vertex k at angle `2πk/n`
///
/// ```text
/// x = cx + radius * cos(2πk/n)
/// y = cy + radius * sin(2πk/n)
/// ```
pub fn regular_polygon(center: Point2<f64>, radius: f64, n: usize) -> Vec<Point2<f64>> {
    (0..n)
        .map(|k| {
            let angle = TAU * k as f64 / n as f64;
            Point2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// Five-pointed star in trace order `[p2, p4, p1, p3, p0, p5]`
///
/// `p0..p4` are the corners of a regular pentagon and `p5` is where chord
/// p0-p2 crosses chord p1-p3. The renderer relies on this exact order for
/// its two fill passes.
pub fn star(center: Point2<f64>, radius: f64) -> Result<Vec<Point2<f64>>, ShapeError> {
    let p = regular_polygon(center, radius, 5);
    let apex = star_apex(&p)?;

    Ok(vec![p[2], p[4], p[1], p[3], p[0], apex])
}

/// Intersection of line(p0, p2) and line(p1, p3) of a pentagon
pub fn star_apex(pentagon: &[Point2<f64>]) -> Result<Point2<f64>, ShapeError> {
    if pentagon.len() < 4 {
        return Err(ShapeError::Degenerate("star needs four pentagon corners"));
    }

    let first = Line2::through(pentagon[0], pentagon[2])?;
    let second = Line2::through(pentagon[1], pentagon[3])?;
    first.intersect(&second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(a: Point2<f64>, b: Point2<f64>) -> f64 {
        (a - b).norm()
    }

    #[test]
    fn test_regular_polygons_lie_on_circle() {
        let center = Point2::new(12.0, -7.0);
        for n in 3..=9 {
            let geometry = Geometry::regular_polygon(n).unwrap();
            let points = geometry.coordinates_for(center, 30.0).unwrap();
            assert_eq!(points.len(), n);
            assert_eq!(geometry.point_count(), n);
            for p in points {
                assert!((distance(p, center) - 30.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_first_vertex_points_east() {
        let points = regular_polygon(Point2::origin(), 10.0, 4);
        assert!((points[0].x - 10.0).abs() < 1e-12);
        assert!(points[0].y.abs() < 1e-12);
        assert!(points[1].x.abs() < 1e-12);
        assert!((points[1].y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_too_few_vertices_rejected() {
        assert!(matches!(
            Geometry::regular_polygon(2),
            Err(ShapeError::InvalidConfiguration(_))
        ));
        assert!(Geometry::RegularPolygon { vertices: 0 }.validate().is_err());
        assert!(Geometry::Star.validate().is_ok());
    }

    #[test]
    fn test_star_order_and_apex() {
        let center = Point2::new(5.0, 5.0);
        let pentagon = regular_polygon(center, 40.0, 5);
        let points = Geometry::Star.coordinates_for(center, 40.0).unwrap();

        assert_eq!(points.len(), 6);
        assert_eq!(points[0], pentagon[2]);
        assert_eq!(points[1], pentagon[4]);
        assert_eq!(points[2], pentagon[1]);
        assert_eq!(points[3], pentagon[3]);
        assert_eq!(points[4], pentagon[0]);

        // apex satisfies both chord equations
        let apex = points[5];
        let chord_a = Line2::through(pentagon[0], pentagon[2]).unwrap();
        let chord_b = Line2::through(pentagon[1], pentagon[3]).unwrap();
        assert!(chord_a.contains(apex, 1e-9));
        assert!(chord_b.contains(apex, 1e-9));

        // inner apex sits strictly inside the circumscribed circle
        assert!(distance(apex, center) < 40.0);
    }

    #[test]
    fn test_star_apex_degenerate_input() {
        // p0 and p2 stacked vertically
        let pentagon = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 5.0),
            Point2::new(3.0, 1.0),
        ];
        assert!(matches!(star_apex(&pentagon), Err(ShapeError::Degenerate(_))));
    }

    #[test]
    fn test_circle_has_no_vertices() {
        let points = Geometry::Circle.coordinates_for(Point2::origin(), 20.0).unwrap();
        assert!(points.is_empty());
    }
}
