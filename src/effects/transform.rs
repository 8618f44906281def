//! Rotation around a center point

use nalgebra::{Point2, Rotation2};

use super::traits::Effect;

/// Rotation effect
///
/// Rotates points by `angle` radians (counter-clockwise) around `center`:
/// translate by `-center`, apply `[cos, -sin; sin, cos]`, translate back.
#[derive(Clone, Copy, Debug)]
pub struct Rotate {
    /// Rotation angle in radians
    pub angle: f64,
    /// Fixed point of the rotation
    pub center: Point2<f64>,
}

impl Rotate {
    /// Rotation around `center`
    pub fn around(center: Point2<f64>, angle: f64) -> Self {
        Self { angle, center }
    }

    /// The rotation that undoes this one
    pub fn inverse(&self) -> Self {
        Self::around(self.center, -self.angle)
    }
}

impl Effect for Rotate {
    fn apply(&self, point: Point2<f64>) -> Point2<f64> {
        let rotation = Rotation2::new(self.angle);
        self.center + rotation * (point - self.center)
    }
}

/// Rotate a vertex list around `center` by `angle` radians
pub fn rotate(points: &[Point2<f64>], center: Point2<f64>, angle: f64) -> Vec<Point2<f64>> {
    Rotate::around(center, angle).apply_all(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: Point2<f64>, b: Point2<f64>) -> bool {
        (a - b).norm() < 1e-9
    }

    fn random_points(rng: &mut StdRng, n: usize) -> Vec<Point2<f64>> {
        (0..n)
            .map(|_| Point2::new(rng.gen_range(-80.0..80.0), rng.gen_range(-80.0..80.0)))
            .collect()
    }

    #[test]
    fn test_rotate_90_degrees() {
        let p = Rotate::around(Point2::origin(), FRAC_PI_2).apply(Point2::new(1.0, 0.0));
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_180_around_center() {
        let center = Point2::new(10.0, 10.0);
        let p = Rotate::around(center, PI).apply(Point2::new(15.0, 10.0));
        assert!(close(p, Point2::new(5.0, 10.0)));
    }

    #[test]
    fn test_center_is_fixed() {
        let center = Point2::new(-3.0, 42.0);
        let p = Rotate::around(center, 1.234).apply(center);
        assert!(close(p, center));
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = random_points(&mut rng, 9);
        let rotated = rotate(&points, Point2::new(3.0, -4.0), 0.0);
        assert_eq!(rotated.len(), points.len());
        for (a, b) in points.iter().zip(&rotated) {
            assert!(close(*a, *b));
        }
    }

    #[test]
    fn test_rotation_preserves_pairwise_distances() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let points = random_points(&mut rng, 6);
            let center = Point2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
            let angle = rng.gen_range(-PI..PI);
            let rotated = rotate(&points, center, angle);

            for i in 0..points.len() {
                for j in i + 1..points.len() {
                    let before = (points[i] - points[j]).norm();
                    let after = (rotated[i] - rotated[j]).norm();
                    assert!((before - after).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_inverse_round_trip() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..200 {
            let points = random_points(&mut rng, 5);
            let center = Point2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
            let forward = Rotate::around(center, rng.gen_range(-PI..PI));
            let back = forward.inverse().apply_all(&forward.apply_all(&points));
            for (a, b) in points.iter().zip(&back) {
                assert!(close(*a, *b));
            }
        }
    }
}
