//! Shape kinds and the geometry lookup table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::geometry::Geometry;

/// Available shape types
///
/// The variant name is the label written into output file names.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ShapeKind {
    Triangle,
    Square,
    Pentagon,
    Hexagon,
    Heptagon,
    Octagon,
    Nonagon,
    Star,
    Circle,
}

impl ShapeKind {
    /// Every shape, in generation order
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Triangle,
            ShapeKind::Circle,
            ShapeKind::Heptagon,
            ShapeKind::Octagon,
            ShapeKind::Hexagon,
            ShapeKind::Square,
            ShapeKind::Star,
            ShapeKind::Nonagon,
            ShapeKind::Pentagon,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Square => "Square",
            ShapeKind::Pentagon => "Pentagon",
            ShapeKind::Hexagon => "Hexagon",
            ShapeKind::Heptagon => "Heptagon",
            ShapeKind::Octagon => "Octagon",
            ShapeKind::Nonagon => "Nonagon",
            ShapeKind::Star => "Star",
            ShapeKind::Circle => "Circle",
        }
    }

    /// Geometry used to build this shape's outline
    pub fn geometry(&self) -> Geometry {
        match self {
            ShapeKind::Triangle => Geometry::RegularPolygon { vertices: 3 },
            ShapeKind::Square => Geometry::RegularPolygon { vertices: 4 },
            ShapeKind::Pentagon => Geometry::RegularPolygon { vertices: 5 },
            ShapeKind::Hexagon => Geometry::RegularPolygon { vertices: 6 },
            ShapeKind::Heptagon => Geometry::RegularPolygon { vertices: 7 },
            ShapeKind::Octagon => Geometry::RegularPolygon { vertices: 8 },
            ShapeKind::Nonagon => Geometry::RegularPolygon { vertices: 9 },
            ShapeKind::Star => Geometry::Star,
            ShapeKind::Circle => Geometry::Circle,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    /// Parse a shape name (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ShapeKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let valid: Vec<&str> = ShapeKind::all().iter().map(|k| k.name()).collect();
                format!("Unknown shape '{}'. Valid options: {}", s, valid.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_nine_distinct_shapes() {
        let all = ShapeKind::all();
        assert_eq!(all.len(), 9);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_polygon_vertex_counts() {
        assert_eq!(ShapeKind::Triangle.geometry().point_count(), 3);
        assert_eq!(ShapeKind::Square.geometry().point_count(), 4);
        assert_eq!(ShapeKind::Nonagon.geometry().point_count(), 9);
        assert_eq!(ShapeKind::Star.geometry().point_count(), 6);
        assert_eq!(ShapeKind::Circle.geometry().point_count(), 0);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("star".parse::<ShapeKind>(), Ok(ShapeKind::Star));
        assert_eq!(" HEPTAGON ".parse::<ShapeKind>(), Ok(ShapeKind::Heptagon));
        assert!("blob".parse::<ShapeKind>().is_err());
    }
}
