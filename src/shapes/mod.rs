//! Shapes module - geometry of the generated shapes
//!
//! This module provides:
//! - `ShapeKind`, the nine shapes the generator knows about
//! - `Geometry`, per-family vertex generation (regular polygons, star, circle)
//! - `Line2`, the two-point line equations behind the star's inner apex

mod geometry;
mod kind;
mod line;

pub use geometry::{Geometry, ShapeError};
pub use kind::ShapeKind;
pub use line::Line2;
