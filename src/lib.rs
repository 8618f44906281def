//! shapegen - synthetic geometric shape images
//!
//! Draws one randomly parameterized shape (triangle through nonagon, star,
//! circle) per image and saves it under a file name carrying the shape
//! label, for use as classifier training data.
//!
//! Pipeline per image:
//! `ParameterSampler` → `Geometry` → `Rotate` → `ShapeRenderer` → `Canvas` → `PersistenceSink`

pub mod effects;
pub mod generator;
pub mod output;
pub mod render;
pub mod sampling;
pub mod settings;
pub mod shapes;
