//! Effects module - transformations for shape outlines
//!
//! This module provides:
//! - `Effect` trait for point transformations
//! - `Rotate`, rotation around an arbitrary center

mod traits;
mod transform;

pub use traits::Effect;
pub use transform::{rotate, Rotate};
