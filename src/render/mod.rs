//! Render module - drawing shapes onto canvases
//!
//! This module provides:
//! - `Canvas` trait, a pen-plotter style drawing surface
//! - `RasterCanvas`, the tiny-skia backed implementation
//! - `ShapeRenderer`, which turns sampled shapes into canvas commands

mod canvas;
mod raster;
mod renderer;

pub use canvas::Canvas;
#[cfg(test)]
pub use canvas::{CanvasCommand, RecordingCanvas};
pub use raster::RasterCanvas;
pub use renderer::{RenderError, ShapeRenderer};
