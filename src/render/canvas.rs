//! Canvas trait - the drawing surface shapes are rendered onto
//!
//! The interface follows a pen-plotter ("turtle") model:
//!
//! - The pen has a position, an up/down state and a color
//! - `move_to` travels to a point, drawing a line if the pen is down
//! - Every point visited between `begin_fill` and `end_fill` becomes a
//!   corner of the filled outline
//! - `draw_circle` draws a circle through the pen position, centered one
//!   radius above it
//!
//! Coordinates are logical: the origin is the canvas center and y grows
//! upwards.

use image::Rgb;
use nalgebra::Point2;

/// A stateful drawing surface
pub trait Canvas {
    /// Clear the surface and put the pen back at the origin, down
    fn reset(&mut self);

    /// Color used by `end_fill`
    fn set_fill_color(&mut self, color: Rgb<u8>);

    /// Color used for lines drawn while the pen is down
    fn set_pen_color(&mut self, color: Rgb<u8>);

    fn pen_up(&mut self);

    fn pen_down(&mut self);

    /// Travel to `point`, drawing if the pen is down
    fn move_to(&mut self, point: Point2<f64>);

    /// Draw a line to `point`
    fn line_to(&mut self, point: Point2<f64>) {
        self.pen_down();
        self.move_to(point);
    }

    /// Start collecting a fill outline at the current pen position
    fn begin_fill(&mut self);

    /// Fill everything collected since `begin_fill`
    fn end_fill(&mut self);

    /// Circle of `radius` through the pen position, centered at `pen + (0, radius)`
    fn draw_circle(&mut self, radius: f64);

    /// Hide the pen marker (only meaningful for interactive canvases)
    fn hide_cursor(&mut self);
}

/// A single recorded canvas call
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasCommand {
    Reset,
    SetFillColor(Rgb<u8>),
    SetPenColor(Rgb<u8>),
    PenUp,
    PenDown,
    MoveTo(Point2<f64>),
    BeginFill,
    EndFill,
    DrawCircle(f64),
    HideCursor,
}

/// Canvas that only records what it is asked to do
#[cfg(test)]
#[derive(Default)]
pub struct RecordingCanvas {
    pub commands: Vec<CanvasCommand>,
}

#[cfg(test)]
impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded after the last `Reset`
    pub fn last_frame(&self) -> &[CanvasCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == CanvasCommand::Reset)
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Number of `Reset` calls, one per rendered shape
    pub fn frames(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| **c == CanvasCommand::Reset)
            .count()
    }
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn reset(&mut self) {
        self.commands.push(CanvasCommand::Reset);
    }

    fn set_fill_color(&mut self, color: Rgb<u8>) {
        self.commands.push(CanvasCommand::SetFillColor(color));
    }

    fn set_pen_color(&mut self, color: Rgb<u8>) {
        self.commands.push(CanvasCommand::SetPenColor(color));
    }

    fn pen_up(&mut self) {
        self.commands.push(CanvasCommand::PenUp);
    }

    fn pen_down(&mut self) {
        self.commands.push(CanvasCommand::PenDown);
    }

    fn move_to(&mut self, point: Point2<f64>) {
        self.commands.push(CanvasCommand::MoveTo(point));
    }

    fn begin_fill(&mut self) {
        self.commands.push(CanvasCommand::BeginFill);
    }

    fn end_fill(&mut self) {
        self.commands.push(CanvasCommand::EndFill);
    }

    fn draw_circle(&mut self, radius: f64) {
        self.commands.push(CanvasCommand::DrawCircle(radius));
    }

    fn hide_cursor(&mut self) {
        self.commands.push(CanvasCommand::HideCursor);
    }
}
