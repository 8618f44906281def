//! Shape renderer - turns a `ShapeInstance` into canvas commands
//!
//! Each render runs the same linear sequence:
//! reset → background painted → outline traced → filled.

use image::Rgb;
use nalgebra::{Point2, Vector2};
use thiserror::Error;

use super::canvas::Canvas;
use crate::effects::rotate;
use crate::sampling::ShapeInstance;
use crate::shapes::{Geometry, ShapeError};

/// Errors that can occur while rendering one shape
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to build shape outline: {0}")]
    Geometry(#[from] ShapeError),

    #[error("Canvas size {width}x{height} is invalid")]
    CanvasSize { width: u32, height: u32 },
}

/// Draws shape instances onto a canvas
#[derive(Clone, Copy, Debug)]
pub struct ShapeRenderer {
    /// Half-extent of the square the background has to cover
    half_extent: f64,
}

impl ShapeRenderer {
    pub fn new(half_extent: f64) -> Self {
        Self { half_extent }
    }

    /// Render `shape` onto `canvas`
    ///
    /// On error the canvas holds a partial drawing and must not be saved.
    pub fn render<C: Canvas>(&self, canvas: &mut C, shape: &ShapeInstance) -> Result<(), RenderError> {
        canvas.reset();
        self.paint_background(canvas, shape.background);

        canvas.set_fill_color(shape.fill);
        canvas.set_pen_color(shape.fill);
        canvas.pen_up();

        let radius = f64::from(shape.radius);
        let geometry = shape.kind.geometry();
        let raw = geometry.coordinates_for(shape.center, radius)?;
        let points = rotate(&raw, shape.center, shape.rotation);

        match geometry {
            Geometry::RegularPolygon { .. } => trace_polygon(canvas, &points),
            Geometry::Star => trace_star(canvas, &points)?,
            Geometry::Circle => trace_circle(canvas, shape.center, radius),
        }

        canvas.hide_cursor();
        Ok(())
    }

    /// Fill a square slightly larger than the visible area, from its top-left corner
    fn paint_background<C: Canvas>(&self, canvas: &mut C, color: Rgb<u8>) {
        let h = self.half_extent;
        let side = 4.0 * h;

        canvas.set_fill_color(color);
        canvas.set_pen_color(color);
        canvas.pen_up();

        let corner = Point2::new(-h, h);
        canvas.move_to(corner);
        canvas.pen_down();
        canvas.begin_fill();
        canvas.move_to(corner + Vector2::new(side, 0.0));
        canvas.move_to(corner + Vector2::new(side, -side));
        canvas.move_to(corner + Vector2::new(0.0, -side));
        canvas.move_to(corner);
        canvas.end_fill();
        canvas.pen_up();
    }
}

/// Close the outline from the last vertex and fill it in one pass
fn trace_polygon<C: Canvas>(canvas: &mut C, points: &[Point2<f64>]) {
    let Some(last) = points.last() else {
        return;
    };

    canvas.move_to(*last);
    canvas.pen_down();
    canvas.begin_fill();
    canvas.hide_cursor();
    for p in points {
        canvas.move_to(*p);
    }
    canvas.end_fill();
}

/// Two overlapping fills: the pentagram outline, then the notch at the apex
///
/// `points` is the star's trace order `[p2, p4, p1, p3, p0, apex]`.
fn trace_star<C: Canvas>(canvas: &mut C, points: &[Point2<f64>]) -> Result<(), ShapeError> {
    let [a, b, c, d, e, apex] = points else {
        return Err(ShapeError::Degenerate("star outline needs six points"));
    };

    canvas.move_to(*e);
    canvas.pen_down();
    canvas.begin_fill();
    canvas.hide_cursor();
    for p in [a, b, c, d, e] {
        canvas.move_to(*p);
    }
    canvas.end_fill();

    canvas.pen_up();
    canvas.move_to(*apex);
    canvas.pen_down();
    canvas.begin_fill();
    canvas.move_to(*d);
    canvas.move_to(*e);
    canvas.end_fill();
    Ok(())
}

/// Native circle with the pen one radius below the center
fn trace_circle<C: Canvas>(canvas: &mut C, center: Point2<f64>, radius: f64) {
    canvas.move_to(center - Vector2::new(0.0, radius));
    canvas.pen_down();
    canvas.begin_fill();
    canvas.hide_cursor();
    canvas.draw_circle(radius);
    canvas.end_fill();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::{CanvasCommand, RecordingCanvas};
    use crate::render::RasterCanvas;
    use crate::shapes::ShapeKind;

    const BACKGROUND: Rgb<u8> = Rgb([12, 34, 56]);
    const FILL: Rgb<u8> = Rgb([250, 200, 0]);

    fn instance(kind: ShapeKind, center: Point2<f64>, radius: u32, rotation: f64) -> ShapeInstance {
        ShapeInstance {
            kind,
            center,
            radius,
            rotation,
            background: BACKGROUND,
            fill: FILL,
        }
    }

    fn moves(commands: &[CanvasCommand]) -> Vec<Point2<f64>> {
        commands
            .iter()
            .filter_map(|c| match c {
                CanvasCommand::MoveTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Commands after the fill color switches from background to shape
    fn shape_commands(canvas: &RecordingCanvas) -> &[CanvasCommand] {
        let start = canvas
            .commands
            .iter()
            .position(|c| *c == CanvasCommand::SetFillColor(FILL))
            .unwrap();
        &canvas.commands[start..]
    }

    #[test]
    fn test_background_covers_visible_area() {
        let mut canvas = RecordingCanvas::new();
        let renderer = ShapeRenderer::new(100.0);
        renderer
            .render(&mut canvas, &instance(ShapeKind::Square, Point2::origin(), 20, 0.0))
            .unwrap();

        assert_eq!(canvas.commands[0], CanvasCommand::Reset);
        assert_eq!(canvas.commands[1], CanvasCommand::SetFillColor(BACKGROUND));
        let corners = moves(&canvas.commands[..canvas.commands.len() - shape_commands(&canvas).len()]);
        assert_eq!(corners.len(), 5);
        assert_eq!(corners[0], Point2::new(-100.0, 100.0));
        assert_eq!(corners[2], Point2::new(300.0, -300.0));
        assert_eq!(corners[4], corners[0]);
    }

    #[test]
    fn test_triangle_trace_starts_at_last_vertex() {
        let mut canvas = RecordingCanvas::new();
        let center = Point2::new(5.0, -5.0);
        ShapeRenderer::new(100.0)
            .render(&mut canvas, &instance(ShapeKind::Triangle, center, 30, 0.7))
            .unwrap();

        let commands = shape_commands(&canvas);
        let traced = moves(commands);
        // start at last vertex, then all three in order
        assert_eq!(traced.len(), 4);
        assert_eq!(traced[0], traced[3]);
        for p in &traced {
            assert!(((p - center).norm() - 30.0).abs() < 1e-9);
        }

        let fills = commands.iter().filter(|c| **c == CanvasCommand::BeginFill).count();
        assert_eq!(fills, 1);
        assert_eq!(commands.last(), Some(&CanvasCommand::HideCursor));
    }

    #[test]
    fn test_rotation_is_applied() {
        let mut canvas = RecordingCanvas::new();
        ShapeRenderer::new(100.0)
            .render(
                &mut canvas,
                &instance(ShapeKind::Square, Point2::origin(), 10, std::f64::consts::FRAC_PI_4),
            )
            .unwrap();

        let traced = moves(shape_commands(&canvas));
        // first square vertex (10, 0) rotated by 45°
        let expected = Point2::new(10.0 / 2f64.sqrt(), 10.0 / 2f64.sqrt());
        assert!((traced[1] - expected).norm() < 1e-9);
    }

    #[test]
    fn test_star_uses_two_fill_passes() {
        let mut canvas = RecordingCanvas::new();
        let center = Point2::new(0.0, 0.0);
        ShapeRenderer::new(100.0)
            .render(&mut canvas, &instance(ShapeKind::Star, center, 40, 0.0))
            .unwrap();

        let commands = shape_commands(&canvas);
        let fills = commands.iter().filter(|c| **c == CanvasCommand::BeginFill).count();
        assert_eq!(fills, 2);

        let star = Geometry::Star.coordinates_for(center, 40.0).unwrap();
        let traced = moves(commands);
        let expected = vec![
            star[4], star[0], star[1], star[2], star[3], star[4], star[5], star[3], star[4],
        ];
        assert_eq!(traced, expected);
    }

    #[test]
    fn test_circle_drawn_from_below_center() {
        let mut canvas = RecordingCanvas::new();
        ShapeRenderer::new(100.0)
            .render(&mut canvas, &instance(ShapeKind::Circle, Point2::origin(), 20, 1.0))
            .unwrap();

        let commands = shape_commands(&canvas);
        assert_eq!(moves(commands), vec![Point2::new(0.0, -20.0)]);
        let circle = commands
            .iter()
            .position(|c| *c == CanvasCommand::DrawCircle(20.0))
            .unwrap();
        assert_eq!(commands[circle + 1], CanvasCommand::EndFill);
        assert_eq!(commands[circle - 1], CanvasCommand::HideCursor);
    }

    #[test]
    fn test_star_rasterizes_solid() {
        let mut canvas = RasterCanvas::new(200, 200, 100.0).unwrap().with_anti_alias(false);
        let center = Point2::new(0.0, 0.0);
        ShapeRenderer::new(100.0)
            .render(&mut canvas, &instance(ShapeKind::Star, center, 60, 0.0))
            .unwrap();

        // inner pentagon and a tip are filled, the gap between tips is not
        assert_eq!(canvas.pixel_at(Point2::new(0.5, 0.5)), Some(FILL));
        assert_eq!(canvas.pixel_at(Point2::new(50.5, 0.5)), Some(FILL));
        assert_eq!(canvas.pixel_at(Point2::new(-45.5, 0.5)), Some(BACKGROUND));
        assert_eq!(canvas.pixel_at(Point2::new(-95.5, 95.5)), Some(BACKGROUND));
        assert!(!canvas.is_cursor_visible());
    }

    #[test]
    fn test_polygons_rasterize_over_background() {
        let center = Point2::new(20.0, -10.0);
        for kind in ShapeKind::all() {
            let mut canvas = RasterCanvas::new(200, 200, 100.0).unwrap().with_anti_alias(false);
            ShapeRenderer::new(100.0)
                .render(&mut canvas, &instance(*kind, center, 30, 0.3))
                .unwrap();

            assert_eq!(canvas.pixel_at(Point2::new(20.5, -9.5)), Some(FILL), "{}", kind);
            assert_eq!(canvas.pixel_at(Point2::new(-80.5, 80.5)), Some(BACKGROUND), "{}", kind);
        }
    }
}
