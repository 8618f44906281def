//! Raster canvas backed by a tiny-skia pixmap
//!
//! ## Coordinate System
//!
//! The logical square `[-half_extent, half_extent]²` (y up) is stretched
//! over the whole pixmap (y down). With the default 200x200 image and a
//! half-extent of 100 one logical unit is one pixel.
//!
//! ## Fills
//!
//! Outlines are filled with the nonzero winding rule, so self-intersecting
//! outlines such as the five-pointed star come out solid. Lines drawn
//! while a fill is open are held back and stroked on top of the fill once
//! it closes.

use image::{Rgb, RgbImage};
use nalgebra::{Point2, Vector2};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::canvas::Canvas;
use super::renderer::RenderError;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Pen line width in logical units
const PEN_WIDTH: f32 = 1.0;

/// Something the pen drew while a fill was open
#[derive(Clone, Copy, Debug)]
enum Mark {
    Line(Point2<f64>, Point2<f64>, Rgb<u8>),
    Circle(Point2<f64>, f64, Rgb<u8>),
}

/// Outline collected between `begin_fill` and `end_fill`
#[derive(Default)]
struct FillOutline {
    points: Vec<Point2<f64>>,
    circles: Vec<(Point2<f64>, f64)>,
    marks: Vec<Mark>,
}

/// Canvas that rasterizes into an in-memory RGBA pixmap
pub struct RasterCanvas {
    pixmap: Pixmap,
    /// Logical units to pixels, per axis
    scale: Vector2<f64>,
    anti_alias: bool,

    pen: Point2<f64>,
    pen_is_down: bool,
    pen_color: Rgb<u8>,
    fill_color: Rgb<u8>,
    fill: Option<FillOutline>,
    cursor_visible: bool,
}

impl RasterCanvas {
    /// Create a `width` x `height` pixel canvas showing `[-half_extent, half_extent]²`
    pub fn new(width: u32, height: u32, half_extent: f64) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::CanvasSize { width, height })?;
        if !(half_extent.is_finite() && half_extent > 0.0) {
            return Err(RenderError::CanvasSize { width, height });
        }

        let scale = Vector2::new(
            f64::from(width) / (2.0 * half_extent),
            f64::from(height) / (2.0 * half_extent),
        );

        let mut canvas = Self {
            pixmap,
            scale,
            anti_alias: true,
            pen: Point2::origin(),
            pen_is_down: true,
            pen_color: BLACK,
            fill_color: BLACK,
            fill: None,
            cursor_visible: true,
        };
        canvas.reset();
        Ok(canvas)
    }

    /// Enable or disable edge anti-aliasing
    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Current pen position
    pub fn position(&self) -> Point2<f64> {
        self.pen
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Copy the current content into an RGB image
    ///
    /// Every pixel is opaque (reset paints white), so the premultiplied
    /// pixmap data can be read as plain RGB.
    pub fn to_rgb_image(&self) -> RgbImage {
        let width = self.pixmap.width();
        let data = self.pixmap.data();
        RgbImage::from_fn(width, self.pixmap.height(), |x, y| {
            let i = (y as usize * width as usize + x as usize) * 4;
            Rgb([data[i], data[i + 1], data[i + 2]])
        })
    }

    /// Color of the pixel under logical point `point`
    pub fn pixel_at(&self, point: Point2<f64>) -> Option<Rgb<u8>> {
        let px = point.x * self.scale.x + f64::from(self.pixmap.width()) / 2.0;
        let py = f64::from(self.pixmap.height()) / 2.0 - point.y * self.scale.y;
        // Pixmap::pixel does not check x against the row width
        if px < 0.0 || py < 0.0 || px >= f64::from(self.width()) || py >= f64::from(self.height()) {
            return None;
        }
        let pixel = self.pixmap.pixel(px as u32, py as u32)?;
        Some(Rgb([pixel.red(), pixel.green(), pixel.blue()]))
    }

    fn transform(&self) -> Transform {
        Transform::from_row(
            self.scale.x as f32,
            0.0,
            0.0,
            -self.scale.y as f32,
            self.pixmap.width() as f32 / 2.0,
            self.pixmap.height() as f32 / 2.0,
        )
    }

    fn paint(&self, color: Rgb<u8>) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color[0], color[1], color[2], 255);
        paint.anti_alias = self.anti_alias;
        paint
    }

    fn stroke_mark(&mut self, mark: Mark) {
        let mut pb = PathBuilder::new();
        let color = match mark {
            Mark::Line(from, to, color) => {
                pb.move_to(from.x as f32, from.y as f32);
                pb.line_to(to.x as f32, to.y as f32);
                color
            }
            Mark::Circle(center, radius, color) => {
                pb.push_circle(center.x as f32, center.y as f32, radius as f32);
                color
            }
        };

        // zero-length lines have no path
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: PEN_WIDTH,
                ..Stroke::default()
            };
            let paint = self.paint(color);
            let transform = self.transform();
            self.pixmap.stroke_path(&path, &paint, &stroke, transform, None);
        }
    }

    /// Draw a mark now, or hold it back until the open fill is painted
    fn draw(&mut self, mark: Mark) {
        match self.fill.as_mut() {
            Some(outline) => outline.marks.push(mark),
            None => self.stroke_mark(mark),
        }
    }

    fn fill_outline(&mut self, outline: &FillOutline) {
        let mut pb = PathBuilder::new();
        if let [first, rest @ ..] = outline.points.as_slice() {
            if rest.len() >= 2 {
                pb.move_to(first.x as f32, first.y as f32);
                for p in rest {
                    pb.line_to(p.x as f32, p.y as f32);
                }
                pb.close();
            }
        }
        for (center, radius) in &outline.circles {
            pb.push_circle(center.x as f32, center.y as f32, *radius as f32);
        }

        if let Some(path) = pb.finish() {
            let paint = self.paint(self.fill_color);
            let transform = self.transform();
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, transform, None);
        }
    }
}

impl Canvas for RasterCanvas {
    fn reset(&mut self) {
        self.pixmap.fill(Color::WHITE);
        self.pen = Point2::origin();
        self.pen_is_down = true;
        self.pen_color = BLACK;
        self.fill_color = BLACK;
        self.fill = None;
        self.cursor_visible = true;
    }

    fn set_fill_color(&mut self, color: Rgb<u8>) {
        self.fill_color = color;
    }

    fn set_pen_color(&mut self, color: Rgb<u8>) {
        self.pen_color = color;
    }

    fn pen_up(&mut self) {
        self.pen_is_down = false;
    }

    fn pen_down(&mut self) {
        self.pen_is_down = true;
    }

    fn move_to(&mut self, point: Point2<f64>) {
        if self.pen_is_down {
            self.draw(Mark::Line(self.pen, point, self.pen_color));
        }
        if let Some(outline) = self.fill.as_mut() {
            outline.points.push(point);
        }
        self.pen = point;
    }

    fn begin_fill(&mut self) {
        self.fill = Some(FillOutline {
            points: vec![self.pen],
            ..FillOutline::default()
        });
    }

    fn end_fill(&mut self) {
        if let Some(outline) = self.fill.take() {
            self.fill_outline(&outline);
            for mark in outline.marks {
                self.stroke_mark(mark);
            }
        }
    }

    fn draw_circle(&mut self, radius: f64) {
        let center = self.pen + Vector2::new(0.0, radius);
        if let Some(outline) = self.fill.as_mut() {
            outline.circles.push((center, radius));
        }
        if self.pen_is_down {
            self.draw(Mark::Circle(center, radius, self.pen_color));
        }
    }

    fn hide_cursor(&mut self) {
        self.cursor_visible = false;
    }
}
