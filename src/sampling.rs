//! Random shape parameters
//!
//! Every generated image gets an independent background color, fill color,
//! circumscribed radius, rotation and center. The radius is drawn first so
//! the center range can be narrowed until the whole shape stays inside the
//! margin.

use std::ops::Range;

use image::Rgb;
use nalgebra::Point2;
use rand::Rng;

use crate::settings::GeneratorSettings;
use crate::shapes::ShapeKind;

/// One fully parameterized shape, ready to render
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeInstance {
    pub kind: ShapeKind,
    /// Center of the circumscribed circle
    pub center: Point2<f64>,
    /// Circumscribed radius
    pub radius: u32,
    /// Rotation in radians
    pub rotation: f64,
    pub background: Rgb<u8>,
    pub fill: Rgb<u8>,
}

/// Draws `ShapeInstance` parameters from an injected random source
#[derive(Clone, Debug)]
pub struct ParameterSampler {
    radius: Range<u32>,
    rotation_deg: Range<i32>,
    margin: i32,
}

impl ParameterSampler {
    /// Sampler with explicit bounds
    ///
    /// Callers guarantee `radius` is non-empty and `radius.end <= margin`
    /// (see `GeneratorSettings::validate`).
    pub fn new(radius: Range<u32>, rotation_deg: Range<i32>, margin: u32) -> Self {
        Self {
            radius,
            rotation_deg,
            margin: margin as i32,
        }
    }

    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        Self::new(
            settings.radius_min..settings.radius_max,
            settings.rotation_min_deg..settings.rotation_max_deg,
            settings.margin,
        )
    }

    pub fn radius_range(&self) -> Range<u32> {
        self.radius.clone()
    }

    pub fn margin(&self) -> u32 {
        self.margin as u32
    }

    /// Sample the parameters of one `kind` image
    pub fn sample<R: Rng + ?Sized>(&self, kind: ShapeKind, rng: &mut R) -> ShapeInstance {
        let background = random_color(rng);
        let fill = random_color(rng);

        let radius = rng.gen_range(self.radius.clone());
        let rotation = f64::from(rng.gen_range(self.rotation_deg.clone())).to_radians();

        let reach = self.margin - radius as i32;
        let x = rng.gen_range(-reach..reach);
        let y = rng.gen_range(-reach..reach);

        ShapeInstance {
            kind,
            center: Point2::new(f64::from(x), f64::from(y)),
            radius,
            rotation,
            background,
            fill,
        }
    }
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb<u8> {
    Rgb([rng.gen(), rng.gen(), rng.gen()])
}
