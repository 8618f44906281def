//! Generation driver - renders and saves every requested image
//!
//! For each of `size` iterations every selected shape is sampled, rendered
//! and saved once, in order. A shape that fails to render or save is logged
//! and skipped; the batch always runs to the end.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::output::{ImageSink, OutputError, PersistenceSink};
use crate::render::{Canvas, RasterCanvas, RenderError, ShapeRenderer};
use crate::sampling::{ParameterSampler, ShapeInstance};
use crate::settings::{ConfigError, GeneratorSettings};
use crate::shapes::ShapeKind;

/// Errors that stop a run before the first image
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Invalid settings: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Outcome of a generation run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationReport {
    /// Shapes drawn completely
    pub rendered: usize,
    /// Images written by the sink
    pub persisted: usize,
    /// Shapes dropped because their geometry could not be built
    pub skipped: usize,
    /// Rendered shapes the sink failed to write
    pub failed: usize,
    pub files: Vec<PathBuf>,
}

/// Sequential image generator
pub struct Generator {
    size: usize,
    shapes: Vec<ShapeKind>,
    sampler: ParameterSampler,
    renderer: ShapeRenderer,
    rng: StdRng,
}

impl Generator {
    /// Generator producing `size` images of every shape in `settings`
    ///
    /// Seeded from `settings.seed` when present, from OS entropy otherwise.
    pub fn new(settings: &GeneratorSettings, size: usize) -> Result<Self, ConfigError> {
        settings.validate()?;

        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            size,
            shapes: settings.shapes.clone(),
            sampler: ParameterSampler::from_settings(settings),
            renderer: ShapeRenderer::new(settings.half_extent),
            rng,
        })
    }

    /// Number of images a full run produces
    pub fn total(&self) -> usize {
        self.size * self.shapes.len()
    }

    /// Render every (iteration, shape) pair onto `canvas` and hand it to `sink`
    pub fn run<C, S>(&mut self, canvas: &mut C, sink: &mut S) -> GenerationReport
    where
        C: Canvas,
        S: PersistenceSink<C>,
    {
        let renderer = self.renderer;
        self.run_with(canvas, sink, |canvas, shape| renderer.render(canvas, shape))
    }

    /// Like `run`, drawing each instance with `render`
    ///
    /// An instance whose render fails is counted as skipped and never
    /// reaches the sink.
    pub fn run_with<C, S, F>(&mut self, canvas: &mut C, sink: &mut S, mut render: F) -> GenerationReport
    where
        C: Canvas,
        S: PersistenceSink<C>,
        F: FnMut(&mut C, &ShapeInstance) -> Result<(), RenderError>,
    {
        let mut report = GenerationReport::default();

        for iteration in 0..self.size {
            for &kind in &self.shapes {
                let shape = self.sampler.sample(kind, &mut self.rng);

                if let Err(e) = render(canvas, &shape) {
                    log::warn!("Skipping {} (iteration {}): {}", kind, iteration, e);
                    report.skipped += 1;
                    continue;
                }
                report.rendered += 1;

                match sink.persist(kind, canvas) {
                    Ok(path) => {
                        report.persisted += 1;
                        report.files.push(path);
                    }
                    Err(e) => {
                        log::error!("{}", e);
                        report.failed += 1;
                    }
                }
            }
        }

        report
    }
}

/// Generate `size` images per shape into `destination` using a raster canvas
pub fn generate_shapes(
    settings: &GeneratorSettings,
    size: usize,
    destination: &Path,
) -> Result<GenerationReport, GeneratorError> {
    let mut generator = Generator::new(settings, size)?;
    let mut canvas = RasterCanvas::new(settings.image_width, settings.image_height, settings.half_extent)?
        .with_anti_alias(settings.anti_alias);
    let mut sink = ImageSink::new(destination, settings.format)?.with_jpeg_quality(settings.jpeg_quality);

    let radius = generator.sampler.radius_range();
    log::info!(
        "Generating {} images ({} shapes x {}) into {}, radius {}..{}, margin {}",
        generator.total(),
        settings.shapes.len(),
        size,
        sink.destination().display(),
        radius.start,
        radius.end,
        generator.sampler.margin()
    );

    let report = generator.run(&mut canvas, &mut sink);

    log::info!(
        "Done: {} saved, {} skipped, {} failed",
        report.persisted,
        report.skipped,
        report.failed
    );
    Ok(report)
}
