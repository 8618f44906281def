//! shapegen - synthetic geometric shape image generator
//!
//! Generates `size` images for every selected shape. Each image is drawn on
//! a 200x200 canvas with an independently random background color, fill
//! color, rotation angle (between -180° and 180°), radius and center.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use shapegen::generator::{generate_shapes, GeneratorError};
use shapegen::output::OutputFormat;
use shapegen::settings::{settings_path, GeneratorSettings};
use shapegen::shapes::ShapeKind;

#[derive(Parser)]
#[command(name = "shapegen")]
#[command(about = "Generate labeled images of random geometric shapes")]
struct Cmd {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw and save images for every shape
    GenerateShapes {
        /// Number of generated images per shape
        #[arg(long)]
        size: usize,
        /// Storage path
        #[arg(long)]
        destination: PathBuf,
        /// Image file format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Comma separated subset of shapes, e.g. `star,circle`
        #[arg(long, value_delimiter = ',')]
        shapes: Vec<ShapeKind>,
        /// Exclusive upper bound of the circumscribed radius
        #[arg(long)]
        radius_max: Option<u32>,
    },
    /// Print the effective settings as JSON
    ShowConfig,
    /// Write the effective settings to the settings file, for editing
    SaveConfig,
}

fn main() -> ExitCode {
    env_logger::init();

    let cmd = Cmd::parse();
    let settings = match &cmd.config {
        Some(path) => GeneratorSettings::load_from(path),
        None => GeneratorSettings::load(),
    };

    let result: Result<(), Box<dyn std::error::Error>> = match cmd.action {
        Action::GenerateShapes {
            size,
            destination,
            format,
            seed,
            shapes,
            radius_max,
        } => {
            let mut settings = settings;
            if let Some(format) = format {
                settings.format = format;
            }
            if seed.is_some() {
                settings.seed = seed;
            }
            if !shapes.is_empty() {
                settings.shapes = shapes;
            }
            if let Some(radius_max) = radius_max {
                settings.radius_max = radius_max;
            }
            generate(&settings, size, destination).map_err(Into::into)
        }
        Action::ShowConfig => {
            show_config(&settings);
            Ok(())
        }
        Action::SaveConfig => {
            let path = cmd.config.unwrap_or_else(settings_path);
            match settings.save_to(&path) {
                Ok(()) => {
                    println!("Settings written to {}", path.display());
                    Ok(())
                }
                Err(e) => Err(format!("Failed to write {}: {}", path.display(), e).into()),
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn generate(settings: &GeneratorSettings, size: usize, destination: PathBuf) -> Result<(), GeneratorError> {
    log::info!("Starting shapegen");
    let report = generate_shapes(settings, size, &destination)?;
    println!(
        "{} images written to {} ({} skipped, {} failed)",
        report.persisted,
        destination.display(),
        report.skipped,
        report.failed
    );
    Ok(())
}

fn show_config(settings: &GeneratorSettings) {
    match serde_json::to_string_pretty(settings) {
        Ok(json) => println!("{}", json),
        Err(e) => log::warn!("Failed to serialize settings: {}", e),
    }
}
