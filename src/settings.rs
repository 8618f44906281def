use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::output::OutputFormat;
use crate::shapes::{ShapeError, ShapeKind};

/// Errors for settings that can never produce a valid image
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("No shapes selected for generation")]
    NoShapes,

    #[error("Radius range [{min}, {max}) is empty")]
    EmptyRadiusRange { min: u32, max: u32 },

    #[error("Radius range [{min}, {max}) does not fit inside margin {margin}")]
    RadiusExceedsMargin { min: u32, max: u32, margin: u32 },

    #[error("Margin {margin} lies outside the canvas half-extent {half_extent}")]
    MarginExceedsCanvas { margin: u32, half_extent: f64 },

    #[error("Rotation range [{min}, {max}) degrees is empty")]
    EmptyRotationRange { min: i32, max: i32 },

    #[error("Image size {width}x{height} is invalid")]
    ImageSize { width: u32, height: u32 },

    #[error("JPEG quality must be within 1..=100, got {0}")]
    JpegQuality(u8),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Returns the path to the settings file: `~/.config/shapegen/settings.json`
pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("shapegen");
    path.push("settings.json");
    path
}

/// Persisted generator settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    // Canvas
    pub image_width: u32,
    pub image_height: u32,
    /// Logical half-extent of the square drawing area
    pub half_extent: f64,
    pub anti_alias: bool,

    // Shape parameters
    /// Shapes stay inside `[-margin, margin]` on both axes
    pub margin: u32,
    pub radius_min: u32,
    pub radius_max: u32,
    pub rotation_min_deg: i32,
    pub rotation_max_deg: i32,
    pub shapes: Vec<ShapeKind>,

    // Output
    pub format: OutputFormat,
    pub jpeg_quality: u8,
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            image_width: 200,
            image_height: 200,
            half_extent: 100.0,
            anti_alias: true,

            margin: 80,
            radius_min: 10,
            radius_max: 50,
            rotation_min_deg: -180,
            rotation_max_deg: 180,
            shapes: ShapeKind::all().to_vec(),

            format: OutputFormat::Jpg,
            jpeg_quality: 90,
            seed: None,
        }
    }
}

impl GeneratorSettings {
    /// Load settings from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Load settings from `path`, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to `path` as pretty JSON, creating missing directories.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Check that every sampled shape fits on the canvas
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shapes.is_empty() {
            return Err(ConfigError::NoShapes);
        }
        if self.image_width == 0 || self.image_height == 0 {
            return Err(ConfigError::ImageSize {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if self.radius_min == 0 || self.radius_min >= self.radius_max {
            return Err(ConfigError::EmptyRadiusRange {
                min: self.radius_min,
                max: self.radius_max,
            });
        }
        // largest radius r = max - 1 still needs [-margin + r, margin - r) non-empty
        if self.radius_max > self.margin {
            return Err(ConfigError::RadiusExceedsMargin {
                min: self.radius_min,
                max: self.radius_max,
                margin: self.margin,
            });
        }
        if self.half_extent.is_nan() || f64::from(self.margin) > self.half_extent {
            return Err(ConfigError::MarginExceedsCanvas {
                margin: self.margin,
                half_extent: self.half_extent,
            });
        }
        if self.rotation_min_deg >= self.rotation_max_deg {
            return Err(ConfigError::EmptyRotationRange {
                min: self.rotation_min_deg,
                max: self.rotation_max_deg,
            });
        }
        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(ConfigError::JpegQuality(self.jpeg_quality));
        }
        for kind in &self.shapes {
            kind.geometry().validate()?;
        }
        Ok(())
    }
}
