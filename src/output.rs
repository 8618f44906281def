//! Image output - saving rendered canvases to disk
//!
//! Files are named `{Shape}_{uuid}.{ext}` so the label can be read back
//! from the file name alone.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::render::RasterCanvas;
use crate::shapes::ShapeKind;

/// Errors that can occur while saving an image
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Encoded file format
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Jpg,
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpg => "jpg",
            OutputFormat::Png => "png",
        }
    }
}

/// Destination for finished drawings
pub trait PersistenceSink<C> {
    /// Save the current content of `canvas`, labeled as `kind`
    fn persist(&mut self, kind: ShapeKind, canvas: &C) -> Result<PathBuf, OutputError>;
}

/// Writes each drawing as an image file into a directory
pub struct ImageSink {
    destination: PathBuf,
    format: OutputFormat,
    jpeg_quality: u8,
}

impl ImageSink {
    /// Sink writing into `destination`, created if missing
    pub fn new(destination: impl Into<PathBuf>, format: OutputFormat) -> Result<Self, OutputError> {
        let destination = destination.into();
        std::fs::create_dir_all(&destination).map_err(|source| OutputError::Io {
            path: destination.clone(),
            source,
        })?;

        Ok(Self {
            destination,
            format,
            jpeg_quality: 90,
        })
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Fresh file path for a `kind` image
    fn next_path(&self, kind: ShapeKind) -> PathBuf {
        self.destination.join(format!(
            "{}_{}.{}",
            kind.name(),
            Uuid::new_v4(),
            self.format.extension()
        ))
    }

    /// Encode `pixels` in the sink's format
    fn encode(&self, pixels: &RgbImage) -> Result<Vec<u8>, image::ImageError> {
        let mut bytes = Cursor::new(Vec::new());
        match self.format {
            OutputFormat::Jpg => {
                JpegEncoder::new_with_quality(&mut bytes, self.jpeg_quality).encode_image(pixels)?
            }
            OutputFormat::Png => pixels.write_to(&mut bytes, ImageFormat::Png)?,
        }
        Ok(bytes.into_inner())
    }
}

impl PersistenceSink<RasterCanvas> for ImageSink {
    fn persist(&mut self, kind: ShapeKind, canvas: &RasterCanvas) -> Result<PathBuf, OutputError> {
        let path = self.next_path(kind);

        // nothing touches the directory until the image is fully encoded
        let bytes = self
            .encode(&canvas.to_rgb_image())
            .map_err(|source| OutputError::Encode {
                path: path.clone(),
                source,
            })?;
        std::fs::write(&path, bytes).map_err(|source| OutputError::Io {
            path: path.clone(),
            source,
        })?;

        log::debug!("Saved {}", path.display());
        Ok(path)
    }
}
