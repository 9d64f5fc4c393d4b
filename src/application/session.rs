// SPDX-License-Identifier: GPL-3.0-or-later
// src/application/session.rs
//
// Image session: owns at most one decoded image and mediates load/crop/save.

use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use image::{DynamicImage, GenericImageView, ImageReader};

use crate::domain::image::{CropRect, crop_region, output_format, prepare_for_format};

// =============================================================================
// Events and outcomes
// =============================================================================

/// Result of a load that passed the existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file decoded; the session now holds an image of this size.
    Decoded { width: u32, height: u32 },
    /// The file exists but could not be decoded; the session is now empty.
    DecodeFailed,
}

/// Notification fired after every load that found its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLoaded {
    pub path: PathBuf,
    pub status: LoadStatus,
}

/// Observer callback for [`ImageLoaded`] notifications.
pub type ImageLoadedHandler = Box<dyn FnMut(&ImageLoaded)>;

/// Result of [`ImageSession::save_cropped`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The cropped region was written with these dimensions.
    Saved { width: u32, height: u32 },
    /// Nothing is loaded; no I/O happened.
    NoImage,
    /// Cropping, encoding or writing failed. Holds a readable reason.
    Failed(String),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

// =============================================================================
// Session
// =============================================================================

/// Holds zero or one decoded image.
///
/// All operations are synchronous and take `&mut self` where they change
/// state, so calls are serialized by the borrow checker. Failures are
/// logged and reported through return values; nothing here panics or
/// returns an error to the caller.
#[derive(Default)]
pub struct ImageSession {
    image: Option<DynamicImage>,
    source_path: Option<PathBuf>,
    observers: Vec<ImageLoadedHandler>,
}

impl fmt::Debug for ImageSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageSession")
            .field("dimensions", &self.dimensions())
            .field("source_path", &self.source_path)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ImageSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for load notifications.
    ///
    /// Observers run synchronously on the calling thread, in registration
    /// order, after the session state has been updated.
    pub fn on_image_loaded<F>(&mut self, handler: F)
    where
        F: FnMut(&ImageLoaded) + 'static,
    {
        self.observers.push(Box::new(handler));
    }

    /// Load `path` into the session.
    ///
    /// A missing file is logged and leaves the session untouched; returns
    /// `None` and notifies nobody. Otherwise the held image is replaced,
    /// by nothing if decoding fails, and observers are notified either way.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Option<LoadStatus> {
        let path = path.as_ref();

        if !path.exists() {
            log::warn!("File not found: {}", path.display());
            return None;
        }

        let status = match decode(path) {
            Ok(image) => {
                let (width, height) = image.dimensions();
                log::debug!(
                    "Loaded {} ({width}x{height}, {:?})",
                    path.display(),
                    image.color()
                );
                self.image = Some(image);
                LoadStatus::Decoded { width, height }
            }
            Err(e) => {
                log::warn!("Failed to decode {}: {e:#}", path.display());
                self.image = None;
                LoadStatus::DecodeFailed
            }
        };
        self.source_path = Some(path.to_path_buf());

        let event = ImageLoaded {
            path: path.to_path_buf(),
            status,
        };
        for observer in &mut self.observers {
            observer(&event);
        }

        Some(status)
    }

    /// Crop `rect` out of the held image and write it to `output_path`.
    ///
    /// The rectangle is clipped to the image bounds. The encoder is chosen
    /// from the output extension.
    pub fn save_cropped(&self, rect: CropRect, output_path: impl AsRef<Path>) -> SaveOutcome {
        let output_path = output_path.as_ref();

        let Some(image) = &self.image else {
            log::warn!("No image loaded.");
            return SaveOutcome::NoImage;
        };

        match write_cropped(image, rect, output_path) {
            Ok((width, height)) => {
                log::debug!(
                    "Saved {rect} as {width}x{height} to {}",
                    output_path.display()
                );
                SaveOutcome::Saved { width, height }
            }
            Err(e) => {
                log::warn!(
                    "Failed to save cropped image to {}: {e:#}",
                    output_path.display()
                );
                SaveOutcome::Failed(format!("{e:#}"))
            }
        }
    }

    /// Read-only view of the held image.
    pub fn current(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    /// In-memory crop of the held image, clipped to its bounds.
    ///
    /// `None` when nothing is loaded or the rectangle misses the image.
    pub fn crop(&self, rect: CropRect) -> Option<DynamicImage> {
        let image = self.image.as_ref()?;
        let (width, height) = image.dimensions();
        let region = rect.intersect(width, height)?;
        Some(crop_region(image, region))
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none()
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(GenericImageView::dimensions)
    }

    /// Path of the last load that found its file, decoded or not.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }
}

fn decode(path: &Path) -> anyhow::Result<DynamicImage> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image)
}

fn write_cropped(
    image: &DynamicImage,
    rect: CropRect,
    output_path: &Path,
) -> anyhow::Result<(u32, u32)> {
    let format = output_format(output_path)?;

    let (width, height) = image.dimensions();
    let region = rect
        .intersect(width, height)
        .ok_or_else(|| anyhow!("crop rectangle {rect} lies outside the {width}x{height} image"))?;

    // The destination is only touched once encoding has succeeded.
    let cropped = prepare_for_format(crop_region(image, region), format);
    let mut buffer = Cursor::new(Vec::new());
    cropped
        .write_to(&mut buffer, format)
        .with_context(|| format!("failed to encode {format:?}"))?;
    fs::write(output_path, buffer.into_inner()).context("failed to write file")?;

    Ok(cropped.dimensions())
}
