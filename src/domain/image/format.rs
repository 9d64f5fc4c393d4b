// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/image/format.rs
//
// Output format resolution from file extensions.

use std::path::Path;

use anyhow::{anyhow, bail};
use image::{ColorType, DynamicImage, ImageFormat};

/// Resolve the encoder for `path` from its extension.
///
/// Fails for a missing extension, an extension no codec claims, and
/// formats this build can only read.
pub fn output_format(path: &Path) -> anyhow::Result<ImageFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| anyhow!("output path {} has no file extension", path.display()))?;

    let format = ImageFormat::from_extension(ext)
        .ok_or_else(|| anyhow!("unsupported output extension .{ext}"))?;

    if !format.writing_enabled() {
        bail!("no encoder available for {format:?}");
    }

    Ok(format)
}

/// Convert `image` into a pixel format the encoder for `format` accepts.
///
/// JPEG only takes 8-bit gray or RGB; everything else is written as-is.
pub fn prepare_for_format(image: DynamicImage, format: ImageFormat) -> DynamicImage {
    match (format, image.color()) {
        (ImageFormat::Jpeg, ColorType::L8 | ColorType::Rgb8) => image,
        (ImageFormat::Jpeg, _) => DynamicImage::ImageRgb8(image.to_rgb8()),
        _ => image,
    }
}
