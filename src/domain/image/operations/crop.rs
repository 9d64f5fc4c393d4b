// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/image/operations/crop.rs
//
// Crop operation domain model.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail};
use image::DynamicImage;

/// Crop rectangle as supplied by the caller.
///
/// Coordinates are relative to the image origin (top-left) and may lie
/// partly or fully outside the image. Use [`CropRect::intersect`] to get
/// the pixels that actually exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CropRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Clip the rectangle to `[0, image_width) x [0, image_height)`.
    ///
    /// Returns `None` when nothing is left, which includes rectangles with
    /// a zero or negative width or height.
    pub fn intersect(&self, image_width: u32, image_height: u32) -> Option<CropRegion> {
        let left = i64::from(self.x).max(0);
        let top = i64::from(self.y).max(0);
        let right = (i64::from(self.x) + i64::from(self.width)).min(i64::from(image_width));
        let bottom = (i64::from(self.y) + i64::from(self.height)).min(i64::from(image_height));

        // Negative extents fail the conversion, zero extents the validity check.
        let region = CropRegion::new(
            u32::try_from(left).ok()?,
            u32::try_from(top).ok()?,
            u32::try_from(right - left).ok()?,
            u32::try_from(bottom - top).ok()?,
        );
        Some(region).filter(CropRegion::is_valid)
    }
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for CropRect {
    type Err = anyhow::Error;

    /// Parse `x,y,width,height`. Whitespace around each number is allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<i32>()
                    .map_err(|e| anyhow!("invalid number {:?} in crop rectangle: {e}", part.trim()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let [x, y, width, height] = parts.as_slice() else {
            bail!("expected x,y,width,height but got {} value(s)", parts.len());
        };

        Ok(Self::new(*x, *y, *width, *height))
    }
}

/// Crop region in pixel coordinates, fully inside an image.
///
/// Pure domain model - produced by [`CropRect::intersect`], never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Copy `region` out of `image`, keeping its pixel format.
pub fn crop_region(image: &DynamicImage, region: CropRegion) -> DynamicImage {
    let (x, y, width, height) = region.as_tuple();
    image.crop_imm(x, y, width, height)
}
