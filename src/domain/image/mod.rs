// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/image/mod.rs

pub mod format;
pub mod operations;

pub use format::{output_format, prepare_for_format};
pub use operations::crop::{CropRect, CropRegion, crop_region};
