// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Crate root: load an image, crop a rectangle out of it and save the result.

pub mod app;
pub mod application;
pub mod config;
pub mod constant;
pub mod domain;

pub use application::{ImageLoaded, ImageSession, LoadStatus, SaveOutcome};
pub use config::AppConfig;
pub use domain::image::{CropRect, CropRegion};
