// SPDX-License-Identifier: GPL-3.0-or-later
// src/application/mod.rs
//
// Application layer: the image session and its notifications.

pub mod session;

pub use session::{ImageLoaded, ImageLoadedHandler, ImageSession, LoadStatus, SaveOutcome};
