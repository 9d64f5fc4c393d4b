// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Configuration directory name (below the platform config dir).
pub const CONFIG_DIR: &str = "cropframe";

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.json";

/// Suffix appended to the input file stem for derived output paths.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_cropped";

/// Output extension used when neither the config nor the input provides one.
pub const DEFAULT_OUTPUT_EXT: &str = "png";

/// Stem used for derived output paths when the input has none.
pub const FALLBACK_OUTPUT_STEM: &str = "output";

/// Log filter applied when no `-v` flag and no `RUST_LOG` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
