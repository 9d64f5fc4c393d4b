// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/args.rs
//
// Command line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::constant::DEFAULT_LOG_LEVEL;
use crate::domain::image::CropRect;

#[derive(Debug, Clone, Parser)]
#[command(name = "cropframe", version, about = "Load an image, crop a region and save it")]
pub struct Args {
    /// Read configuration from this file instead of the user config.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print dimensions and pixel format of an image.
    Info {
        /// Image to inspect.
        file: PathBuf,
    },

    /// Crop a rectangle out of an image and save it.
    Crop {
        /// Source image.
        file: PathBuf,

        /// Region to keep as x,y,width,height (clipped to the image).
        #[arg(short, long, value_name = "X,Y,W,H", allow_hyphen_values = true)]
        rect: CropRect,

        /// Output file; the format follows its extension.
        /// Derived from the config when omitted.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration as JSON.
    Config,
}

impl Args {
    /// Log filter derived from the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => DEFAULT_LOG_LEVEL,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
