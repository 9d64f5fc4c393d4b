// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Front end: runs one command against an injected image session.

mod args;

pub use args::{Args, Command};

use std::path::{Path, PathBuf};

use anyhow::bail;

use crate::application::{ImageSession, LoadStatus, SaveOutcome};
use crate::config::AppConfig;
use crate::domain::image::CropRect;

/// Run `command` against `session`.
///
/// Registers a load observer, then dispatches. Any load or save failure is
/// turned into an error so the process exits non-zero.
pub fn run(session: &mut ImageSession, config: &AppConfig, command: Command) -> anyhow::Result<()> {
    session.on_image_loaded(|event| match event.status {
        LoadStatus::Decoded { width, height } => {
            log::info!("Image loaded: {} ({width}x{height})", event.path.display());
        }
        LoadStatus::DecodeFailed => {
            log::info!("Image loaded without content: {}", event.path.display());
        }
    });

    match command {
        Command::Info { file } => info(session, &file),
        Command::Crop { file, rect, output } => {
            let output = match output {
                Some(output) => output,
                None => derived_output(config, &file)?,
            };
            crop(session, &file, rect, &output)
        }
        Command::Config => {
            println!("{}", config.to_json()?);
            Ok(())
        }
    }
}

/// Output path from the config. Never the source itself: an empty suffix
/// with the input's own extension would otherwise overwrite it.
fn derived_output(config: &AppConfig, file: &Path) -> anyhow::Result<PathBuf> {
    let output = config.output_path_for(file);
    if output.as_path() == file {
        bail!(
            "derived output path {} is the input itself; set output_suffix or pass -o",
            output.display()
        );
    }
    Ok(output)
}

fn info(session: &mut ImageSession, file: &Path) -> anyhow::Result<()> {
    let (width, height) = load(session, file)?;
    let color = session.current().map(image::DynamicImage::color);

    match color {
        Some(color) => println!("{}: {width}x{height} {color:?}", file.display()),
        None => println!("{}: {width}x{height}", file.display()),
    }
    Ok(())
}

fn crop(
    session: &mut ImageSession,
    file: &Path,
    rect: CropRect,
    output: &Path,
) -> anyhow::Result<()> {
    load(session, file)?;

    match session.save_cropped(rect, output) {
        SaveOutcome::Saved { width, height } => {
            println!("{}: {width}x{height}", output.display());
            Ok(())
        }
        SaveOutcome::NoImage => bail!("no image loaded"),
        SaveOutcome::Failed(reason) => {
            bail!("failed to save cropped image to {}: {reason}", output.display())
        }
    }
}

fn load(session: &mut ImageSession, file: &Path) -> anyhow::Result<(u32, u32)> {
    match session.load(file) {
        Some(LoadStatus::Decoded { width, height }) => Ok((width, height)),
        Some(LoadStatus::DecodeFailed) => bail!("could not decode {}", file.display()),
        None => bail!("file not found: {}", file.display()),
    }
}
