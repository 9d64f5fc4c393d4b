// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Process bootstrap: logging, configuration, one session, one command.

use clap::Parser;

use cropframe::app::{self, Args};
use cropframe::{AppConfig, ImageSession};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    // An explicit config path must be readable; the user config is optional.
    let config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };

    let mut session = ImageSession::new();
    app::run(&mut session, &config, args.command)
}
