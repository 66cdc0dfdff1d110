//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod map;
pub mod simulate;

use std::path::Path;

use anyhow::{Context, Result};

use clipoffset::cli::WindowArgs;
use clipoffset::config::parse_seconds;
use clipoffset::Config;

/// Load the config file and apply window flags on top of it.
pub fn load_config(path: Option<&Path>, window: &WindowArgs) -> Result<Config> {
    let mut config = Config::load(path).context("Failed to load configuration")?;

    if let Some(start) = &window.start {
        config.offset.start = parse_seconds(start);
    }
    if let Some(end) = &window.end {
        config.offset.end = parse_seconds(end);
    }
    if let Some(duration) = window.duration {
        config.media.duration = duration;
    }

    Ok(config)
}
