//! `clipoffset map`

use std::path::Path;

use anyhow::Result;

use clipoffset::cli::MapArgs;
use clipoffset::format::format_time;
use clipoffset::OffsetWindow;

use super::load_config;

/// Print clip bounds and the media time of each given clip time.
#[cfg(not(tarpaulin_include))]
pub fn handle(config_path: Option<&Path>, args: &MapArgs) -> Result<()> {
    let config = load_config(config_path, &args.window)?;
    let window = OffsetWindow::from_options(&config.offset);
    let media = config.media.duration;

    println!("clip start:    {}", format_time(window.start_offset()));
    println!("clip end:      {}", format_time(window.end_offset(media)));
    println!("clip duration: {}", format_time(window.duration(media)));

    for outer in &args.times {
        println!(
            "{} -> {}",
            format_time(*outer),
            format_time(window.to_inner(*outer))
        );
    }
    Ok(())
}
