//! `clipoffset simulate`

use std::path::Path;

use anyhow::{Context, Result};

use clipoffset::cli::SimulateArgs;
use clipoffset::config::FaultPolicy;
use clipoffset::playback;

use super::load_config;

/// Run the playback driver and print its trace.
#[cfg(not(tarpaulin_include))]
pub fn handle(config_path: Option<&Path>, args: &SimulateArgs) -> Result<()> {
    let mut config = load_config(config_path, &args.window)?;

    if args.restart {
        config.offset.restart_beginning = true;
    }
    if args.live {
        config.media.live = true;
    }
    if let Some(ticks) = args.ticks {
        config.simulation.ticks = ticks;
    }
    if let Some(tick) = args.tick {
        config.simulation.tick = tick;
    }
    if args.fault_at.is_some() {
        config.simulation.fault_at_tick = args.fault_at;
    }
    if args.reload_on_fault {
        config.simulation.on_fault = FaultPolicy::Reload;
    }

    config.validate()?;

    let trace = playback::run(&config).context("Playback failed")?;

    if args.json {
        println!("{}", trace.to_json_lines()?);
    } else {
        println!("{}", trace.render_table());
        if trace.reloads > 0 {
            println!("player reloaded {} time(s)", trace.reloads);
        }
    }
    Ok(())
}
