//! CLI definitions for clipoffset
//!
//! Lives in the library so `xtask` can generate man pages and
//! completions from the same definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("CLIPOFFSET_BUILD_DATE"),
    ")"
);

/// Present a [start, end] clip of a longer media timeline
#[derive(Parser, Debug)]
#[command(name = "clipoffset", version, long_version = LONG_VERSION, about)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ~/.config/clipoffset/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a clip against simulated media and print what happened
    Simulate(SimulateArgs),

    /// Show how clip times map onto media times
    Map(MapArgs),

    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Clip window flags shared by `simulate` and `map`.
///
/// Values are read leniently: anything that is not a number counts as 0.
#[derive(Args, Debug, Clone, Default)]
pub struct WindowArgs {
    /// Clip start in media seconds
    #[arg(long, value_name = "SECONDS", allow_hyphen_values = true)]
    pub start: Option<String>,

    /// Clip end in media seconds (0 = until the media ends)
    #[arg(long, value_name = "SECONDS", allow_hyphen_values = true)]
    pub end: Option<String>,

    /// Natural media duration in seconds
    #[arg(long, value_name = "SECONDS")]
    pub duration: Option<f64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Loop back to the clip start instead of pausing at its end
    #[arg(long)]
    pub restart: bool,

    /// Treat the media as a growing live stream
    #[arg(long)]
    pub live: bool,

    /// Maximum number of time-updates
    #[arg(long, value_name = "N")]
    pub ticks: Option<u32>,

    /// Media seconds between time-updates
    #[arg(long, value_name = "SECONDS")]
    pub tick: Option<f64>,

    /// Lose the player handle at this tick
    #[arg(long, value_name = "N")]
    pub fault_at: Option<u32>,

    /// Rebuild the player after a fault instead of aborting
    #[arg(long)]
    pub reload_on_fault: bool,

    /// Print JSON lines instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct MapArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Clip-relative times to convert
    #[arg(value_name = "OUTER", allow_negative_numbers = true)]
    pub times: Vec<f64>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
