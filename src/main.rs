//! clipoffset command line entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use clipoffset::cli::{Cli, Commands, ConfigCommands};
use clipoffset::logging::init_logging;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        git = option_env!("VERGEN_GIT_SHA").unwrap_or("release"),
        "Starting clipoffset"
    );

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Simulate(args) => commands::simulate::handle(config_path, &args),
        Commands::Map(args) => commands::map::handle(config_path, &args),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(config_path),
        Commands::Config(ConfigCommands::Init { force }) => {
            commands::config::handle_init(config_path, force)
        }
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
