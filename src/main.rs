use anyhow::Result;
use clap::Parser;

use symscan::{
    app::load_config,
    cli::{handle_command, Cli},
    utils::init_logger,
};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_logger(cli.verbose);

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    handle_command(&cli.command, &config)
}
