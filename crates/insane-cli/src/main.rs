mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("insane-model v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    match cli.command {
        Commands::Membrane(args) => {
            info!("Dispatching to 'membrane' command.");
            commands::membrane::run(args)
        }
        Commands::CoarseGrain(args) => {
            info!("Dispatching to 'coarse-grain' command.");
            commands::coarse_grain::run(args)
        }
    }
}
