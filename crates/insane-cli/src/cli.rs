use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Lonneke Scheffer, Wout van Helvoirt",
    version,
    about = "insane-model - validates coarse-grained membrane simulation settings and \
             synthesizes the insane/martinize command lines.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output, including validation warnings
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate membrane settings and synthesize the insane command line.
    Membrane(MembraneArgs),
    /// Validate coarse-graining settings and synthesize the martinize command line.
    CoarseGrain(CoarseGrainArgs),
}

/// Arguments for the `membrane` subcommand.
#[derive(Args, Debug)]
pub struct MembraneArgs {
    /// Path to the settings document (JSON); '-' reads from standard input.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub settings: PathBuf,

    /// Path for the structure file insane should generate.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Optional protein structure file to embed in the membrane.
    #[arg(short = 'f', long, value_name = "PATH")]
    pub structure: Option<PathBuf>,

    /// Path to the insane executable.
    #[arg(short, long, value_name = "PATH", default_value = "insane.py")]
    pub program: PathBuf,

    /// Execute the synthesized command instead of printing it.
    #[arg(long)]
    pub run: bool,

    /// Print the full request summary (arguments, warnings, display flag) as JSON.
    #[arg(long, conflicts_with = "run")]
    pub json: bool,
}

/// Arguments for the `coarse-grain` subcommand.
#[derive(Args, Debug)]
pub struct CoarseGrainArgs {
    /// Path to the settings document (JSON); '-' reads from standard input.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub settings: PathBuf,

    /// Output stem; the topology, structure and index paths derive from it.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Protein structure file to coarse-grain.
    #[arg(short = 'f', long, required = true, value_name = "PATH")]
    pub structure: PathBuf,

    /// Path to the martinize executable.
    #[arg(short, long, value_name = "PATH", default_value = "martinize.py")]
    pub program: PathBuf,

    /// Execute the synthesized command instead of printing it.
    #[arg(long)]
    pub run: bool,

    /// Print the full request summary (arguments, warnings, output paths) as JSON.
    #[arg(long, conflicts_with = "run")]
    pub json: bool,
}
