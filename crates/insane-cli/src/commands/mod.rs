pub mod coarse_grain;
pub mod membrane;

use crate::error::{CliError, Result};
use insane_core::settings::Settings;
use std::io::Read;
use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

/// Loads the settings document from a file, or from stdin for `-`.
pub(crate) fn load_settings(path: &Path) -> Result<Settings> {
    let document = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?
    };
    Ok(Settings::from_json(&document)?)
}

/// Surfaces the validation warning trail through the log.
pub(crate) fn report_warnings(warnings: &[String]) {
    for warning in warnings {
        warn!("{warning}");
    }
}

/// Runs the synthesized command and waits for it, propagating a non-zero
/// exit status as an error.
pub(crate) fn run_program(argv: &[String]) -> Result<()> {
    let Some((program, args)) = argv.split_first() else {
        return Err(CliError::Other(anyhow::anyhow!("empty argument vector")));
    };
    info!("Running '{program}' with {} arguments.", args.len());
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| CliError::Launch {
            program: program.clone(),
            source,
        })?;
    if !status.success() {
        return Err(CliError::ProgramFailed {
            program: program.clone(),
            status,
        });
    }
    Ok(())
}
