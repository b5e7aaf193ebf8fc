use super::{load_settings, report_warnings, run_program};
use crate::cli::MembraneArgs;
use crate::error::Result;
use insane_core::builder::SimulationRequest;
use tracing::{info, warn};

pub fn run(args: MembraneArgs) -> Result<()> {
    let settings = load_settings(&args.settings)?;
    let request = SimulationRequest::build(
        &settings,
        &args.program,
        args.structure.as_deref(),
        &args.output,
    );

    report_warnings(request.warnings());
    if request.too_large_to_display() {
        warn!("The requested grid is larger than the viewer can display.");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&request.summary()).map_err(anyhow::Error::from)?);
    } else if args.run {
        run_program(request.argv())?;
        info!("insane finished; output written to {}.", args.output.display());
    } else {
        println!("{}", request.argv().join(" "));
    }
    Ok(())
}
