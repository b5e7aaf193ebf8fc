use super::{load_settings, report_warnings, run_program};
use crate::cli::CoarseGrainArgs;
use crate::error::Result;
use insane_core::builder::MartinizeRequest;
use tracing::info;

pub fn run(args: CoarseGrainArgs) -> Result<()> {
    let settings = load_settings(&args.settings)?;
    let request = MartinizeRequest::build(&settings, &args.program, &args.structure, &args.output);

    report_warnings(request.warnings());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&request.summary()).map_err(anyhow::Error::from)?);
    } else if args.run {
        run_program(request.argv())?;
        info!(
            "martinize finished; coarse-grained structure written to {}.",
            request.coarse_pdb().display()
        );
    } else {
        println!("{}", request.argv().join(" "));
    }
    Ok(())
}
