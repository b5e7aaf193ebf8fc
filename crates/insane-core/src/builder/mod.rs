//! Request orchestrators.
//!
//! Each builder reads the raw [`Settings`](crate::settings::Settings) once,
//! constructs every spec in dependency order, and assembles the final
//! argument vector: program path and output tokens first, then each spec's
//! tokens in a fixed order.

mod insane;
mod martinize;

pub use insane::{RequestSummary, SimulationRequest};
pub use martinize::{MartinizeRequest, MartinizeSummary};

use crate::report::Report;

/// Parses a leaflet-abundance cell: either one number for both leaflets or
/// an `upper:lower` pair. Junk never aborts; unparsable parts fall back
/// to 1.
fn leaflet_ratios(raw: &str, report: &mut Report) -> (i64, i64) {
    let parts: Vec<&str> = raw.split(':').collect();
    match parts.as_slice() {
        [single] => {
            let ratio = ratio_int(single);
            (ratio, ratio)
        }
        [upper, lower] => (ratio_int(upper), ratio_int(lower)),
        _ => {
            report.warn(format!(
                "Relative abundance {raw} is not valid and has been set to 1."
            ));
            (1, 1)
        }
    }
}

fn ratio_int(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(1)
}
