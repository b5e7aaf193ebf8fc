//! Plain data types for every validated parameter group.
//!
//! Each spec is constructed from already-coerced values, corrects what it
//! must through [`Report`](crate::report::Report), and knows how to append
//! its own command-line tokens. The single seam between the specs and the
//! orchestrators is [`AppendArgs`]; there is no builder hierarchy.

mod grid;
mod lipid;
mod martinize;
mod membrane;
mod protein;
mod solvent;

pub use grid::{
    DEFAULT_GRID_SIZE, GridSpec, MAX_DISPLAYABLE_GRID_SIZE, MAX_GRID_SIZE, PbcMode,
    validate_distance,
};
pub use lipid::{AdditionalLipid, LipidCounter, LipidKind, StandardLipid};
pub use martinize::{ForceField, MartinizeSpec, PositionRestraints};
pub use membrane::MembraneSpec;
pub use protein::{FUDGE_UNSET, ProteinSpec};
pub use solvent::{MIN_SOLVENT_DIAMETER, SALT_SATURATION, SolventKind, SolventSpec};

/// Appends this value's command-line tokens to the argument vector.
///
/// Implementations emit `flag` / `flag value` sequences in a fixed order so
/// the synthesized command line is deterministic for a given request.
pub trait AppendArgs {
    fn append_args(&self, argv: &mut Vec<String>);
}
