//! # insane-core
//!
//! Validation and command-line synthesis for the INSANE coarse-grained
//! membrane builder (`insane.py`) and its companion coarse-graining tool
//! (`martinize.py`).
//!
//! The library turns a loosely-typed, user-supplied settings document into a
//! deterministic argument vector for the external program, correcting every
//! out-of-range or malformed field along the way and keeping a human-readable
//! warning trail of each correction. It performs no geometry or energy
//! computation and never touches the filesystem or spawns processes; callers
//! own transport, file lifecycle and execution.
//!
//! ## Architecture
//!
//! - **[`settings`]: The Input.** A read-only, total-accessor view over the
//!   parsed settings document. Parsing it is the only operation in the whole
//!   pipeline that can fail.
//!
//! - **[`model`]: The Specs.** Plain data types for every validated parameter
//!   group (grid, lipids, membrane, protein, solvent, martinize). Each spec
//!   corrects its own fields through [`report::Report`] and knows how to
//!   append its own command-line tokens.
//!
//! - **[`builder`]: The Orchestrators.** Build every spec in dependency order
//!   (grid first, since the membrane clamps depend on its bounds), run the
//!   cross-cutting display advisory, and assemble the final argument vector.

pub mod builder;
pub mod error;
pub mod model;
pub mod report;
pub mod settings;
