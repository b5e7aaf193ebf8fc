use super::AppendArgs;
use crate::report::Report;
use std::path::{Path, PathBuf};

/// Sentinel for "no fudge factor given". Distinguishes an explicit 0
/// (forbid any protein-membrane overlap) from an unset field.
pub const FUDGE_UNSET: f64 = -1.0;

/// Protein placement instructions. A request without a structure file has
/// no protein and contributes no tokens at all.
#[derive(Debug, Clone)]
pub struct ProteinSpec {
    structure_file: Option<PathBuf>,
    ring: bool,
    center: bool,
    rotation: String,
    fudge: f64,
    vertical_shift: f64,
}

impl ProteinSpec {
    pub fn new(
        structure_file: Option<PathBuf>,
        ring: bool,
        center: bool,
        rotation: String,
        fudge: f64,
        vertical_shift: f64,
        report: &mut Report,
    ) -> Self {
        let rotation = validate_rotation(rotation, report);
        Self {
            structure_file,
            ring,
            center,
            rotation,
            fudge,
            vertical_shift,
        }
    }

    pub fn is_file_given(&self) -> bool {
        self.given_file().is_some()
    }

    pub fn rotation(&self) -> &str {
        &self.rotation
    }

    fn given_file(&self) -> Option<&Path> {
        self.structure_file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

/// A rotation is one of the two placement keywords or an angle. The angle
/// is kept exactly as the user typed it, only checked to be numeric.
fn validate_rotation(rotation: String, report: &mut Report) -> String {
    if rotation.is_empty()
        || rotation == "random"
        || rotation == "princ"
        || rotation.parse::<f64>().is_ok()
    {
        return rotation;
    }
    report.warn(format!(
        "Your rotate value '{rotation}' is not legal and has been removed."
    ));
    String::new()
}

impl AppendArgs for ProteinSpec {
    fn append_args(&self, argv: &mut Vec<String>) {
        let Some(file) = self.given_file() else {
            return;
        };

        argv.push("-f".into());
        argv.push(file.display().to_string());

        if self.ring {
            argv.push("-ring".into());
        }
        if self.center {
            argv.push("-center".into());
        }
        if !self.rotation.is_empty() {
            argv.push("-rotate".into());
            argv.push(self.rotation.clone());
        }
        // >= 0 so an explicit 0 still reaches the command line
        if self.fudge >= 0.0 {
            argv.push("-fudge".into());
            argv.push(self.fudge.to_string());
        }
        if self.vertical_shift != 0.0 {
            argv.push("-dm".into());
            argv.push(self.vertical_shift.to_string());
        }
    }
}
