use crate::model::{AppendArgs, MartinizeSpec};
use crate::report::Report;
use crate::settings::Settings;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A validated coarse-graining request for martinize.
///
/// Besides the spec tokens, martinize needs three output paths; they are
/// all derived from one output stem so the files of a run stay together.
#[derive(Debug)]
pub struct MartinizeRequest {
    spec: MartinizeSpec,
    report: Report,
    argv: Vec<String>,
    topology: PathBuf,
    coarse_pdb: PathBuf,
    index: PathBuf,
}

/// What the response layer reports back to the user.
#[derive(Debug, Serialize)]
pub struct MartinizeSummary<'a> {
    pub arguments: &'a [String],
    pub warnings: &'a [String],
    pub topology: &'a Path,
    pub structure: &'a Path,
    pub index: &'a Path,
}

impl MartinizeRequest {
    /// Validates `settings` and synthesizes the martinize command line.
    pub fn build(
        settings: &Settings,
        program: &Path,
        structure_file: &Path,
        output_stem: &Path,
    ) -> Self {
        let mut report = Report::new();
        let spec = Self::martinize_spec(settings, &mut report);

        let topology = with_suffix(output_stem, "-cg.top");
        let coarse_pdb = with_suffix(output_stem, "-mart.pdb");
        let index = with_suffix(output_stem, "-mart.ndx");

        let mut argv = vec![
            program.display().to_string(),
            "-f".to_string(),
            structure_file.display().to_string(),
            "-o".to_string(),
            topology.display().to_string(),
            "-x".to_string(),
            coarse_pdb.display().to_string(),
            "-n".to_string(),
            index.display().to_string(),
        ];
        spec.append_args(&mut argv);
        debug!(
            tokens = argv.len(),
            warnings = report.len(),
            "martinize request ready"
        );

        Self {
            spec,
            report,
            argv,
            topology,
            coarse_pdb,
            index,
        }
    }

    fn martinize_spec(settings: &Settings, report: &mut Report) -> MartinizeSpec {
        MartinizeSpec::new(
            settings.text("martinize_ss"),
            settings.flag("martinize_collagen"),
            settings.flag("martinize_nt"),
            settings.flag("martinize_cb"),
            settings.float("martinize_cys"),
            settings.flag("martinize_link"),
            settings.flag("martinize_merge"),
            &settings.text("martinize_p"),
            settings.int_or("martinize_pf", 1000),
            settings.flag("martinize_ed"),
            settings.flag("martinize_sep"),
            &settings.text("martinize_ff"),
            report,
        )
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn warnings(&self) -> &[String] {
        self.report.warnings()
    }

    pub fn spec(&self) -> &MartinizeSpec {
        &self.spec
    }

    pub fn topology(&self) -> &Path {
        &self.topology
    }

    /// The coarse-grained structure, the file a later membrane-building
    /// request embeds.
    pub fn coarse_pdb(&self) -> &Path {
        &self.coarse_pdb
    }

    pub fn index(&self) -> &Path {
        &self.index
    }

    pub fn summary(&self) -> MartinizeSummary<'_> {
        MartinizeSummary {
            arguments: &self.argv,
            warnings: self.report.warnings(),
            topology: &self.topology,
            structure: &self.coarse_pdb,
            index: &self.index,
        }
    }
}

/// Drops the stem's final extension and appends a run-specific suffix.
fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut base = stem.with_extension("").into_os_string();
    base.push(suffix);
    PathBuf::from(base)
}
