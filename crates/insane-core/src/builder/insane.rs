use super::{leaflet_ratios, ratio_int};
use crate::model::{
    AdditionalLipid, AppendArgs, FUDGE_UNSET, GridSpec, LipidCounter, LipidKind, MembraneSpec,
    ProteinSpec, SolventKind, SolventSpec, StandardLipid,
};
use crate::report::Report;
use crate::settings::Settings;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, trace};

/// A fully validated membrane-building request.
///
/// Built in one pass with no back edges: the grid comes first because the
/// membrane clamps depend on its derived bounds; the membrane, protein and
/// solvent follow in any order; last the cross-cutting display advisory
/// runs and the argument vector is assembled. The finished value is
/// immutable.
#[derive(Debug)]
pub struct SimulationRequest {
    grid: GridSpec,
    membrane: MembraneSpec,
    protein: ProteinSpec,
    solvent: SolventSpec,
    report: Report,
    argv: Vec<String>,
}

/// What the response layer reports back to the user.
#[derive(Debug, Serialize)]
pub struct RequestSummary<'a> {
    pub arguments: &'a [String],
    pub warnings: &'a [String],
    pub too_large_to_display: bool,
}

impl SimulationRequest {
    /// Validates `settings` and synthesizes the insane command line.
    ///
    /// `program` is the path to the insane executable, `structure_file` the
    /// optional protein to embed, `output_file` where insane should write
    /// the built system. Never fails: parsing the settings document (the
    /// only fallible step) already happened when `settings` was created.
    pub fn build(
        settings: &Settings,
        program: &Path,
        structure_file: Option<&Path>,
        output_file: &Path,
    ) -> Self {
        let mut report = Report::new();

        let grid = Self::grid_spec(settings, &mut report);
        let membrane = Self::membrane_spec(settings, &grid, &mut report);
        let protein = Self::protein_spec(settings, structure_file, &mut report);
        let solvent = Self::solvent_spec(settings, &mut report);

        Self::check_display_feasibility(&membrane, &protein, &solvent, &mut report);

        let argv = Self::assemble_argv(program, output_file, &grid, &membrane, &protein, &solvent);
        debug!(
            tokens = argv.len(),
            warnings = report.len(),
            "simulation request ready"
        );

        Self {
            grid,
            membrane,
            protein,
            solvent,
            report,
            argv,
        }
    }

    fn grid_spec(settings: &Settings, report: &mut Report) -> GridSpec {
        GridSpec::new(
            settings.float("insane_d"),
            settings.float("insane_x"),
            settings.float("insane_y"),
            settings.float("insane_z"),
            settings.flag("insane_dz"),
            &settings.text("insane_pbc"),
            report,
        )
    }

    fn membrane_spec(settings: &Settings, grid: &GridSpec, report: &mut Report) -> MembraneSpec {
        let standard = Self::standard_lipids(settings, report);
        let additional = Self::additional_lipids(settings, report);
        MembraneSpec::new(
            standard,
            additional,
            grid,
            settings.float("insane_rand"),
            settings.float("insane_a"),
            settings.float("insane_au"),
            settings.int("insane_asym"),
            settings.float("insane_hole"),
            settings.float("insane_disc"),
            settings.float("insane_bd"),
            report,
        )
    }

    fn standard_lipids(settings: &Settings, report: &mut Report) -> Vec<StandardLipid> {
        let mut lipids = Vec::new();
        // rows come in as [display name, species, ratio]
        for row in settings.rows("insane_l") {
            let display = row.first().map(String::as_str).unwrap_or("");
            let species = row.get(1).map(String::as_str).unwrap_or("");
            match LipidKind::from_name(species) {
                Some(kind) => {
                    let ratio_cell = row.get(2).map(String::as_str).unwrap_or("");
                    let (upper, lower) = leaflet_ratios(ratio_cell, report);
                    trace!(%kind, upper, lower, "adding standard lipid");
                    lipids.push(StandardLipid::new(kind, upper, lower));
                }
                None => {
                    // a placeholder row is dropped silently; anything the
                    // user actually named deserves a warning
                    if !display.is_empty() {
                        report.warn(format!(
                            "Lipid type '{display}' could not be recognized and has been ignored."
                        ));
                    }
                }
            }
        }
        lipids
    }

    fn additional_lipids(settings: &Settings, report: &mut Report) -> Vec<AdditionalLipid> {
        let mut counter = LipidCounter::new();
        let mut lipids = Vec::new();
        // rows come in as [head tokens, linker tokens, tail tokens, ratio]
        for row in settings.rows("insane_al") {
            let linker_cell = row.get(1).map(String::as_str).unwrap_or("");
            if linker_cell.trim().is_empty() {
                // a lipid without linkers is an untouched form row
                continue;
            }
            let heads = token_list(row.first().map(String::as_str).unwrap_or(""));
            let linkers = token_list(linker_cell);
            let tails = token_list(row.get(2).map(String::as_str).unwrap_or(""));
            let ratio_cell = row.get(3).map(String::as_str).unwrap_or("");
            let (upper, lower) = leaflet_ratios(ratio_cell, report);
            lipids.push(AdditionalLipid::new(
                &mut counter,
                heads,
                linkers,
                tails,
                upper,
                lower,
                report,
            ));
        }
        lipids
    }

    fn protein_spec(
        settings: &Settings,
        structure_file: Option<&Path>,
        report: &mut Report,
    ) -> ProteinSpec {
        ProteinSpec::new(
            structure_file.map(Path::to_path_buf),
            settings.flag("insane_ring"),
            settings.flag("insane_center"),
            settings.text("insane_rotate"),
            settings.float_or("insane_fudge", FUDGE_UNSET),
            settings.float("insane_dm"),
            report,
        )
    }

    fn solvent_spec(settings: &Settings, report: &mut Report) -> SolventSpec {
        let mut kinds = Vec::new();
        let mut ratios = Vec::new();
        // rows come in as [display name, species, ratio]
        for row in settings.rows("insane_sol") {
            let display = row.first().map(String::as_str).unwrap_or("");
            let species = row.get(1).map(String::as_str).unwrap_or("");
            match SolventKind::from_name(species) {
                Some(kind) => {
                    kinds.push(kind);
                    ratios.push(ratio_int(row.get(2).map(String::as_str).unwrap_or("")));
                }
                None => {
                    if !species.is_empty() {
                        report.warn(format!(
                            "Solvent type '{display}' could not be recognized and has been \
                             ignored."
                        ));
                    }
                }
            }
        }
        SolventSpec::new(
            kinds,
            ratios,
            settings.float("insane_solr"),
            settings.float("insane_sold"),
            settings.float("insane_salt"),
            settings.int("insane_charge"),
            report,
        )
    }

    /// The viewer renders an all-"simple" scene as an empty image; point
    /// that out once everything is known, never before.
    fn check_display_feasibility(
        membrane: &MembraneSpec,
        protein: &ProteinSpec,
        solvent: &SolventSpec,
        report: &mut Report,
    ) {
        if !protein.is_file_given()
            && solvent.only_simple_solvents()
            && membrane.only_simple_lipids()
        {
            report.warn(
                "JSmol has trouble showing simulations containing only 'simple' solvents, user \
                 created lipids and some predefined lipids. To prevent this: add different \
                 molecules or increase the membrane/solvent random kick.",
            );
        }
    }

    fn assemble_argv(
        program: &Path,
        output_file: &Path,
        grid: &GridSpec,
        membrane: &MembraneSpec,
        protein: &ProteinSpec,
        solvent: &SolventSpec,
    ) -> Vec<String> {
        let mut argv = vec![
            program.display().to_string(),
            "-o".to_string(),
            output_file.display().to_string(),
        ];
        grid.append_args(&mut argv);
        membrane.append_args(&mut argv);
        protein.append_args(&mut argv);
        solvent.append_args(&mut argv);
        argv
    }

    /// The synthesized command line: program path first, then
    /// `flag [value]` pairs in grid, membrane, protein, solvent order.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn warnings(&self) -> &[String] {
        self.report.warnings()
    }

    pub fn too_large_to_display(&self) -> bool {
        self.report.too_large_to_display()
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn membrane(&self) -> &MembraneSpec {
        &self.membrane
    }

    pub fn protein(&self) -> &ProteinSpec {
        &self.protein
    }

    pub fn solvent(&self) -> &SolventSpec {
        &self.solvent
    }

    pub fn summary(&self) -> RequestSummary<'_> {
        RequestSummary {
            arguments: &self.argv,
            warnings: self.report.warnings(),
            too_large_to_display: self.report.too_large_to_display(),
        }
    }
}

fn token_list(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_uppercase).collect()
}
