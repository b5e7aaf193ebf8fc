use super::grid::GridSpec;
use super::lipid::{AdditionalLipid, StandardLipid};
use super::AppendArgs;
use crate::report::Report;

/// Membrane-wide parameters plus both lipid collections.
///
/// Must be built after [`GridSpec`]: the random-kick and bead-distance
/// clamps are expressed in terms of the grid's derived bounds.
#[derive(Debug, Clone)]
pub struct MembraneSpec {
    standard_lipids: Vec<StandardLipid>,
    additional_lipids: Vec<AdditionalLipid>,
    random_kick: f64,
    area_lower_lipids: f64,
    area_upper_lipids: f64,
    asymmetry: i64,
    hole: f64,
    disc: f64,
    bead_distance: f64,
}

impl MembraneSpec {
    pub fn new(
        standard_lipids: Vec<StandardLipid>,
        additional_lipids: Vec<AdditionalLipid>,
        grid: &GridSpec,
        random_kick: f64,
        area_lower_lipids: f64,
        area_upper_lipids: f64,
        asymmetry: i64,
        hole: f64,
        disc: f64,
        bead_distance: f64,
        report: &mut Report,
    ) -> Self {
        let random_kick = validate_random_kick(random_kick, grid, report);
        let bead_distance = validate_bead_distance(bead_distance, grid, report);
        Self {
            standard_lipids,
            additional_lipids,
            random_kick,
            area_lower_lipids,
            area_upper_lipids,
            asymmetry,
            hole,
            disc,
            bead_distance,
        }
    }

    pub fn has_lipids(&self) -> bool {
        !self.standard_lipids.is_empty() || !self.additional_lipids.is_empty()
    }

    /// True when every lipid, of either collection, renders as "simple".
    /// Vacuously true for an empty membrane.
    pub fn only_simple_lipids(&self) -> bool {
        self.standard_lipids.iter().all(StandardLipid::is_simple)
            && self.additional_lipids.iter().all(AdditionalLipid::is_simple)
    }

    pub fn random_kick(&self) -> f64 {
        self.random_kick
    }

    pub fn bead_distance(&self) -> f64 {
        self.bead_distance
    }
}

// a kick past half the shortest horizontal axis makes insane throw
fn validate_random_kick(kick: f64, grid: &GridSpec, report: &mut Report) -> f64 {
    let bound = grid.min_horizontal_distance() / 2.0;
    if kick.abs() > bound {
        report.warn(format!(
            "Random kick '{kick}' is too extreme for the given grid size, and has been set \
             to '{bound}'."
        ));
        return bound;
    }
    kick
}

// same failure mode for bead distances past a quarter of the z axis
fn validate_bead_distance(distance: f64, grid: &GridSpec, report: &mut Report) -> f64 {
    let bound = grid.min_vertical_distance() / 4.0;
    if distance.abs() > bound {
        report.warn(format!(
            "Bead distance '{distance}' is too extreme for the given grid size, and has been \
             set to '{bound}'."
        ));
        return bound;
    }
    distance
}

impl AppendArgs for MembraneSpec {
    fn append_args(&self, argv: &mut Vec<String>) {
        // no lipids means no membrane: only free the region so the solvent
        // can fill the gap
        if !self.has_lipids() {
            argv.push("-excl".into());
            argv.push("-1".into());
            return;
        }

        for lipid in &self.standard_lipids {
            lipid.append_args(argv);
        }
        for lipid in &self.additional_lipids {
            lipid.append_args(argv);
        }

        if self.random_kick > 0.0 {
            argv.push("-rand".into());
            argv.push(self.random_kick.to_string());
        }
        if self.area_lower_lipids > 0.0 {
            argv.push("-a".into());
            argv.push(self.area_lower_lipids.to_string());
        }
        if self.area_upper_lipids > 0.0 {
            argv.push("-au".into());
            argv.push(self.area_upper_lipids.to_string());
        }
        // not > 0 but != 0: a negative asymmetry shifts lipids the other way
        if self.asymmetry != 0 {
            argv.push("-asym".into());
            argv.push(self.asymmetry.to_string());
        }
        if self.hole > 0.0 {
            argv.push("-hole".into());
            argv.push(self.hole.to_string());
        }
        if self.disc > 0.0 {
            argv.push("-disc".into());
            argv.push(self.disc.to_string());
        }
        if self.bead_distance > 0.0 {
            argv.push("-bd".into());
            argv.push(self.bead_distance.to_string());
        }
    }
}
