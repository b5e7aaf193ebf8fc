use super::AppendArgs;
use crate::report::Report;

/// Position-restraint selection understood by martinize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionRestraints {
    None,
    All,
    Backbone,
}

impl PositionRestraints {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "None" => Some(Self::None),
            "All" => Some(Self::All),
            "Backbone" => Some(Self::Backbone),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::All => "All",
            Self::Backbone => "Backbone",
        }
    }
}

/// The coarse-grained forcefields martinize ships mappings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForceField {
    Martini21,
    Martini21p,
    Martini22,
    Martini22p,
    Elnedyn,
    Elnedyn22,
    Elnedyn22p,
}

impl ForceField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "martini21" => Some(Self::Martini21),
            "martini21p" => Some(Self::Martini21p),
            "martini22" => Some(Self::Martini22),
            "martini22p" => Some(Self::Martini22p),
            "elnedyn" => Some(Self::Elnedyn),
            "elnedyn22" => Some(Self::Elnedyn22),
            "elnedyn22p" => Some(Self::Elnedyn22p),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Martini21 => "martini21",
            Self::Martini21p => "martini21p",
            Self::Martini22 => "martini22",
            Self::Martini22p => "martini22p",
            Self::Elnedyn => "elnedyn",
            Self::Elnedyn22 => "elnedyn22",
            Self::Elnedyn22p => "elnedyn22p",
        }
    }
}

/// Coarse-graining instructions for martinize.
///
/// The same correction policy as the membrane side: invalid categorical
/// values fall back to a safe default and leave a warning, nothing aborts.
#[derive(Debug, Clone)]
pub struct MartinizeSpec {
    secondary_structure: String,
    collagen: bool,
    neutral_termini: bool,
    charge_chain_breaks: bool,
    disulphide_distance: f64,
    link: bool,
    merge_chains: bool,
    position_restraints: PositionRestraints,
    force_constant: i64,
    dihedrals: bool,
    separate_topologies: bool,
    force_field: ForceField,
}

impl MartinizeSpec {
    pub fn new(
        secondary_structure: String,
        collagen: bool,
        neutral_termini: bool,
        charge_chain_breaks: bool,
        disulphide_distance: f64,
        link: bool,
        merge_chains: bool,
        position_restraints: &str,
        force_constant: i64,
        dihedrals: bool,
        separate_topologies: bool,
        force_field: &str,
        report: &mut Report,
    ) -> Self {
        let position_restraints = validate_position_restraints(position_restraints, report);
        let force_field = validate_force_field(force_field, report);
        Self {
            secondary_structure,
            collagen,
            neutral_termini,
            charge_chain_breaks,
            disulphide_distance,
            link,
            merge_chains,
            position_restraints,
            force_constant: force_constant.abs(),
            dihedrals,
            separate_topologies,
            force_field,
        }
    }

    pub fn force_field(&self) -> ForceField {
        self.force_field
    }

    pub fn position_restraints(&self) -> PositionRestraints {
        self.position_restraints
    }

    pub fn force_constant(&self) -> i64 {
        self.force_constant
    }
}

fn validate_position_restraints(raw: &str, report: &mut Report) -> PositionRestraints {
    if raw.is_empty() {
        return PositionRestraints::None;
    }
    match PositionRestraints::from_name(raw) {
        Some(restraints) => restraints,
        None => {
            report.warn(format!(
                "Position restraints '{raw}' are not recognized and have been set to 'None'."
            ));
            PositionRestraints::None
        }
    }
}

fn validate_force_field(raw: &str, report: &mut Report) -> ForceField {
    if raw.is_empty() {
        return ForceField::Martini22;
    }
    match ForceField::from_name(raw) {
        Some(force_field) => force_field,
        None => {
            report.warn(format!(
                "Force field '{raw}' is not recognized and has been set to 'martini22'."
            ));
            ForceField::Martini22
        }
    }
}

impl AppendArgs for MartinizeSpec {
    fn append_args(&self, argv: &mut Vec<String>) {
        argv.push("-ff".into());
        argv.push(self.force_field.as_str().into());

        if !self.secondary_structure.is_empty() {
            argv.push("-ss".into());
            argv.push(self.secondary_structure.clone());
        }
        if self.collagen {
            argv.push("-collagen".into());
        }
        if self.neutral_termini {
            argv.push("-nt".into());
        }
        if self.charge_chain_breaks {
            argv.push("-cb".into());
        }
        if self.disulphide_distance > 0.0 {
            argv.push("-cys".into());
            argv.push(self.disulphide_distance.to_string());
        }
        if self.link {
            argv.push("-link".into());
        }
        if self.merge_chains {
            argv.push("-merge".into());
        }

        argv.push("-p".into());
        argv.push(self.position_restraints.as_str().into());
        if self.force_constant > 0 {
            argv.push("-pf".into());
            argv.push(self.force_constant.to_string());
        }
        if self.dihedrals {
            argv.push("-ed".into());
        }
        if self.separate_topologies {
            argv.push("-sep".into());
        }
    }
}
