use super::AppendArgs;
use crate::report::Report;
use phf::{Map, phf_map};
use std::fmt;

/// Smallest usable solvent particle diameter, in nanometers. Anything
/// smaller makes insane's packing loop pathologically slow.
pub const MIN_SOLVENT_DIAMETER: f64 = 0.35;

/// Salt molality at which the ions displace all solvent volume.
pub const SALT_SATURATION: f64 = 9.2333;

/// Every solvent species insane ships topology for.
///
/// A few species print under a different name than the settings document
/// uses (`FG4W_MS` → `FG4W-MS`, `MG` → `Mg`); the `simple` ones (plain
/// waters, bare ions, the smallest organics) tend to vanish in the JSmol
/// preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolventKind {
    W, Pw, Bmw, Spc, Spcm, Fg4w, Fg4wMs, Gluc, Fruc, Sucr, Malt,
    Cell, Gly, Ala, Asn, Asp, Glu, Gln, Leu, Ile, Val, Ser, Thr,
    Cys, Met, Lys, Pro, Hyp, Arg, Phe, Tyr, Trp, Koji, Soph, Nige,
    Lami, Treh, Na, Cl, Mg, K, But,
}

static SOLVENTS_BY_NAME: Map<&'static str, SolventKind> = phf_map! {
    "W" => SolventKind::W, "PW" => SolventKind::Pw, "BMW" => SolventKind::Bmw,
    "SPC" => SolventKind::Spc, "SPCM" => SolventKind::Spcm, "FG4W" => SolventKind::Fg4w,
    "FG4W_MS" => SolventKind::Fg4wMs, "GLUC" => SolventKind::Gluc,
    "FRUC" => SolventKind::Fruc, "SUCR" => SolventKind::Sucr, "MALT" => SolventKind::Malt,
    "CELL" => SolventKind::Cell, "GLY" => SolventKind::Gly, "ALA" => SolventKind::Ala,
    "ASN" => SolventKind::Asn, "ASP" => SolventKind::Asp, "GLU" => SolventKind::Glu,
    "GLN" => SolventKind::Gln, "LEU" => SolventKind::Leu, "ILE" => SolventKind::Ile,
    "VAL" => SolventKind::Val, "SER" => SolventKind::Ser, "THR" => SolventKind::Thr,
    "CYS" => SolventKind::Cys, "MET" => SolventKind::Met, "LYS" => SolventKind::Lys,
    "PRO" => SolventKind::Pro, "HYP" => SolventKind::Hyp, "ARG" => SolventKind::Arg,
    "PHE" => SolventKind::Phe, "TYR" => SolventKind::Tyr, "TRP" => SolventKind::Trp,
    "KOJI" => SolventKind::Koji, "SOPH" => SolventKind::Soph, "NIGE" => SolventKind::Nige,
    "LAMI" => SolventKind::Lami, "TREH" => SolventKind::Treh, "NA" => SolventKind::Na,
    "CL" => SolventKind::Cl, "MG" => SolventKind::Mg, "K" => SolventKind::K,
    "BUT" => SolventKind::But,
};

impl SolventKind {
    /// Looks a species up by the name the settings document uses.
    pub fn from_name(name: &str) -> Option<Self> {
        SOLVENTS_BY_NAME.get(name).copied()
    }

    /// The spelling insane expects on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::W => "W", Self::Pw => "PW", Self::Bmw => "BMW",
            Self::Spc => "SPC", Self::Spcm => "SPCM", Self::Fg4w => "FG4W",
            Self::Fg4wMs => "FG4W-MS", Self::Gluc => "GLUC", Self::Fruc => "FRUC",
            Self::Sucr => "SUCR", Self::Malt => "MALT", Self::Cell => "CELL",
            Self::Gly => "GLY", Self::Ala => "ALA", Self::Asn => "ASN",
            Self::Asp => "ASP", Self::Glu => "GLU", Self::Gln => "GLN",
            Self::Leu => "LEU", Self::Ile => "ILE", Self::Val => "VAL",
            Self::Ser => "SER", Self::Thr => "THR", Self::Cys => "CYS",
            Self::Met => "MET", Self::Lys => "LYS", Self::Pro => "PRO",
            Self::Hyp => "HYP", Self::Arg => "ARG", Self::Phe => "PHE",
            Self::Tyr => "TYR", Self::Trp => "TRP", Self::Koji => "KOJI",
            Self::Soph => "SOPH", Self::Nige => "NIGE", Self::Lami => "LAMI",
            Self::Treh => "TREH", Self::Na => "NA", Self::Cl => "CL",
            Self::Mg => "Mg", Self::K => "K", Self::But => "BUT",
        }
    }

    /// Whether the viewer tends not to render this species distinctly.
    pub fn is_simple(self) -> bool {
        matches!(
            self,
            Self::W
                | Self::Bmw
                | Self::Spc
                | Self::Spcm
                | Self::Gly
                | Self::Ala
                | Self::Na
                | Self::Cl
                | Self::Mg
                | Self::K
                | Self::But
        )
    }
}

impl fmt::Display for SolventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The solvent mixture plus its electrostatics parameters.
///
/// `kinds` and `ratios` are parallel; a missing ratio simply emits the
/// species without an abundance, it is never an error.
#[derive(Debug, Clone)]
pub struct SolventSpec {
    kinds: Vec<SolventKind>,
    ratios: Vec<i64>,
    random_kick: f64,
    diameter: f64,
    salt_concentration: f64,
    charge: i64,
}

impl SolventSpec {
    pub fn new(
        kinds: Vec<SolventKind>,
        ratios: Vec<i64>,
        random_kick: f64,
        diameter: f64,
        salt_concentration: f64,
        charge: i64,
        report: &mut Report,
    ) -> Self {
        let diameter = validate_diameter(diameter, report);
        let salt_concentration = validate_salt_concentration(salt_concentration, report);
        Self {
            kinds,
            ratios,
            random_kick,
            diameter,
            salt_concentration,
            charge,
        }
    }

    /// True when every configured species renders as "simple".
    /// Vacuously true for an empty mixture.
    pub fn only_simple_solvents(&self) -> bool {
        self.kinds.iter().all(|kind| kind.is_simple())
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn salt_concentration(&self) -> f64 {
        self.salt_concentration
    }
}

fn validate_diameter(diameter: f64, report: &mut Report) -> f64 {
    if diameter <= 0.0 {
        // unset: emit nothing and let insane pick its own default
        return 0.0;
    }
    if diameter < MIN_SOLVENT_DIAMETER {
        report.warn(format!(
            "Your solvent diameter '{diameter}' is too small and has been set to \
             {MIN_SOLVENT_DIAMETER}."
        ));
        return MIN_SOLVENT_DIAMETER;
    }
    if diameter > 3.0 {
        // advisory only; a huge particle is legal, just probably invisible
        report.warn(format!(
            "Your solvent diameter '{diameter}' is very big; this might cause your solvent \
             not to be visible."
        ));
    }
    diameter
}

fn validate_salt_concentration(concentration: f64, report: &mut Report) -> f64 {
    if concentration.abs() > SALT_SATURATION {
        report.warn(
            "Your salt concentration is so high that there is no room for solvent available.",
        );
    }
    concentration
}

impl AppendArgs for SolventSpec {
    fn append_args(&self, argv: &mut Vec<String>) {
        for (position, kind) in self.kinds.iter().enumerate() {
            argv.push("-sol".into());
            match self.ratios.get(position) {
                Some(ratio) if *ratio > 0 => argv.push(format!("{kind}:{ratio}")),
                _ => argv.push(kind.to_string()),
            }
        }

        if self.diameter > 0.0 {
            argv.push("-sold".into());
            argv.push(self.diameter.to_string());
        }
        if self.random_kick != 0.0 {
            argv.push("-solr".into());
            argv.push(self.random_kick.to_string());
        }
        if self.salt_concentration != 0.0 {
            argv.push("-salt".into());
            argv.push(self.salt_concentration.to_string());
        }
        if self.charge != 0 {
            argv.push("-charge".into());
            argv.push(self.charge.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solvent(kinds: Vec<SolventKind>, ratios: Vec<i64>, report: &mut Report) -> SolventSpec {
        SolventSpec::new(kinds, ratios, 0.0, 0.0, 0.0, 0, report)
    }

    fn args(spec: &SolventSpec) -> Vec<String> {
        let mut argv = Vec::new();
        spec.append_args(&mut argv);
        argv
    }

    #[test]
    fn kind_lookup_uses_the_settings_spelling() {
        assert_eq!(SolventKind::from_name("W"), Some(SolventKind::W));
        assert_eq!(SolventKind::from_name("FG4W_MS"), Some(SolventKind::Fg4wMs));
        assert_eq!(SolventKind::from_name("MG"), Some(SolventKind::Mg));
        assert_eq!(SolventKind::from_name("H2O"), None);
    }

    #[test]
    fn display_overrides_differ_from_lookup_names() {
        assert_eq!(SolventKind::Fg4wMs.as_str(), "FG4W-MS");
        assert_eq!(SolventKind::Mg.as_str(), "Mg");
        assert_eq!(SolventKind::Pw.as_str(), "PW");
    }

    #[test]
    fn simple_covers_waters_ions_and_small_organics() {
        for kind in [
            SolventKind::W,
            SolventKind::Bmw,
            SolventKind::Spc,
            SolventKind::Spcm,
            SolventKind::Gly,
            SolventKind::Ala,
            SolventKind::Na,
            SolventKind::Cl,
            SolventKind::Mg,
            SolventKind::K,
            SolventKind::But,
        ] {
            assert!(kind.is_simple(), "{kind} should be simple");
        }
        assert!(!SolventKind::Pw.is_simple());
        assert!(!SolventKind::Gluc.is_simple());
        assert!(!SolventKind::Trp.is_simple());
    }

    #[test]
    fn small_diameter_is_raised_to_the_minimum_with_one_warning() {
        let mut report = Report::new();
        let spec = SolventSpec::new(Vec::new(), Vec::new(), 0.0, 0.2, 0.0, 0, &mut report);
        assert_eq!(spec.diameter(), MIN_SOLVENT_DIAMETER);
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn unset_diameter_stays_the_sentinel_without_warnings() {
        let mut report = Report::new();
        let spec = SolventSpec::new(Vec::new(), Vec::new(), 0.0, 0.0, 0.0, 0, &mut report);
        assert_eq!(spec.diameter(), 0.0);
        let spec = SolventSpec::new(Vec::new(), Vec::new(), 0.0, -1.0, 0.0, 0, &mut report);
        assert_eq!(spec.diameter(), 0.0);
        assert!(report.is_empty());
        assert!(!args(&spec).contains(&"-sold".to_string()));
    }

    #[test]
    fn huge_diameter_warns_but_keeps_the_value() {
        let mut report = Report::new();
        let spec = SolventSpec::new(Vec::new(), Vec::new(), 0.0, 5.0, 0.0, 0, &mut report);
        assert_eq!(spec.diameter(), 5.0);
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn saturated_salt_warns_but_keeps_the_value() {
        let mut report = Report::new();
        let spec = SolventSpec::new(Vec::new(), Vec::new(), 0.0, 0.0, -10.0, 0, &mut report);
        assert_eq!(spec.salt_concentration(), -10.0);
        assert_eq!(report.len(), 1);

        let mut report = Report::new();
        let spec = SolventSpec::new(Vec::new(), Vec::new(), 0.0, 0.0, 9.0, 0, &mut report);
        assert_eq!(spec.salt_concentration(), 9.0);
        assert!(report.is_empty());
        assert_eq!(args(&spec), vec!["-salt", "9"]);
    }

    #[test]
    fn each_species_gets_its_own_sol_token() {
        let mut report = Report::new();
        let spec = solvent(
            vec![SolventKind::W, SolventKind::Gluc],
            vec![3, 1],
            &mut report,
        );
        assert_eq!(args(&spec), vec!["-sol", "W:3", "-sol", "GLUC:1"]);
    }

    #[test]
    fn zero_or_missing_ratio_emits_the_bare_species() {
        let mut report = Report::new();
        let spec = solvent(
            vec![SolventKind::W, SolventKind::Na, SolventKind::Cl],
            vec![0],
            &mut report,
        );
        assert_eq!(args(&spec), vec!["-sol", "W", "-sol", "NA", "-sol", "CL"]);
    }

    #[test]
    fn only_simple_solvents_short_circuits_on_a_complex_species() {
        let mut report = Report::new();
        assert!(solvent(Vec::new(), Vec::new(), &mut report).only_simple_solvents());
        assert!(
            solvent(vec![SolventKind::W, SolventKind::Na], Vec::new(), &mut report)
                .only_simple_solvents()
        );
        assert!(
            !solvent(vec![SolventKind::W, SolventKind::Pw], Vec::new(), &mut report)
                .only_simple_solvents()
        );
    }

    #[test]
    fn electrostatics_tokens_follow_the_mixture() {
        let mut report = Report::new();
        let spec = SolventSpec::new(
            vec![SolventKind::W],
            vec![1],
            0.4,
            0.5,
            0.15,
            -2,
            &mut report,
        );
        assert_eq!(
            args(&spec),
            vec![
                "-sol", "W:1", "-sold", "0.5", "-solr", "0.4", "-salt", "0.15", "-charge", "-2",
            ]
        );
    }
}
