use super::AppendArgs;
use crate::report::Report;
use phf::{Map, Set, phf_map, phf_set};
use std::fmt;

/// Every predefined lipid species insane ships topology for.
///
/// The `simple` species (bare glycerides and sterols) tend to vanish in the
/// JSmol preview unless something more structured shares the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LipidKind {
    Dtpc, Dlpc, Dppc, Dbpc, Popc, Dopc, Dapc, Dipc, Dgpc, Dnpc,
    Dtpe, Dlpe, Dppe, Dbpe, Pope, Dope, Popg, Dopg, Pops, Dops,
    Dpsm, Dbsm, Bnsm, Oppg, Jppg, Jfpg, Gmo, Dppi, Popi, Pipi,
    Papi, Pupi, Pop1, Pop2, Pop3, Dpg1, Dxg1, Png1, Xng1, Dpg3,
    Dxg3, Png3, Xng3, Dpce, Dpgs, Dpmg, Dpsg, Dpgg, Opmg, Opsg,
    Opgg, Fpmg, Dfmg, Fpsg, Fpgg, Dfgg, Plq, Cdl0, Cdl1, Cdl2,
    Cl4p, Cl4m, Ama, Kma, Mma, Chol,
}

static LIPIDS_BY_NAME: Map<&'static str, LipidKind> = phf_map! {
    "DTPC" => LipidKind::Dtpc, "DLPC" => LipidKind::Dlpc, "DPPC" => LipidKind::Dppc,
    "DBPC" => LipidKind::Dbpc, "POPC" => LipidKind::Popc, "DOPC" => LipidKind::Dopc,
    "DAPC" => LipidKind::Dapc, "DIPC" => LipidKind::Dipc, "DGPC" => LipidKind::Dgpc,
    "DNPC" => LipidKind::Dnpc, "DTPE" => LipidKind::Dtpe, "DLPE" => LipidKind::Dlpe,
    "DPPE" => LipidKind::Dppe, "DBPE" => LipidKind::Dbpe, "POPE" => LipidKind::Pope,
    "DOPE" => LipidKind::Dope, "POPG" => LipidKind::Popg, "DOPG" => LipidKind::Dopg,
    "POPS" => LipidKind::Pops, "DOPS" => LipidKind::Dops, "DPSM" => LipidKind::Dpsm,
    "DBSM" => LipidKind::Dbsm, "BNSM" => LipidKind::Bnsm, "OPPG" => LipidKind::Oppg,
    "JPPG" => LipidKind::Jppg, "JFPG" => LipidKind::Jfpg, "GMO" => LipidKind::Gmo,
    "DPPI" => LipidKind::Dppi, "POPI" => LipidKind::Popi, "PIPI" => LipidKind::Pipi,
    "PAPI" => LipidKind::Papi, "PUPI" => LipidKind::Pupi, "POP1" => LipidKind::Pop1,
    "POP2" => LipidKind::Pop2, "POP3" => LipidKind::Pop3, "DPG1" => LipidKind::Dpg1,
    "DXG1" => LipidKind::Dxg1, "PNG1" => LipidKind::Png1, "XNG1" => LipidKind::Xng1,
    "DPG3" => LipidKind::Dpg3, "DXG3" => LipidKind::Dxg3, "PNG3" => LipidKind::Png3,
    "XNG3" => LipidKind::Xng3, "DPCE" => LipidKind::Dpce, "DPGS" => LipidKind::Dpgs,
    "DPMG" => LipidKind::Dpmg, "DPSG" => LipidKind::Dpsg, "DPGG" => LipidKind::Dpgg,
    "OPMG" => LipidKind::Opmg, "OPSG" => LipidKind::Opsg, "OPGG" => LipidKind::Opgg,
    "FPMG" => LipidKind::Fpmg, "DFMG" => LipidKind::Dfmg, "FPSG" => LipidKind::Fpsg,
    "FPGG" => LipidKind::Fpgg, "DFGG" => LipidKind::Dfgg, "PLQ" => LipidKind::Plq,
    "CDL0" => LipidKind::Cdl0, "CDL1" => LipidKind::Cdl1, "CDL2" => LipidKind::Cdl2,
    "CL4P" => LipidKind::Cl4p, "CL4M" => LipidKind::Cl4m, "AMA" => LipidKind::Ama,
    "KMA" => LipidKind::Kma, "MMA" => LipidKind::Mma, "CHOL" => LipidKind::Chol,
};

impl LipidKind {
    /// Looks a species up by the name the settings document uses.
    pub fn from_name(name: &str) -> Option<Self> {
        LIPIDS_BY_NAME.get(name).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dtpc => "DTPC", Self::Dlpc => "DLPC", Self::Dppc => "DPPC",
            Self::Dbpc => "DBPC", Self::Popc => "POPC", Self::Dopc => "DOPC",
            Self::Dapc => "DAPC", Self::Dipc => "DIPC", Self::Dgpc => "DGPC",
            Self::Dnpc => "DNPC", Self::Dtpe => "DTPE", Self::Dlpe => "DLPE",
            Self::Dppe => "DPPE", Self::Dbpe => "DBPE", Self::Pope => "POPE",
            Self::Dope => "DOPE", Self::Popg => "POPG", Self::Dopg => "DOPG",
            Self::Pops => "POPS", Self::Dops => "DOPS", Self::Dpsm => "DPSM",
            Self::Dbsm => "DBSM", Self::Bnsm => "BNSM", Self::Oppg => "OPPG",
            Self::Jppg => "JPPG", Self::Jfpg => "JFPG", Self::Gmo => "GMO",
            Self::Dppi => "DPPI", Self::Popi => "POPI", Self::Pipi => "PIPI",
            Self::Papi => "PAPI", Self::Pupi => "PUPI", Self::Pop1 => "POP1",
            Self::Pop2 => "POP2", Self::Pop3 => "POP3", Self::Dpg1 => "DPG1",
            Self::Dxg1 => "DXG1", Self::Png1 => "PNG1", Self::Xng1 => "XNG1",
            Self::Dpg3 => "DPG3", Self::Dxg3 => "DXG3", Self::Png3 => "PNG3",
            Self::Xng3 => "XNG3", Self::Dpce => "DPCE", Self::Dpgs => "DPGS",
            Self::Dpmg => "DPMG", Self::Dpsg => "DPSG", Self::Dpgg => "DPGG",
            Self::Opmg => "OPMG", Self::Opsg => "OPSG", Self::Opgg => "OPGG",
            Self::Fpmg => "FPMG", Self::Dfmg => "DFMG", Self::Fpsg => "FPSG",
            Self::Fpgg => "FPGG", Self::Dfgg => "DFGG", Self::Plq => "PLQ",
            Self::Cdl0 => "CDL0", Self::Cdl1 => "CDL1", Self::Cdl2 => "CDL2",
            Self::Cl4p => "CL4P", Self::Cl4m => "CL4M", Self::Ama => "AMA",
            Self::Kma => "KMA", Self::Mma => "MMA", Self::Chol => "CHOL",
        }
    }

    /// Whether the viewer tends not to render this species distinctly.
    pub fn is_simple(self) -> bool {
        matches!(self, Self::Gmo | Self::Chol)
    }
}

impl fmt::Display for LipidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A predefined lipid species with its leaflet abundances.
#[derive(Debug, Clone)]
pub struct StandardLipid {
    kind: LipidKind,
    upper_leaflet_ratio: i64,
    lower_leaflet_ratio: i64,
}

impl StandardLipid {
    pub fn new(kind: LipidKind, upper_leaflet_ratio: i64, lower_leaflet_ratio: i64) -> Self {
        Self {
            kind,
            upper_leaflet_ratio,
            lower_leaflet_ratio,
        }
    }

    pub fn kind(&self) -> LipidKind {
        self.kind
    }

    pub fn is_simple(&self) -> bool {
        self.kind.is_simple()
    }
}

impl AppendArgs for StandardLipid {
    fn append_args(&self, argv: &mut Vec<String>) {
        if self.lower_leaflet_ratio > 0 {
            argv.push("-l".into());
            argv.push(format!("{}:{}", self.kind, self.lower_leaflet_ratio));
        }
        if self.upper_leaflet_ratio > 0 {
            argv.push("-u".into());
            argv.push(format!("{}:{}", self.kind, self.upper_leaflet_ratio));
        }
    }
}

/// Hands out the `LIP<N>` names for user-defined lipids.
///
/// Owned by the request being built, so every request starts its own count
/// at `LIP1` and concurrent requests cannot interfere.
#[derive(Debug, Default)]
pub struct LipidCounter {
    count: u32,
}

impl LipidCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_name(&mut self) -> String {
        self.count += 1;
        format!("LIP{}", self.count)
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

static VALID_HEAD_GROUPS: Set<&'static str> = phf_set! { "", "C", "E", "G", "S", "P" };
static VALID_LINKER_GROUPS: Set<&'static str> = phf_set! { "A", "G" };

fn is_valid_tail_bead(bead: char) -> bool {
    matches!(bead, 'C' | 'D' | 'T')
}

/// A user-defined lipid built from head, linker and tail token lists.
///
/// Construction never fails: invalid tokens are replaced by per-category
/// safe defaults and every replacement leaves a warning. The tail list is
/// rebuilt to exactly one tail per linker, which is what the chemistry
/// requires and what insane enforces with a crash instead of a message.
#[derive(Debug, Clone)]
pub struct AdditionalLipid {
    name: String,
    head_groups: Vec<String>,
    linker_groups: Vec<String>,
    tail_groups: Vec<String>,
    upper_leaflet_ratio: i64,
    lower_leaflet_ratio: i64,
}

impl AdditionalLipid {
    pub fn new(
        counter: &mut LipidCounter,
        head_groups: Vec<String>,
        linker_groups: Vec<String>,
        tail_groups: Vec<String>,
        upper_leaflet_ratio: i64,
        lower_leaflet_ratio: i64,
        report: &mut Report,
    ) -> Self {
        let name = counter.next_name();
        let head_groups = validate_head_groups(&name, head_groups, report);
        let linker_groups = validate_linker_groups(&name, linker_groups, report);
        let tail_groups = validate_tail_groups(&name, tail_groups, linker_groups.len(), report);
        Self {
            name,
            head_groups,
            linker_groups,
            tail_groups,
            upper_leaflet_ratio,
            lower_leaflet_ratio,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn head_groups(&self) -> &[String] {
        &self.head_groups
    }

    pub fn linker_groups(&self) -> &[String] {
        &self.linker_groups
    }

    pub fn tail_groups(&self) -> &[String] {
        &self.tail_groups
    }

    /// A lipid with no polar head at all renders as "simple".
    pub fn is_simple(&self) -> bool {
        self.head_groups.iter().all(|head| head.is_empty())
    }
}

fn validate_head_groups(name: &str, mut heads: Vec<String>, report: &mut Report) -> Vec<String> {
    for head in &mut heads {
        if !VALID_HEAD_GROUPS.contains(head.as_str()) {
            report.warn(format!(
                "Your lipid '{name}' contains invalid head group '{head}', which has been removed."
            ));
            head.clear();
        }
    }
    heads
}

fn validate_linker_groups(name: &str, mut linkers: Vec<String>, report: &mut Report) -> Vec<String> {
    for linker in &mut linkers {
        if !VALID_LINKER_GROUPS.contains(linker.as_str()) {
            // replaced, never dropped: the tail rebuild keys off this length
            report.warn(format!(
                "Your lipid '{name}' contains invalid linker group '{linker}', which has been \
                 replaced by 'G'."
            ));
            "G".clone_into(linker);
        }
    }
    linkers
}

fn validate_tail_groups(
    name: &str,
    given: Vec<String>,
    linker_count: usize,
    report: &mut Report,
) -> Vec<String> {
    let mut tails = Vec::with_capacity(linker_count);
    for position in 0..linker_count {
        match given.get(position) {
            Some(tail) if tail.is_empty() => {
                report.warn(format!(
                    "Your lipid '{name}' contains an empty tail group, a tail group containing \
                     only 'C' has been added."
                ));
                tails.push("C".to_string());
            }
            Some(tail) => tails.push(tail.clone()),
            None => {
                report.warn(format!(
                    "Your lipid '{name}' contains more linkers than tails, a tail containing \
                     only 'C' has been added."
                ));
                tails.push("C".to_string());
            }
        }
    }

    if given.len() > linker_count {
        report.warn(format!(
            "Your lipid '{name}' contains more tails than linkers, some tails have been removed."
        ));
    }

    for tail in &mut tails {
        *tail = scrub_tail_beads(name, tail, report);
    }
    tails
}

fn scrub_tail_beads(name: &str, tail: &str, report: &mut Report) -> String {
    tail.chars()
        .map(|bead| {
            if is_valid_tail_bead(bead) {
                bead
            } else {
                report.warn(format!(
                    "Your lipid '{name}' contains invalid tail bead '{bead}', which has been \
                     replaced by 'C'."
                ));
                'C'
            }
        })
        .collect()
}

impl AppendArgs for AdditionalLipid {
    fn append_args(&self, argv: &mut Vec<String>) {
        if self.head_groups.is_empty()
            && self.linker_groups.is_empty()
            && self.tail_groups.is_empty()
        {
            return;
        }

        argv.push("-alhead".into());
        argv.push(self.head_groups.join(" "));
        argv.push("-allink".into());
        argv.push(self.linker_groups.join(" "));
        argv.push("-altail".into());
        argv.push(self.tail_groups.join(" "));
        argv.push("-alname".into());
        argv.push(self.name.clone());

        argv.push("-l".into());
        if self.lower_leaflet_ratio > 0 {
            argv.push(format!("{}:{}", self.name, self.lower_leaflet_ratio));
        } else {
            argv.push(self.name.clone());
        }
        if self.upper_leaflet_ratio > 0 {
            argv.push("-u".into());
            argv.push(format!("{}:{}", self.name, self.upper_leaflet_ratio));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn args(lipid: &impl AppendArgs) -> Vec<String> {
        let mut argv = Vec::new();
        lipid.append_args(&mut argv);
        argv
    }

    #[test]
    fn kind_lookup_knows_the_catalog() {
        assert_eq!(LipidKind::from_name("POPC"), Some(LipidKind::Popc));
        assert_eq!(LipidKind::from_name("CHOL"), Some(LipidKind::Chol));
        assert_eq!(LipidKind::from_name("NOPE"), None);
        assert_eq!(LipidKind::from_name("popc"), None);
    }

    #[test]
    fn kind_names_round_trip() {
        for (name, kind) in LIPIDS_BY_NAME.entries() {
            assert_eq!(kind.as_str(), *name);
        }
    }

    #[test]
    fn only_the_bare_species_are_simple() {
        assert!(LipidKind::Gmo.is_simple());
        assert!(LipidKind::Chol.is_simple());
        assert!(!LipidKind::Popc.is_simple());
        assert!(!LipidKind::Cdl2.is_simple());
    }

    #[test]
    fn standard_lipid_emits_both_leaflets() {
        let lipid = StandardLipid::new(LipidKind::Popc, 2, 3);
        assert_eq!(args(&lipid), vec!["-l", "POPC:3", "-u", "POPC:2"]);
    }

    #[test]
    fn standard_lipid_skips_empty_leaflets() {
        let lipid = StandardLipid::new(LipidKind::Dopc, 0, 1);
        assert_eq!(args(&lipid), vec!["-l", "DOPC:1"]);
        let lipid = StandardLipid::new(LipidKind::Dopc, 0, 0);
        assert!(args(&lipid).is_empty());
    }

    #[test]
    fn counter_names_are_sequential_from_one() {
        let mut counter = LipidCounter::new();
        assert_eq!(counter.next_name(), "LIP1");
        assert_eq!(counter.next_name(), "LIP2");
        assert_eq!(counter.next_name(), "LIP3");
    }

    #[test]
    fn counter_reset_starts_the_sequence_over() {
        let mut counter = LipidCounter::new();
        counter.next_name();
        counter.next_name();
        counter.reset();
        assert_eq!(counter.next_name(), "LIP1");
    }

    #[test]
    fn valid_lipid_passes_through_untouched() {
        let mut counter = LipidCounter::new();
        let mut report = Report::new();
        let lipid = AdditionalLipid::new(
            &mut counter,
            strings(&["C", "P"]),
            strings(&["G", "A"]),
            strings(&["CCDC", "TCC"]),
            1,
            2,
            &mut report,
        );
        assert!(report.is_empty());
        assert_eq!(lipid.head_groups(), strings(&["C", "P"]).as_slice());
        assert_eq!(lipid.linker_groups(), strings(&["G", "A"]).as_slice());
        assert_eq!(lipid.tail_groups(), strings(&["CCDC", "TCC"]).as_slice());
    }

    #[test]
    fn invalid_head_group_is_blanked_with_a_warning() {
        let mut counter = LipidCounter::new();
        let mut report = Report::new();
        let lipid = AdditionalLipid::new(
            &mut counter,
            strings(&["C", "Q"]),
            strings(&["G"]),
            strings(&["CC"]),
            1,
            1,
            &mut report,
        );
        assert_eq!(lipid.head_groups(), strings(&["C", ""]).as_slice());
        assert_eq!(report.len(), 1);
        assert!(report.warnings()[0].contains("'Q'"));
    }

    #[test]
    fn invalid_linker_is_replaced_not_dropped() {
        let mut counter = LipidCounter::new();
        let mut report = Report::new();
        let lipid = AdditionalLipid::new(
            &mut counter,
            strings(&[""]),
            strings(&["G", "X", "A"]),
            strings(&["CC", "CC", "CC"]),
            1,
            1,
            &mut report,
        );
        assert_eq!(lipid.linker_groups(), strings(&["G", "G", "A"]).as_slice());
        assert_eq!(lipid.tail_groups().len(), lipid.linker_groups().len());
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn missing_tails_are_padded_to_the_linker_count() {
        let mut counter = LipidCounter::new();
        let mut report = Report::new();
        let lipid = AdditionalLipid::new(
            &mut counter,
            strings(&["C"]),
            strings(&["G", "A", "G"]),
            strings(&["CC"]),
            1,
            1,
            &mut report,
        );
        assert_eq!(lipid.tail_groups(), strings(&["CC", "C", "C"]).as_slice());
        assert_eq!(report.len(), 2);
        for warning in report.warnings() {
            assert!(warning.contains("more linkers than tails"));
        }
    }

    #[test]
    fn excess_tails_are_dropped_with_one_warning() {
        let mut counter = LipidCounter::new();
        let mut report = Report::new();
        let lipid = AdditionalLipid::new(
            &mut counter,
            strings(&["C"]),
            strings(&["G"]),
            strings(&["CC", "DD", "TT"]),
            1,
            1,
            &mut report,
        );
        assert_eq!(lipid.tail_groups(), strings(&["CC"]).as_slice());
        assert_eq!(report.len(), 1);
        assert!(report.warnings()[0].contains("more tails than linkers"));
    }

    #[test]
    fn empty_tail_token_becomes_a_single_c() {
        let mut counter = LipidCounter::new();
        let mut report = Report::new();
        let lipid = AdditionalLipid::new(
            &mut counter,
            strings(&["C"]),
            strings(&["G"]),
            strings(&[""]),
            1,
            1,
            &mut report,
        );
        assert_eq!(lipid.tail_groups(), strings(&["C"]).as_slice());
        assert_eq!(report.len(), 1);
        assert!(report.warnings()[0].contains("empty tail group"));
    }

    #[test]
    fn invalid_tail_beads_are_rewritten_in_place() {
        let mut counter = LipidCounter::new();
        let mut report = Report::new();
        let lipid = AdditionalLipid::new(
            &mut counter,
            strings(&["C"]),
            strings(&["G"]),
            strings(&["CXDZ"]),
            1,
            1,
            &mut report,
        );
        assert_eq!(lipid.tail_groups(), strings(&["CCDC"]).as_slice());
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn tail_count_always_matches_linker_count() {
        let cases: [(&[&str], &[&str]); 4] = [
            (&["G"], &[]),
            (&["G", "A"], &["CC"]),
            (&["X", "Y"], &["CC", "CC", "CC"]),
            (&["G", "A", "G", "A"], &["", "TT"]),
        ];
        for (linkers, tails) in cases {
            let mut counter = LipidCounter::new();
            let mut report = Report::new();
            let lipid = AdditionalLipid::new(
                &mut counter,
                Vec::new(),
                strings(linkers),
                strings(tails),
                1,
                1,
                &mut report,
            );
            assert_eq!(
                lipid.tail_groups().len(),
                lipid.linker_groups().len(),
                "linkers {linkers:?} tails {tails:?}"
            );
        }
    }

    #[test]
    fn lipid_without_any_head_is_simple() {
        let mut counter = LipidCounter::new();
        let mut report = Report::new();
        let bare = AdditionalLipid::new(
            &mut counter,
            strings(&["", ""]),
            strings(&["G"]),
            strings(&["CC"]),
            1,
            1,
            &mut report,
        );
        assert!(bare.is_simple());
        let headed = AdditionalLipid::new(
            &mut counter,
            strings(&["", "P"]),
            strings(&["G"]),
            strings(&["CC"]),
            1,
            1,
            &mut report,
        );
        assert!(!headed.is_simple());
    }

    #[test]
    fn additional_lipid_serializes_every_token_group() {
        let mut counter = LipidCounter::new();
        let mut report = Report::new();
        let lipid = AdditionalLipid::new(
            &mut counter,
            strings(&["C", "P"]),
            strings(&["G", "A"]),
            strings(&["CCC", "DDC"]),
            2,
            3,
            &mut report,
        );
        assert_eq!(
            args(&lipid),
            vec![
                "-alhead", "C P", "-allink", "G A", "-altail", "CCC DDC", "-alname", "LIP1",
                "-l", "LIP1:3", "-u", "LIP1:2",
            ]
        );
    }

    #[test]
    fn unset_ratios_emit_the_bare_name_for_the_lower_leaflet() {
        let mut counter = LipidCounter::new();
        let mut report = Report::new();
        let lipid = AdditionalLipid::new(
            &mut counter,
            strings(&[""]),
            strings(&["G"]),
            strings(&["CC"]),
            0,
            0,
            &mut report,
        );
        assert_eq!(
            args(&lipid),
            vec!["-alhead", "", "-allink", "G", "-altail", "CC", "-alname", "LIP1", "-l", "LIP1"]
        );
    }
}
