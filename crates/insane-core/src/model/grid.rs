use super::AppendArgs;
use crate::report::Report;
use std::fmt;

/// Hard ceiling on any grid distance, in nanometers. Larger requests are
/// clamped to this value.
pub const MAX_GRID_SIZE: f64 = 100.0;

/// Largest grid the downstream viewer still renders. Larger grids are kept
/// but flagged, so the front end can warn that the preview will be blank.
pub const MAX_DISPLAYABLE_GRID_SIZE: f64 = 25.0;

/// Uniform distance used when the request leaves `d` unset.
pub const DEFAULT_GRID_SIZE: f64 = 10.0;

/// Periodic boundary condition shape understood by insane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PbcMode {
    Hexagonal,
    Rectangular,
    Square,
    Cubic,
    Optimal,
    Keep,
}

impl PbcMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hexagonal" => Some(Self::Hexagonal),
            "rectangular" => Some(Self::Rectangular),
            "square" => Some(Self::Square),
            "cubic" => Some(Self::Cubic),
            "optimal" => Some(Self::Optimal),
            "keep" => Some(Self::Keep),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hexagonal => "hexagonal",
            Self::Rectangular => "rectangular",
            Self::Square => "square",
            Self::Cubic => "cubic",
            Self::Optimal => "optimal",
            Self::Keep => "keep",
        }
    }
}

impl fmt::Display for PbcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamps a requested grid distance into the usable range.
///
/// Zero means unset and yields `default`. The sign is discarded. Values past
/// [`MAX_GRID_SIZE`] are clamped with a warning; values past
/// [`MAX_DISPLAYABLE_GRID_SIZE`] are kept as given but mark the request as
/// too large to display. At most one warning is recorded per call.
pub fn validate_distance(raw: f64, default: f64, report: &mut Report) -> f64 {
    let size = raw.abs();
    if size == 0.0 {
        return default;
    }
    if size > MAX_DISPLAYABLE_GRID_SIZE {
        report.mark_too_large_to_display();
    }
    if size > MAX_GRID_SIZE {
        report.warn(format!(
            "Given grid size '{size}' is too big and has been set to {MAX_GRID_SIZE}."
        ));
        return MAX_GRID_SIZE;
    }
    if size > MAX_DISPLAYABLE_GRID_SIZE {
        report.warn(format!(
            "Given grid size '{size}' is too big to display; the simulation will \
             still run, but the viewer may show an empty scene."
        ));
    }
    size
}

/// Validated grid geometry.
///
/// `d` is the uniform distance; `x`, `y` and `z` default to it when unset.
/// The other specs take their physical bounds from the derived
/// [`min_horizontal_distance`](GridSpec::min_horizontal_distance) and
/// [`min_vertical_distance`](GridSpec::min_vertical_distance).
#[derive(Debug, Clone)]
pub struct GridSpec {
    d: f64,
    x: f64,
    y: f64,
    z: f64,
    z_includes_protein: bool,
    pbc: Option<PbcMode>,
}

impl GridSpec {
    pub fn new(
        d: f64,
        x: f64,
        y: f64,
        z: f64,
        z_includes_protein: bool,
        pbc: &str,
        report: &mut Report,
    ) -> Self {
        let d = validate_distance(d, DEFAULT_GRID_SIZE, report);
        let x = validate_distance(x, d, report);
        let y = validate_distance(y, d, report);
        let z = validate_distance(z, d, report);
        let pbc = Self::validate_pbc(pbc, report);
        Self {
            d,
            x,
            y,
            z,
            z_includes_protein,
            pbc,
        }
    }

    fn validate_pbc(raw: &str, report: &mut Report) -> Option<PbcMode> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match PbcMode::from_name(raw) {
            Some(mode) => Some(mode),
            None => {
                report.warn(format!(
                    "Periodic boundary shape '{raw}' is not recognized and has been ignored."
                ));
                None
            }
        }
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    pub fn pbc(&self) -> Option<PbcMode> {
        self.pbc
    }

    /// The z axis distance.
    pub fn min_vertical_distance(&self) -> f64 {
        self.z
    }

    /// The shorter of the x and y axis distances.
    pub fn min_horizontal_distance(&self) -> f64 {
        self.x.min(self.y)
    }
}

impl AppendArgs for GridSpec {
    fn append_args(&self, argv: &mut Vec<String>) {
        argv.push("-d".into());
        argv.push(self.d.to_string());

        // per-axis values are only worth a token when they differ from d
        if self.x != self.d {
            argv.push("-x".into());
            argv.push(self.x.to_string());
        }
        if self.y != self.d {
            argv.push("-y".into());
            argv.push(self.y.to_string());
        }
        if self.z != self.d {
            // -dz asks insane to add the protein clearance on top of z
            argv.push(if self.z_includes_protein { "-dz" } else { "-z" }.into());
            argv.push(self.z.to_string());
        }

        if let Some(pbc) = self.pbc {
            argv.push("-pbc".into());
            argv.push(pbc.as_str().into());
        }
    }
}
