//! Fixed constants of the NSRS 2022 realization.

/// Authority namespace for every generated code
pub const AUTHORITY: &str = "NSRS";

/// Realization suffix appended to frame abbreviations (NATRF2022, PATRF2022, ...)
pub const TRF: &str = "TRF2022";

/// Publication date shared by all datums
pub const PUBLICATION_DATE: &str = "2025-04-22";

/// Frame reference epoch shared by all datums and transformations
pub const FRAME_EPOCH: &str = "2020.0";

/// One terrestrial reference frame of the realization
#[derive(Debug, Clone, Copy)]
pub struct ReferenceFrame {
    /// Tectonic plate abbreviation ("NA", "PA", ...)
    pub abbr: &'static str,
    /// Plate name as it appears in datum names
    pub plate: &'static str,
    /// Plate rotation rates about the x/y/z axes in milliarc-seconds per
    /// year, from the NGS Euler pole parameters
    /// (https://alpha.ngs.noaa.gov/EPP/index.shtml). Kept as text so the
    /// published decimals reach the output unchanged.
    pub rotation_rates: [&'static str; 3],
}

impl ReferenceFrame {
    /// Frame name, e.g. "NATRF2022"
    pub fn name(&self) -> String {
        format!("{}{}", self.abbr, TRF)
    }

    /// Code of the frame's geodetic datum record
    pub fn datum_code(&self) -> String {
        format!("{}{}_datum", self.abbr, TRF)
    }
}

/// The four reference frames, in canonical order. This order fixes the
/// statement order in the generated script everywhere frames are emitted.
pub static FRAMES: &[ReferenceFrame] = &[
    ReferenceFrame {
        abbr: "NA",
        plate: "North American",
        rotation_rates: ["0.051", "-0.736", "-0.024"],
    },
    ReferenceFrame {
        abbr: "PA",
        plate: "Pacific",
        rotation_rates: ["-0.409", "1.047", "-2.169"],
    },
    ReferenceFrame {
        abbr: "CA",
        plate: "Caribbean",
        rotation_rates: ["-0.039", "-0.974", "0.611"],
    },
    ReferenceFrame {
        abbr: "MA",
        plate: "Mariana",
        rotation_rates: ["-8.089", "5.937", "2.159"],
    },
];

/// Look up a frame by its full name ("NATRF2022")
pub fn get_frame(name: &str) -> Option<&'static ReferenceFrame> {
    FRAMES.iter().find(|f| f.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_names() {
        assert_eq!(FRAMES[0].name(), "NATRF2022");
        assert_eq!(FRAMES[0].datum_code(), "NATRF2022_datum");
    }

    #[test]
    fn test_canonical_order() {
        let abbrs: Vec<_> = FRAMES.iter().map(|f| f.abbr).collect();
        assert_eq!(abbrs, ["NA", "PA", "CA", "MA"]);
    }

    #[test]
    fn test_get_frame() {
        assert_eq!(get_frame("PATRF2022").unwrap().plate, "Pacific");
        assert!(get_frame("WGS84").is_none());
    }
}
