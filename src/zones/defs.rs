//! Serde models for the NGS zone-definition file and its loader.

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::records::{get_frame, LengthUnit};

/// File name of the zone-definition artifact
pub const ZONE_DEFINITIONS_FILE: &str = "zoneDefinitions.json";

/// Where NGS publishes the zone definitions
pub const ZONE_DEFINITIONS_URL: &str =
    "https://alpha.ngs.noaa.gov/SPCS/json_data/zoneDefinitions.json";

/// A source-provided numeric field kept as its exact source text. The NGS
/// file mixes strings (some with thousands separators) and bare numbers;
/// the text is passed through to the generated SQL untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceValue(String);

impl SourceValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text with thousands separators stripped; false easting/northing
    /// arrive as strings like "200,000.0000"
    pub fn without_separators(&self) -> String {
        self.0.replace(',', "")
    }
}

impl fmt::Display for SourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SourceValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => SourceValue(s),
            Raw::Number(n) => SourceValue(n.to_string()),
        })
    }
}

/// Map projection method of a zone. Closed set; any other value in the
/// source file fails deserialization, since the destination schema has
/// different required columns per method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ProjectionMethod {
    /// Lambert Conic Conformal (1SP), EPSG method 9801
    #[serde(rename = "LC1")]
    LambertConic1Sp,
    /// Transverse Mercator, EPSG method 9807
    #[serde(rename = "TM")]
    TransverseMercator,
    /// Hotine Oblique Mercator variant C, EPSG method 9815
    #[serde(rename = "OMC")]
    ObliqueMercator,
}

impl fmt::Display for ProjectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionMethod::LambertConic1Sp => write!(f, "Lambert Conic Conformal (1SP)"),
            ProjectionMethod::TransverseMercator => write!(f, "Transverse Mercator"),
            ProjectionMethod::ObliqueMercator => write!(f, "Oblique Mercator"),
        }
    }
}

/// One zone record from the zone-definition file. Field names mirror the
/// source keys exactly, spaces and parentheses included.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneDefinition {
    #[serde(rename = "Zone abrv")]
    pub abbr: String,
    #[serde(rename = "Zone name")]
    pub name: String,
    #[serde(rename = "Zone code")]
    pub zone_code: SourceValue,
    #[serde(rename = "Proj type")]
    pub method: ProjectionMethod,
    #[serde(rename = "Origin latitude (deg)")]
    pub origin_latitude: SourceValue,
    #[serde(rename = "Origin longitude west (deg)")]
    pub origin_longitude: SourceValue,
    #[serde(rename = "Projection origin scale")]
    pub origin_scale: SourceValue,
    #[serde(rename = "False easting (m)")]
    pub false_easting_m: SourceValue,
    #[serde(rename = "False northing (m)")]
    pub false_northing_m: SourceValue,
    #[serde(rename = "False easting (ift)")]
    pub false_easting_ift: SourceValue,
    #[serde(rename = "False northing (ift)")]
    pub false_northing_ift: SourceValue,
    #[serde(rename = "Skew azimuth (deg)", default)]
    pub skew_azimuth: Option<SourceValue>,
    #[serde(rename = "Reference frame")]
    pub frame: String,
}

impl ZoneDefinition {
    /// False easting for the unit variant, separators stripped
    pub fn false_easting(&self, unit: LengthUnit) -> String {
        match unit {
            LengthUnit::Metre => self.false_easting_m.without_separators(),
            LengthUnit::InternationalFoot => self.false_easting_ift.without_separators(),
        }
    }

    /// False northing for the unit variant, separators stripped
    pub fn false_northing(&self, unit: LengthUnit) -> String {
        match unit {
            LengthUnit::Metre => self.false_northing_m.without_separators(),
            LengthUnit::InternationalFoot => self.false_northing_ift.without_separators(),
        }
    }

    /// Skew azimuth, required for oblique Mercator zones
    pub fn skew_azimuth(&self) -> Result<&SourceValue> {
        self.skew_azimuth
            .as_ref()
            .ok_or_else(|| anyhow!("zone {}: oblique Mercator requires \"Skew azimuth (deg)\"", self.abbr))
    }
}

/// Read and validate the zone-definition file. Absence is fatal with the
/// remediation step in the message; validation failures fire here, before
/// any output is produced.
pub fn load_zone_definitions(path: &Path) -> Result<Vec<ZoneDefinition>> {
    if !path.exists() {
        bail!(
            "{} not found; fetch it with the `download` subcommand (source: {})",
            path.display(),
            ZONE_DEFINITIONS_URL
        );
    }

    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let zones: Vec<ZoneDefinition> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    for zone in &zones {
        if get_frame(&zone.frame).is_none() {
            bail!("zone {}: unknown reference frame {}", zone.abbr, zone.frame);
        }
        if zone.method == ProjectionMethod::ObliqueMercator {
            zone.skew_azimuth()?;
        }
    }

    Ok(zones)
}
