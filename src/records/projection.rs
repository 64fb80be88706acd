//! Per-zone projection conversion and projected CRS records, emitted in
//! metric and feet variants.

use anyhow::Result;

use super::frames::AUTHORITY;
use super::types::{escape, null_slots, LengthUnit, Usage, UNIT_VARIANTS};
use crate::zones::{ProjectionMethod, ZoneDefinition};

/// Unused parameter slots in `conversion_table` for Transverse Mercator
const TM_NULL_SLOTS: usize = 10;

/// Unused parameter slots in `conversion` for Lambert Conic (1SP)
const LC1_NULL_SLOTS: usize = 12;

/// One conversion row for a zone, in one unit variant. Lambert zones go
/// through the `conversion` view with named parameters; Transverse and
/// Oblique Mercator rows target `conversion_table` directly.
#[derive(Debug)]
pub struct Conversion<'a> {
    pub zone: &'a ZoneDefinition,
    pub unit: LengthUnit,
}

impl Conversion<'_> {
    pub fn code(&self) -> String {
        format!("{}{}", self.zone.abbr, self.unit.code_suffix())
    }

    pub fn insert_sql(&self) -> Result<String> {
        let code = self.code();
        let name = escape(&self.zone.name);
        let label = self.unit.conversion_label();
        let remarks = self.zone.zone_code.as_str();
        let lat = self.zone.origin_latitude.as_str();
        let lon = self.zone.origin_longitude.as_str();
        let scale = self.zone.origin_scale.as_str();
        let easting = self.zone.false_easting(self.unit);
        let northing = self.zone.false_northing(self.unit);
        let uom = self.unit.uom_code();

        let sql = match self.zone.method {
            ProjectionMethod::LambertConic1Sp => format!(
                "\nINSERT INTO conversion VALUES (
    '{auth}', '{code}', '{name} {label}', '{remarks}',
    'EPSG', '9801', 'Lambert Conic Conformal (1SP)',
    'EPSG', '8801', 'Latitude of natural origin', {lat}, 'EPSG', '9102',
    'EPSG', '8802', 'Longitude of natural origin', {lon}, 'EPSG', '9102',
    'EPSG', '8805', 'Scale factor at natural origin', {scale}, 'EPSG', '9201',
    'EPSG', '8806', 'False easting', {easting}, 'EPSG', '{uom}',
    'EPSG', '8807', 'False northing', {northing}, 'EPSG', '{uom}',
    {padding}
    0);",
                auth = AUTHORITY,
                padding = null_slots(LC1_NULL_SLOTS),
            ),

            ProjectionMethod::TransverseMercator => format!(
                "\nINSERT INTO conversion_table VALUES (
    '{auth}', '{code}', '{name} {label}', '{remarks}',
    'EPSG', '9807',
    'EPSG', '8801', {lat}, 'EPSG', '9102',
    'EPSG', '8802', {lon}, 'EPSG', '9102',
    'EPSG', '8805', {scale}, 'EPSG', '9201',
    'EPSG', '8806', {easting}, 'EPSG', '{uom}',
    'EPSG', '8807', {northing}, 'EPSG', '{uom}',
    {padding}
    0);",
                auth = AUTHORITY,
                padding = null_slots(TM_NULL_SLOTS),
            ),

            ProjectionMethod::ObliqueMercator => {
                // azimuth feeds both the initial-line azimuth and the
                // rectified-grid-angle slots
                let azimuth = self.zone.skew_azimuth()?.as_str();
                format!(
                    "\nINSERT INTO conversion_table VALUES (
    '{auth}', '{code}', '{name} {label}', '{remarks}',
    'EPSG', '9815',
    'EPSG', '8811', {lat}, 'EPSG', '9102',
    'EPSG', '8812', {lon}, 'EPSG', '9102',
    'EPSG', '8813', {azimuth}, 'EPSG', '9102',
    'EPSG', '8814', {azimuth}, 'EPSG', '9102',
    'EPSG', '8815', {scale}, 'EPSG', '9201',
    'EPSG', '8816', {easting}, 'EPSG', '{uom}',
    'EPSG', '8817', {northing}, 'EPSG', '{uom}',
    0);",
                    auth = AUTHORITY,
                )
            }
        };

        Ok(sql)
    }

    /// Conversions share object codes with their projected CRSs, so the
    /// usage code takes a disambiguating infix
    pub fn usage(&self) -> Usage {
        let code = self.code();
        Usage::with_code(format!("{code}_conv_USAGE"), "conversion", code)
    }
}

/// One projected CRS row for a zone, in one unit variant
#[derive(Debug)]
pub struct ProjectedCrs<'a> {
    pub zone: &'a ZoneDefinition,
    pub unit: LengthUnit,
}

impl ProjectedCrs<'_> {
    pub fn code(&self) -> String {
        format!("{}{}", self.zone.abbr, self.unit.code_suffix())
    }

    pub fn insert_sql(&self) -> String {
        format!(
            "\nINSERT INTO projected_crs VALUES (
    '{auth}', '{code}', '{frame} / {name}{label}', '{remarks}',
    'EPSG', '{cs}',
    '{auth}', '{frame}_2D',  -- base CRS
    '{auth}', '{code}', NULL,  -- conversion
    0);",
            auth = AUTHORITY,
            code = self.code(),
            frame = self.zone.frame,
            name = escape(&self.zone.name),
            label = self.unit.crs_name_suffix(),
            remarks = self.zone.zone_code.as_str(),
            cs = self.unit.cartesian_cs_code(),
        )
    }

    pub fn usage(&self) -> Usage {
        Usage::of("projected_crs", self.code())
    }
}

/// Statements for one zone, in fixed order: metric conversion, metric
/// projected CRS, then the feet variants of both.
pub fn zone_statements(zone: &ZoneDefinition) -> Result<String> {
    let mut sql = String::new();
    for unit in UNIT_VARIANTS {
        let conversion = Conversion { zone, unit };
        sql.push_str(&conversion.insert_sql()?);
        sql.push_str(&conversion.usage().insert_sql());
        let crs = ProjectedCrs { zone, unit };
        sql.push_str(&crs.insert_sql());
        sql.push_str(&crs.usage().insert_sql());
    }
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::SourceValue;

    fn zone(method: ProjectionMethod) -> ZoneDefinition {
        ZoneDefinition {
            abbr: "AK1".to_string(),
            name: "Alaska 1".to_string(),
            zone_code: SourceValue::new("5001"),
            method,
            origin_latitude: SourceValue::new("57"),
            origin_longitude: SourceValue::new("-133.666666666667"),
            origin_scale: SourceValue::new("0.9999"),
            false_easting_m: SourceValue::new("5,000,000.0000"),
            false_northing_m: SourceValue::new("-5,000,000.0000"),
            false_easting_ift: SourceValue::new("16,404,166.6667"),
            false_northing_ift: SourceValue::new("-16,404,166.6667"),
            skew_azimuth: Some(SourceValue::new("-36.8698976458333")),
            frame: "NATRF2022".to_string(),
        }
    }

    #[test]
    fn test_lambert_padding() {
        let zone = zone(ProjectionMethod::LambertConic1Sp);
        let sql = Conversion { zone: &zone, unit: LengthUnit::Metre }.insert_sql().unwrap();
        assert!(sql.contains("INSERT INTO conversion VALUES"));
        assert!(sql.contains("'EPSG', '9801'"));
        assert_eq!(sql.matches("NULL,").count(), 12);
    }

    #[test]
    fn test_transverse_mercator_padding() {
        let zone = zone(ProjectionMethod::TransverseMercator);
        let sql = Conversion { zone: &zone, unit: LengthUnit::Metre }.insert_sql().unwrap();
        assert!(sql.contains("INSERT INTO conversion_table VALUES"));
        assert!(sql.contains("'EPSG', '9807'"));
        assert_eq!(sql.matches("NULL,").count(), 10);
    }

    #[test]
    fn test_oblique_mercator_duplicates_azimuth() {
        let zone = zone(ProjectionMethod::ObliqueMercator);
        let sql = Conversion { zone: &zone, unit: LengthUnit::Metre }.insert_sql().unwrap();
        assert!(sql.contains("'EPSG', '9815'"));
        assert!(sql.contains("'EPSG', '8813', -36.8698976458333, 'EPSG', '9102'"));
        assert!(sql.contains("'EPSG', '8814', -36.8698976458333, 'EPSG', '9102'"));
        assert_eq!(sql.matches("NULL,").count(), 0);
    }

    #[test]
    fn test_separators_never_reach_output() {
        let zone = zone(ProjectionMethod::TransverseMercator);
        let sql = Conversion { zone: &zone, unit: LengthUnit::Metre }.insert_sql().unwrap();
        assert!(sql.contains("5000000.0000"));
        assert!(!sql.contains("5,000,000"));
    }

    #[test]
    fn test_feet_variant_suffix_and_units() {
        let zone = zone(ProjectionMethod::TransverseMercator);
        let metric = Conversion { zone: &zone, unit: LengthUnit::Metre };
        let feet = Conversion { zone: &zone, unit: LengthUnit::InternationalFoot };
        assert_eq!(feet.code(), format!("{}_ft", metric.code()));
        let sql = feet.insert_sql().unwrap();
        assert!(sql.contains("'AK1_ft'"));
        assert!(sql.contains("Alaska 1 (ift)"));
        assert!(sql.contains("16404166.6667, 'EPSG', '9002'"));
    }

    #[test]
    fn test_projected_crs_references() {
        let zone = zone(ProjectionMethod::TransverseMercator);
        let crs = ProjectedCrs { zone: &zone, unit: LengthUnit::InternationalFoot };
        let sql = crs.insert_sql();
        assert!(sql.contains("'NSRS', 'AK1_ft', 'NATRF2022 / Alaska 1 (ft)', '5001'"));
        assert!(sql.contains("'EPSG', '4495'"));
        assert!(sql.contains("'NSRS', 'NATRF2022_2D'"));
    }

    #[test]
    fn test_zone_statement_order() {
        let zone = zone(ProjectionMethod::TransverseMercator);
        let sql = zone_statements(&zone).unwrap();
        assert_eq!(sql.matches("INSERT INTO conversion_table").count(), 2);
        assert_eq!(sql.matches("INSERT INTO projected_crs").count(), 2);
        assert_eq!(sql.matches("INSERT INTO usage").count(), 4);
        // metric conversion, metric CRS, feet conversion, feet CRS
        let conv_m = sql.find("INSERT INTO conversion_table").unwrap();
        let crs_m = sql.find("INSERT INTO projected_crs").unwrap();
        let conv_ft = sql.rfind("INSERT INTO conversion_table").unwrap();
        let crs_ft = sql.rfind("INSERT INTO projected_crs").unwrap();
        assert!(conv_m < crs_m && crs_m < conv_ft && conv_ft < crs_ft);
    }

    #[test]
    fn test_conversion_usage_disambiguated() {
        let zone = zone(ProjectionMethod::TransverseMercator);
        let conversion = Conversion { zone: &zone, unit: LengthUnit::Metre };
        let crs = ProjectedCrs { zone: &zone, unit: LengthUnit::Metre };
        assert_eq!(conversion.usage().code, "AK1_conv_USAGE");
        assert_eq!(crs.usage().code, "AK1_USAGE");
        assert_eq!(conversion.usage().object_code, crs.usage().object_code);
    }
}
