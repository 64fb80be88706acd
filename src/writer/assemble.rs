//! Assembles the full SQL script in referential order.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::records::{
    frame_transformation_statements, geodetic_crs_statements, geodetic_datum_statements,
    geoid_transformation_statements, vertical_crs_statements, vertical_datum_statements,
    zone_statements,
};
use crate::zones::ZoneDefinition;

/// File name of the pre-generated empty-schema artifact
pub const EMPTY_SCHEMA_FILE: &str = "empty_aux_db.sql";

/// Read the empty-schema script. Absence is fatal with the remediation
/// step in the message.
pub fn read_schema_script(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!(
            "{} not found; generate it with `projinfo --dump-db-structure`",
            path.display()
        );
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Concatenate the schema script and every record fragment. Order carries
/// referential validity: datums before the CRSs that reference them, CRSs
/// before transformations and conversions, and the trigger drop before the
/// grid transformation insert. Constant tables are arrays, so the order is
/// identical on every run.
pub fn assemble_script(schema_sql: &str, zones: &[ZoneDefinition]) -> Result<String> {
    let mut script = String::from(schema_sql);
    script.push_str(&geodetic_datum_statements());
    script.push_str(&geodetic_crs_statements());
    script.push_str(&vertical_datum_statements());
    script.push_str(&vertical_crs_statements());
    script.push_str(&geoid_transformation_statements());
    for zone in zones {
        script.push_str(&zone_statements(zone)?);
    }
    script.push_str(&frame_transformation_statements());
    Ok(script)
}

/// Number of INSERT statements in an assembled script
pub fn count_inserts(script: &str) -> usize {
    script.matches("INSERT INTO").count()
}
