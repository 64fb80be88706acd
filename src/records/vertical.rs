//! Vertical datum and vertical CRS records for the national height datum.

use super::frames::{AUTHORITY, FRAME_EPOCH, PUBLICATION_DATE};
use super::types::{LengthUnit, Usage, UNIT_VARIANTS};

/// Code of the metre-unit height CRS; the grid transformation targets it
pub const HEIGHT_CRS_CODE: &str = "NAPGD2022";

/// Code of the height datum record
pub const HEIGHT_DATUM_CODE: &str = "NAPGD2022_datum";

/// The single row of `vertical_datum`
#[derive(Debug)]
pub struct VerticalDatum;

impl VerticalDatum {
    pub fn insert_sql(&self) -> String {
        format!(
            "\nINSERT INTO vertical_datum VALUES(
    '{auth}','{code}',  -- code
    'North American-Pacific Geodetic Datum 2022',  -- name
    NULL,  -- description
    '{date}',  -- publication date
    {epoch},  -- frame reference epoch
    NULL,  -- ensemble accuracy
    NULL,  -- anchor
    NULL,  -- anchor epoch
    0);",
            auth = AUTHORITY,
            code = HEIGHT_DATUM_CODE,
            date = PUBLICATION_DATE,
            epoch = FRAME_EPOCH,
        )
    }

    pub fn usage(&self) -> Usage {
        Usage::of("vertical_datum", HEIGHT_DATUM_CODE)
    }
}

/// One row of `vertical_crs`, metre or foot variant
#[derive(Debug)]
pub struct VerticalCrs {
    pub unit: LengthUnit,
}

impl VerticalCrs {
    pub fn code(&self) -> String {
        format!("{}{}", HEIGHT_CRS_CODE, self.unit.code_suffix())
    }

    pub fn insert_sql(&self) -> String {
        format!(
            "\nINSERT INTO vertical_crs VALUES(
    '{auth}','{code}',  -- code
    '{stem} height{label}',  -- name
    NULL,  -- description
    'EPSG','{cs}',  -- vertical coordinate system
    '{auth}','{datum}',  -- datum
    0);",
            auth = AUTHORITY,
            code = self.code(),
            stem = HEIGHT_CRS_CODE,
            label = self.unit.crs_name_suffix(),
            cs = self.unit.vertical_cs_code(),
            datum = HEIGHT_DATUM_CODE,
        )
    }

    pub fn usage(&self) -> Usage {
        Usage::of("vertical_crs", self.code())
    }
}

pub fn vertical_datum_statements() -> String {
    let datum = VerticalDatum;
    let mut sql = datum.insert_sql();
    sql.push_str(&datum.usage().insert_sql());
    sql
}

/// Metre CRS first, then the foot variant
pub fn vertical_crs_statements() -> String {
    let mut sql = String::new();
    for unit in UNIT_VARIANTS {
        let crs = VerticalCrs { unit };
        sql.push_str(&crs.insert_sql());
        sql.push_str(&crs.usage().insert_sql());
    }
    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_datum() {
        let sql = vertical_datum_statements();
        assert_eq!(sql.matches("INSERT INTO vertical_datum").count(), 1);
        assert_eq!(sql.matches("INSERT INTO usage").count(), 1);
        assert!(sql.contains("'North American-Pacific Geodetic Datum 2022'"));
    }

    #[test]
    fn test_metre_and_foot_variants() {
        let sql = vertical_crs_statements();
        assert_eq!(sql.matches("INSERT INTO vertical_crs").count(), 2);
        assert!(sql.contains("'NSRS','NAPGD2022'"));
        assert!(sql.contains("'NSRS','NAPGD2022_ft'"));
        assert!(sql.contains("'NAPGD2022 height'"));
        assert!(sql.contains("'NAPGD2022 height (ft)'"));
        assert!(sql.contains("'EPSG','6499'"));
        assert!(sql.contains("'EPSG','1030'"));
        // metre variant first
        assert!(sql.find("NAPGD2022 height'").unwrap() < sql.find("NAPGD2022 height (ft)").unwrap());
    }
}
