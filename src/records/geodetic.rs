//! Geodetic datum and geodetic CRS records, one set per reference frame.

use super::frames::{ReferenceFrame, AUTHORITY, FRAMES, FRAME_EPOCH, PUBLICATION_DATE};
use super::types::Usage;

/// One row of `geodetic_datum`
#[derive(Debug)]
pub struct GeodeticDatum<'a> {
    pub frame: &'a ReferenceFrame,
}

impl GeodeticDatum<'_> {
    pub fn code(&self) -> String {
        self.frame.datum_code()
    }

    pub fn name(&self) -> String {
        format!("{} Terrestrial Reference Frame 2022", self.frame.plate)
    }

    pub fn insert_sql(&self) -> String {
        format!(
            "\nINSERT INTO geodetic_datum VALUES(
    '{auth}','{code}',  -- code
    '{name}',  -- name
    '{name} datum',  -- description
    'EPSG','7019',  -- ellipsoid GRS 80
    'EPSG','8901',  -- prime meridian
    '{date}',  -- publication date
    {epoch},  -- frame reference epoch
    NULL,  -- ensemble accuracy
    NULL,  -- anchor
    NULL,  -- anchor epoch
    0);",
            auth = AUTHORITY,
            code = self.code(),
            name = self.name(),
            date = PUBLICATION_DATE,
            epoch = FRAME_EPOCH,
        )
    }

    pub fn usage(&self) -> Usage {
        Usage::of("geodetic_datum", self.code())
    }
}

/// The three CRS types emitted for every frame, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeodeticCrsKind {
    Geocentric,
    Geographic3d,
    Geographic2d,
}

impl GeodeticCrsKind {
    pub const ALL: [GeodeticCrsKind; 3] = [
        GeodeticCrsKind::Geocentric,
        GeodeticCrsKind::Geographic3d,
        GeodeticCrsKind::Geographic2d,
    ];

    /// CRS type as stored in the `type` column
    pub fn label(&self) -> &'static str {
        match self {
            GeodeticCrsKind::Geocentric => "geocentric",
            GeodeticCrsKind::Geographic3d => "geographic 3D",
            GeodeticCrsKind::Geographic2d => "geographic 2D",
        }
    }

    /// EPSG coordinate-system code for the type
    pub fn cs_code(&self) -> &'static str {
        match self {
            GeodeticCrsKind::Geocentric => "6500",
            GeodeticCrsKind::Geographic3d => "6423",
            GeodeticCrsKind::Geographic2d => "6422",
        }
    }

    /// Code suffix distinguishing the variants of one frame
    pub fn code_suffix(&self) -> &'static str {
        match self {
            GeodeticCrsKind::Geocentric => "gc",
            GeodeticCrsKind::Geographic3d => "3D",
            GeodeticCrsKind::Geographic2d => "2D",
        }
    }
}

/// One row of `geodetic_crs`
#[derive(Debug)]
pub struct GeodeticCrs<'a> {
    pub frame: &'a ReferenceFrame,
    pub kind: GeodeticCrsKind,
}

impl GeodeticCrs<'_> {
    pub fn code(&self) -> String {
        format!("{}_{}", self.frame.name(), self.kind.code_suffix())
    }

    pub fn insert_sql(&self) -> String {
        format!(
            "\nINSERT INTO geodetic_crs VALUES(
    '{auth}','{code}',  -- code
    '{name}',  -- name
    '{name}',  -- description
    '{kind}','EPSG','{cs}',
    '{auth}','{datum}',  -- datum
    NULL,  -- text definition
    0);",
            auth = AUTHORITY,
            code = self.code(),
            name = self.frame.name(),
            kind = self.kind.label(),
            cs = self.kind.cs_code(),
            datum = self.frame.datum_code(),
        )
    }

    pub fn usage(&self) -> Usage {
        Usage::of("geodetic_crs", self.code())
    }
}

/// Datum insert plus usage for every frame, in canonical frame order
pub fn geodetic_datum_statements() -> String {
    let mut sql = String::new();
    for frame in FRAMES {
        let datum = GeodeticDatum { frame };
        sql.push_str(&datum.insert_sql());
        sql.push_str(&datum.usage().insert_sql());
    }
    sql
}

/// The three CRS variants of every frame: all geocentric CRSs first, then
/// geographic 3D, then geographic 2D
pub fn geodetic_crs_statements() -> String {
    let mut sql = String::new();
    for kind in GeodeticCrsKind::ALL {
        for frame in FRAMES {
            let crs = GeodeticCrs { frame, kind };
            sql.push_str(&crs.insert_sql());
            sql.push_str(&crs.usage().insert_sql());
        }
    }
    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datum_sql() {
        let datum = GeodeticDatum { frame: &FRAMES[0] };
        let sql = datum.insert_sql();
        assert!(sql.contains("'NSRS','NATRF2022_datum'"));
        assert!(sql.contains("'North American Terrestrial Reference Frame 2022'"));
        assert!(sql.contains("'EPSG','7019'"));
        assert!(sql.contains("'2025-04-22'"));
        assert!(sql.contains("2020.0"));
    }

    #[test]
    fn test_one_datum_and_usage_per_frame() {
        let sql = geodetic_datum_statements();
        assert_eq!(sql.matches("INSERT INTO geodetic_datum").count(), 4);
        assert_eq!(sql.matches("INSERT INTO usage").count(), 4);
        // canonical frame order
        let na = sql.find("NATRF2022_datum").unwrap();
        let pa = sql.find("PATRF2022_datum").unwrap();
        let ma = sql.find("MATRF2022_datum").unwrap();
        assert!(na < pa && pa < ma);
    }

    #[test]
    fn test_crs_variants() {
        let sql = geodetic_crs_statements();
        assert_eq!(sql.matches("INSERT INTO geodetic_crs").count(), 12);
        assert_eq!(sql.matches("INSERT INTO usage").count(), 12);
        for code in ["NATRF2022_gc", "NATRF2022_3D", "NATRF2022_2D"] {
            assert!(sql.contains(code), "missing {code}");
        }
        assert_eq!(sql.matches("'geocentric','EPSG','6500'").count(), 4);
        assert_eq!(sql.matches("'geographic 3D','EPSG','6423'").count(), 4);
        assert_eq!(sql.matches("'geographic 2D','EPSG','6422'").count(), 4);
    }

    #[test]
    fn test_crs_references_datum() {
        let crs = GeodeticCrs {
            frame: &FRAMES[1],
            kind: GeodeticCrsKind::Geographic2d,
        };
        let sql = crs.insert_sql();
        assert!(sql.contains("'NSRS','PATRF2022_2D'"));
        assert!(sql.contains("'NSRS','PATRF2022_datum'"));
    }
}
