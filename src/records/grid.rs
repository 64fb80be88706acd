//! Geoid grid transformation from ITRF2020 to NAPGD2022 heights, plus the
//! grid-alternatives row mapping the grid name to its published raster.

use super::frames::AUTHORITY;
use super::types::Usage;
use super::vertical::HEIGHT_CRS_CODE;

/// Geoid correction grid named by the transformation
pub const GEOID_GRID_FILE: &str = "GEOID2022.v1.a.ggxf";

/// Published GTiff rendition of the grid
pub const GEOID_TIFF_FILE: &str = "us_noaa_sgeoid2022_na_v1a.tif";

/// Where the GTiff can be downloaded from. Literal record data; nothing in
/// this program fetches it.
const GEOID_TIFF_URL_BASE: &str = "https://jjimenezshaw.github.io/NSRS-2022-PROJ";

const TRANSFORMATION_CODE: &str = "ITRF2020_to_NAPGD2022";

/// The single row of `grid_transformation`
#[derive(Debug)]
pub struct GridTransformation;

impl GridTransformation {
    pub fn insert_sql(&self) -> String {
        format!(
            "\nINSERT INTO grid_transformation VALUES(
    '{auth}','{code}','ITRF2020 to {target} height',NULL,
    'EPSG','9665','Geographic3D to GravityRelatedHeight (gtx)',
    'EPSG','9989',  -- source CRS (ITRF2020)
    '{auth}','{target}',  -- target CRS ({target} height)
    NULL,  -- accuracy
    'EPSG','8666','Geoid (height correction) model file','{grid}',
    NULL,NULL,NULL,NULL,
    NULL,NULL,NULL,0);",
            auth = AUTHORITY,
            code = TRANSFORMATION_CODE,
            target = HEIGHT_CRS_CODE,
            grid = GEOID_GRID_FILE,
        )
    }

    pub fn usage(&self) -> Usage {
        Usage::of("grid_transformation", TRANSFORMATION_CODE)
    }
}

/// The single row of `grid_alternatives`
#[derive(Debug)]
pub struct GridAlternative;

impl GridAlternative {
    pub fn insert_sql(&self) -> String {
        format!(
            "\nINSERT INTO grid_alternatives VALUES(
    '{grid}','{tiff}',NULL,'GTiff','geoid_like',0,NULL,'{base}/{tiff}',1,1,NULL);\n",
            grid = GEOID_GRID_FILE,
            tiff = GEOID_TIFF_FILE,
            base = GEOID_TIFF_URL_BASE,
        )
    }
}

/// Trigger drop, transformation insert, usage, and the grid alternative, in
/// that order. The stock insert trigger cross-checks records that exist in
/// the full proj.db but not in this auxiliary database, so it must go
/// before the insert reaches it.
pub fn geoid_transformation_statements() -> String {
    let mut sql = String::from("\nDROP TRIGGER grid_transformation_insert_trigger;");
    let transformation = GridTransformation;
    sql.push_str(&transformation.insert_sql());
    sql.push_str(&transformation.usage().insert_sql());
    sql.push_str(&GridAlternative.insert_sql());
    sql
}
