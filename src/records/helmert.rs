//! Time-dependent Helmert transformations from ITRF2020 to each frame's
//! geocentric CRS. Only the plate rotation rates are nonzero; translations,
//! scale, and their rates are all zero in the published model.

use super::frames::{ReferenceFrame, AUTHORITY, FRAMES, FRAME_EPOCH};
use super::types::Usage;

/// One row of `helmert_transformation`
#[derive(Debug)]
pub struct HelmertTransformation<'a> {
    pub frame: &'a ReferenceFrame,
}

impl HelmertTransformation<'_> {
    pub fn code(&self) -> String {
        format!("ITRF2020_to_{}", self.frame.name())
    }

    /// The destination table mixes required and unused columns, so the
    /// statement lists every column explicitly. The pivot columns and the
    /// operation version carry empty strings, as published.
    pub fn insert_sql(&self) -> String {
        let [rx, ry, rz] = self.frame.rotation_rates;
        format!(
            "\nINSERT INTO helmert_transformation
    (\"auth_name\", \"code\", \"name\", \"description\", \"method_auth_name\", \"method_code\", \"method_name\",
    \"source_crs_auth_name\", \"source_crs_code\", \"target_crs_auth_name\", \"target_crs_code\",
    \"accuracy\",
    \"tx\", \"ty\", \"tz\", \"translation_uom_auth_name\", \"translation_uom_code\",
    \"rx\", \"ry\", \"rz\", \"rotation_uom_auth_name\", \"rotation_uom_code\",
    \"scale_difference\", \"scale_difference_uom_auth_name\", \"scale_difference_uom_code\",
    \"rate_tx\", \"rate_ty\", \"rate_tz\", \"rate_translation_uom_auth_name\", \"rate_translation_uom_code\",
    \"rate_rx\", \"rate_ry\", \"rate_rz\", \"rate_rotation_uom_auth_name\", \"rate_rotation_uom_code\",
    \"rate_scale_difference\", \"rate_scale_difference_uom_auth_name\", \"rate_scale_difference_uom_code\",
    \"epoch\", \"epoch_uom_auth_name\", \"epoch_uom_code\",
    \"px\", \"py\", \"pz\", \"pivot_uom_auth_name\", \"pivot_uom_code\", \"operation_version\",
    \"deprecated\")
    VALUES ('{auth}', '{code}', 'ITRF2020 to {name}', 'from https://alpha.ngs.noaa.gov/EPP/index.shtml',
    'EPSG', '1056', 'Time-dependent Coordinate Frame rotation (geocen)',
    'EPSG', '9988', '{auth}', '{name}_gc',
    '0.01',  -- accuracy
    '0', '0', '0', 'EPSG', '1025',
    '0', '0', '0', 'EPSG', '1031',
    '0', 'EPSG', '1028',
    '0', '0', '0', 'EPSG', '1027',
    '{rx}', '{ry}', '{rz}', 'EPSG', '1032',  -- milliarc-seconds per year
    '0', 'EPSG', '1030',
    '{epoch}', 'EPSG', '1029',
    '', '', '', '', '', '',
    '0');",
            auth = AUTHORITY,
            code = self.code(),
            name = self.frame.name(),
            epoch = FRAME_EPOCH,
        )
    }

    pub fn usage(&self) -> Usage {
        Usage::of("helmert_transformation", self.code())
    }
}

/// One transformation plus usage per frame, in canonical frame order
pub fn frame_transformation_statements() -> String {
    let mut sql = String::new();
    for frame in FRAMES {
        let transformation = HelmertTransformation { frame };
        sql.push_str(&transformation.insert_sql());
        sql.push_str(&transformation.usage().insert_sql());
    }
    sql
}
