use super::frames::AUTHORITY;

/// EPSG scope "unknown" applied to every usage row
const SCOPE_CODE: &str = "1024";

/// EPSG extent "World". The auxiliary database defines no extents of its
/// own, so every object is scoped to the world extent.
const WORLD_EXTENT_CODE: &str = "1262";

/// Length unit selecting the metric or feet variant of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Metre,
    InternationalFoot,
}

impl LengthUnit {
    /// EPSG unit-of-measure code used for false easting/northing values
    pub fn uom_code(&self) -> &'static str {
        match self {
            LengthUnit::Metre => "9001",
            LengthUnit::InternationalFoot => "9002",
        }
    }

    /// Suffix appended to object codes for the unit variant
    pub fn code_suffix(&self) -> &'static str {
        match self {
            LengthUnit::Metre => "",
            LengthUnit::InternationalFoot => "_ft",
        }
    }

    /// Unit tag appended to conversion names
    pub fn conversion_label(&self) -> &'static str {
        match self {
            LengthUnit::Metre => "(m)",
            LengthUnit::InternationalFoot => "(ift)",
        }
    }

    /// Suffix appended to CRS names for the unit variant
    pub fn crs_name_suffix(&self) -> &'static str {
        match self {
            LengthUnit::Metre => "",
            LengthUnit::InternationalFoot => " (ft)",
        }
    }

    /// EPSG Cartesian coordinate-system code for projected CRSs
    pub fn cartesian_cs_code(&self) -> &'static str {
        match self {
            LengthUnit::Metre => "4499",
            LengthUnit::InternationalFoot => "4495",
        }
    }

    /// EPSG vertical coordinate-system code for gravity-related heights
    pub fn vertical_cs_code(&self) -> &'static str {
        match self {
            LengthUnit::Metre => "6499",
            LengthUnit::InternationalFoot => "1030",
        }
    }
}

/// Both unit variants, metric first. Emission order within a zone.
pub const UNIT_VARIANTS: [LengthUnit; 2] = [LengthUnit::Metre, LengthUnit::InternationalFoot];

/// Escape a string value for inclusion in a single-quoted SQL literal
pub fn escape(s: &str) -> String {
    s.replace('\'', "''")
}

/// A run of `NULL,` placeholders covering unused trailing columns
pub fn null_slots(n: usize) -> String {
    "NULL,".repeat(n)
}

/// One row of the `usage` table tying an object to its scope and extent
#[derive(Debug, Clone)]
pub struct Usage {
    pub code: String,
    pub object_table: &'static str,
    pub object_code: String,
}

impl Usage {
    /// Usage for an object whose code is unique across object tables
    pub fn of(object_table: &'static str, object_code: impl Into<String>) -> Self {
        let object_code = object_code.into();
        Self {
            code: format!("{object_code}_USAGE"),
            object_table,
            object_code,
        }
    }

    /// Usage with an explicit usage code, for objects whose code collides
    /// with another table's (conversions share codes with projected CRSs)
    pub fn with_code(
        code: impl Into<String>,
        object_table: &'static str,
        object_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            object_table,
            object_code: object_code.into(),
        }
    }

    pub fn insert_sql(&self) -> String {
        format!(
            "\nINSERT INTO usage VALUES(\n    \
             '{auth}','{code}','{table}','{auth}','{object}','EPSG','{extent}','EPSG','{scope}');\n",
            auth = AUTHORITY,
            code = self.code,
            table = self.object_table,
            object = self.object_code,
            extent = WORLD_EXTENT_CODE,
            scope = SCOPE_CODE,
        )
    }
}
