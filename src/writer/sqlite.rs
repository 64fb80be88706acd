use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

use super::assemble::{assemble_script, count_inserts, read_schema_script};
use crate::zones::load_zone_definitions;

/// Creates the output database file and executes the assembled script
/// against it.
pub struct SqliteLoader {
    conn: Connection,
}

impl SqliteLoader {
    /// Open a fresh database, removing any prior file of the same name
    pub fn create(db_path: &Path) -> Result<Self> {
        if db_path.exists() {
            fs::remove_file(db_path).context("Failed to remove existing database")?;
        }

        let conn = Connection::open(db_path).context("Failed to create database")?;

        Ok(Self { conn })
    }

    /// Execute the assembled script. Statements run outside any explicit
    /// transaction, so a failure leaves rows applied up to that point.
    pub fn execute_script(&self, script: &str) -> Result<()> {
        self.conn
            .execute_batch(script)
            .context("Failed to execute generated script")?;
        Ok(())
    }
}

/// Totals reported after a successful build
pub struct BuildSummary {
    pub zones: usize,
    pub statements: usize,
}

/// Run the whole pipeline: load the zone definitions, assemble the script
/// after the empty-schema artifact, write the script file, and execute it
/// against a fresh database.
pub fn build_database(
    zone_defs_path: &Path,
    schema_path: &Path,
    sql_path: &Path,
    db_path: &Path,
) -> Result<BuildSummary> {
    let zones = load_zone_definitions(zone_defs_path)?;
    let schema_sql = read_schema_script(schema_path)?;
    let script = assemble_script(&schema_sql, &zones)?;

    fs::write(sql_path, &script)
        .with_context(|| format!("Failed to write {}", sql_path.display()))?;

    let loader = SqliteLoader::create(db_path)?;
    loader.execute_script(&script).with_context(|| {
        format!(
            "Script execution failed; {} is left on disk for inspection",
            sql_path.display()
        )
    })?;

    Ok(BuildSummary {
        zones: zones.len(),
        statements: count_inserts(&script),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("out.db");
        fs::write(&db_path, "not a database").unwrap();

        let loader = SqliteLoader::create(&db_path).unwrap();
        loader
            .execute_script("CREATE TABLE t(x); INSERT INTO t VALUES(1);")
            .unwrap();

        let conn = Connection::open(&db_path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM t", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_bad_statement_surfaces_engine_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = SqliteLoader::create(&dir.path().join("out.db")).unwrap();
        assert!(loader.execute_script("INSERT INTO missing VALUES(1);").is_err());
    }
}
