use anyhow::Result;
use nsrs_aux_db::{
    cli::{Cli, Commands},
    download::download_zone_definitions,
    writer::{build_database, EMPTY_SCHEMA_FILE},
    zones::{load_zone_definitions, ZONE_DEFINITIONS_FILE},
};
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Build {
            data_dir,
            sql_out,
            db_out,
        } => {
            let start = Instant::now();

            let zone_defs = data_dir.join(ZONE_DEFINITIONS_FILE);
            let schema = data_dir.join(EMPTY_SCHEMA_FILE);
            let sql_out = sql_out.unwrap_or_else(|| data_dir.join("nsrs_proj.sql"));
            let db_out = db_out.unwrap_or_else(|| data_dir.join("nsrs_proj.db"));

            println!("Assembling {:?}...", sql_out);
            let summary = build_database(&zone_defs, &schema, &sql_out, &db_out)?;

            let elapsed = start.elapsed();
            println!(
                "\nCreated {:?} ({} statements, {} zones) in {:.1}s",
                db_out,
                summary.statements,
                summary.zones,
                elapsed.as_secs_f64()
            );
        }

        Commands::Download { output, force } => {
            let path = download_zone_definitions(&output, force)?;
            println!("Zone definitions downloaded to {:?}", path);
        }

        Commands::ListZones { zone_defs } => {
            let zones = load_zone_definitions(&zone_defs)?;
            println!("{} zones:\n", zones.len());
            for zone in &zones {
                println!(
                    "  {:8} {:10} {:32} {}",
                    zone.abbr, zone.frame, zone.name, zone.method
                );
            }
        }
    }

    Ok(())
}
