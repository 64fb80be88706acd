use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nsrs-aux-db")]
#[command(version, about = "Build the NSRS 2022 auxiliary PROJ database")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble the SQL script and load it into a fresh SQLite database
    Build {
        /// Directory containing zoneDefinitions.json and empty_aux_db.sql
        #[arg(short, long, default_value = ".")]
        data_dir: PathBuf,

        /// Output SQL script path (default: <data-dir>/nsrs_proj.sql)
        #[arg(long)]
        sql_out: Option<PathBuf>,

        /// Output database path (default: <data-dir>/nsrs_proj.db)
        #[arg(long)]
        db_out: Option<PathBuf>,
    },

    /// Download zoneDefinitions.json from the NGS site
    Download {
        /// Directory to place the file in
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// List the zones defined in zoneDefinitions.json
    ListZones {
        /// Path to zoneDefinitions.json
        #[arg(short, long, default_value = "zoneDefinitions.json")]
        zone_defs: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
