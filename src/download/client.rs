use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::zones::{ZONE_DEFINITIONS_FILE, ZONE_DEFINITIONS_URL};

pub struct NgsClient {
    client: Client,
}

impl NgsClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("nsrs-aux-db")
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch the zone-definition file to the given path
    pub fn fetch_zone_definitions(&self, dest: &Path) -> Result<()> {
        let response = self
            .client
            .get(ZONE_DEFINITIONS_URL)
            .send()
            .context("Failed to fetch zone definitions")?;

        if !response.status().is_success() {
            bail!("Zone definition download failed: HTTP {}", response.status());
        }

        let mut file =
            fs::File::create(dest).context("Failed to create destination file")?;
        let mut reader = response;
        io::copy(&mut reader, &mut file).context("Failed to write zone definitions")?;

        Ok(())
    }
}

/// Download zoneDefinitions.json into the output directory. Refuses to
/// overwrite an existing file unless forced.
pub fn download_zone_definitions(output_dir: &Path, force: bool) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).context("Failed to create output directory")?;

    let dest = output_dir.join(ZONE_DEFINITIONS_FILE);
    if dest.exists() && !force {
        bail!("{} already exists; pass --force to overwrite", dest.display());
    }

    let client = NgsClient::new()?;
    client.fetch_zone_definitions(&dest)?;

    Ok(dest)
}
