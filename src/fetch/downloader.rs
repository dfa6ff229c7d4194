use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use reqwest::Client;

use crate::error::Result;

/// Filename for a report fetched on the given UTC day. Two fetches on the
/// same day resolve to the same name and overwrite each other.
pub fn report_filename(date: NaiveDate) -> String {
    format!("covid_report_{}.csv", date.format("%Y_%m_%d"))
}

pub struct CsvFetcher {
    client: Client,
}

impl CsvFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("covid2sqlite/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Download the CSV at `url` into a file named by the current UTC date,
    /// in the current directory. Returns the path written.
    pub async fn download(&self, url: &str) -> Result<PathBuf> {
        let filename = report_filename(Utc::now().date_naive());
        self.download_to(url, Path::new(&filename)).await
    }

    /// Download the CSV at `url` to an explicit destination, overwriting any
    /// existing file. The body is fetched fully before the destination is
    /// opened, so a failed request leaves no file behind.
    pub async fn download_to(&self, url: &str, dest: &Path) -> Result<PathBuf> {
        tracing::info!("Fetching CSV from {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(
                anyhow::anyhow!("Failed to fetch CSV: HTTP {}", response.status()).into(),
            );
        }

        let bytes = response.bytes().await?;
        tokio::fs::write(dest, &bytes).await?;
        tracing::info!("Saved {} bytes to {}", bytes.len(), dest.display());

        Ok(dest.to_path_buf())
    }
}

impl Default for CsvFetcher {
    fn default() -> Self {
        Self::new()
    }
}
