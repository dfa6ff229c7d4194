use std::path::PathBuf;

mod config;
mod db;
mod error;
mod fetch;
mod report;

use config::Config;
use error::Result;
use fetch::CsvFetcher;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let quiet = args.iter().any(|a| a == "--quiet");

    // Initialize logging (progress lines by default, --quiet keeps only
    // warnings and errors)
    let default_level = if quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = Config::load()?;

    // Flag overrides
    if let Some(url) = flag_value(&args, "--url") {
        config.source_url = url;
    }
    if let Some(db) = flag_value(&args, "--db") {
        config.db_path = db;
    }
    if let Some(table) = flag_value(&args, "--table") {
        config.table_name = table;
    }
    if let Some(pks) = flag_value(&args, "--pk") {
        config.primary_keys = pks.split(',').map(|s| s.trim().to_string()).collect();
    }

    // --file skips the fetch and loads an existing CSV
    let csv_path = match flag_value(&args, "--file") {
        Some(path) => PathBuf::from(path),
        None => {
            Config::validate_source_url(&config.source_url)?;
            let fetcher = CsvFetcher::new();
            fetcher.download(&config.source_url).await?
        }
    };

    let inserted = db::load_csv(
        &config.db_path,
        &csv_path,
        &config.table_name,
        &config.primary_keys,
    )
    .await?;

    if !quiet {
        println!(
            "Loaded {} rows from {} into '{}' ({})",
            inserted,
            csv_path.display(),
            config.table_name,
            config.db_path
        );
    }

    Ok(())
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
