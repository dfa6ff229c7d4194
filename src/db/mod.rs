mod repository;
mod schema;

use std::path::Path;

pub use repository::Repository;

use crate::error::{AppError, Result};
use crate::report;

/// End-to-end load of a CSV file into `table_name` inside the database at
/// `db_path`. The header is parsed once to derive the schema and is not
/// inserted as a data row. Returns the number of rows inserted.
pub async fn load_csv(
    db_path: &str,
    csv_path: &Path,
    table_name: &str,
    primary_keys: &[String],
) -> Result<usize> {
    if csv_path.as_os_str().is_empty() {
        return Err(AppError::InvalidInput(
            "no CSV filename supplied".to_string(),
        ));
    }

    // Header and rows are read before the database file is touched, so a
    // missing or malformed CSV never creates an empty database.
    let header = report::read_header(csv_path)?;
    let rows = report::read_records(csv_path)?;

    let repo = Repository::open(db_path).await?;
    repo.create_table(table_name, &header, primary_keys).await?;
    let inserted = repo.insert_rows(table_name, header.len(), rows).await?;

    tracing::info!(
        "Loaded {} rows from {} into table '{}'",
        inserted,
        csv_path.display(),
        table_name
    );
    Ok(inserted)
}
