use std::path::Path;

use csv::StringRecord;

use crate::error::{AppError, Result};

/// Hyphens are rewritten to underscores because header fields become SQLite
/// column identifiers, where hyphens are error-prone. Everything else is
/// kept verbatim.
pub fn clean_column_name(raw: &str) -> String {
    raw.replace('-', "_")
}

/// Read the first line of `path` as the column list, cleaned and in source
/// order.
pub fn read_header(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?;

    if headers.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "no header line in '{}'",
            path.display()
        )));
    }

    let header: Vec<String> = headers.iter().map(clean_column_name).collect();
    tracing::debug!("Header from {}: {:?}", path.display(), header);
    Ok(header)
}

/// Read every data row of `path`, excluding the header line. Field counts
/// are checked against the header: a ragged row fails the whole read.
pub fn read_records(path: &Path) -> Result<Vec<StringRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn hyphens_become_underscores() {
        assert_eq!(clean_column_name("a-b"), "a_b");
        assert_eq!(clean_column_name("date-rep-orted"), "date_rep_orted");
        assert_eq!(clean_column_name("plain"), "plain");
    }

    #[test]
    fn header_is_cleaned_and_ordered() {
        let file = write_csv("a-b,c,d-e-f\n1,2,3\n");
        let header = read_header(file.path()).unwrap();
        assert_eq!(header, vec!["a_b", "c", "d_e_f"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_header(Path::new("no_such_file.csv")).is_err());
    }

    #[test]
    fn empty_file_is_an_error() {
        let file = write_csv("");
        assert!(read_header(file.path()).is_err());
    }

    #[test]
    fn records_exclude_the_header_line() {
        let file = write_csv("a-b,c\n1,2\n3,4\n");
        let records = read_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "1");
        assert_eq!(&records[1][1], "4");
    }

    #[test]
    fn ragged_row_fails_the_read() {
        let file = write_csv("a,b\n1,2\n3\n");
        let result = read_records(file.path());
        assert!(matches!(result, Err(AppError::Csv(_))));
    }
}
