use regex::Regex;

use crate::error::{AppError, Result};

/// Identifiers are spliced into DDL text, so anything outside this shape is
/// rejected rather than quoted.
fn validate_identifier(name: &str) -> Result<()> {
    let ident = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid identifier regex");
    if ident.is_match(name) {
        Ok(())
    } else {
        Err(AppError::Identifier(format!(
            "'{name}' is not a valid SQL identifier"
        )))
    }
}

/// Build `CREATE TABLE IF NOT EXISTS <table> (<col> TEXT, ...)` with an
/// optional composite primary key. Repeated runs against the same database
/// leave an existing table untouched.
pub fn create_table_sql(
    table: &str,
    columns: &[String],
    primary_keys: &[String],
) -> Result<String> {
    validate_identifier(table)?;
    if columns.is_empty() {
        return Err(AppError::InvalidInput("no columns in header".to_string()));
    }
    for column in columns {
        validate_identifier(column)?;
    }
    for pk in primary_keys {
        validate_identifier(pk)?;
        if !columns.contains(pk) {
            return Err(AppError::Identifier(format!(
                "primary key column '{pk}' is not in the header"
            )));
        }
    }

    let column_defs = columns
        .iter()
        .map(|c| format!("{c} TEXT"))
        .collect::<Vec<_>>()
        .join(", ");

    let pk_clause = if primary_keys.is_empty() {
        String::new()
    } else {
        format!(", PRIMARY KEY ({})", primary_keys.join(", "))
    };

    Ok(format!(
        "CREATE TABLE IF NOT EXISTS {table} ({column_defs}{pk_clause});"
    ))
}

/// Build `INSERT INTO <table> VALUES (?1, ..., ?n)` with one placeholder
/// per header column.
pub fn insert_sql(table: &str, column_count: usize) -> Result<String> {
    validate_identifier(table)?;
    if column_count == 0 {
        return Err(AppError::InvalidInput("no columns to insert".to_string()));
    }

    let placeholders = (1..=column_count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("INSERT INTO {table} VALUES ({placeholders});"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn create_table_lists_columns_in_order() {
        let sql = create_table_sql("covid", &cols(&["a_b", "c"]), &[]).unwrap();
        assert_eq!(sql, "CREATE TABLE IF NOT EXISTS covid (a_b TEXT, c TEXT);");
    }

    #[test]
    fn primary_key_clause_is_appended() {
        let sql = create_table_sql(
            "covid",
            &cols(&["day", "country", "cases"]),
            &cols(&["day", "country"]),
        )
        .unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS covid (day TEXT, country TEXT, cases TEXT, PRIMARY KEY (day, country));"
        );
    }

    #[test]
    fn hostile_identifiers_are_rejected() {
        assert!(create_table_sql("covid; DROP TABLE x", &cols(&["a"]), &[]).is_err());
        assert!(create_table_sql("covid", &cols(&["a b"]), &[]).is_err());
        assert!(create_table_sql("covid", &cols(&["a-b"]), &[]).is_err());
        assert!(create_table_sql("covid", &cols(&["a\"b"]), &[]).is_err());
        assert!(create_table_sql("1starts_with_digit", &cols(&["a"]), &[]).is_err());
    }

    #[test]
    fn primary_key_must_be_a_header_column() {
        let err = create_table_sql("covid", &cols(&["a", "b"]), &cols(&["z"]));
        assert!(matches!(err, Err(AppError::Identifier(_))));
    }

    #[test]
    fn empty_header_is_rejected() {
        assert!(create_table_sql("covid", &[], &[]).is_err());
        assert!(insert_sql("covid", 0).is_err());
    }

    #[test]
    fn insert_has_one_placeholder_per_column() {
        let sql = insert_sql("covid", 3).unwrap();
        assert_eq!(sql, "INSERT INTO covid VALUES (?1, ?2, ?3);");
    }
}
