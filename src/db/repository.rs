use csv::StringRecord;
use tokio_rusqlite::Connection;

use crate::error::Result;

use super::schema;

pub struct Repository {
    conn: Connection,
}

impl Repository {
    pub async fn open(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path).await?;
        Ok(Self { conn })
    }

    /// Create the destination table if it does not exist. An existing
    /// table's column definitions are never altered, even if the header
    /// has since changed.
    pub async fn create_table(
        &self,
        table: &str,
        columns: &[String],
        primary_keys: &[String],
    ) -> Result<()> {
        let ddl = schema::create_table_sql(table, columns, primary_keys)?;
        tracing::debug!("{}", ddl);

        self.conn
            .call(move |conn| {
                conn.execute_batch(&ddl)?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    /// Insert every row inside one transaction, positionally bound to the
    /// header columns. Any failing row aborts the whole batch; nothing is
    /// committed, so a failed load leaves no partial rows behind.
    pub async fn insert_rows(
        &self,
        table: &str,
        column_count: usize,
        rows: Vec<StringRecord>,
    ) -> Result<usize> {
        let sql = schema::insert_sql(table, column_count)?;
        tracing::debug!("{}", sql);

        let inserted = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                {
                    let mut stmt = tx.prepare(&sql)?;
                    for row in &rows {
                        stmt.execute(rusqlite::params_from_iter(row.iter()))?;
                    }
                }
                tx.commit()?;
                Ok(rows.len())
            })
            .await?;
        Ok(inserted)
    }
}
