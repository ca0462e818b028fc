//! Read-only access to the Things store.
//!
//! The walker depends on a small set of ordered listing queries; each one is
//! a method on [`Database`] returning fully materialised typed records. A
//! query with no matching rows yields an empty `Vec`, never an error.
//!
//! Every task and project listing applies the visibility predicate
//! `trashed = 0 AND status < 2`, which hides canceled and trashed records
//! together with everything below them.

use std::path::Path;

use rusqlite::{Connection, OpenFlags, Params, Row};

use crate::error::{DatabaseResultExt, ExportError, Result};

pub mod area_queries;
pub mod tag_queries;
pub mod task_queries;

/// Read-only connection to a Things database.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens the store at `path` without ever creating or modifying it.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::DatabaseNotFound` if the file does not exist
    /// Returns `ExportError::Database` if SQLite refuses to open it
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ExportError::DatabaseNotFound {
                path: path.to_path_buf(),
            });
        }

        let connection = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .db_context("Failed to open database connection")?;

        Ok(Self { connection })
    }

    /// Runs `sql` and maps every returned row, consuming the result fully
    /// before returning.
    pub(crate) fn query_rows<T, P, F>(&self, sql: &str, params: P, map: F, what: &str) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context(&format!("Failed to prepare query for {what}"))?;

        let rows = stmt
            .query_map(params, map)
            .db_context(&format!("Failed to query {what}"))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context(&format!("Failed to read {what}"))?;

        Ok(rows)
    }

    /// Closes the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<()> {
        self.connection
            .close()
            .map_err(|(_, e)| ExportError::database_error("Failed to close database", e))
    }
}
