//! SQLite bootstrap for the snapshot database.
//!
//! # Responsibility
//! - Open file or in-memory connections backing the snapshot slot.
//! - Apply schema migrations before the slot is touched.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Returned connections have migrations fully applied.

use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;

pub mod migrations;

use migrations::apply_migrations;

pub type DbResult<T> = Result<T, DbError>;

/// Bootstrap error for the snapshot database.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The on-disk schema was written by a newer binary; refusing to touch
    /// it protects the stored snapshot from being misread.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Opens the snapshot database file and applies all pending migrations.
///
/// # Side effects
/// - Emits `db_open` logging events with status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let conn = Connection::open(path).map_err(|err| {
        error!("event=db_open module=db status=error mode=file error={err}");
        err
    })?;
    bootstrap_connection(conn, "file")
}

/// Opens an in-memory snapshot database and applies all pending migrations.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let conn = Connection::open_in_memory().map_err(|err| {
        error!("event=db_open module=db status=error mode=memory error={err}");
        err
    })?;
    bootstrap_connection(conn, "memory")
}

fn bootstrap_connection(mut conn: Connection, mode: &str) -> DbResult<Connection> {
    conn.busy_timeout(Duration::from_secs(5))?;
    match apply_migrations(&mut conn) {
        Ok(()) => {
            info!("event=db_open module=db status=ok mode={mode}");
            Ok(conn)
        }
        Err(err) => {
            error!("event=db_open module=db status=error mode={mode} error={err}");
            Err(err)
        }
    }
}
