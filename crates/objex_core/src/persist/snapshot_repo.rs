//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Bridge the in-memory snapshot to one durable key-value slot.
//! - Keep SQL and JSON codec details inside the persistence boundary.
//!
//! # Invariants
//! - The slot key is fixed; saving overwrites the single row in place.
//! - A corrupt slot body is a read failure, not fatal: `load_or_initial`
//!   logs it and falls back to the canonical empty state.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::state::AppState;
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key of the slot holding the serialized snapshot.
pub const SNAPSHOT_SLOT: &str = "app_state";

pub type PersistResult<T> = Result<T, SnapshotError>;

/// Persistence error for snapshot load/save operations.
#[derive(Debug)]
pub enum SnapshotError {
    /// The stored body could not be decoded into an `AppState`.
    /// Load-path failure kind.
    Corrupt(String),
    /// The in-memory snapshot could not be encoded for writing.
    /// Save-path failure kind.
    Encode(String),
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Corrupt(message) => write!(f, "corrupt snapshot body: {message}"),
            Self::Encode(message) => write!(f, "failed to encode snapshot: {message}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for SnapshotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SnapshotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Load/save contract injected into the store.
///
/// `load_snapshot` distinguishes "no prior state" (`Ok(None)`) from a read
/// failure; the recovery policy lives in [`load_or_initial`], not here.
pub trait SnapshotRepository {
    fn load_snapshot(&self) -> PersistResult<Option<AppState>>;
    fn save_snapshot(&self, state: &AppState) -> PersistResult<()>;
}

/// SQLite-backed snapshot repository over the fixed slot.
pub struct SqliteSnapshotRepository {
    conn: Connection,
}

impl SqliteSnapshotRepository {
    /// Wraps a bootstrapped connection, verifying the schema preconditions.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` when the slot table is absent.
    pub fn try_new(conn: Connection) -> PersistResult<Self> {
        let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(SnapshotError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'snapshots'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(SnapshotError::MissingRequiredTable("snapshots"));
        }

        Ok(Self { conn })
    }
}

impl SnapshotRepository for SqliteSnapshotRepository {
    fn load_snapshot(&self) -> PersistResult<Option<AppState>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM snapshots WHERE slot = ?1;",
                [SNAPSHOT_SLOT],
                |row| row.get(0),
            )
            .optional()?;

        match body {
            Some(body) => {
                let state = serde_json::from_str(&body)
                    .map_err(|err| SnapshotError::Corrupt(err.to_string()))?;
                Ok(Some(state))
            }
            None => Ok(None),
        }
    }

    fn save_snapshot(&self, state: &AppState) -> PersistResult<()> {
        let body = serde_json::to_string(state)
            .map_err(|err| SnapshotError::Encode(err.to_string()))?;

        self.conn.execute(
            "INSERT INTO snapshots (slot, body, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(slot) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at;",
            params![SNAPSHOT_SLOT, body],
        )?;

        Ok(())
    }
}

/// Restores the snapshot, recovering to the initial state on any failure.
///
/// A missing slot and an unreadable slot both yield the canonical empty
/// state; the latter is logged as a read failure first.
pub fn load_or_initial<R: SnapshotRepository>(repo: &R) -> AppState {
    match repo.load_snapshot() {
        Ok(Some(state)) => {
            info!(
                "event=snapshot_load module=persist status=ok objects={} relations={}",
                state.objects.len(),
                state.relations.len()
            );
            state
        }
        Ok(None) => {
            info!("event=snapshot_load module=persist status=ok prior_state=none");
            AppState::initial()
        }
        Err(err) => {
            error!("event=snapshot_load module=persist status=error error={err}");
            AppState::initial()
        }
    }
}

/// Mirrors a snapshot to storage, swallowing write failures.
///
/// Losing persistence is degraded-but-functional; the in-memory store
/// remains authoritative for the session.
pub fn mirror<R: SnapshotRepository>(repo: &R, state: &AppState) {
    if let Err(err) = repo.save_snapshot(state) {
        error!("event=snapshot_save module=persist status=error error={err}");
    }
}
