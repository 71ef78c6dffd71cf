//! Core domain logic for Objex.
//! This crate is the single source of truth for catalog state transitions.

pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod query;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::object::{mint_id, ObjectId, ObjectItem};
pub use model::relation::{Relation, RelationId};
pub use model::state::AppState;
pub use persist::snapshot_repo::{
    load_or_initial, mirror, PersistResult, SnapshotError, SnapshotRepository,
    SqliteSnapshotRepository, SNAPSHOT_SLOT,
};
pub use query::views::{related_object, visible_objects};
pub use store::action::Action;
pub use store::reducer::reduce;
pub use store::Store;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
