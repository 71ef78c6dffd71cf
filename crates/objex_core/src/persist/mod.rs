//! Persistence layer for the application snapshot.
//!
//! # Responsibility
//! - Define the snapshot load/save contract injected into the store.
//! - Isolate SQLite and serialization details from state transitions.
//!
//! # Invariants
//! - Storage failures are recovered here: a failed load yields the initial
//!   state, a failed save is logged and swallowed. Neither reaches callers.

pub mod snapshot_repo;
