//! Domain model for the object catalog.
//!
//! # Responsibility
//! - Define the canonical records held by the application snapshot.
//! - Keep one serialized shape shared by persistence and the wire format.
//!
//! # Invariants
//! - Every object and relation is identified by a stable, opaque string id.
//! - `AppState` is the entire snapshot; it has no hidden fields.

pub mod object;
pub mod relation;
pub mod state;
