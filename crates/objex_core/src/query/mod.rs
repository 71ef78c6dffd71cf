//! Read-only views derived from a snapshot.
//!
//! # Responsibility
//! - Keep list-shaping logic in core so every embedding renders identically.
//!
//! # Invariants
//! - Queries never mutate the snapshot.

pub mod views;
