//! State store: the single source of truth for the current snapshot.
//!
//! # Responsibility
//! - Own the current `AppState` and apply actions through the reducer.
//! - Mirror every new snapshot to the injected persistence repository.
//!
//! # Invariants
//! - The snapshot is loaded exactly once, at `Store::open`, before any
//!   dispatch.
//! - Every successful reduction triggers exactly one best-effort save;
//!   storage failures never surface to callers.

pub mod action;
pub mod reducer;

use crate::model::state::AppState;
use crate::persist::snapshot_repo::{load_or_initial, mirror, SnapshotRepository};
use crate::store::action::Action;
use crate::store::reducer::reduce;
use log::warn;

/// Holds the current snapshot and routes actions through the reducer.
///
/// Generic over the persistence seam so tests and alternative storage
/// media inject their own repository.
pub struct Store<R: SnapshotRepository> {
    state: AppState,
    repo: R,
}

impl<R: SnapshotRepository> Store<R> {
    /// Opens the store, restoring the persisted snapshot.
    ///
    /// A missing or unreadable snapshot yields the canonical empty state;
    /// recovery happens inside the persistence layer.
    pub fn open(repo: R) -> Self {
        let state = load_or_initial(&repo);
        Self { state, repo }
    }

    /// The current snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies one action and mirrors the new snapshot to storage.
    ///
    /// The mirror write is fire-and-forget: a rejected write is logged and
    /// the in-memory snapshot stays authoritative for the session.
    pub fn dispatch(&mut self, action: &Action) -> &AppState {
        self.state = reduce(&self.state, action);
        mirror(&self.repo, &self.state);
        &self.state
    }

    /// Applies a wire-level action document.
    ///
    /// Unknown kinds and malformed payloads leave the state unchanged and
    /// trigger no save.
    pub fn dispatch_json(&mut self, raw: &str) -> &AppState {
        match Action::from_json(raw) {
            Some(action) => self.dispatch(&action),
            None => {
                warn!("event=action_ignored module=store reason=undecodable_document");
                &self.state
            }
        }
    }
}
