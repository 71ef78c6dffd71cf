//! Application snapshot.
//!
//! # Responsibility
//! - Hold the complete state of the catalog as one value.
//!
//! # Invariants
//! - `objects` and `relations` keep insertion order.
//! - The snapshot is the unit of persistence; serializing it captures
//!   everything.

use crate::model::object::ObjectItem;
use crate::model::relation::Relation;
use serde::{Deserialize, Serialize};

/// The entire application state: objects, relations and the active filter.
///
/// Treated as immutable by the store; every transition produces a new
/// snapshot, so prior snapshots remain valid for inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub objects: Vec<ObjectItem>,
    pub relations: Vec<Relation>,
    pub search_term: String,
}

impl AppState {
    /// The canonical empty state used before any snapshot exists.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Looks up an object by its stable id.
    pub fn object(&self, id: &str) -> Option<&ObjectItem> {
        self.objects.iter().find(|obj| obj.id == id)
    }
}
