//! State-transition actions and their wire format.
//!
//! # Responsibility
//! - Define the closed set of transitions the reducer understands.
//! - Decode boundary-supplied action documents without failing the core.
//!
//! # Invariants
//! - The wire shape is `{"type": KIND, "payload": ...}` with upper snake
//!   case kinds, matching the persisted snapshot's field naming.
//! - Undecodable documents (unknown kind, malformed payload) are never
//!   errors; they decode to `None` and dispatch as a defined no-op.

use crate::model::object::{ObjectId, ObjectItem};
use crate::model::relation::{Relation, RelationId};
use crate::model::state::AppState;
use serde::{Deserialize, Serialize};

/// One state transition request.
///
/// The enum is closed: every variant has defined semantics and the reducer
/// is total over it. Unknown action kinds exist only at the wire boundary,
/// where [`Action::from_json`] maps them to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Appends the object. The caller guarantees id uniqueness.
    AddObject(ObjectItem),
    /// Replaces the object with a matching id; no-op when none matches.
    EditObject(ObjectItem),
    /// Removes the object and every relation referencing it, atomically.
    DeleteObject(ObjectId),
    /// Appends the relation. No referential check against existing object
    /// ids and duplicates are permitted; candidate invariant to tighten.
    AddRelation(Relation),
    /// Removes the relation with a matching id; no-op when none matches.
    DeleteRelation(RelationId),
    /// Replaces the search term verbatim, no trimming or normalization.
    SetSearchTerm(String),
    /// Trusted bulk replace of the whole snapshot. Bypasses all other
    /// invariants; gate to startup/import flows only.
    LoadState(AppState),
}

impl Action {
    /// Decodes a wire-level action document.
    ///
    /// Returns `None` for unknown kinds and malformed payloads. Callers
    /// treat `None` as "leave the state unchanged"; it is not an error.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}
