//! Directed relation between two catalog objects.
//!
//! # Invariants
//! - A relation must never outlive either endpoint object; the reducer
//!   enforces this by cascade-deleting relations with their objects.
//! - Creation performs no referential check against existing object ids, so
//!   relations may dangle or duplicate. Preserved for snapshot compatibility;
//!   candidate invariant to tighten later.

use crate::model::object::{mint_id, ObjectId};
use serde::{Deserialize, Serialize};

/// Opaque stable identifier for a relation.
pub type RelationId = String;

/// A directed edge between two objects, referenced by their stable ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub id: RelationId,
    pub from_object_id: ObjectId,
    pub to_object_id: ObjectId,
}

impl Relation {
    /// Creates a relation with a freshly minted id.
    pub fn new(from_object_id: impl Into<ObjectId>, to_object_id: impl Into<ObjectId>) -> Self {
        Self::with_id(mint_id(), from_object_id, to_object_id)
    }

    /// Creates a relation with a caller-provided stable id.
    pub fn with_id(
        id: impl Into<RelationId>,
        from_object_id: impl Into<ObjectId>,
        to_object_id: impl Into<ObjectId>,
    ) -> Self {
        Self {
            id: id.into(),
            from_object_id: from_object_id.into(),
            to_object_id: to_object_id.into(),
        }
    }

    /// Returns whether this relation references the given object on either end.
    pub fn references(&self, object_id: &str) -> bool {
        self.from_object_id == object_id || self.to_object_id == object_id
    }
}
