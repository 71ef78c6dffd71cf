//! Catalog object record.
//!
//! # Responsibility
//! - Define the user-visible record managed by the catalog.
//! - Provide id minting for boundary layers that create records.
//!
//! # Invariants
//! - `id` is opaque, stable and never reused for another object.
//! - All non-id fields are mutable through edit transitions only.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque stable identifier for a catalog object.
///
/// Kept as a type alias to make semantic intent explicit in signatures. The
/// reducer never inspects the contents; uniqueness is the creator's contract.
pub type ObjectId = String;

/// Mints a fresh opaque id in string form.
///
/// Used by boundary layers (FFI, import) when creating records; core
/// transitions never mint ids themselves.
pub fn mint_id() -> ObjectId {
    Uuid::new_v4().to_string()
}

/// A typed record in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectItem {
    /// Stable opaque id, immutable once created.
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    /// Free-form user category. Serialized as `type` to match the
    /// external snapshot schema.
    #[serde(rename = "type")]
    pub kind: String,
}

impl ObjectItem {
    /// Creates an object with a freshly minted id.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self::with_id(mint_id(), name, description, kind)
    }

    /// Creates an object with a caller-provided stable id.
    ///
    /// Used by import/restore paths where identity already exists.
    pub fn with_id(
        id: impl Into<ObjectId>,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            kind: kind.into(),
        }
    }
}
