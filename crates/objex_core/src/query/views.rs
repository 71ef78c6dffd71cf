//! List filtering and one-hop relation lookup.
//!
//! # Invariants
//! - Matching is case-insensitive substring over name and description.
//! - An empty search term matches every object.
//! - Result order follows snapshot insertion order.

use crate::model::object::ObjectItem;
use crate::model::state::AppState;

/// Objects visible under the snapshot's current search term.
pub fn visible_objects(state: &AppState) -> Vec<&ObjectItem> {
    let term = state.search_term.to_lowercase();
    state
        .objects
        .iter()
        .filter(|obj| {
            obj.name.to_lowercase().contains(&term)
                || obj.description.to_lowercase().contains(&term)
        })
        .collect()
}

/// The object reached by the first outgoing relation of `object_id`.
///
/// Returns `None` when the object has no outgoing relation or when the
/// relation dangles (its target no longer exists in the snapshot). The UI
/// renders its own sentinel label for both cases.
pub fn related_object<'a>(state: &'a AppState, object_id: &str) -> Option<&'a ObjectItem> {
    let edge = state
        .relations
        .iter()
        .find(|rel| rel.from_object_id == object_id)?;
    state.object(&edge.to_object_id)
}
