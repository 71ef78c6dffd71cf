//! Pure state-transition function.
//!
//! # Responsibility
//! - Map `(snapshot, action)` to the next snapshot.
//!
//! # Invariants
//! - Total over its input domain: no error path, no panic, no I/O.
//! - Deleting an object removes its relations in the same transition,
//!   never partially.
//! - The input snapshot is never mutated; callers keep prior snapshots.

use crate::model::state::AppState;
use crate::store::action::Action;

/// Applies one action to a snapshot and returns the next snapshot.
///
/// Missing-id edits and deletes are defined no-ops, not failures.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::AddObject(object) => next.objects.push(object.clone()),
        Action::EditObject(object) => {
            if let Some(slot) = next.objects.iter_mut().find(|obj| obj.id == object.id) {
                *slot = object.clone();
            }
        }
        Action::DeleteObject(id) => {
            next.objects.retain(|obj| obj.id != *id);
            next.relations.retain(|rel| !rel.references(id));
        }
        Action::AddRelation(relation) => next.relations.push(relation.clone()),
        Action::DeleteRelation(id) => next.relations.retain(|rel| rel.id != *id),
        Action::SetSearchTerm(term) => next.search_term = term.clone(),
        Action::LoadState(snapshot) => next = snapshot.clone(),
    }
    next
}
