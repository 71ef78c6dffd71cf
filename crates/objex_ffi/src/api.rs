//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level catalog functions to the embedding UI.
//! - Carry the UI-layer validation rules (required fields, endpoint
//!   selection) so the reducer stays free of them.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The snapshot is loaded exactly once per process, at `open_catalog`,
//!   before any action dispatch.
//! - Storage failures never cross this boundary; only validation messages do.

use log::info;
use objex_core::db::open_db;
use objex_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, related_object, visible_objects, Action, AppState, ObjectItem,
    Relation, SqliteSnapshotRepository, Store,
};
use std::sync::{Mutex, OnceLock, PoisonError};

/// Label rendered for objects without a resolvable outgoing relation.
const NO_RELATION_LABEL: &str = "No object relations";

static CATALOG: OnceLock<Mutex<Store<SqliteSnapshotRepository>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same configuration (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for catalog commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Optional created record id.
    pub id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl CatalogActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            id: None,
            message: message.into(),
        }
    }

    fn created(message: impl Into<String>, id: String) -> Self {
        Self {
            ok: true,
            id: Some(id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// One row of the filtered list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogObjectView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: String,
    /// Name of the first related object, or the no-relation label.
    pub related_name: String,
}

/// Opens the catalog database and restores the persisted snapshot.
///
/// # FFI contract
/// - Must be called before any command or query function.
/// - Calling it again is a no-op returning success; the slot is loaded
///   once per process.
/// - Never panics; storage problems degrade to the empty initial state.
#[flutter_rust_bridge::frb(sync)]
pub fn open_catalog(db_path: String) -> CatalogActionResponse {
    if CATALOG.get().is_some() {
        return CatalogActionResponse::success("Catalog already open.");
    }

    let conn = match open_db(db_path.trim()) {
        Ok(conn) => conn,
        Err(err) => return CatalogActionResponse::failure(format!("open_catalog failed: {err}")),
    };
    let repo = match SqliteSnapshotRepository::try_new(conn) {
        Ok(repo) => repo,
        Err(err) => return CatalogActionResponse::failure(format!("open_catalog failed: {err}")),
    };

    let store = Store::open(repo);
    match CATALOG.set(Mutex::new(store)) {
        Ok(()) => {
            info!("event=catalog_open module=ffi status=ok");
            CatalogActionResponse::success("Catalog open.")
        }
        // Lost a race with another opener; the winning store is in place.
        Err(_) => CatalogActionResponse::success("Catalog already open."),
    }
}

/// Creates an object after validating the required fields.
///
/// All three fields must be non-empty after trimming; the trimmed values
/// are what gets stored.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Returns the minted object id on success.
#[flutter_rust_bridge::frb(sync)]
pub fn add_object(name: String, description: String, kind: String) -> CatalogActionResponse {
    let Some((name, description, kind)) = validated_fields(&name, &description, &kind) else {
        return CatalogActionResponse::failure("All fields are required.");
    };

    with_store(|store| {
        let item = ObjectItem::new(name, description, kind);
        let id = item.id.clone();
        store.dispatch(&Action::AddObject(item));
        CatalogActionResponse::created("Object added.", id)
    })
}

/// Edits an existing object after validating the required fields.
///
/// # FFI contract
/// - Sync call; never panics.
/// - A missing id is a silent no-op in the core; the envelope still
///   reports success, matching the reducer contract.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_object(
    id: String,
    name: String,
    description: String,
    kind: String,
) -> CatalogActionResponse {
    let Some((name, description, kind)) = validated_fields(&name, &description, &kind) else {
        return CatalogActionResponse::failure("All fields are required.");
    };

    with_store(|store| {
        store.dispatch(&Action::EditObject(ObjectItem::with_id(
            id, name, description, kind,
        )));
        CatalogActionResponse::success("Object updated.")
    })
}

/// Deletes an object; its relations are removed in the same transition.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_object(id: String) -> CatalogActionResponse {
    with_store(|store| {
        store.dispatch(&Action::DeleteObject(id));
        CatalogActionResponse::success("Object deleted.")
    })
}

/// Links two objects with a directed relation.
///
/// Both endpoints must be selected; beyond that no referential check is
/// performed, per the core's lenient relation contract.
#[flutter_rust_bridge::frb(sync)]
pub fn add_relation(from_object_id: String, to_object_id: String) -> CatalogActionResponse {
    let from = from_object_id.trim();
    let to = to_object_id.trim();
    if from.is_empty() || to.is_empty() {
        return CatalogActionResponse::failure("Both objects must be selected.");
    }

    with_store(|store| {
        let relation = Relation::new(from, to);
        let id = relation.id.clone();
        store.dispatch(&Action::AddRelation(relation));
        CatalogActionResponse::created("Relation added.", id)
    })
}

/// Deletes a relation by id; a missing id is a defined no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_relation(id: String) -> CatalogActionResponse {
    with_store(|store| {
        store.dispatch(&Action::DeleteRelation(id));
        CatalogActionResponse::success("Relation deleted.")
    })
}

/// Replaces the search term verbatim. Dispatched on every keystroke.
#[flutter_rust_bridge::frb(sync)]
pub fn set_search_term(term: String) -> CatalogActionResponse {
    with_store(|store| {
        store.dispatch(&Action::SetSearchTerm(term));
        CatalogActionResponse::success("Search term updated.")
    })
}

/// Lists objects visible under the current search term, with their
/// one-hop related object resolved for display.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Returns an empty list when the catalog is not open.
#[flutter_rust_bridge::frb(sync)]
pub fn list_visible() -> Vec<CatalogObjectView> {
    let Some(catalog) = CATALOG.get() else {
        return Vec::new();
    };
    let store = catalog.lock().unwrap_or_else(PoisonError::into_inner);
    let state = store.state();

    visible_objects(state)
        .into_iter()
        .map(|obj| CatalogObjectView {
            id: obj.id.clone(),
            name: obj.name.clone(),
            description: obj.description.clone(),
            kind: obj.kind.clone(),
            related_name: related_name_for(state, &obj.id),
        })
        .collect()
}

/// Name of the first object related to `object_id`, for display.
///
/// # FFI contract
/// - Sync call; never panics.
/// - Returns the no-relation label when the object has no outgoing
///   relation, the relation dangles, or the catalog is not open.
#[flutter_rust_bridge::frb(sync)]
pub fn related_object_name(object_id: String) -> String {
    let Some(catalog) = CATALOG.get() else {
        return NO_RELATION_LABEL.to_string();
    };
    let store = catalog.lock().unwrap_or_else(PoisonError::into_inner);
    related_name_for(store.state(), &object_id)
}

/// Current search term, for UI state restoration.
#[flutter_rust_bridge::frb(sync)]
pub fn current_search_term() -> String {
    let Some(catalog) = CATALOG.get() else {
        return String::new();
    };
    let store = catalog.lock().unwrap_or_else(PoisonError::into_inner);
    store.state().search_term.clone()
}

fn related_name_for(state: &AppState, object_id: &str) -> String {
    related_object(state, object_id)
        .map(|obj| obj.name.clone())
        .unwrap_or_else(|| NO_RELATION_LABEL.to_string())
}

fn validated_fields(
    name: &str,
    description: &str,
    kind: &str,
) -> Option<(String, String, String)> {
    let name = name.trim();
    let description = description.trim();
    let kind = kind.trim();
    if name.is_empty() || description.is_empty() || kind.is_empty() {
        return None;
    }
    Some((name.to_string(), description.to_string(), kind.to_string()))
}

fn with_store(
    f: impl FnOnce(&mut Store<SqliteSnapshotRepository>) -> CatalogActionResponse,
) -> CatalogActionResponse {
    let Some(catalog) = CATALOG.get() else {
        return CatalogActionResponse::failure("Catalog is not open; call open_catalog first.");
    };
    let mut store = catalog.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut store)
}
