use objex_core::db::migrations::latest_version;
use objex_core::db::{open_db, open_db_in_memory};
use objex_core::{
    load_or_initial, AppState, ObjectItem, Relation, SnapshotError, SnapshotRepository,
    SqliteSnapshotRepository, SNAPSHOT_SLOT,
};
use rusqlite::Connection;

fn sample_state() -> AppState {
    AppState {
        objects: vec![
            ObjectItem::with_id("1", "Lamp", "desk lamp", "furniture"),
            ObjectItem::with_id("2", "Desk", "standing desk", "furniture"),
        ],
        relations: vec![Relation::with_id("r1", "1", "2")],
        search_term: "desk".to_string(),
    }
}

#[test]
fn empty_slot_loads_as_no_prior_state() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(conn).unwrap();

    assert_eq!(repo.load_snapshot().unwrap(), None);
    assert_eq!(load_or_initial(&repo), AppState::initial());
}

#[test]
fn save_then_load_round_trips_the_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(conn).unwrap();

    let state = sample_state();
    repo.save_snapshot(&state).unwrap();

    let loaded = repo.load_snapshot().unwrap().unwrap();
    assert_eq!(loaded, state);
}

#[test]
fn saving_twice_overwrites_the_single_slot_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("objex.db");

    let repo = SqliteSnapshotRepository::try_new(open_db(&path).unwrap()).unwrap();
    repo.save_snapshot(&sample_state()).unwrap();
    let second = AppState {
        search_term: "second".to_string(),
        ..AppState::initial()
    };
    repo.save_snapshot(&second).unwrap();
    assert_eq!(repo.load_snapshot().unwrap().unwrap(), second);
    drop(repo);

    let conn = Connection::open(&path).unwrap();
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM snapshots;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn snapshot_survives_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("objex.db");

    let state = sample_state();
    let repo = SqliteSnapshotRepository::try_new(open_db(&path).unwrap()).unwrap();
    repo.save_snapshot(&state).unwrap();
    drop(repo);

    let repo = SqliteSnapshotRepository::try_new(open_db(&path).unwrap()).unwrap();
    assert_eq!(repo.load_snapshot().unwrap().unwrap(), state);
}

#[test]
fn corrupt_slot_body_is_a_read_failure_and_recovers_to_initial() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO snapshots (slot, body) VALUES (?1, ?2);",
        [SNAPSHOT_SLOT, "{not valid json"],
    )
    .unwrap();

    let repo = SqliteSnapshotRepository::try_new(conn).unwrap();

    let err = repo.load_snapshot().unwrap_err();
    assert!(matches!(err, SnapshotError::Corrupt(_)));
    assert_eq!(load_or_initial(&repo), AppState::initial());
}

#[test]
fn incompatible_stored_shape_is_treated_as_corrupt() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO snapshots (slot, body) VALUES (?1, ?2);",
        [SNAPSHOT_SLOT, r#"{"objects": 3, "version": "old"}"#],
    )
    .unwrap();

    let repo = SqliteSnapshotRepository::try_new(conn).unwrap();
    assert!(matches!(
        repo.load_snapshot(),
        Err(SnapshotError::Corrupt(_))
    ));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteSnapshotRepository::try_new(conn) {
        Err(SnapshotError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_snapshots_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteSnapshotRepository::try_new(conn),
        Err(SnapshotError::MissingRequiredTable("snapshots"))
    ));
}

#[test]
fn read_and_write_failures_carry_distinct_kinds() {
    let read = SnapshotError::Corrupt("unexpected end of input".to_string());
    let write = SnapshotError::Encode("key must be a string".to_string());

    assert!(read.to_string().starts_with("corrupt snapshot body"));
    assert!(write.to_string().starts_with("failed to encode snapshot"));
    assert!(matches!(read, SnapshotError::Corrupt(_)));
    assert!(matches!(write, SnapshotError::Encode(_)));
}

#[test]
fn persisted_body_keeps_the_external_field_naming() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO snapshots (slot, body) VALUES (?1, ?2);",
        [
            SNAPSHOT_SLOT,
            r#"{
                "objects": [{"id": "1", "name": "A", "description": "d", "type": "t"}],
                "relations": [{"id": "r1", "fromObjectId": "1", "toObjectId": "1"}],
                "searchTerm": "a"
            }"#,
        ],
    )
    .unwrap();

    let repo = SqliteSnapshotRepository::try_new(conn).unwrap();
    let state = repo.load_snapshot().unwrap().unwrap();

    assert_eq!(state.objects[0].kind, "t");
    assert_eq!(state.relations[0].from_object_id, "1");
    assert_eq!(state.search_term, "a");
}
