use objex_core::{related_object, visible_objects, AppState, ObjectItem, Relation};

fn catalog() -> AppState {
    AppState {
        objects: vec![
            ObjectItem::with_id("1", "Desk Lamp", "warm light", "furniture"),
            ObjectItem::with_id("2", "Monitor", "27 inch display", "electronics"),
            ObjectItem::with_id("3", "Chair", "ergonomic, lamp-colored", "furniture"),
        ],
        relations: vec![
            Relation::with_id("r1", "1", "2"),
            Relation::with_id("r2", "1", "3"),
            Relation::with_id("r3", "2", "missing"),
        ],
        search_term: String::new(),
    }
}

#[test]
fn empty_search_term_shows_every_object() {
    let state = catalog();
    assert_eq!(visible_objects(&state).len(), 3);
}

#[test]
fn filter_matches_name_case_insensitively() {
    let state = AppState {
        search_term: "LAMP".to_string(),
        ..catalog()
    };

    let ids: Vec<_> = visible_objects(&state)
        .iter()
        .map(|obj| obj.id.as_str())
        .collect();
    // "Desk Lamp" by name, "Chair" by its lamp-colored description.
    assert_eq!(ids, ["1", "3"]);
}

#[test]
fn filter_matches_description_substring() {
    let state = AppState {
        search_term: "27 inch".to_string(),
        ..catalog()
    };

    let visible = visible_objects(&state);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "2");
}

#[test]
fn filter_without_matches_is_empty() {
    let state = AppState {
        search_term: "no such thing".to_string(),
        ..catalog()
    };

    assert!(visible_objects(&state).is_empty());
}

#[test]
fn related_object_follows_first_outgoing_relation() {
    let state = catalog();

    // Object 1 has two outgoing edges; insertion order decides.
    let related = related_object(&state, "1").expect("object 1 has relations");
    assert_eq!(related.id, "2");
}

#[test]
fn related_object_is_none_for_dangling_target() {
    let state = catalog();
    assert!(related_object(&state, "2").is_none());
}

#[test]
fn related_object_is_none_without_outgoing_relation() {
    let state = catalog();
    assert!(related_object(&state, "3").is_none());
}
