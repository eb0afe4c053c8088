use todo_core::{decode_todos, CollectionError, Todo, TodoFilter, TodoList};

fn sample_list() -> TodoList {
    TodoList::from_todos(vec![
        Todo::new(1, false, "Buy milk").with_due_date("2024-05-01"),
        Todo::new(2, true, "Pay bills").with_note("autopay enabled"),
        Todo::new(5, false, "Book dentist"),
    ])
    .unwrap()
}

#[test]
fn from_todos_rejects_duplicate_ids() {
    let err = TodoList::from_todos(vec![
        Todo::new(1, false, "a"),
        Todo::new(2, false, "b"),
        Todo::new(1, true, "c"),
    ])
    .unwrap_err();

    assert_eq!(err, CollectionError::DuplicateId(1));
}

#[test]
fn insert_rejects_existing_id_and_keeps_original() {
    let mut list = sample_list();

    let err = list.insert(Todo::new(2, false, "impostor")).unwrap_err();
    assert_eq!(err, CollectionError::DuplicateId(2));
    assert_eq!(list.get(2).unwrap().title, "Pay bills");
    assert_eq!(list.len(), 3);
}

#[test]
fn create_allocates_next_id() {
    let mut empty = TodoList::new();
    assert_eq!(empty.next_id(), 1);
    assert_eq!(empty.create("first").unwrap(), 1);

    let mut list = sample_list();
    let id = list.create("Water plants").unwrap();
    assert_eq!(id, 6);

    let created = list.get(id).unwrap();
    assert!(!created.done);
    assert_eq!(created.note, None);
    assert_eq!(created.due_date, None);
}

#[test]
fn create_fails_when_ids_are_exhausted() {
    let mut list = TodoList::from_todos(vec![Todo::new(i64::MAX, false, "last")]).unwrap();

    let err = list.create("overflow").unwrap_err();
    assert_eq!(err, CollectionError::DuplicateId(i64::MAX));
}

#[test]
fn mutations_by_id() {
    let mut list = sample_list();

    assert!(list.toggle(1).unwrap());
    list.set_done(2, false).unwrap();
    list.set_title(5, "Book dentist (June)").unwrap();
    list.set_note(5, Some("ask about cleaning".to_string())).unwrap();
    list.set_due_date(1, None).unwrap();

    assert!(list.get(1).unwrap().done);
    assert_eq!(list.get(1).unwrap().due_date, None);
    assert!(!list.get(2).unwrap().done);
    assert_eq!(list.get(5).unwrap().title, "Book dentist (June)");
    assert_eq!(
        list.get(5).unwrap().note.as_deref(),
        Some("ask about cleaning")
    );
}

#[test]
fn unknown_id_is_not_found() {
    let mut list = sample_list();

    assert_eq!(list.toggle(99).unwrap_err(), CollectionError::NotFound(99));
    assert_eq!(list.remove(99).unwrap_err(), CollectionError::NotFound(99));
    assert!(list.get(99).is_none());
    assert!(!list.contains(99));
}

#[test]
fn remove_returns_todo_and_preserves_order() {
    let mut list = sample_list();

    let removed = list.remove(2).unwrap();
    assert_eq!(removed.title, "Pay bills");

    let ids: Vec<_> = list.iter().map(Todo::id).collect();
    assert_eq!(ids, vec![1, 5]);
}

#[test]
fn filters_and_counts() {
    let list = sample_list();

    assert_eq!(list.count(TodoFilter::All), 3);
    assert_eq!(list.count(TodoFilter::Active), 2);
    assert_eq!(list.count(TodoFilter::Completed), 1);

    let active: Vec<_> = list.filtered(TodoFilter::Active).map(Todo::id).collect();
    assert_eq!(active, vec![1, 5]);
}

#[test]
fn clear_completed_drops_done_items() {
    let mut list = sample_list();
    list.toggle(5).unwrap();

    assert_eq!(list.clear_completed(), 2);
    assert_eq!(list.len(), 1);
    assert!(list.contains(1));
}

#[test]
fn list_serializes_as_plain_array() {
    let list = sample_list();

    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(decode_todos(&json).unwrap(), list.as_slice());

    let decoded: TodoList = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, list);
}

#[test]
fn list_decode_rejects_duplicate_ids() {
    let json = r#"[
        {"id": 1, "done": false, "title": "a", "note": null, "dueDate": null},
        {"id": 1, "done": true, "title": "b", "note": null, "dueDate": null}
    ]"#;

    let err = serde_json::from_str::<TodoList>(json).unwrap_err();
    assert!(
        err.to_string().contains("duplicate todo id: 1"),
        "unexpected error: {err}"
    );
}
