use todo_core::Todo;

#[test]
fn new_sets_required_fields_and_leaves_optionals_absent() {
    let todo = Todo::new(7, false, "Buy milk");

    assert_eq!(todo.id(), 7);
    assert!(!todo.done);
    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.note, None);
    assert_eq!(todo.due_date, None);
    assert!(!todo.has_note());
    assert!(!todo.has_due_date());
}

#[test]
fn builders_set_optional_fields() {
    let todo = Todo::new(2, true, "Pay bills")
        .with_note("autopay enabled")
        .with_due_date("2024-05-01");

    assert_eq!(todo.note.as_deref(), Some("autopay enabled"));
    assert_eq!(todo.due_date.as_deref(), Some("2024-05-01"));
}

#[test]
fn empty_note_is_not_absent() {
    let todo = Todo::new(1, false, "t").with_note("");

    assert!(todo.has_note());
    assert_ne!(todo, Todo::new(1, false, "t"));
}

#[test]
fn no_validation_on_id_or_title() {
    let todo = Todo::new(-42, false, "");

    assert_eq!(todo.id(), -42);
    assert!(todo.title.is_empty());
}

#[test]
fn setters_replace_and_clear_optional_fields() {
    let mut todo = Todo::new(5, false, "Call mom").with_due_date("2024-06-01");

    todo.set_due_date(Some("2024-06-02T09:00:00Z".to_string()));
    assert_eq!(todo.due_date.as_deref(), Some("2024-06-02T09:00:00Z"));

    todo.clear_due_date();
    assert_eq!(todo.due_date, None);

    todo.set_note(Some("landline".to_string()));
    todo.set_note(None);
    assert_eq!(todo.note, None);
}
