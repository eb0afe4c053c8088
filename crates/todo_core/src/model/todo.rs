//! Todo domain model.
//!
//! # Responsibility
//! - Define the flat record exchanged between storage, UI and API layers.
//! - Provide small mutation helpers for the mutable fields.
//!
//! # Invariants
//! - `id` is fixed at construction; there is no setter.
//! - `note` and `due_date` use `None` as the only absent-value marker.
//! - Wire form always carries all five keys; absent values are `null`.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a Todo, unique within its owning collection.
pub type TodoId = i64;

/// A single to-do list item.
///
/// No field is validated: any id and any title (including an empty one) are
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Todo {
    id: TodoId,
    /// Completion flag.
    pub done: bool,
    /// Human-readable label.
    pub title: String,
    /// Free-text note. `Some("")` is kept distinct from `None`.
    #[serde(deserialize_with = "nullable")]
    pub note: Option<String>,
    /// Due date text, kept verbatim (ISO-8601 date or date-time expected).
    #[serde(deserialize_with = "nullable")]
    pub due_date: Option<String>,
}

impl Todo {
    /// Creates a Todo from its required fields.
    ///
    /// `note` and `due_date` start absent.
    pub fn new(id: TodoId, done: bool, title: impl Into<String>) -> Self {
        Self {
            id,
            done,
            title: title.into(),
            note: None,
            due_date: None,
        }
    }

    /// Returns this Todo with `note` set.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Returns this Todo with `due_date` set.
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Returns the id fixed at construction.
    pub fn id(&self) -> TodoId {
        self.id
    }

    /// Flips `done` and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }

    /// Replaces the note; `None` marks it absent.
    pub fn set_note(&mut self, note: Option<String>) {
        self.note = note;
    }

    /// Marks the note absent.
    pub fn clear_note(&mut self) {
        self.note = None;
    }

    /// Replaces the due date; `None` marks it absent.
    pub fn set_due_date(&mut self, due_date: Option<String>) {
        self.due_date = due_date;
    }

    /// Marks the due date absent.
    pub fn clear_due_date(&mut self) {
        self.due_date = None;
    }

    /// Returns whether a note is present, including an empty one.
    pub fn has_note(&self) -> bool {
        self.note.is_some()
    }

    /// Returns whether a due date is present.
    pub fn has_due_date(&self) -> bool {
        self.due_date.is_some()
    }
}

// Plain `Option<T>` fields treat a missing key as `None`; routing through
// `deserialize_with` makes the key mandatory while still accepting `null`.
fn nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}
