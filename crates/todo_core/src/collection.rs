//! In-memory owning collection for Todos.
//!
//! # Responsibility
//! - Hold Todos in insertion order and uphold id uniqueness.
//! - Offer id-addressed mutations for external collaborators (UI, API).
//!
//! # Invariants
//! - No two Todos in a `TodoList` share an id, including after decoding.
//! - Unknown ids surface as `CollectionError::NotFound`, never as a panic.

use crate::model::todo::{Todo, TodoId};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CollectionResult<T> = Result<T, CollectionError>;

/// Error for id-addressed collection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    DuplicateId(TodoId),
    NotFound(TodoId),
}

impl Display for CollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate todo id: {id}"),
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
        }
    }
}

impl Error for CollectionError {}

/// View filter over completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    /// Not done yet.
    Active,
    Completed,
}

impl TodoFilter {
    /// Returns whether `todo` passes this filter.
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.done,
            Self::Completed => todo.done,
        }
    }
}

/// Ordered list of Todos with unique ids.
///
/// Serializes as a plain JSON array of Todo objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Todo>", into = "Vec<Todo>")]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from existing Todos, keeping their order.
    ///
    /// # Errors
    /// - `DuplicateId` for the first id seen twice.
    pub fn from_todos(todos: Vec<Todo>) -> CollectionResult<Self> {
        let mut seen = HashSet::with_capacity(todos.len());
        for todo in &todos {
            if !seen.insert(todo.id()) {
                warn!(
                    "event=todo_list_load module=collection status=error reason=duplicate_id id={}",
                    todo.id()
                );
                return Err(CollectionError::DuplicateId(todo.id()));
            }
        }
        Ok(Self { todos })
    }

    /// Appends a caller-built Todo.
    ///
    /// # Errors
    /// - `DuplicateId` when the id is already present.
    pub fn insert(&mut self, todo: Todo) -> CollectionResult<TodoId> {
        let id = todo.id();
        if self.contains(id) {
            warn!(
                "event=todo_insert module=collection status=error reason=duplicate_id id={}",
                id
            );
            return Err(CollectionError::DuplicateId(id));
        }
        self.todos.push(todo);
        debug!("event=todo_insert module=collection status=ok id={}", id);
        Ok(id)
    }

    /// Creates an open Todo with `next_id()` and returns that id.
    ///
    /// # Errors
    /// - `DuplicateId` only when the list already holds `TodoId::MAX`.
    pub fn create(&mut self, title: impl Into<String>) -> CollectionResult<TodoId> {
        let todo = Todo::new(self.next_id(), false, title);
        self.insert(todo)
    }

    /// Returns one past the largest id, or `1` for an empty list.
    ///
    /// Saturates at `TodoId::MAX`.
    pub fn next_id(&self) -> TodoId {
        self.todos
            .iter()
            .map(Todo::id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    /// Returns the Todo with `id`, if present.
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id() == id)
    }

    /// Returns the Todo with `id` for in-place edits; the id itself stays fixed.
    pub fn get_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id() == id)
    }

    /// Returns whether a Todo with `id` is present.
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Removes and returns the Todo with `id`.
    pub fn remove(&mut self, id: TodoId) -> CollectionResult<Todo> {
        let Some(index) = self.todos.iter().position(|todo| todo.id() == id) else {
            log_not_found("todo_remove", id);
            return Err(CollectionError::NotFound(id));
        };
        debug!("event=todo_remove module=collection status=ok id={}", id);
        Ok(self.todos.remove(index))
    }

    /// Sets the completion flag of `id`.
    pub fn set_done(&mut self, id: TodoId, done: bool) -> CollectionResult<()> {
        self.require_mut(id, "todo_set_done")?.done = done;
        log_mutation("todo_set_done", id);
        Ok(())
    }

    /// Flips `done` for `id` and returns the new value.
    pub fn toggle(&mut self, id: TodoId) -> CollectionResult<bool> {
        let done = self.require_mut(id, "todo_toggle")?.toggle();
        log_mutation("todo_toggle", id);
        Ok(done)
    }

    /// Replaces the title of `id`.
    pub fn set_title(&mut self, id: TodoId, title: impl Into<String>) -> CollectionResult<()> {
        self.require_mut(id, "todo_set_title")?.title = title.into();
        log_mutation("todo_set_title", id);
        Ok(())
    }

    /// Replaces the note of `id`; `None` marks it absent.
    pub fn set_note(&mut self, id: TodoId, note: Option<String>) -> CollectionResult<()> {
        self.require_mut(id, "todo_set_note")?.set_note(note);
        log_mutation("todo_set_note", id);
        Ok(())
    }

    /// Replaces the due date of `id`; `None` marks it absent.
    pub fn set_due_date(&mut self, id: TodoId, due_date: Option<String>) -> CollectionResult<()> {
        self.require_mut(id, "todo_set_due_date")?.set_due_date(due_date);
        log_mutation("todo_set_due_date", id);
        Ok(())
    }

    /// Drops every completed Todo and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|todo| !todo.done);
        let removed = before - self.todos.len();
        debug!(
            "event=todo_clear_completed module=collection status=ok removed={}",
            removed
        );
        removed
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter()
    }

    /// Iterates Todos passing `filter`, in insertion order.
    pub fn filtered(&self, filter: TodoFilter) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(move |todo| filter.matches(todo))
    }

    /// Counts Todos passing `filter`.
    pub fn count(&self, filter: TodoFilter) -> usize {
        self.filtered(filter).count()
    }

    /// Returns the number of Todos.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns whether the list holds no Todos.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Borrows the Todos in insertion order.
    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }

    fn require_mut(&mut self, id: TodoId, event: &str) -> CollectionResult<&mut Todo> {
        match self.todos.iter_mut().find(|todo| todo.id() == id) {
            Some(todo) => Ok(todo),
            None => {
                log_not_found(event, id);
                Err(CollectionError::NotFound(id))
            }
        }
    }
}

// Events carry ids only; titles and notes stay out of the logs.
fn log_mutation(event: &str, id: TodoId) {
    debug!("event={} module=collection status=ok id={}", event, id);
}

fn log_not_found(event: &str, id: TodoId) {
    warn!(
        "event={} module=collection status=error reason=not_found id={}",
        event, id
    );
}

impl TryFrom<Vec<Todo>> for TodoList {
    type Error = CollectionError;

    fn try_from(value: Vec<Todo>) -> Result<Self, Self::Error> {
        Self::from_todos(value)
    }
}

impl From<TodoList> for Vec<Todo> {
    fn from(value: TodoList) -> Self {
        value.todos
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}
