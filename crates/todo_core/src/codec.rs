//! JSON interchange codec for Todo records.
//!
//! # Responsibility
//! - Encode/decode single Todos and Todo arrays to the canonical JSON form.
//! - Classify decode failures into syntax vs. type/shape mismatches.
//!
//! # Invariants
//! - Encoded objects always carry `id`, `done`, `title`, `note`, `dueDate`.
//! - Decoding never fills in a missing key.

use crate::model::todo::Todo;
use log::{debug, warn};
use serde_json::error::Category;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CodecResult<T> = Result<T, CodecError>;

/// Error raised while encoding or decoding Todo JSON.
#[derive(Debug)]
pub enum CodecError {
    /// Input is not well-formed JSON (including truncated input).
    Syntax(serde_json::Error),
    /// Input is valid JSON but does not match the Todo shape.
    TypeMismatch(serde_json::Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(err) => write!(f, "malformed todo json: {err}"),
            Self::TypeMismatch(err) => write!(f, "todo json type mismatch: {err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Syntax(err) | Self::TypeMismatch(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        match value.classify() {
            Category::Data => Self::TypeMismatch(value),
            Category::Io | Category::Syntax | Category::Eof => Self::Syntax(value),
        }
    }
}

impl CodecError {
    fn kind(&self) -> &'static str {
        match self {
            Self::Syntax(_) => "syntax",
            Self::TypeMismatch(_) => "type_mismatch",
        }
    }
}

/// Encodes one Todo as compact JSON.
pub fn encode_todo(todo: &Todo) -> CodecResult<String> {
    Ok(serde_json::to_string(todo)?)
}

/// Encodes one Todo as indented JSON.
pub fn encode_todo_pretty(todo: &Todo) -> CodecResult<String> {
    Ok(serde_json::to_string_pretty(todo)?)
}

/// Decodes one Todo from JSON text.
///
/// # Errors
/// - `Syntax` when the text is not valid JSON.
/// - `TypeMismatch` when a key is missing, unknown, or has the wrong type.
pub fn decode_todo(input: &str) -> CodecResult<Todo> {
    serde_json::from_str(input).map_err(|err| log_decode_failure("todo", err.into()))
}

/// Encodes a slice of Todos as a JSON array.
pub fn encode_todos(todos: &[Todo]) -> CodecResult<String> {
    let encoded = serde_json::to_string(todos)?;
    debug!(
        "event=todo_encode module=codec status=ok count={}",
        todos.len()
    );
    Ok(encoded)
}

/// Decodes a JSON array of Todos.
///
/// Duplicate ids are not checked here; use `TodoList` for that.
pub fn decode_todos(input: &str) -> CodecResult<Vec<Todo>> {
    let todos: Vec<Todo> =
        serde_json::from_str(input).map_err(|err| log_decode_failure("todos", err.into()))?;
    debug!(
        "event=todo_decode module=codec status=ok count={}",
        todos.len()
    );
    Ok(todos)
}

/// Converts a Todo into a `serde_json::Value` object.
pub fn to_value(todo: &Todo) -> CodecResult<Value> {
    Ok(serde_json::to_value(todo)?)
}

/// Converts a `serde_json::Value` into a Todo.
pub fn from_value(value: Value) -> CodecResult<Todo> {
    serde_json::from_value(value).map_err(|err| log_decode_failure("value", err.into()))
}

fn log_decode_failure(source: &str, err: CodecError) -> CodecError {
    // Error text may quote payload content; only the category is logged.
    warn!(
        "event=todo_decode module=codec status=error source={} kind={}",
        source,
        err.kind()
    );
    err
}
