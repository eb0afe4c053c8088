//! Canonical Todo record and its JSON interchange contract.
//!
//! A Todo is a passive, flat record (id, completion flag, title, optional
//! note, optional due date). This crate defines that shape, its wire
//! encoding, and an in-memory collection that keeps ids unique.

pub mod codec;
pub mod collection;
pub mod logging;
pub mod model;

pub use codec::{
    decode_todo, decode_todos, encode_todo, encode_todo_pretty, encode_todos, from_value,
    to_value, CodecError, CodecResult,
};
pub use collection::{CollectionError, CollectionResult, TodoFilter, TodoList};
pub use logging::{default_log_level, flush_logging, init_logging, logging_status, LoggingError};
pub use model::todo::{Todo, TodoId};

