//! Domain model for to-do items.
//!
//! # Responsibility
//! - Define the canonical Todo shape shared by producers and consumers.
//!
//! # Invariants
//! - Optional fields use `Option`, never empty-string sentinels.

pub mod todo;
