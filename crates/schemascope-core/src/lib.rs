//! Core schema model and dependency engine for Schemascope.
//!
//! This crate defines the immutable schema entities (tables, columns, views,
//! routines, foreign keys), the aggregate [`Database`] with its dependency
//! ordering and cross-reference queries, and shared helpers used by the
//! snapshot, report, and CLI crates.

pub mod database;
pub mod deps;
pub mod error;
pub mod identifier;
pub mod redaction;
mod refscan;
pub mod schema;

pub use database::{Database, DatabaseBuilder};
pub use deps::DependencyOrder;
pub use error::{Error, Result};
pub use identifier::ObjectName;
pub use redaction::redact_connection_string;
pub use schema::{Column, ForeignKey, Routine, Table, View};
