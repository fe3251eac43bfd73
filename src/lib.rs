//! Data-access layer for a todo-list application.
//!
//! Two entities (users and the todos they own) persisted to SQLite, with
//! create/read operations exposed through repositories. Transport concerns
//! (routing, serialization at the wire, auth) live in the consuming layer.

pub mod domain;
pub mod infra;
