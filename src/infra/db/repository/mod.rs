//! Repository implementations for data access.
//!
//! Each repository is constructed with an injected [`DbConn`] and issues
//! synchronous queries; every operation runs to completion on the calling
//! thread. Lookups return `Ok(None)` when nothing matches; constraint
//! violations (duplicate email, dangling author_id) surface the underlying
//! `rusqlite::Error` unmodified.

mod todo;
mod user;

pub use todo::TodoRepository;
pub use user::UserRepository;

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Shared handle to the SQLite connection, injected into each repository.
pub type DbConn = Arc<Mutex<Connection>>;
