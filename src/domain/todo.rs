use serde::Serialize;

use crate::domain::error::ValidationError;
use crate::domain::user::UserId;

/// Unique identifier for a todo.
pub type TodoId = i64;

/// A persisted todo record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Todo {
    /// Database-assigned identifier.
    pub id: TodoId,
    pub title: String,
    pub body: Option<String>,
    pub completed: bool,
    /// Creation timestamp in RFC3339 format, set at insertion time.
    pub created_at: String,
    /// Update timestamp in RFC3339 format; equals `created_at` on insert.
    pub updated_at: String,
    /// Owning user. Every todo references exactly one existing user.
    pub author_id: UserId,
}

/// Validated input for creating a todo.
#[derive(Debug, Clone)]
pub struct NewTodo {
    title: String,
    body: Option<String>,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, body: Option<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self { title, body })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}
