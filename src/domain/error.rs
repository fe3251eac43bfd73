//! Domain error types for the todo store.
//!
//! Validation failures are raised by the input-shape constructors, before any
//! SQL is issued. Storage failures (constraint violations and the like) are
//! not translated here; repositories surface them unmodified.

use thiserror::Error;

/// Rejections raised while constructing validated input shapes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("password must not be empty")]
    EmptyPassword,

    #[error("todo title must not be empty")]
    EmptyTitle,
}
