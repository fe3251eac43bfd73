//! Domain types for the todo store.
//! Defines the core records, validated input shapes, and domain errors.

pub mod error;
pub mod page;
pub mod todo;
pub mod user;

pub use error::*;
pub use page::*;
pub use todo::*;
pub use user::*;
