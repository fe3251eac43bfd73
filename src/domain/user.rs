use serde::Serialize;

use crate::domain::error::ValidationError;
use crate::domain::todo::Todo;

/// Unique identifier for a user.
pub type UserId = i64;

/// A persisted user record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct User {
    /// Database-assigned identifier.
    pub id: UserId,
    /// Unique email address (case-sensitive, exact match on lookup).
    pub email: String,
    /// Placeholder-transformed password. Kept out of serialized output.
    #[serde(skip_serializing)]
    pub hashed_password: String,
}

/// A user together with the todos they own.
///
/// Produced by an explicit follow-up query on `author_id`; users and todos
/// hold no in-memory back-references to each other.
#[derive(Debug, Clone, Serialize)]
pub struct UserWithTodos {
    #[serde(flatten)]
    pub user: User,
    pub todos: Vec<Todo>,
}

/// Validated input for creating a user.
///
/// Constructed via [`NewUser::new`], so a value of this type is known to be
/// well-formed before it reaches a repository.
#[derive(Debug, Clone)]
pub struct NewUser {
    email: String,
    password: String,
}

impl NewUser {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let email = email.into();
        let password = password.into();
        if email.trim().is_empty() || !email.contains('@') {
            return Err(ValidationError::InvalidEmail(email));
        }
        if password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Placeholder transform standing in for a real password hash.
    pub fn hashed_password(&self) -> String {
        format!("{}notreallyhashed", self.password)
    }
}
