use super::DbConn;
use super::todo::read_todo;
use crate::domain::{NewUser, Page, User, UserId, UserWithTodos};
use anyhow::Result;

/// Repository for user operations.
pub struct UserRepository {
    conn: DbConn,
}

impl UserRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Insert a user and return the persisted record with its assigned id.
    ///
    /// A duplicate email violates the UNIQUE constraint and surfaces as the
    /// storage layer's error.
    pub fn create(&self, new_user: &NewUser) -> Result<User> {
        let conn = self.conn.lock().unwrap();
        let hashed_password = new_user.hashed_password();
        conn.execute(
            "INSERT INTO users (email, hashed_password) VALUES (?1, ?2)",
            (new_user.email(), &hashed_password),
        )?;
        Ok(User {
            id: conn.last_insert_rowid(),
            email: new_user.email().to_string(),
            hashed_password,
        })
    }

    pub fn find_by_id(&self, user_id: UserId) -> Result<Option<User>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare("SELECT id, email, hashed_password FROM users WHERE id = ?1")?;

        let mut rows = stmt.query_map([user_id], read_user)?;
        match rows.next() {
            Some(row) => row.map(Some).map_err(Into::into),
            None => Ok(None),
        }
    }

    /// Exact, case-sensitive email match.
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt =
            conn.prepare("SELECT id, email, hashed_password FROM users WHERE email = ?1")?;

        let mut rows = stmt.query_map([email], read_user)?;
        match rows.next() {
            Some(row) => row.map(Some).map_err(Into::into),
            None => Ok(None),
        }
    }

    /// List users in id order, windowed by `page`.
    pub fn list(&self, page: Page) -> Result<Vec<User>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, email, hashed_password FROM users ORDER BY id LIMIT ?1 OFFSET ?2",
        )?;

        let rows = stmt.query_map([page.limit as i64, page.skip as i64], read_user)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Fetch a user and their todos with an explicit follow-up query on
    /// author_id.
    pub fn find_with_todos(&self, user_id: UserId) -> Result<Option<UserWithTodos>> {
        let Some(user) = self.find_by_id(user_id)? else {
            return Ok(None);
        };

        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, title, body, completed, created_at, updated_at, author_id \
             FROM todos WHERE author_id = ?1 ORDER BY id",
        )?;

        let rows = stmt.query_map([user_id], read_todo)?;
        let todos = rows.collect::<Result<Vec<_>, _>>()?;

        Ok(Some(UserWithTodos { user, todos }))
    }
}

fn read_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        hashed_password: row.get(2)?,
    })
}
