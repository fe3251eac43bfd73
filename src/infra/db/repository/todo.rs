use super::DbConn;
use crate::domain::{NewTodo, Page, Todo, UserId};
use anyhow::Result;

/// Repository for todo operations.
pub struct TodoRepository {
    conn: DbConn,
}

impl TodoRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// Insert a todo owned by `author_id` and return the persisted record.
    ///
    /// Both timestamps are set to the insertion time. A nonexistent
    /// `author_id` violates the foreign key and surfaces as the storage
    /// layer's error.
    pub fn create_for_user(&self, new_todo: &NewTodo, author_id: UserId) -> Result<Todo> {
        let conn = self.conn.lock().unwrap();
        let now = chrono::Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO todos (title, body, completed, created_at, updated_at, author_id) \
             VALUES (?1, ?2, 0, ?3, ?3, ?4)",
            rusqlite::params![new_todo.title(), new_todo.body(), &now, author_id],
        )?;
        Ok(Todo {
            id: conn.last_insert_rowid(),
            title: new_todo.title().to_string(),
            body: new_todo.body().map(str::to_string),
            completed: false,
            created_at: now.clone(),
            updated_at: now,
            author_id,
        })
    }

    /// List todos in id order, windowed by `page`.
    pub fn list(&self, page: Page) -> Result<Vec<Todo>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, title, body, completed, created_at, updated_at, author_id \
             FROM todos ORDER BY id LIMIT ?1 OFFSET ?2",
        )?;

        let rows = stmt.query_map([page.limit as i64, page.skip as i64], read_todo)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// All todos owned by `author_id`, in id order.
    pub fn find_by_author(&self, author_id: UserId) -> Result<Vec<Todo>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, title, body, completed, created_at, updated_at, author_id \
             FROM todos WHERE author_id = ?1 ORDER BY id",
        )?;

        let rows = stmt.query_map([author_id], read_todo)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

pub(super) fn read_todo(row: &rusqlite::Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        body: row.get(2)?,
        completed: row.get::<_, i32>(3)? != 0,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
        author_id: row.get(6)?,
    })
}
