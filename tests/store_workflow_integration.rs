//! Integration tests for the database functionality
//! These tests verify that the user and todo repositories work together
//! against a single database the way a request-handling layer would use them.

use todostore::domain::{NewTodo, NewUser, Page};
use todostore::infra::db::{Database, repository::*};

#[test]
fn test_full_store_workflow() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let conn = db.connection();

    let user_repo = UserRepository::new(conn.clone());
    let todo_repo = TodoRepository::new(conn.clone());

    // Create a user
    let user = user_repo.create(&NewUser::new("a@x.com", "pw")?)?;
    assert_eq!(user.id, 1);
    assert_eq!(user.email, "a@x.com");

    // Create a todo owned by that user
    let todo = todo_repo.create_for_user(&NewTodo::new("Buy milk", None)?, user.id)?;
    assert_eq!(todo.id, 1);
    assert_eq!(todo.title, "Buy milk");
    assert!(!todo.completed);
    assert_eq!(todo.author_id, user.id);

    // The todo is visible through the list operation
    let todos = todo_repo.list(Page::default())?;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, 1);
    assert_eq!(todos[0].title, "Buy milk");
    assert_eq!(todos[0].author_id, user.id);

    // And through the user's relationship query
    let with_todos = user_repo.find_with_todos(user.id)?.expect("user exists");
    assert_eq!(with_todos.todos.len(), 1);
    assert_eq!(with_todos.todos[0].id, todo.id);

    Ok(())
}

#[test]
fn test_store_survives_reopen() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("db.sqlite");

    {
        let db = Database::open_at(path.clone())?;
        let users = db.user_repo();
        users.create(&NewUser::new("a@x.com", "pw")?)?;
    }

    let db = Database::open_at(path)?;
    let users = db.user_repo();
    let found = users.find_by_email("a@x.com")?.expect("persisted user");
    assert_eq!(found.email, "a@x.com");

    Ok(())
}

#[test]
fn test_pagination_across_repositories() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let users = db.user_repo();
    let todos = db.todo_repo();

    for i in 0..3 {
        let user = users.create(&NewUser::new(format!("u{i}@x.com"), "pw")?)?;
        todos.create_for_user(&NewTodo::new(format!("todo {i}"), None)?, user.id)?;
    }

    let first_page = users.list(Page::new(0, 2))?;
    let second_page = users.list(Page::new(2, 2))?;
    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 1);
    assert!(first_page.iter().all(|u| u.id < second_page[0].id));

    let all_todos = todos.list(Page::default())?;
    assert_eq!(all_todos.len(), 3);

    Ok(())
}
