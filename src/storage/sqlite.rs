use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, Row, params};

use super::IN_MEMORY;
use super::repository::TodoRepository;
use crate::error::{Result, TodoError};
use crate::model::{NewTodo, Todo, TodoId};

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// SQLite-backed todo repository.
///
/// Owns a single connection that is opened once and reused for every
/// request. Statements are serialized through a mutex; row-level
/// consistency is left to SQLite.
pub struct SqliteTodoRepository {
    conn: Mutex<Connection>,
}

impl SqliteTodoRepository {
    /// Opens (or creates) the database at `path` and ensures the table exists.
    ///
    /// The special path `:memory:` opens a private in-memory database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str() == IN_MEMORY {
            return Self::open_in_memory();
        }

        tracing::debug!(path = %path.display(), "Opening database");
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        tracing::debug!("Opening in-memory database");
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| TodoError::Storage("database connection lock poisoned".to_string()))
    }
}

fn todo_from_row(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: TodoId(row.get(0)?),
        title: row.get(1)?,
        completed: row.get(2)?,
    })
}

impl TodoRepository for SqliteTodoRepository {
    fn list(&self) -> Result<Vec<Todo>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached("SELECT id, title, completed FROM todos ORDER BY id")?;
        let todos = stmt
            .query_map([], todo_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::debug!(count = todos.len(), "Listed todos");
        Ok(todos)
    }

    fn create(&self, todo: &NewTodo) -> Result<Todo> {
        tracing::info!(title = %todo.title(), "Creating todo");
        let conn = self.conn()?;
        let created = conn.query_row(
            "INSERT INTO todos (title, completed) VALUES (?1, 0)
             RETURNING id, title, completed",
            params![todo.title()],
            todo_from_row,
        )?;
        Ok(created)
    }

    fn set_completed(&self, id: TodoId, completed: bool) -> Result<Todo> {
        tracing::info!(id = %id, completed, "Updating todo");
        let conn = self.conn()?;
        conn.query_row(
            "UPDATE todos SET completed = ?1 WHERE id = ?2
             RETURNING id, title, completed",
            params![completed, id.0],
            todo_from_row,
        )
        .optional()?
        .ok_or(TodoError::NotFound(id))
    }

    fn delete(&self, id: TodoId) -> Result<Todo> {
        tracing::info!(id = %id, "Deleting todo");
        let conn = self.conn()?;
        conn.query_row(
            "DELETE FROM todos WHERE id = ?1
             RETURNING id, title, completed",
            params![id.0],
            todo_from_row,
        )
        .optional()?
        .ok_or(TodoError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> SqliteTodoRepository {
        SqliteTodoRepository::open_in_memory().unwrap()
    }

    fn new_todo(title: &str) -> NewTodo {
        NewTodo::new(title).unwrap()
    }

    #[test]
    fn test_create_assigns_id_and_defaults_completed() {
        let repo = setup_test_repo();
        let todo = repo.create(&new_todo("Buy milk")).unwrap();

        assert_eq!(todo.id, TodoId(1));
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn test_list_is_in_insertion_order() {
        let repo = setup_test_repo();
        for title in ["first", "second", "third"] {
            repo.create(&new_todo(title)).unwrap();
        }

        let titles: Vec<_> = repo.list().unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_set_completed_keeps_title() {
        let repo = setup_test_repo();
        let todo = repo.create(&new_todo("Walk the dog")).unwrap();

        let updated = repo.set_completed(todo.id, true).unwrap();
        assert!(updated.completed);
        assert_eq!(updated.title, "Walk the dog");

        let reverted = repo.set_completed(todo.id, false).unwrap();
        assert!(!reverted.completed);
    }

    #[test]
    fn test_set_completed_missing_id() {
        let repo = setup_test_repo();
        let err = repo.set_completed(TodoId(99), true).unwrap_err();
        assert!(matches!(err, TodoError::NotFound(TodoId(99))));
    }

    #[test]
    fn test_delete_returns_previous_state() {
        let repo = setup_test_repo();
        let todo = repo.create(&new_todo("Pay rent")).unwrap();
        repo.set_completed(todo.id, true).unwrap();

        let deleted = repo.delete(todo.id).unwrap();
        assert_eq!(deleted.id, todo.id);
        assert!(deleted.completed);
        assert!(repo.list().unwrap().is_empty());

        let err = repo.delete(todo.id).unwrap_err();
        assert!(matches!(err, TodoError::NotFound(_)));
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let repo = setup_test_repo();
        let first = repo.create(&new_todo("one")).unwrap();
        repo.delete(first.id).unwrap();

        let second = repo.create(&new_todo("two")).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_file_database_persists_across_opens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("todos.db");

        {
            let repo = SqliteTodoRepository::open(&path).unwrap();
            repo.create(&new_todo("Persisted")).unwrap();
        }

        let repo = SqliteTodoRepository::open(&path).unwrap();
        let todos = repo.list().unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Persisted");
    }

    #[test]
    fn test_memory_path_is_private() {
        let a = SqliteTodoRepository::open(IN_MEMORY).unwrap();
        let b = SqliteTodoRepository::open(IN_MEMORY).unwrap();
        a.create(&new_todo("only in a")).unwrap();
        assert!(b.list().unwrap().is_empty());
    }
}
