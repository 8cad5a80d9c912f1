use crate::error::Result;
use crate::model::{NewTodo, Todo, TodoId};

/// CRUD operations over the todo table.
///
/// Every method is a single round trip to the store. Implementations are
/// shared across concurrent requests, so they must be `Send + Sync`.
pub trait TodoRepository: Send + Sync {
    /// All todos, ordered by ascending id.
    fn list(&self) -> Result<Vec<Todo>>;

    /// Inserts a todo with `completed = false` and returns it with its new id.
    fn create(&self, todo: &NewTodo) -> Result<Todo>;

    /// Sets the `completed` flag. Fails with `NotFound` when no row has `id`.
    fn set_completed(&self, id: TodoId, completed: bool) -> Result<Todo>;

    /// Removes the row and returns it as it was before deletion.
    /// Fails with `NotFound` when no row has `id`.
    fn delete(&self, id: TodoId) -> Result<Todo>;
}
