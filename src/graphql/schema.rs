use std::sync::Arc;

use async_graphql::extensions::Tracing;
use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Schema};

use crate::model::{NewTodo, TodoId, TodoUpdate};
use crate::storage::TodoRepository;

use super::types::*;

pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema around an already-opened repository.
///
/// The repository is stored as schema data and reaches every resolver
/// through its request context.
pub fn build_schema(repo: Arc<dyn TodoRepository>) -> TodoSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .extension(Tracing)
        .data(repo)
        .finish()
}

fn get_repo<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<dyn TodoRepository>> {
    ctx.data::<Arc<dyn TodoRepository>>()
}

fn parse_id(id: &ID) -> async_graphql::Result<TodoId> {
    id.parse::<TodoId>().map_err(|e| e.extend())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Greeting kept from the first version of the API
    async fn message(&self) -> &'static str {
        "Hello World"
    }

    /// List all todos in insertion order
    async fn get_todos(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Todo>> {
        let repo = get_repo(ctx)?;
        let todos = repo.list().map_err(|e| e.extend())?;
        Ok(todos.into_iter().map(Todo::from).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new todo; it always starts out not completed
    async fn add_todo(&self, ctx: &Context<'_>, title: String) -> async_graphql::Result<Todo> {
        let input = NewTodo::new(title).map_err(|e| e.extend())?;
        let repo = get_repo(ctx)?;
        let todo = repo.create(&input).map_err(|e| e.extend())?;
        Ok(todo.into())
    }

    /// Set the completed flag of an existing todo
    async fn update_todo(
        &self,
        ctx: &Context<'_>,
        id: ID,
        completed: bool,
    ) -> async_graphql::Result<Todo> {
        let input = TodoUpdate::parse(&id, completed).map_err(|e| e.extend())?;
        let repo = get_repo(ctx)?;
        let todo = repo
            .set_completed(input.id, input.completed)
            .map_err(|e| e.extend())?;
        Ok(todo.into())
    }

    /// Delete a todo permanently, returning it as it was before deletion
    async fn delete_todo(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Todo> {
        let id = parse_id(&id)?;
        let repo = get_repo(ctx)?;
        let todo = repo.delete(id).map_err(|e| e.extend())?;
        Ok(todo.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteTodoRepository;

    fn setup_schema() -> TodoSchema {
        let repo = SqliteTodoRepository::open_in_memory().unwrap();
        build_schema(Arc::new(repo))
    }

    #[test]
    fn test_sdl_declares_operations() {
        let sdl = setup_schema().sdl();
        assert!(sdl.contains("getTodos: [Todo!]!"));
        assert!(sdl.contains("addTodo(title: String!): Todo!"));
        assert!(sdl.contains("updateTodo(id: ID!, completed: Boolean!): Todo!"));
        assert!(sdl.contains("deleteTodo(id: ID!): Todo!"));
    }

    #[tokio::test]
    async fn test_message() {
        let res = setup_schema().execute("{ message }").await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
        assert_eq!(
            res.data.into_json().unwrap(),
            serde_json::json!({ "message": "Hello World" })
        );
    }

    #[tokio::test]
    async fn test_invalid_id_is_bad_user_input() {
        let res = setup_schema()
            .execute(r#"mutation { deleteTodo(id: "abc") { id } }"#)
            .await;
        assert_eq!(res.errors.len(), 1);
        let code = res.errors[0]
            .extensions
            .as_ref()
            .and_then(|e| e.get("code"))
            .cloned();
        assert_eq!(code, Some(async_graphql::Value::from("BAD_USER_INPUT")));
    }
}
