use async_graphql::{ID, SimpleObject};

use crate::model::Todo as ModelTodo;

#[derive(SimpleObject, Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: ID,
    pub title: String,
    pub completed: bool,
}

impl From<ModelTodo> for Todo {
    fn from(t: ModelTodo) -> Self {
        Self {
            id: ID(t.id.to_string()),
            title: t.title,
            completed: t.completed,
        }
    }
}
