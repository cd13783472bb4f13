use super::{Todo, TodoError, TodoId};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::debug;

/// In-memory, ordered collection of todos. Insertion order is display order.
///
/// Mutations never persist on their own; callers save the collection after a
/// successful change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from previously stored records, keeping their order.
    pub fn from_todos(items: Vec<Todo>) -> Result<Self, TodoError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(TodoError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn all(&self) -> &[Todo] {
        &self.items
    }

    pub fn into_todos(self) -> Vec<Todo> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.items.iter().find(|item| &item.id == id)
    }

    fn position(&self, id: &TodoId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn create(&mut self, text: &str) -> Result<Todo, TodoError> {
        self.create_at(text, Utc::now())
    }

    /// Append a new todo created at `now`.
    ///
    /// The id is `now` in milliseconds. When that value is already taken the
    /// next free millisecond is used, so ids stay unique even for bursts.
    pub fn create_at(&mut self, text: &str, now: DateTime<Utc>) -> Result<Todo, TodoError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }

        let mut millis = now.timestamp_millis();
        let mut id = TodoId::from_millis(millis);
        while self.contains(&id) {
            millis += 1;
            id = TodoId::from_millis(millis);
        }

        let todo = Todo::new(id, text, now);
        debug!(id = %todo.id, "created todo");
        self.items.push(todo.clone());
        Ok(todo)
    }

    /// Replace the text of an existing todo, keeping its id and creation time.
    pub fn update(&mut self, id: &TodoId, text: &str) -> Result<Todo, TodoError> {
        let index = self
            .position(id)
            .ok_or_else(|| TodoError::NotFound(id.clone()))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }

        let item = &mut self.items[index];
        item.text = text.to_string();
        debug!(id = %item.id, "updated todo");
        Ok(item.clone())
    }

    pub fn delete(&mut self, id: &TodoId) -> Result<Todo, TodoError> {
        let index = self
            .position(id)
            .ok_or_else(|| TodoError::NotFound(id.clone()))?;
        let removed = self.items.remove(index);
        debug!(id = %removed.id, "deleted todo");
        Ok(removed)
    }
}
