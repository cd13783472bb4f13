//! Projection of the todo collection onto visible rows.
//!
//! `ListView` holds one `RenderedRow` per live todo, in display order, plus
//! an index from todo id to row position so single rows can be updated or
//! removed without scanning.

pub mod format;

use crate::todo::{Todo, TodoId};
use std::collections::{HashMap, HashSet};
use tracing::warn;

pub use format::format_created;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: TodoId,
    pub text: String,
    pub timestamp: String,
    pub hidden: bool,
}

impl RenderedRow {
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            id: todo.id.clone(),
            text: todo.text.trim().to_string(),
            timestamp: format_created(&todo.created),
            hidden: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListView {
    rows: Vec<RenderedRow>,
    positions: HashMap<TodoId, usize>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rows for `todos`. All rows are built first and then added in a
    /// single extend. Todos that already have a row are skipped.
    pub fn append<'a>(&mut self, todos: impl IntoIterator<Item = &'a Todo>) {
        let mut batch = Vec::new();
        let mut batch_ids = HashSet::new();

        for todo in todos {
            if self.positions.contains_key(&todo.id) || !batch_ids.insert(todo.id.clone()) {
                warn!(id = %todo.id, "todo already rendered, skipping");
                continue;
            }
            batch.push(RenderedRow::from_todo(todo));
        }

        let start = self.rows.len();
        for (offset, row) in batch.iter().enumerate() {
            self.positions.insert(row.id.clone(), start + offset);
        }
        self.rows.extend(batch);
    }

    /// Replace the text of the row rendering `todo`. Returns `false` when the
    /// todo has no row.
    pub fn update_text(&mut self, todo: &Todo) -> bool {
        match self.positions.get(&todo.id) {
            Some(&index) => {
                self.rows[index].text = todo.text.trim().to_string();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &TodoId) -> bool {
        let Some(index) = self.positions.remove(id) else {
            return false;
        };
        self.rows.remove(index);
        for row in &self.rows[index..] {
            if let Some(position) = self.positions.get_mut(&row.id) {
                *position -= 1;
            }
        }
        true
    }

    /// Hide every row whose id is not in `matching`; show the rest.
    pub fn apply_filter(&mut self, matching: &HashSet<TodoId>) {
        for row in &mut self.rows {
            row.hidden = !matching.contains(&row.id);
        }
    }

    pub fn show_all(&mut self) {
        for row in &mut self.rows {
            row.hidden = false;
        }
    }

    pub fn get(&self, id: &TodoId) -> Option<&RenderedRow> {
        self.positions.get(id).map(|&index| &self.rows[index])
    }

    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &RenderedRow> {
        self.rows.iter().filter(|row| !row.hidden)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_rows().count()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One row per todo, in the same order, and the id index agrees.
    pub fn is_in_sync_with(&self, todos: &[Todo]) -> bool {
        self.rows.len() == todos.len()
            && self.positions.len() == self.rows.len()
            && self
                .rows
                .iter()
                .zip(todos)
                .enumerate()
                .all(|(index, (row, todo))| {
                    row.id == todo.id && self.positions.get(&row.id) == Some(&index)
                })
    }
}
