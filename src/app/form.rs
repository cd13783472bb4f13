//! The todo form: one text input that either creates a new todo or saves
//! an edit to an existing one.

use super::input::TextInput;
use crate::todo::{Todo, TodoError, TodoId, TodoList};
use tracing::{debug, warn};

pub const ADD_LABEL: &str = "Add Todo";
pub const SAVE_LABEL: &str = "Save Todo";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(TodoId),
}

/// Outcome of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Created(Todo),
    Updated(Todo),
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    mode: FormMode,
    input: TextInput,
    edit_label: Option<String>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    /// `Editing Todo: <text>` while in edit mode.
    pub fn edit_label(&self) -> Option<&str> {
        self.edit_label.as_deref()
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => ADD_LABEL,
            FormMode::Edit(_) => SAVE_LABEL,
        }
    }

    /// Start editing `todo`, replacing any current edit target.
    pub fn begin_edit(&mut self, todo: &Todo) {
        debug!(id = %todo.id, "editing todo");
        self.mode = FormMode::Edit(todo.id.clone());
        self.input.set(&todo.text);
        self.edit_label = Some(format!("Editing Todo: {}", todo.text));
    }

    pub fn reset(&mut self) {
        self.mode = FormMode::Create;
        self.input.clear();
        self.edit_label = None;
    }

    /// Leave edit mode without saving. No-op in create mode.
    pub fn cancel_edit(&mut self) {
        if self.is_editing() {
            self.reset();
        }
    }

    /// Apply the current input to `todos`.
    ///
    /// Empty input is rejected without any state change. In edit mode the
    /// form returns to create mode afterwards, including when the target no
    /// longer exists.
    pub fn submit(&mut self, todos: &mut TodoList) -> Result<Submission, TodoError> {
        let text = self.input.value().trim().to_string();
        if text.is_empty() {
            return Err(TodoError::EmptyText);
        }

        match self.mode.clone() {
            FormMode::Create => {
                let todo = todos.create(&text)?;
                self.input.clear();
                Ok(Submission::Created(todo))
            }
            FormMode::Edit(id) => {
                let result = todos.update(&id, &text);
                if let Err(e) = &result {
                    warn!(id = %id, error = %e, "could not edit todo");
                }
                self.reset();
                result.map(Submission::Updated)
            }
        }
    }
}
