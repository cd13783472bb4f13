use super::form::{FormController, Submission};
use super::mode::Mode;
use super::search::SearchFilter;
use crate::config::Config;
use crate::storage::TodoStorage;
use crate::todo::{TodoError, TodoId, TodoList};
use crate::ui::theme::Theme;
use crate::view::ListView;
use anyhow::Result;
use ratatui::widgets::ListState;
use std::time::Instant;
use tracing::{debug, info, warn};

pub const COULD_NOT_EDIT: &str = "Could not edit todo";

/// Everything the interactive session owns: the todo collection, where it
/// is persisted, its rendered rows, the form and the search input.
pub struct AppState {
    todos: TodoList,
    storage: TodoStorage,
    view: ListView,
    form: FormController,
    search: SearchFilter,
    pub mode: Mode,
    pub theme: Theme,
    pub confirm_delete: bool,
    pub pending_delete: Option<TodoId>,
    /// Blocking notice; while set, only dismissal is accepted
    pub alert: Option<String>,
    pub status_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub show_help: bool,
    /// Index into the visible rows
    pub selected: usize,
    pub list_state: ListState,
    /// Terminal height, updated on each render for scroll calculations
    pub terminal_height: u16,
}

impl AppState {
    pub fn new(todos: TodoList, storage: TodoStorage, config: &Config, theme: Theme) -> Self {
        let mut view = ListView::new();
        view.append(todos.all());

        let mut state = Self {
            todos,
            storage,
            view,
            form: FormController::new(),
            search: SearchFilter::new(config.search.literal),
            mode: Mode::default(),
            theme,
            confirm_delete: config.confirm_delete,
            pending_delete: None,
            alert: None,
            status_message: None,
            should_quit: false,
            show_help: false,
            selected: 0,
            list_state: ListState::default(),
            terminal_height: 24, // Default, updated on first render
        };
        state.sync_list_state();
        state
    }

    /// Load the persisted collection and render it. An absent or corrupt
    /// slot starts the session with an empty list.
    pub fn bootstrap(storage: TodoStorage, config: &Config, theme: Theme) -> Result<Self> {
        let todos = storage.load()?;
        info!(count = todos.len(), slot = storage.slot(), "loaded todos");
        Ok(Self::new(todos, storage, config, theme))
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    pub fn search(&self) -> &SearchFilter {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchFilter {
        &mut self.search
    }

    pub fn storage(&self) -> &TodoStorage {
        &self.storage
    }

    fn persist(&mut self) -> Result<()> {
        self.storage.save(self.todos.all())
    }

    /// Submit the form. Rejections become alerts; only a failed save is an
    /// error.
    pub fn submit_form(&mut self) -> Result<()> {
        match self.form.submit(&mut self.todos) {
            Ok(Submission::Created(todo)) => {
                self.view.append([&todo]);
                self.persist()?;
                self.refresh_search();
                self.set_status_message("Todo added".to_string());
            }
            Ok(Submission::Updated(todo)) => {
                if !self.view.update_text(&todo) {
                    warn!(id = %todo.id, "updated todo has no rendered row");
                }
                self.persist()?;
                self.refresh_search();
                self.set_status_message("Todo saved".to_string());
            }
            Err(TodoError::NotFound(_)) => self.show_alert(COULD_NOT_EDIT),
            Err(e) => self.show_alert(&e.to_string()),
        }
        Ok(())
    }

    /// Put the form in edit mode for `id` and focus it.
    pub fn begin_edit(&mut self, id: &TodoId) {
        match self.todos.get(id) {
            Some(todo) => {
                self.form.begin_edit(todo);
                self.mode = Mode::Input;
            }
            None => warn!(id = %id, "edit requested for unknown todo"),
        }
    }

    pub fn edit_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.begin_edit(&id);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.form.cancel_edit();
    }

    /// Delete `id`, persist, and drop its row.
    pub fn delete_todo(&mut self, id: &TodoId) -> Result<()> {
        match self.todos.delete(id) {
            Ok(_) => {
                self.view.remove(id);
                self.persist()?;
                self.clamp_selection();
                self.set_status_message("Todo deleted".to_string());
            }
            Err(e) => warn!(error = %e, "delete ignored"),
        }
        Ok(())
    }

    /// Delete the selected todo, asking first when configured to.
    pub fn delete_selected(&mut self) -> Result<()> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        if self.confirm_delete {
            self.pending_delete = Some(id);
            self.mode = Mode::ConfirmDelete;
            return Ok(());
        }
        self.delete_todo(&id)
    }

    pub fn confirm_pending_delete(&mut self) -> Result<()> {
        self.mode = Mode::Navigate;
        match self.pending_delete.take() {
            Some(id) => self.delete_todo(&id),
            None => Ok(()),
        }
    }

    pub fn cancel_pending_delete(&mut self) {
        self.pending_delete = None;
        self.mode = Mode::Navigate;
    }

    /// Re-apply the search input to the rendered rows.
    pub fn refresh_search(&mut self) {
        self.search.apply(&self.todos, &mut self.view);
        self.clamp_selection();
    }

    pub fn selected_id(&self) -> Option<TodoId> {
        self.view
            .visible_rows()
            .nth(self.selected)
            .map(|row| row.id.clone())
    }

    pub fn move_selection_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.sync_list_state();
    }

    pub fn move_selection_down(&mut self) {
        if self.selected + 1 < self.view.visible_count() {
            self.selected += 1;
        }
        self.sync_list_state();
    }

    pub fn clamp_selection(&mut self) {
        let visible = self.view.visible_count();
        if self.selected >= visible {
            self.selected = visible.saturating_sub(1);
        }
        self.sync_list_state();
    }

    /// Keep the list widget's selection and scroll offset on the selected row.
    /// Each row renders as two lines.
    pub fn sync_list_state(&mut self) {
        if self.view.visible_count() == 0 {
            self.list_state.select(None);
            return;
        }
        self.list_state.select(Some(self.selected));

        // Form (3) + search (3) + list borders (2) + status bar (1)
        let viewport_rows = (self.terminal_height.saturating_sub(9) / 2).max(1) as usize;
        let offset = self.list_state.offset();
        if self.selected < offset {
            *self.list_state.offset_mut() = self.selected;
        } else if self.selected >= offset + viewport_rows {
            *self.list_state.offset_mut() = self.selected + 1 - viewport_rows;
        }
    }

    pub fn show_alert(&mut self, message: &str) {
        debug!(message, "alert");
        self.alert = Some(message.to_string());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_status_message(&mut self) {
        if let Some((_, time)) = &self.status_message
            && time.elapsed().as_secs() > 3
        {
            self.status_message = None;
        }
    }
}
