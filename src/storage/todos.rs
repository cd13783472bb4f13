use super::slot::{validate_slot_name, FileSlotStore, MemorySlotStore, SlotStore};
use crate::config::Config;
use crate::todo::{Todo, TodoList};
use crate::utils::paths::get_slots_dir;
use anyhow::{Context, Result};
use std::string::FromUtf8Error;
use tracing::{debug, error};

pub const DEFAULT_SLOT: &str = "todos";

/// Reads and writes the whole todo collection under a single slot.
pub struct TodoStorage {
    store: Box<dyn SlotStore>,
    slot: String,
}

impl TodoStorage {
    pub fn new(store: Box<dyn SlotStore>, slot: impl Into<String>) -> Self {
        Self {
            store,
            slot: slot.into(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemorySlotStore::new()), DEFAULT_SLOT)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        validate_slot_name(&config.storage.slot)?;
        let dir = match &config.storage.dir {
            Some(dir) => dir.clone(),
            None => get_slots_dir()?,
        };
        Ok(Self::new(
            Box::new(FileSlotStore::new(dir)),
            config.storage.slot.clone(),
        ))
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Serialize the collection and overwrite the slot.
    pub fn save(&mut self, todos: &[Todo]) -> Result<()> {
        let content = serde_json::to_string(todos).context("Failed to serialize todos")?;
        self.store.write(&self.slot, &content)?;
        debug!(slot = %self.slot, count = todos.len(), "saved todos");
        Ok(())
    }

    /// Load the stored collection.
    ///
    /// An absent or blank slot yields an empty list. Content that is not
    /// UTF-8, not a JSON array of todos, or that repeats an id, is logged and
    /// also yields an empty list. Only a failure to read the medium itself is
    /// returned as an error.
    pub fn load(&self) -> Result<TodoList> {
        let content = match self.store.read(&self.slot) {
            Ok(Some(content)) => content,
            Ok(None) => {
                debug!(slot = %self.slot, "slot is empty");
                return Ok(TodoList::new());
            }
            Err(e) if e.downcast_ref::<FromUtf8Error>().is_some() => {
                error!(slot = %self.slot, error = %e, "Could not deserialize todos");
                return Ok(TodoList::new());
            }
            Err(e) => return Err(e),
        };

        if content.trim().is_empty() {
            return Ok(TodoList::new());
        }

        let todos: Vec<Todo> = match serde_json::from_str(&content) {
            Ok(todos) => todos,
            Err(e) => {
                error!(slot = %self.slot, error = %e, "Could not deserialize todos");
                return Ok(TodoList::new());
            }
        };

        match TodoList::from_todos(todos) {
            Ok(list) => {
                debug!(slot = %self.slot, count = list.len(), "loaded todos");
                Ok(list)
            }
            Err(e) => {
                error!(slot = %self.slot, error = %e, "Could not deserialize todos");
                Ok(TodoList::new())
            }
        }
    }

    /// Raw slot content, as written by the last save.
    pub fn raw(&self) -> Result<Option<String>> {
        self.store.read(&self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::TodoId;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn storage_with(content: &str) -> TodoStorage {
        TodoStorage::new(
            Box::new(MemorySlotStore::with_slot(DEFAULT_SLOT, content)),
            DEFAULT_SLOT,
        )
    }

    fn sample_todos() -> Vec<Todo> {
        vec![
            Todo::new(
                TodoId::from("1576636740000"),
                "Buy milk",
                Utc.timestamp_millis_opt(1_576_636_740_000).unwrap(),
            ),
            Todo::new(
                TodoId::from("1576636740123"),
                "Walk dog",
                Utc.timestamp_millis_opt(1_576_636_740_123).unwrap(),
            ),
        ]
    }

    #[test]
    fn test_load_absent_slot_is_empty() {
        let storage = TodoStorage::in_memory();
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_blank_slot_is_empty() {
        assert!(storage_with("").load().unwrap().is_empty());
        assert!(storage_with("  \n").load().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_content_and_order() {
        let mut storage = TodoStorage::in_memory();
        let todos = sample_todos();

        storage.save(&todos).unwrap();

        assert_eq!(storage.load().unwrap().all(), todos.as_slice());
    }

    #[test]
    fn test_round_trip_empty_collection() {
        let mut storage = TodoStorage::in_memory();
        storage.save(&[]).unwrap();

        assert_eq!(storage.raw().unwrap().as_deref(), Some("[]"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let mut storage = TodoStorage::in_memory();
        let todos = sample_todos();

        storage.save(&todos).unwrap();
        storage.save(&todos[..1]).unwrap();

        assert_eq!(storage.load().unwrap().all(), &todos[..1]);
    }

    #[test]
    fn test_load_non_json_is_empty() {
        assert!(storage_with("not json at all").load().unwrap().is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        assert!(storage_with(r#"{"id":"1"}"#).load().unwrap().is_empty());
        assert!(storage_with(r#"[{"id":"1","text":"x"}]"#).load().unwrap().is_empty());
        assert!(storage_with(r#"[{"id":1,"text":"x","created":"2019-12-18T02:39:00Z"}]"#)
            .load()
            .unwrap()
            .is_empty());
        assert!(storage_with("null").load().unwrap().is_empty());
    }

    #[test]
    fn test_load_duplicate_ids_is_empty() {
        let content = r#"[
            {"id":"1","text":"a","created":"2019-12-18T02:39:00.000Z"},
            {"id":"1","text":"b","created":"2019-12-18T02:39:00.000Z"}
        ]"#;
        assert!(storage_with(content).load().unwrap().is_empty());
    }

    #[test]
    fn test_load_reads_browser_style_json() {
        let content = r#"[{"text":"Buy milk","id":"1576636740000","created":"2019-12-18T02:39:00.000Z"}]"#;
        let list = storage_with(content).load().unwrap();
        let todos = list.all();

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "Buy milk");
        assert_eq!(todos[0].id, TodoId::from("1576636740000"));
    }

    #[test]
    fn test_file_backed_round_trip() {
        let temp = TempDir::new().unwrap();
        let todos = sample_todos();

        let mut storage = TodoStorage::new(Box::new(FileSlotStore::new(temp.path())), "todos");
        storage.save(&todos).unwrap();

        let reopened = TodoStorage::new(Box::new(FileSlotStore::new(temp.path())), "todos");
        assert_eq!(reopened.load().unwrap().all(), todos.as_slice());
    }

    #[test]
    fn test_load_invalid_utf8_is_empty() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("todos.json"), [0xff, 0xfe, b'[', b']']).unwrap();

        let storage = TodoStorage::new(Box::new(FileSlotStore::new(temp.path())), "todos");
        let result = storage.load();

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_load_unreadable_slot_is_error() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("todos.json")).unwrap();

        let storage = TodoStorage::new(Box::new(FileSlotStore::new(temp.path())), "todos");
        assert!(storage.load().is_err());
    }

    #[test]
    fn test_from_config_rejects_slot_outside_dir() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.storage.dir = Some(temp.path().to_path_buf());

        for slot in ["../x", "a/b", ""] {
            config.storage.slot = slot.to_string();
            assert!(TodoStorage::from_config(&config).is_err(), "slot {slot:?}");
        }
    }

    #[test]
    fn test_from_config_uses_configured_dir_and_slot() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.storage.dir = Some(temp.path().to_path_buf());
        config.storage.slot = "work".to_string();

        let mut storage = TodoStorage::from_config(&config).unwrap();
        storage.save(&sample_todos()).unwrap();

        assert_eq!(storage.slot(), "work");
        assert!(temp.path().join("work.json").exists());
    }
}
