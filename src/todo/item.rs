use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a todo, the creation time in milliseconds since the epoch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TodoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl Todo {
    /// Build a record created at `created`. Sub-millisecond precision is
    /// dropped so the stored timestamp matches the id.
    pub fn new(id: TodoId, text: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            created: created.trunc_subsecs(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 12, 18, 2, 39, 0).unwrap()
    }

    #[test]
    fn test_id_from_millis() {
        let id = TodoId::from_millis(sample_time().timestamp_millis());
        assert_eq!(id.as_str(), "1576636740000");
    }

    #[test]
    fn test_new_truncates_to_millis() {
        let created = sample_time() + chrono::Duration::nanoseconds(1_234_567);
        let todo = Todo::new(TodoId::from("1"), "Buy milk", created);
        assert_eq!(todo.created.timestamp_subsec_nanos(), 1_000_000);
    }

    #[test]
    fn test_serialized_shape() {
        let todo = Todo::new(TodoId::from("1576636740000"), "Buy milk", sample_time());
        let value = serde_json::to_value(&todo).unwrap();

        assert_eq!(value["id"], "1576636740000");
        assert_eq!(value["text"], "Buy milk");
        assert_eq!(value["created"], "2019-12-18T02:39:00Z");
    }

    #[test]
    fn test_deserialize_iso_timestamp_with_millis() {
        let json = r#"{"id":"1576636740123","text":"Walk dog","created":"2019-12-18T02:39:00.123Z"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();

        assert_eq!(todo.id, TodoId::from("1576636740123"));
        assert_eq!(todo.created.timestamp_millis(), 1_576_636_740_123);
    }
}
