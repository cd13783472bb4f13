use super::TodoId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Submitted text was empty after trimming
    #[error("Enter todo text")]
    EmptyText,

    #[error("No todo with id {0}")]
    NotFound(TodoId),

    /// Two records in a loaded collection share an id
    #[error("Duplicate todo id {0}")]
    DuplicateId(TodoId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_message() {
        assert_eq!(TodoError::EmptyText.to_string(), "Enter todo text");
    }

    #[test]
    fn test_not_found_message_includes_id() {
        let err = TodoError::NotFound(TodoId::from("1576636740000"));
        assert_eq!(err.to_string(), "No todo with id 1576636740000");
    }
}
