pub mod error;
pub mod item;
pub mod list;

pub use error::TodoError;
pub use item::{Todo, TodoId};
pub use list::TodoList;
