//! quicktodo: a single-user to-do list kept in one local storage slot.
//!
//! The collection lives in a [`todo::TodoList`], is persisted wholesale by
//! [`storage::TodoStorage`], projected onto rows by [`view::ListView`] and
//! driven interactively through [`app::AppState`].

pub mod app;
pub mod config;
pub mod storage;
pub mod todo;
pub mod ui;
pub mod utils;
pub mod view;
