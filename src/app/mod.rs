pub mod event;
pub mod form;
pub mod input;
pub mod mode;
pub mod search;
pub mod state;

pub use form::{FormController, FormMode, Submission};
pub use mode::Mode;
pub use search::{SearchFilter, SearchPattern};
pub use state::AppState;
