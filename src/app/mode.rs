use std::fmt;

/// Which part of the screen receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Navigate,
    #[default]
    Input,
    Search,
    ConfirmDelete,
}

impl Mode {
    /// Next focus when cycling with Tab.
    pub fn next_focus(self) -> Self {
        match self {
            Mode::Input => Mode::Search,
            Mode::Search => Mode::Navigate,
            Mode::Navigate => Mode::Input,
            Mode::ConfirmDelete => Mode::ConfirmDelete,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Navigate => write!(f, "NAVIGATE"),
            Mode::Input => write!(f, "INPUT"),
            Mode::Search => write!(f, "SEARCH"),
            Mode::ConfirmDelete => write!(f, "CONFIRM"),
        }
    }
}
