use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "quicktodo")]
#[command(about = "A small to-do list manager that keeps everything in one local slot", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a todo
    Add {
        text: String,
    },
    /// Print todos in order
    Show {
        /// Only show todos matching this pattern (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Replace the text of a todo
    Edit {
        id: String,
        text: String,
    },
    /// Delete a todo
    Delete {
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_tui() {
        let cli = Cli::parse_from(["quicktodo"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::parse_from(["quicktodo", "add", "Buy milk"]);
        assert!(matches!(cli.command, Some(Commands::Add { ref text }) if text == "Buy milk"));
    }

    #[test]
    fn test_parse_show_with_search() {
        let cli = Cli::parse_from(["quicktodo", "show", "--search", "milk"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Show { search: Some(ref s) }) if s == "milk"
        ));
    }

    #[test]
    fn test_parse_edit() {
        let cli = Cli::parse_from(["quicktodo", "edit", "1576636740000", "Walk dog"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Edit { ref id, ref text }) if id == "1576636740000" && text == "Walk dog"
        ));
    }
}
