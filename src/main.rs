mod cli;

use quicktodo::app::{AppState, SearchPattern};
use quicktodo::config::Config;
use quicktodo::storage::TodoStorage;
use quicktodo::todo::TodoId;
use quicktodo::ui;
use quicktodo::ui::theme::Theme;
use quicktodo::utils::paths::{get_crash_log_path, get_logs_dir};
use quicktodo::view::format_created;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands};
use std::fs;
use std::io::Write;
use std::panic;

/// Install a panic hook that writes crash information to a log file
fn install_crash_handler() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if let Ok(crash_log_path) = get_crash_log_path() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let mut crash_report = format!("=== CRASH at {} ===\n", timestamp);

            if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
                crash_report.push_str(&format!("Message: {}\n", message));
            } else if let Some(message) = panic_info.payload().downcast_ref::<String>() {
                crash_report.push_str(&format!("Message: {}\n", message));
            }

            if let Some(location) = panic_info.location() {
                crash_report.push_str(&format!(
                    "Location: {}:{}:{}\n",
                    location.file(),
                    location.line(),
                    location.column()
                ));
            }
            crash_report.push('\n');

            if let Some(parent) = crash_log_path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(mut file) = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log_path)
            {
                let _ = file.write_all(crash_report.as_bytes());
                eprintln!("\nCrash logged to: {}", crash_log_path.display());
            }
        }

        default_hook(panic_info);
    }));
}

/// Initialize file-based logging for the TUI.
///
/// Logs are written to ~/.quicktodo/logs/quicktodo.log (rolling daily).
/// Log level can be controlled with RUST_LOG (default: info).
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = get_logs_dir().ok()?;

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "quicktodo.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI colors in log files
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(guard)
}

/// Warnings and errors to stderr for one-shot subcommands.
fn init_stderr_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    install_crash_handler();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(command) => {
            init_stderr_logging();
            let storage = TodoStorage::from_config(&config)?;
            match command {
                Commands::Add { text } => handle_add(storage, &text)?,
                Commands::Show { search } => handle_show(storage, search.as_deref(), &config)?,
                Commands::Edit { id, text } => handle_edit(storage, id, &text)?,
                Commands::Delete { id } => handle_delete(storage, id)?,
            }
        }
        None => {
            // Guard must be kept alive for the duration of the app
            let _log_guard = init_file_logging();

            tracing::info!("quicktodo starting");

            let storage = TodoStorage::from_config(&config)?;
            let state = AppState::bootstrap(storage, &config, Theme::from_config(&config))?;
            ui::run_tui(state)?;

            tracing::info!("quicktodo exiting gracefully");
        }
    }

    Ok(())
}

fn handle_add(mut storage: TodoStorage, text: &str) -> Result<()> {
    let mut list = storage.load()?;
    let todo = list.create(text)?;
    storage.save(list.all())?;

    println!("✓ Added {}", todo.id);
    Ok(())
}

fn handle_edit(mut storage: TodoStorage, id: String, text: &str) -> Result<()> {
    let mut list = storage.load()?;
    let todo = list
        .update(&TodoId::from(id), text)
        .context("Could not edit todo")?;
    storage.save(list.all())?;

    println!("✓ Saved {}", todo.id);
    Ok(())
}

fn handle_delete(mut storage: TodoStorage, id: String) -> Result<()> {
    let mut list = storage.load()?;
    let todo = list.delete(&TodoId::from(id))?;
    storage.save(list.all())?;

    println!("✓ Deleted {}", todo.id);
    Ok(())
}

fn handle_show(storage: TodoStorage, search: Option<&str>, config: &Config) -> Result<()> {
    let list = storage.load()?;
    let pattern = SearchPattern::compile(search.unwrap_or(""), config.search.literal);

    let matching: Vec<_> = list
        .all()
        .iter()
        .filter(|todo| pattern.is_match(&todo.text))
        .collect();

    if matching.is_empty() {
        if list.is_empty() {
            println!("No todos yet!");
        } else {
            println!("No matching todos.");
        }
        return Ok(());
    }

    for todo in matching {
        println!("{}  {}", todo.id, todo.text);
        println!("{:width$}  {}", "", format_created(&todo.created), width = todo.id.as_str().len());
    }

    Ok(())
}
