pub mod form;
pub mod status_bar;
pub mod todo_list;

use crate::app::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, state: &mut AppState) {
    // Update terminal height for scroll calculations
    state.terminal_height = f.area().height;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Form
            Constraint::Length(3), // Search
            Constraint::Min(1),    // Todo list
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    form::render(f, state, chunks[0]);
    form::render_search(f, state, chunks[1]);
    todo_list::render(f, state, chunks[2]);
    status_bar::render(f, state, chunks[3]);

    if state.show_help {
        render_help_overlay(f, state);
    }

    if let Some(message) = &state.alert {
        render_alert(f, state, message);
    }
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(state.theme.foreground);
    let section_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("    {key:<16}"), key_style),
            Span::styled(desc, desc_style),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            "  quicktodo Help",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("  ── Form ──", section_style)),
        entry("Enter", "Add todo / save edit"),
        entry("Esc", "Cancel edit, then leave the form"),
        entry("Ctrl+←/→", "Move by word"),
        entry("Ctrl+U", "Clear input"),
        Line::from(""),
        Line::from(Span::styled("  ── List ──", section_style)),
        entry("j / ↓", "Move down"),
        entry("k / ↑", "Move up"),
        entry("e / Enter", "Edit selected todo"),
        entry("d / Del", "Delete selected todo"),
        entry("n / a / i", "Focus the form"),
        entry("/", "Focus search"),
        entry("q / Esc", "Quit"),
        Line::from(""),
        Line::from(Span::styled("  ── Anywhere ──", section_style)),
        entry("Tab", "Cycle form → search → list"),
        entry("Ctrl+C", "Quit"),
    ];

    let area = centered_rect(60, 70, f.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help (Esc to close) ")
        .style(Style::default().bg(state.theme.background));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_alert(f: &mut Frame, state: &AppState, message: &str) {
    let area = centered_rect(50, 20, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Alert (Enter to dismiss) ")
        .border_style(Style::default().fg(state.theme.alert))
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(message)
        .block(block)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(state.theme.alert)
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
