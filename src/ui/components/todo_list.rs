use crate::app::mode::Mode;
use crate::app::AppState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, state: &mut AppState, area: Rect) {
    let focused = matches!(state.mode, Mode::Navigate | Mode::ConfirmDelete);
    let view = state.view();
    let visible = view.visible_count();

    let title = if state.search().is_active() {
        format!(" Todos ({visible} of {}) ", view.len())
    } else {
        format!(" Todos ({}) ", view.len())
    };
    let controls = if focused { " e edit  d delete " } else { "" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            state.theme.focused_border
        } else {
            state.theme.muted
        }))
        .title(title)
        .title_bottom(Line::from(controls).right_aligned())
        .style(Style::default().bg(state.theme.background));

    if visible == 0 {
        let message = if view.is_empty() {
            "No todos yet"
        } else {
            "No matching todos"
        };
        let empty = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(state.theme.muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view
        .visible_rows()
        .map(|row| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    row.text.clone(),
                    Style::default().fg(state.theme.foreground),
                )),
                Line::from(Span::styled(
                    format!("  {}", row.timestamp),
                    Style::default().fg(state.theme.muted),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(state.theme.highlight_bg)
            .add_modifier(Modifier::BOLD),
    );

    f.render_stateful_widget(list, area, &mut state.list_state);
}
