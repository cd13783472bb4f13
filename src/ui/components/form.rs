use crate::app::input::TextInput;
use crate::app::mode::Mode;
use crate::app::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Input text with a block cursor when focused.
pub fn input_line<'a>(input: &'a TextInput, focused: bool, placeholder: &'a str) -> Line<'a> {
    let cursor_style = Style::default().bg(Color::Yellow).fg(Color::Black);

    if input.is_empty() && !focused {
        return Line::from(Span::styled(
            placeholder,
            Style::default().add_modifier(Modifier::DIM),
        ));
    }
    if !focused {
        return Line::from(input.value());
    }

    let (before, current, rest) = input.split_at_cursor();
    Line::from(vec![
        Span::raw(before),
        Span::styled(current.unwrap_or(" "), cursor_style),
        Span::raw(rest),
    ])
}

fn border_style(state: &AppState, focused: bool) -> Style {
    if focused {
        Style::default().fg(state.theme.focused_border)
    } else {
        Style::default().fg(state.theme.muted)
    }
}

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.mode == Mode::Input && state.alert.is_none();
    let form = state.form();

    let title = match form.edit_label() {
        Some(label) => Span::styled(
            format!(" {label} "),
            Style::default()
                .fg(state.theme.edit_label)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::raw(" New Todo "),
    };
    let submit_hint = if form.is_editing() {
        format!(" Enter: {}  Esc: cancel ", form.submit_label())
    } else {
        format!(" Enter: {} ", form.submit_label())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(state, focused))
        .title(Line::from(title))
        .title_bottom(Line::from(submit_hint).right_aligned())
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(input_line(form.input(), focused, "What needs doing?"))
        .style(Style::default().fg(state.theme.foreground))
        .block(block);
    f.render_widget(paragraph, area);
}

pub fn render_search(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.mode == Mode::Search && state.alert.is_none();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(state, focused))
        .title(" Search ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(input_line(state.search().input(), focused, "/ to search"))
        .style(Style::default().fg(state.theme.foreground))
        .block(block);
    f.render_widget(paragraph, area);
}
