use crate::app::mode::Mode;
use crate::app::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    if state.mode == Mode::ConfirmDelete {
        render_banner(
            f,
            " Delete todo? (y/N) ",
            Color::Rgb(180, 100, 0),
            area,
        );
        return;
    }

    if let Some((message, time)) = &state.status_message
        && time.elapsed().as_secs() <= 3
    {
        render_banner(f, &format!(" {message} "), Color::Rgb(0, 100, 0), area);
        return;
    }

    let view = state.view();
    let count = if state.search().is_active() {
        format!("{} of {} todos", view.visible_count(), view.len())
    } else {
        format!("{} todos", view.len())
    };
    let left_content = format!(" {} | {} | {}", state.mode, count, state.storage().slot());
    let hint = "Tab focus  ? help  q quit";
    let version_text = format!("v{VERSION}");

    // Spaces: 2 between segments + 1 trailing
    let padding = (area.width as usize).saturating_sub(
        left_content.width() + hint.width() + version_text.width() + 3,
    );

    let status_line = format!(
        "{left_content} {hint}{:>padding$} {version_text} ",
        "",
        padding = padding
    );

    let style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);
    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));

    f.render_widget(status, area);
}

fn render_banner(f: &mut Frame, message: &str, bg: Color, area: Rect) {
    let style = Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let padding = (area.width as usize).saturating_sub(message.width());
    let status_line = format!("{message}{:padding$}", "", padding = padding);

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}
