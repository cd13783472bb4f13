use super::input::TextInput;
use super::mode::Mode;
use super::state::AppState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return Ok(());
    }

    // Alerts block everything until dismissed
    if state.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            state.dismiss_alert();
        }
        return Ok(());
    }

    if state.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            state.show_help = false;
        }
        return Ok(());
    }

    match state.mode {
        Mode::Navigate => handle_navigate_mode(key, state)?,
        Mode::Input => handle_input_mode(key, state)?,
        Mode::Search => handle_search_mode(key, state),
        Mode::ConfirmDelete => handle_confirm_delete_mode(key, state)?,
    }
    Ok(())
}

fn handle_navigate_mode(key: KeyEvent, state: &mut AppState) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => state.move_selection_down(),
        KeyCode::Char('k') | KeyCode::Up => state.move_selection_up(),
        KeyCode::Char('e') | KeyCode::Enter => state.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => state.delete_selected()?,
        KeyCode::Char('n') | KeyCode::Char('a') | KeyCode::Char('i') => state.mode = Mode::Input,
        KeyCode::Char('/') => state.mode = Mode::Search,
        KeyCode::Char('?') => state.show_help = true,
        KeyCode::Tab => state.mode = state.mode.next_focus(),
        _ => {}
    }
    Ok(())
}

fn handle_input_mode(key: KeyEvent, state: &mut AppState) -> Result<()> {
    match key.code {
        KeyCode::Enter => state.submit_form()?,
        KeyCode::Esc => {
            if state.form().is_editing() {
                state.cancel_edit();
            } else {
                state.mode = Mode::Navigate;
            }
        }
        KeyCode::Tab => state.mode = state.mode.next_focus(),
        _ => {
            edit_text(key, state.form_mut().input_mut());
        }
    }
    Ok(())
}

fn handle_search_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => state.mode = Mode::Navigate,
        KeyCode::Tab => state.mode = state.mode.next_focus(),
        _ => {
            if edit_text(key, state.search_mut().input_mut()) {
                state.refresh_search();
            }
        }
    }
}

fn handle_confirm_delete_mode(key: KeyEvent, state: &mut AppState) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            state.confirm_pending_delete()?;
        }
        _ => state.cancel_pending_delete(),
    }
    Ok(())
}

/// Apply a line-editing key to `input`. Returns whether the text changed.
fn edit_text(key: KeyEvent, input: &mut TextInput) -> bool {
    let word = key.modifiers.contains(KeyModifiers::CONTROL)
        || key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left if word => {
            input.move_word_left();
            false
        }
        KeyCode::Right if word => {
            input.move_word_right();
            false
        }
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_home();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let changed = !input.is_empty();
            input.clear();
            changed
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert(c);
            true
        }
        _ => false,
    }
}
