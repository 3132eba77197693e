use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Right | KeyCode::Down => app.move_focus(1),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Up => app.move_focus(-1),
        KeyCode::Enter | KeyCode::Char(' ') => app.press_focused(),
        KeyCode::Char('+') => app.increment(),
        KeyCode::Char('c') => app.toggle_counter(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
