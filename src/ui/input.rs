use crate::ui::app::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        app.request_quit();
        return;
    }
    if key.code == KeyCode::Esc {
        app.back();
        return;
    }

    // The dialog is display-only: Enter closes it, everything else is swallowed.
    if app.prime_dialog().is_visible() {
        if key.code == KeyCode::Enter {
            app.close_prime_dialog();
        }
        return;
    }

    match app.screen() {
        Screen::Menu => handle_menu_key(app, key),
        Screen::Counter => handle_counter_key(app, key),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_menu_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_menu_selection(1),
        KeyCode::Enter | KeyCode::Right => app.open_selected(),
        _ => {}
    }
}

fn handle_counter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up | KeyCode::Char('k') => {
            app.increment()
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down | KeyCode::Char('j') => {
            app.decrement()
        }
        KeyCode::Char('p') | KeyCode::Char('P') => app.open_prime_dialog(),
        KeyCode::Tab | KeyCode::Right => app.focus_next(),
        KeyCode::BackTab | KeyCode::Left => app.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
