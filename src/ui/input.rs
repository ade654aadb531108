use crate::ui::app::App;
use crate::ui::page::{Field, PageIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'u') {
        app.dispatch_page(PageIntent::ClearField);
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_page(PageIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_page(PageIntent::FocusPrev),
        KeyCode::Enter => {
            // Enter submits from anywhere in the form; an incomplete form
            // moves on to the next field instead.
            if !app.submit() && app.page().focus != Field::Submit {
                app.dispatch_page(PageIntent::FocusNext);
            }
        }
        KeyCode::Backspace => app.dispatch_page(PageIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_page(PageIntent::Insert(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
