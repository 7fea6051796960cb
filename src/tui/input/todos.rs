use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus};

pub(super) fn handle_todos(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.focus = Focus::Field;
        }

        KeyCode::Up => {
            if app.todos_cursor == 0 {
                app.focus = Focus::Field;
            } else {
                app.todos_cursor -= 1;
            }
        }
        KeyCode::Down => {
            if app.todos_cursor + 1 < app.list.todos().len() {
                app.todos_cursor += 1;
            }
        }

        // Flip the checkbox under the cursor
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.list.toggle_finished(app.todos_cursor);
        }

        _ => {}
    }
}
