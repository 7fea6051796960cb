use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus};

pub(super) fn handle_suggestions(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Esc => {
            app.focus = Focus::Field;
        }

        // Up from the first entry hands focus back to the field
        KeyCode::Up => {
            if app.list.suggestion_cursor() == 0 {
                app.focus = Focus::Field;
            } else {
                app.list.select_prev_suggestion();
            }
        }
        KeyCode::Down => {
            app.list.select_next_suggestion();
        }

        KeyCode::Enter => {
            app.list.accept_suggestion(now);
            app.field_cursor = app.list.input_text().len();
            app.focus = Focus::Field;
        }

        _ => {}
    }
}
