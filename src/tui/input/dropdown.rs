use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

/// The category dropdown swallows all keys while open.
pub(super) fn handle_dropdown(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => {
            app.list.close_dropdown();
        }

        KeyCode::Up => {
            app.dropdown_cursor = app.dropdown_cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if app.dropdown_cursor + 1 < app.list.categories().len() {
                app.dropdown_cursor += 1;
            }
        }

        KeyCode::Enter => {
            match app.list.categories().get(app.dropdown_cursor) {
                Some(category) => {
                    let name = category.name.clone();
                    app.list.select_dropdown_category(&name);
                }
                None => app.list.close_dropdown(),
            }
        }

        _ => {}
    }
}
