use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Key handling for the capture field. Edits go through the view-model so
/// the keyword and debounce stay in sync with the text.
pub(super) fn handle_field(app: &mut App, key: KeyEvent, now: Instant) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.should_quit = true;
        }

        // Submit the field as a new todo
        (_, KeyCode::Enter) => {
            if app.list.create_todo(now) {
                app.field_cursor = 0;
            }
        }

        // Focus hand-off
        (_, KeyCode::Down) => {
            if !app.list.suggestions().is_empty() {
                app.focus = Focus::Suggestions;
            }
        }
        (_, KeyCode::Up) => {
            if !app.list.todos().is_empty() {
                app.todos_cursor = 0;
                app.focus = Focus::Todos;
            }
        }

        // Category dropdown, preselecting the active category
        (_, KeyCode::Tab) => {
            app.dropdown_cursor = app
                .list
                .categories()
                .iter()
                .position(|c| c.name == app.list.selected_category())
                .unwrap_or(0);
            app.list.open_dropdown();
        }

        // Caret movement
        (KeyModifiers::CONTROL, KeyCode::Left) => {
            app.field_cursor = unicode::word_boundary_left(app.list.input_text(), app.field_cursor);
        }
        (KeyModifiers::CONTROL, KeyCode::Right) => {
            app.field_cursor =
                unicode::word_boundary_right(app.list.input_text(), app.field_cursor);
        }
        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(app.list.input_text(), app.field_cursor)
            {
                app.field_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(app.list.input_text(), app.field_cursor)
            {
                app.field_cursor = next;
            }
        }
        (_, KeyCode::Home) => {
            app.field_cursor = 0;
        }
        (_, KeyCode::End) => {
            app.field_cursor = app.list.input_text().len();
        }

        // Deletion
        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(app.list.input_text(), app.field_cursor)
            {
                let mut text = app.list.input_text().to_string();
                text.replace_range(prev..app.field_cursor, "");
                app.field_cursor = prev;
                app.list.set_input(text, now);
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(app.list.input_text(), app.field_cursor)
            {
                let mut text = app.list.input_text().to_string();
                text.replace_range(app.field_cursor..next, "");
                app.list.set_input(text, now);
            }
        }

        // Insertion
        (modifiers, KeyCode::Char(c)) => {
            if modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(KeyModifiers::ALT) {
                return;
            }
            let mut text = app.list.input_text().to_string();
            text.insert(app.field_cursor, c);
            app.field_cursor += c.len_utf8();
            app.list.set_input(text, now);
        }

        _ => {}
    }
}
