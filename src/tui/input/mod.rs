mod dropdown;
mod field;
mod suggestions;
mod todos;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

/// Handle a key event: the dropdown is modal while open, otherwise the
/// focused pane decides.
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.list.dropdown_open() {
        dropdown::handle_dropdown(app, key);
        return;
    }

    match app.focus {
        Focus::Field => field::handle_field(app, key, now),
        Focus::Suggestions => suggestions::handle_suggestions(app, key, now),
        Focus::Todos => todos::handle_todos(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppConfig;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        App::new(&AppConfig::default())
    }

    fn type_str(app: &mut App, s: &str, now: Instant) {
        for c in s.chars() {
            handle_key(app, key(KeyCode::Char(c)), now);
        }
    }

    #[test]
    fn test_typing_edits_the_field() {
        let mut a = app();
        let now = Instant::now();
        type_str(&mut a, "buy milk", now);
        assert_eq!(a.list.input_text(), "buy milk");
        assert_eq!(a.field_cursor, 8);

        handle_key(&mut a, key(KeyCode::Backspace), now);
        assert_eq!(a.list.input_text(), "buy mil");

        handle_key(&mut a, key(KeyCode::Left), now);
        handle_key(&mut a, key(KeyCode::Left), now);
        handle_key(&mut a, key(KeyCode::Char('l')), now);
        assert_eq!(a.list.input_text(), "buy mlil");
    }

    #[test]
    fn test_enter_creates_todo_and_clears_field() {
        let mut a = app();
        let now = Instant::now();
        type_str(&mut a, "Buy milk", now);
        handle_key(&mut a, key(KeyCode::Enter), now);

        assert_eq!(a.list.todos().len(), 1);
        assert_eq!(a.list.todos()[0].title, "Buy milk");
        assert_eq!(a.list.input_text(), "");
        assert_eq!(a.field_cursor, 0);
    }

    #[test]
    fn test_down_focuses_suggestions_and_enter_accepts() {
        let mut a = app();
        let now = Instant::now();
        a.list.seed_sample_todos();

        handle_key(&mut a, key(KeyCode::Down), now);
        assert_eq!(a.focus, Focus::Suggestions);

        handle_key(&mut a, key(KeyCode::Down), now);
        assert_eq!(a.list.suggestion_cursor(), 1);

        handle_key(&mut a, key(KeyCode::Enter), now);
        assert_eq!(a.focus, Focus::Field);
        assert_eq!(a.list.input_text(), "Cooking Dinner");
        assert_eq!(a.field_cursor, "Cooking Dinner".len());
    }

    #[test]
    fn test_up_from_first_suggestion_returns_to_field() {
        let mut a = app();
        let now = Instant::now();
        a.list.seed_sample_todos();

        handle_key(&mut a, key(KeyCode::Down), now);
        handle_key(&mut a, key(KeyCode::Up), now);
        assert_eq!(a.focus, Focus::Field);
    }

    #[test]
    fn test_dropdown_is_modal_and_selects() {
        let mut a = app();
        let now = Instant::now();
        handle_key(&mut a, key(KeyCode::Tab), now);
        assert!(a.list.dropdown_open());

        handle_key(&mut a, key(KeyCode::Down), now);
        handle_key(&mut a, key(KeyCode::Down), now);
        handle_key(&mut a, key(KeyCode::Enter), now);

        assert!(!a.list.dropdown_open());
        assert_eq!(a.list.selected_category(), "Home");
        assert_eq!(a.focus, Focus::Field);
    }

    #[test]
    fn test_todos_pane_toggle() {
        let mut a = app();
        let now = Instant::now();
        a.list.seed_sample_todos();

        handle_key(&mut a, key(KeyCode::Up), now);
        assert_eq!(a.focus, Focus::Todos);

        handle_key(&mut a, key(KeyCode::Down), now);
        handle_key(&mut a, key(KeyCode::Char(' ')), now);
        assert!(a.list.todos()[1].finished);

        handle_key(&mut a, key(KeyCode::Esc), now);
        assert_eq!(a.focus, Focus::Field);
    }

    #[test]
    fn test_ctrl_c_quits_from_any_focus() {
        let mut a = app();
        let now = Instant::now();
        a.list.seed_sample_todos();
        handle_key(&mut a, key(KeyCode::Up), now);
        handle_key(&mut a, ctrl('c'), now);
        assert!(a.should_quit);
    }
}
