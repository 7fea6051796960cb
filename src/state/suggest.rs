use crate::model::{Category, TodoItem};

/// Which suggestion list is active below the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionMode {
    /// Suggesting existing todo titles
    #[default]
    Todo,
    /// Suggesting category names for the `@`-segment being typed
    Category,
}

/// Apply the mode-transition rules to the current text.
///
/// Runs only when the input has been quiescent for the debounce interval.
/// Leaving `Category` is checked first: a trailing space or the loss of
/// every `@` ends the keyword segment. A trailing `@` (re-)enters
/// `Category`. Anything else keeps the current mode, so the state is sticky
/// while the user edits mid-keyword.
pub fn next_mode(mode: SuggestionMode, text: &str) -> SuggestionMode {
    if mode == SuggestionMode::Category && (text.ends_with(' ') || !text.contains('@')) {
        return SuggestionMode::Todo;
    }
    if text.ends_with('@') {
        return SuggestionMode::Category;
    }
    mode
}

/// Todo items whose title contains the input as a case-insensitive
/// substring, in list order. An empty input matches everything.
pub fn filter_todos<'a>(todos: &'a [TodoItem], input: &str) -> Vec<&'a TodoItem> {
    if input.is_empty() {
        return todos.iter().collect();
    }
    let needle = input.to_lowercase();
    todos
        .iter()
        .filter(|t| t.title.to_lowercase().contains(&needle))
        .collect()
}

/// Categories whose name contains the trailing `@`-keyword, in list order.
///
/// The keyword only applies when the text has at least two non-empty
/// `@`-segments. A lone leading `@` (or no applicable segmentation at all)
/// returns the full list unfiltered. Note this is narrower than the
/// keyword-extraction rule in [`super::input::category_keyword`], which also
/// accepts a leading `@`.
pub fn filter_categories<'a>(categories: &'a [Category], text: &str) -> Vec<&'a Category> {
    let segments: Vec<&str> = text.split('@').filter(|s| !s.is_empty()).collect();
    if segments.len() > 1
        && let Some(keyword) = segments.last()
    {
        let needle = keyword.to_lowercase();
        categories
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    } else {
        categories.iter().collect()
    }
}
