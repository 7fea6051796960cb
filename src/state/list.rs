use std::time::{Duration, Instant};

use crate::model::{Category, TodoItem};

use super::input::InputTracker;
use super::suggest::{self, SuggestionMode};

/// The view-model behind the capture screen.
///
/// Owns the todo list, the category list, the active category, the input
/// tracker, and the suggestion machinery. The presentation layer reads the
/// derived state (suggestions, filtered lists, mode) and drives changes
/// exclusively through the operations below; every operation that can fail
/// is a silent no-op leaving the state unchanged.
pub struct ListState {
    input: InputTracker,
    mode: SuggestionMode,
    todos: Vec<TodoItem>,
    categories: Vec<Category>,
    selected_category: String,
    /// Highlight index into the current suggestion list
    suggestion_cursor: usize,
    dropdown_open: bool,
    next_id: u64,
}

impl ListState {
    pub fn new(debounce_interval: Duration, categories: Vec<Category>) -> Self {
        let selected_category = categories
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        ListState {
            input: InputTracker::new(debounce_interval),
            mode: SuggestionMode::Todo,
            todos: Vec::new(),
            categories,
            selected_category,
            suggestion_cursor: 0,
            dropdown_open: false,
            next_id: 1,
        }
    }

    // ── observable state ───────────────────────────────────────────

    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    pub fn category_keyword(&self) -> &str {
        self.input.keyword()
    }

    pub fn mode(&self) -> SuggestionMode {
        self.mode
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn suggestion_cursor(&self) -> usize {
        self.suggestion_cursor
    }

    /// The active suggestion list: filtered todo titles in `Todo` mode,
    /// filtered category names in `Category` mode.
    pub fn suggestions(&self) -> Vec<String> {
        match self.mode {
            SuggestionMode::Todo => suggest::filter_todos(&self.todos, self.input.text())
                .into_iter()
                .map(|t| t.title.clone())
                .collect(),
            SuggestionMode::Category => {
                suggest::filter_categories(&self.categories, self.input.text())
                    .into_iter()
                    .map(|c| c.name.clone())
                    .collect()
            }
        }
    }

    /// The suggestion under the highlight, if any.
    pub fn highlighted_suggestion(&self) -> Option<String> {
        self.suggestions().get(self.suggestion_cursor).cloned()
    }

    // ── operations ─────────────────────────────────────────────────

    /// Replace the input text. Recomputes the category keyword, re-arms the
    /// debounce, and keeps the suggestion highlight inside the (possibly
    /// narrower) suggestion list.
    pub fn set_input(&mut self, text: impl Into<String>, now: Instant) {
        self.input.set_text(text.into(), now);
        self.clamp_suggestion_cursor();
    }

    /// Run the debounced mode evaluation. Called by the event loop on every
    /// pass; does nothing until the input has been quiescent for the
    /// debounce interval. Returns whether the mode changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.input.quiescent(now) {
            return false;
        }
        let next = suggest::next_mode(self.mode, self.input.text());
        if next == self.mode {
            return false;
        }
        self.mode = next;
        self.suggestion_cursor = 0;
        true
    }

    pub fn select_next_suggestion(&mut self) {
        let count = self.suggestions().len();
        if count > 0 && self.suggestion_cursor + 1 < count {
            self.suggestion_cursor += 1;
        }
    }

    pub fn select_prev_suggestion(&mut self) {
        self.suggestion_cursor = self.suggestion_cursor.saturating_sub(1);
    }

    /// Commit the highlighted suggestion.
    ///
    /// In `Todo` mode the input text becomes the highlighted suggestion.
    /// In `Category` mode the committed value becomes the active category
    /// (appended to the category list if new), and the trailing `@`-keyword
    /// segment is stripped from the input, leaving the text before the
    /// final `@`. When the category suggestion list is empty, the typed
    /// keyword itself is committed; confirming free text after `@` is how
    /// new categories are created. With nothing to commit: no-op.
    pub fn accept_suggestion(&mut self, now: Instant) {
        match self.mode {
            SuggestionMode::Todo => {
                let Some(value) = self.highlighted_suggestion() else {
                    return;
                };
                self.set_input(value, now);
            }
            SuggestionMode::Category => {
                let value = match self.highlighted_suggestion() {
                    Some(v) => v,
                    None if !self.input.keyword().is_empty() => self.input.keyword().to_string(),
                    None => return,
                };
                if !self.categories.iter().any(|c| c.name == value) {
                    self.categories.push(Category::new(value.clone()));
                }
                self.selected_category = value;
                let text = match self.input.text().rfind('@') {
                    Some(pos) => self.input.text()[..pos].to_string(),
                    None => self.input.text().to_string(),
                };
                self.set_input(text, now);
            }
        }
    }

    /// Create a todo from the input text under the active category and
    /// insert it at the front of the list. Empty input: no-op.
    pub fn create_todo(&mut self, now: Instant) -> bool {
        if self.input.text().is_empty() {
            return false;
        }
        let color = self
            .categories
            .iter()
            .find(|c| c.name == self.selected_category)
            .and_then(|c| c.color.clone());
        let item = TodoItem::new(
            format!("todo-{}", self.next_id),
            self.input.text().to_string(),
            self.selected_category.clone(),
            color,
        );
        self.next_id += 1;
        self.todos.insert(0, item);
        self.set_input(String::new(), now);
        true
    }

    pub fn select_category(&mut self, name: &str) {
        self.selected_category = name.to_string();
    }

    pub fn open_dropdown(&mut self) {
        self.dropdown_open = true;
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Pick a category from the dropdown and close it.
    pub fn select_dropdown_category(&mut self, name: &str) {
        self.selected_category = name.to_string();
        self.dropdown_open = false;
    }

    /// Flip the finished checkbox on the todo at `index`. Out of range: no-op.
    pub fn toggle_finished(&mut self, index: usize) {
        if let Some(todo) = self.todos.get_mut(index) {
            todo.finished = !todo.finished;
        }
    }

    /// Append the sample todos, round-robin over the current categories.
    pub fn seed_sample_todos(&mut self) {
        const SAMPLE_TITLES: [&str; 12] = [
            "Writing Article",
            "Cooking Dinner",
            "Running 5K",
            "Finishing Homework",
            "Reading Book",
            "Lorem Ipsum",
            "Dolor sit",
            "Amet",
            "Another Thing",
            "Cycling",
            "Swimming",
            "Coding",
        ];

        for (i, title) in SAMPLE_TITLES.into_iter().enumerate() {
            let category = if self.categories.is_empty() {
                Category::new("")
            } else {
                self.categories[i % self.categories.len()].clone()
            };
            let item = TodoItem::new(
                format!("todo-{}", self.next_id),
                title.to_string(),
                category.name,
                category.color,
            );
            self.next_id += 1;
            self.todos.push(item);
        }
    }

    fn clamp_suggestion_cursor(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            self.suggestion_cursor = 0;
        } else if self.suggestion_cursor >= count {
            self.suggestion_cursor = count - 1;
        }
    }
}
