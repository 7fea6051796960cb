use std::time::{Duration, Instant};

use super::debounce::Debouncer;

/// Tracks the raw input text and the category keyword derived from it.
///
/// Every text change recomputes the keyword and re-arms the debounce timer
/// that gates suggestion-mode evaluation (see [`super::list::ListState::tick`]).
#[derive(Debug, Clone)]
pub struct InputTracker {
    text: String,
    keyword: String,
    debounce: Debouncer,
}

impl InputTracker {
    pub fn new(debounce_interval: Duration) -> Self {
        InputTracker {
            text: String::new(),
            keyword: String::new(),
            debounce: Debouncer::new(debounce_interval),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The derived category keyword (empty when no `@` segment applies)
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Replace the text, recompute the keyword, and re-arm the debounce.
    pub fn set_text(&mut self, text: String, now: Instant) {
        self.text = text;
        self.keyword = category_keyword(&self.text);
        self.debounce.reset(now);
    }

    /// True once the debounce interval has elapsed since the last edit.
    /// Consumes the pending deadline; at most one true per edit burst.
    pub fn quiescent(&mut self, now: Instant) -> bool {
        self.debounce.fire(now)
    }
}

/// Extract the category keyword: the substring after the final `@`.
///
/// The keyword applies only when the text splits into more than one
/// non-empty `@`-segment, or when the text begins with `@`. Everything else
/// yields an empty keyword: `"abc@"` gives `""`, `"@abc"` gives `"abc"`.
pub fn category_keyword(text: &str) -> String {
    let segments: Vec<&str> = text.split('@').filter(|s| !s.is_empty()).collect();
    if segments.len() > 1 || text.starts_with('@') {
        segments.last().copied().unwrap_or_default().to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_after_at() {
        assert_eq!(category_keyword("design@w"), "w");
        assert_eq!(category_keyword("plan @wo"), "wo");
        assert_eq!(category_keyword("a@b@c"), "c");
    }

    #[test]
    fn test_keyword_leading_at() {
        assert_eq!(category_keyword("@abc"), "abc");
        assert_eq!(category_keyword("@"), "");
    }

    #[test]
    fn test_keyword_does_not_apply() {
        assert_eq!(category_keyword(""), "");
        assert_eq!(category_keyword("no marker here"), "");
        // A single trailing `@` is not enough: only one non-empty segment
        // and the text does not start with `@`
        assert_eq!(category_keyword("abc@"), "");
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        assert_eq!(category_keyword("a@@b"), "b");
        assert_eq!(category_keyword("@@x"), "x");
    }

    #[test]
    fn test_set_text_updates_keyword_and_arms_debounce() {
        let t0 = Instant::now();
        let mut tracker = InputTracker::new(Duration::from_millis(300));

        tracker.set_text("plan @w".to_string(), t0);
        assert_eq!(tracker.text(), "plan @w");
        assert_eq!(tracker.keyword(), "w");
        assert!(!tracker.quiescent(t0 + Duration::from_millis(100)));
        assert!(tracker.quiescent(t0 + Duration::from_millis(300)));

        tracker.set_text("plan ".to_string(), t0 + Duration::from_millis(400));
        assert_eq!(tracker.keyword(), "");
    }
}
