use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…`
/// if anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Next grapheme boundary after `byte_offset`. None if at the end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    if let Some((i, _)) = s[byte_offset..].grapheme_indices(true).nth(1) {
        return Some(byte_offset + i);
    }
    Some(s.len())
}

/// Previous grapheme boundary before `byte_offset`. None if at the start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    let prefix = &s[..byte_offset];
    let mut last_start = 0;
    for (i, _) in prefix.grapheme_indices(true) {
        last_start = i;
    }
    Some(last_start)
}

/// Convert a byte offset into a display column (terminal cells).
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    let clamped = byte_offset.min(s.len());
    display_width(&s[..clamped])
}

/// Word boundary to the left of `byte_offset` (whitespace-delimited).
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    if byte_offset == 0 {
        return 0;
    }
    let graphemes: Vec<(usize, &str)> = s[..byte_offset].grapheme_indices(true).collect();
    if graphemes.is_empty() {
        return 0;
    }

    let mut idx = graphemes.len() - 1;
    // Skip whitespace immediately left of the cursor
    while idx > 0 && graphemes[idx].1.chars().all(char::is_whitespace) {
        idx -= 1;
    }
    // Then skip the word itself
    while idx > 0 && !graphemes[idx - 1].1.chars().all(char::is_whitespace) {
        idx -= 1;
    }
    if idx == 0 && !graphemes[0].1.chars().all(char::is_whitespace) {
        return 0;
    }
    graphemes[idx].0
}

/// Word boundary to the right of `byte_offset` (whitespace-delimited).
pub fn word_boundary_right(s: &str, byte_offset: usize) -> usize {
    let rest = &s[byte_offset.min(s.len())..];
    let mut seen_word = false;
    for (i, g) in rest.grapheme_indices(true) {
        let is_ws = g.chars().all(char::is_whitespace);
        if seen_word && is_ws {
            return byte_offset + i;
        }
        if !is_ws {
            seen_word = true;
        }
    }
    s.len()
}
