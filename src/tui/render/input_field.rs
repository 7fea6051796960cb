use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Render the capture field with its caret
pub fn render_input_field(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Field && !app.list.dropdown_open();
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(app.theme.background))
        .title(" capture ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = app.list.input_text();
    let paragraph = if text.is_empty() {
        Paragraph::new(Span::styled(
            "What needs doing? Type @ for categories",
            Style::default().fg(app.theme.dim),
        ))
    } else {
        Paragraph::new(Span::styled(
            unicode::truncate_to_width(text, inner.width as usize),
            Style::default().fg(app.theme.text_bright),
        ))
    };
    frame.render_widget(paragraph.style(Style::default().bg(app.theme.background)), inner);

    if focused {
        let col = unicode::byte_offset_to_display_col(text, app.field_cursor)
            .min(inner.width.saturating_sub(1) as usize);
        frame.set_cursor_position(Position::new(inner.x + col as u16, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{TERM_W, render_to_string, sample_app};

    #[test]
    fn test_placeholder_when_empty() {
        let app = sample_app();
        let out = render_to_string(TERM_W, 4, |frame, area| {
            render_input_field(frame, &app, area);
        });
        assert!(out.contains("What needs doing?"));
        assert!(out.contains("capture"));
    }

    #[test]
    fn test_shows_typed_text() {
        let mut app = sample_app();
        app.list.set_input("plan @w", std::time::Instant::now());
        let out = render_to_string(TERM_W, 4, |frame, area| {
            render_input_field(frame, &app, area);
        });
        assert!(out.contains("plan @w"));
    }
}
