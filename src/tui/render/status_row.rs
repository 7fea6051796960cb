use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::SuggestionMode;
use crate::tui::app::{App, Focus};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mode_label = match app.list.mode() {
        SuggestionMode::Todo => "todo titles",
        SuggestionMode::Category => "@ categories",
    };

    let hint = if app.list.dropdown_open() {
        "\u{2191}\u{2193} pick  Enter select  Esc close"
    } else {
        match app.focus {
            Focus::Field => "Enter add  \u{2193} suggestions  Tab category  Esc quit",
            Focus::Suggestions => "\u{2191}\u{2193} move  Enter accept  Esc back",
            Focus::Todos => "Space toggle  Esc back",
        }
    };

    let mut spans = vec![Span::styled(
        format!(" {}", mode_label),
        Style::default().fg(app.theme.dim).bg(bg),
    )];

    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count() + 1;
    if content_width + hint_width < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width - hint_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            format!("{} ", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{TERM_W, render_to_string, sample_app};

    #[test]
    fn test_shows_mode_and_field_hints() {
        let app = sample_app();
        let out = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(out.contains("todo titles"));
        assert!(out.contains("Tab category"));
    }

    #[test]
    fn test_dropdown_hints_take_over() {
        let mut app = sample_app();
        app.list.open_dropdown();
        let out = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(out.contains("Enter select"));
    }
}
