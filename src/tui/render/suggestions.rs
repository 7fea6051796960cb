use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::state::SuggestionMode;
use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Maximum number of visible entries in the popup
const MAX_VISIBLE: usize = 8;

/// Render the suggestion popup floating below the capture field
pub fn render_suggestions(frame: &mut Frame, app: &App, field_area: Rect) {
    if app.list.dropdown_open() || app.focus == Focus::Todos {
        return;
    }
    let entries = app.list.suggestions();
    if entries.is_empty() {
        return;
    }

    let bg = app.theme.background;
    let title = match app.list.mode() {
        SuggestionMode::Todo => " todos ",
        SuggestionMode::Category => " categories ",
    };

    let count = entries.len().min(MAX_VISIBLE);

    // Widest entry (+ marker and padding) decides the popup width
    let max_width = entries
        .iter()
        .take(MAX_VISIBLE)
        .map(|s| unicode::display_width(s))
        .max()
        .unwrap_or(10)
        + 5;

    let term_area = frame.area();
    let popup_w = (max_width as u16)
        .max(title.len() as u16 + 2)
        .min(field_area.width.saturating_sub(2))
        .max(12);
    let popup_h = (count as u16) + 2; // borders

    // Below the field if there is room, above it otherwise
    let y = if field_area.y + field_area.height + popup_h <= term_area.height {
        field_area.y + field_area.height
    } else {
        field_area.y.saturating_sub(popup_h)
    };
    let x = (field_area.x + 1).min(term_area.width.saturating_sub(popup_w));
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    // Scroll window around the highlighted entry
    let selected = app.list.suggestion_cursor();
    let scroll_start = if selected >= MAX_VISIBLE {
        selected - MAX_VISIBLE + 1
    } else {
        0
    };

    let mut lines: Vec<Line> = Vec::new();
    for (i, entry) in entries.iter().skip(scroll_start).take(MAX_VISIBLE).enumerate() {
        let is_selected = scroll_start + i == selected;

        let style = if is_selected {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };

        let prefix = if is_selected { " \u{25B8} " } else { "   " };
        let label = format!(
            "{:<width$}",
            unicode::truncate_to_width(entry, (popup_w as usize).saturating_sub(5)),
            width = (popup_w as usize).saturating_sub(5)
        );

        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(label, style),
        ]));
    }

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup_area);
}
