use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

/// Render the top bar showing the active category
pub fn render_category_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let selected = app.list.selected_category();
    let color = app
        .list
        .categories()
        .iter()
        .find(|c| c.name == selected)
        .map(|c| app.theme.category_color(&c.name, c.color.as_deref()))
        .unwrap_or(app.theme.dim);

    let mut spans = vec![
        Span::styled(" \u{25CF} ", Style::default().fg(color).bg(bg)),
        Span::styled(
            if selected.is_empty() {
                "(no category)".to_string()
            } else {
                selected.to_string()
            },
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled(" \u{25BE}", Style::default().fg(app.theme.dim).bg(bg)),
    ];

    // Right-aligned open-item count
    let open = app.list.todos().iter().filter(|t| !t.finished).count();
    let tally = format!("{} open / {} total ", open, app.list.todos().len());
    let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let width = area.width as usize;
    if content_width + tally.len() < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width - tally.len()),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(tally, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Render the category dropdown floating below the bar
pub fn render_dropdown(frame: &mut Frame, app: &App, bar_area: Rect) {
    let categories = app.list.categories();
    if categories.is_empty() {
        return;
    }

    let bg = app.theme.background;
    let term_area = frame.area();

    let max_width = categories
        .iter()
        .map(|c| unicode::display_width(&c.name))
        .max()
        .unwrap_or(10)
        + 7;
    let popup_w = (max_width as u16).min(term_area.width).max(14);
    let popup_h = (categories.len() as u16 + 2).min(term_area.height.saturating_sub(bar_area.y + 1));
    let popup_area = Rect::new(
        bar_area.x,
        bar_area.y + 1,
        popup_w,
        popup_h,
    );

    let mut lines: Vec<Line> = Vec::new();
    for (i, category) in categories.iter().enumerate() {
        let is_selected = i == app.dropdown_cursor;
        let dot_color = app.theme.category_color(&category.name, category.color.as_deref());

        let style = if is_selected {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        let prefix = if is_selected { " \u{25B8} " } else { "   " };

        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled("\u{25CF} ", style.fg(dot_color)),
            Span::styled(category.name.clone(), style),
        ]));
    }

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" category ")
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup_area);
}
