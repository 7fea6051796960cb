use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Render the captured todos, newest first
pub fn render_todo_list(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let todos = app.list.todos();

    if todos.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "  nothing captured yet",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    let focused = app.focus == Focus::Todos;

    // Keep the cursor row visible
    let scroll_start = if focused && app.todos_cursor >= height {
        app.todos_cursor + 1 - height
    } else {
        0
    };

    let mut lines: Vec<Line> = Vec::new();
    for (i, todo) in todos.iter().enumerate().skip(scroll_start).take(height) {
        let is_cursor = focused && i == app.todos_cursor;

        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let checkbox = if todo.finished { "[x]" } else { "[ ]" };
        let checkbox_color = if todo.finished {
            app.theme.green
        } else {
            app.theme.dim
        };

        let mut title_style = Style::default()
            .fg(if todo.finished {
                app.theme.dim
            } else if is_cursor {
                app.theme.text_bright
            } else {
                app.theme.text
            })
            .bg(row_bg);
        if todo.finished {
            title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
        }

        let dot_color = app
            .theme
            .category_color(&todo.category, todo.category_color.as_deref());

        let title_budget = (area.width as usize)
            .saturating_sub(8 + unicode::display_width(&todo.category) + 3);

        let mut spans = vec![
            Span::styled(format!(" {} ", checkbox), Style::default().fg(checkbox_color).bg(row_bg)),
            Span::styled(
                unicode::truncate_to_width(&todo.title, title_budget),
                title_style,
            ),
        ];
        if !todo.category.is_empty() {
            spans.push(Span::styled("  \u{25CF} ", Style::default().fg(dot_color).bg(row_bg)));
            spans.push(Span::styled(
                todo.category.clone(),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ));
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
