pub mod category_bar;
pub mod input_field;
pub mod status_row;
pub mod suggestions;
pub mod todo_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function, dispatching to the pane renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: category bar | capture field | todo list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    category_bar::render_category_bar(frame, app, chunks[0]);
    input_field::render_input_field(frame, app, chunks[1]);
    todo_list::render_todo_list(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Floating layers, drawn over the content
    suggestions::render_suggestions(frame, app, chunks[1]);
    if app.list.dropdown_open() {
        category_bar::render_dropdown(frame, app, chunks[0]);
    }
}
