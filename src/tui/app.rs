use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::cli::commands::Cli;
use crate::io::config_io;
use crate::model::AppConfig;
use crate::state::ListState;

use super::input;
use super::render;
use super::theme::Theme;

/// Which pane receives key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The capture field
    Field,
    /// The suggestion popup below the field
    Suggestions,
    /// The todo list pane
    Todos,
}

/// Main application state: the list view-model plus presentation-only
/// concerns (focus, cursors, theme). Focus never leaks into the view-model.
pub struct App {
    pub list: ListState,
    pub focus: Focus,
    pub theme: Theme,
    pub should_quit: bool,
    /// Byte offset of the caret in the input text
    pub field_cursor: usize,
    /// Cursor into the category dropdown
    pub dropdown_cursor: usize,
    /// Cursor into the todo pane
    pub todos_cursor: usize,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let theme = Theme::from_config(&config.ui);
        let list = ListState::new(
            Duration::from_millis(config.input.debounce_ms),
            config.starting_categories(),
        );

        App {
            list,
            focus: Focus::Field,
            theme,
            should_quit: false,
            field_cursor: 0,
            dropdown_cursor: 0,
            todos_cursor: 0,
        }
    }
}

/// Run the TUI application
pub fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = config_io::load_config(cli.config.as_deref())?;
    let mut app = App::new(&config);
    if !cli.empty {
        app.list.seed_sample_todos();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // The short poll keeps the debounced mode evaluation responsive
        // even when no keys arrive
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key, Instant::now());
        }

        app.list.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
