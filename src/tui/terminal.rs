//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Instant;

use tracing::info;

use crate::audit::RequestLogger;
use crate::config::{Settings, SpendPaths, Theme};

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(settings: &Settings, paths: &SpendPaths) -> Result<()> {
    // The theme is built once here and handed to every view through the app
    let theme = Theme::from_name(settings.theme);
    let request_log = RequestLogger::new(paths.request_log());

    let mut terminal = init_terminal()?;
    let mut app = App::new(settings.clone(), theme, request_log, Instant::now());
    let events = EventHandler::new(settings.tick_rate());

    info!("terminal UI started");

    let outcome = event_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    info!("terminal UI stopped");
    outcome
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app, Instant::now());
        })?;

        match events.next()? {
            Event::Tick => app.tick(Instant::now()),
            event => handle_event(app, event, Instant::now())?,
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
