//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the appropriate handlers
//! based on the current application state.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::app::{ActiveDialog, ActivePage, App, FocusedPanel, InputMode};
use super::dialogs;
use super::event::Event;
use super::layout::is_overlay_click;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event, now: Instant) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key, now),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse, now),
        Event::Tick => {
            app.tick(now);
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Clicking the dimmed area beside a drawer closes it
fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) -> Result<()> {
    if app.in_login() || app.has_dialog() || !app.has_drawer() {
        return Ok(());
    }

    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if is_overlay_click(app.viewport, mouse.column, mouse.row) {
            app.close_drawer(now);
        }
    }
    Ok(())
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.in_login() {
        return handle_login_key(app, key, now);
    }

    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key, now);
    }

    if app.has_drawer() && handle_drawer_key(app, key, now) {
        return Ok(());
    }

    match app.input_mode {
        InputMode::Search => handle_search_key(app, key),
        InputMode::Normal | InputMode::Editing => handle_normal_key(app, key, now),
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent, now: Instant) -> Result<()> {
    if key.code == KeyCode::Esc {
        app.quit();
        return Ok(());
    }
    let Some(login) = app.login.as_mut() else {
        return Ok(());
    };

    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => login.focus_next(),
        KeyCode::Enter => {
            login.submit(now);
        }
        KeyCode::Backspace => login.backspace(),
        KeyCode::Char(c) => login.insert(c),
        _ => {}
    }
    Ok(())
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent, now: Instant) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Wizard => {
            dialogs::wizard::handle_key(app, key, now);
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Keys owned by an open drawer. Returns false to let the key through.
fn handle_drawer_key(app: &mut App, key: KeyEvent, now: Instant) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_drawer(now);
            true
        }
        KeyCode::Char('d') if app.card_drawer.is_visible() => {
            app.toggle_card_details();
            true
        }
        _ => false,
    }
}

/// Handle keys while typing in a search bar
fn handle_search_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter | KeyCode::Down => app.stop_search(),
        KeyCode::Esc => {
            app.search_clear();
            app.stop_search();
        }
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char(c) => app.search_push(c),
        _ => {}
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent, now: Instant) -> Result<()> {
    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Char('n') => {
            app.open_new_card();
            return Ok(());
        }
        KeyCode::Char('/') => {
            app.start_search();
            return Ok(());
        }
        KeyCode::Char(c) if ActivePage::from_shortcut(c).is_some() => {
            if let Some(page) = ActivePage::from_shortcut(c) {
                app.switch_page(page);
            }
            return Ok(());
        }
        KeyCode::Tab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        KeyCode::Char('h') | KeyCode::Left if key.modifiers.is_empty() => {
            app.focused_panel = FocusedPanel::Sidebar;
            return Ok(());
        }
        KeyCode::Char('l') | KeyCode::Right if key.modifiers.is_empty() => {
            app.focused_panel = FocusedPanel::Main;
            return Ok(());
        }
        KeyCode::Esc => {
            app.clear_status();
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_main_panel_key(app, key, now),
    }
}

/// Handle keys when sidebar is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Enter => {
            let page = ActivePage::ALL[app.sidebar_index.min(ActivePage::ALL.len() - 1)];
            app.switch_page(page);
            app.focused_panel = FocusedPanel::Main;
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys when the page content is focused
fn handle_main_panel_key(app: &mut App, key: KeyEvent, now: Instant) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Enter => match app.active_page {
            ActivePage::Cards => app.open_selected_card(now),
            ActivePage::Transactions => app.open_selected_transaction(now),
            _ => {}
        },
        KeyCode::Char(']') if app.active_page == ActivePage::Transactions => {
            app.cycle_transaction_filter(true)
        }
        KeyCode::Char('[') if app.active_page == ActivePage::Transactions => {
            app.cycle_transaction_filter(false)
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::RequestLogger;
    use crate::config::{Settings, Theme};
    use crate::listing::TransactionFilter;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::layout::Rect;
    use std::time::Duration;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// App past the login screen, on the dashboard
    fn logged_in(dir: &TempDir, now: Instant) -> App {
        let settings = Settings {
            skip_intro: true,
            ..Settings::default()
        };
        let log = RequestLogger::new(dir.path().join("requests.log"));
        let mut app = App::new(settings, Theme::default(), log, now);
        app.login = None;
        app.viewport = Rect::new(0, 0, 120, 40);
        app
    }

    fn send(app: &mut App, events: &[Event], now: Instant) {
        for event in events {
            handle_event(app, event.clone(), now).unwrap();
        }
    }

    #[test]
    fn test_login_form_typing_and_submit() {
        let dir = TempDir::new().unwrap();
        let now = Instant::now();
        let settings = Settings {
            skip_intro: true,
            ..Settings::default()
        };
        let log = RequestLogger::new(dir.path().join("requests.log"));
        let mut app = App::new(settings, Theme::default(), log, now);

        send(
            &mut app,
            &[
                key(KeyCode::Char('a')),
                key(KeyCode::Char('@')),
                key(KeyCode::Tab),
                key(KeyCode::Char('x')),
                key(KeyCode::Char('q')),
            ],
            now,
        );
        let login = app.login.as_ref().unwrap();
        assert_eq!(login.email, "a@");
        assert_eq!(login.password.len(), 2);
        assert!(!app.should_quit);

        send(&mut app, &[key(KeyCode::Enter)], now);
        assert!(app.in_login());
        app.tick(now + Duration::from_secs(4));
        assert!(!app.in_login());
        assert_eq!(app.active_page, ActivePage::Dashboard);
    }

    #[test]
    fn test_page_shortcuts_and_quit() {
        let dir = TempDir::new().unwrap();
        let now = Instant::now();
        let mut app = logged_in(&dir, now);

        send(&mut app, &[key(KeyCode::Char('3'))], now);
        assert_eq!(app.active_page, ActivePage::Cards);
        send(&mut app, &[key(KeyCode::Char('6'))], now);
        assert_eq!(app.active_page, ActivePage::Analytics);

        send(&mut app, &[key(KeyCode::Char('q'))], now);
        assert!(app.should_quit);
    }

    #[test]
    fn test_sidebar_enter_switches_page() {
        let dir = TempDir::new().unwrap();
        let now = Instant::now();
        let mut app = logged_in(&dir, now);
        app.focused_panel = FocusedPanel::Sidebar;

        send(
            &mut app,
            &[key(KeyCode::Down), key(KeyCode::Down), key(KeyCode::Enter)],
            now,
        );
        assert_eq!(app.active_page, ActivePage::Cards);
        assert_eq!(app.focused_panel, FocusedPanel::Main);
    }

    #[test]
    fn test_search_typing_does_not_trigger_shortcuts() {
        let dir = TempDir::new().unwrap();
        let now = Instant::now();
        let mut app = logged_in(&dir, now);
        app.switch_page(ActivePage::Cards);

        send(
            &mut app,
            &[
                key(KeyCode::Char('/')),
                key(KeyCode::Char('q')),
                key(KeyCode::Char('1')),
            ],
            now,
        );
        assert!(!app.should_quit);
        assert_eq!(app.active_page, ActivePage::Cards);
        assert_eq!(app.cards.query(), "q1");

        send(&mut app, &[key(KeyCode::Esc)], now);
        assert_eq!(app.cards.query(), "");
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_transaction_filter_keys() {
        let dir = TempDir::new().unwrap();
        let now = Instant::now();
        let mut app = logged_in(&dir, now);
        app.switch_page(ActivePage::Transactions);
        app.focused_panel = FocusedPanel::Main;

        send(&mut app, &[key(KeyCode::Char(']'))], now);
        assert_eq!(*app.transactions.filter(), TransactionFilter::Pending);
        send(
            &mut app,
            &[key(KeyCode::Char('[')), key(KeyCode::Char('['))],
            now,
        );
        assert_eq!(*app.transactions.filter(), TransactionFilter::Flagged);
    }

    #[test]
    fn test_drawer_opens_and_closes_on_escape() {
        let dir = TempDir::new().unwrap();
        let now = Instant::now();
        let mut app = logged_in(&dir, now);
        app.switch_page(ActivePage::Cards);
        app.focused_panel = FocusedPanel::Main;

        send(&mut app, &[key(KeyCode::Enter)], now);
        assert!(app.has_drawer());

        send(&mut app, &[key(KeyCode::Char('d'))], now);
        assert!(app.card_drawer.item().unwrap().show_details);

        send(&mut app, &[key(KeyCode::Esc)], now);
        app.tick(now + Duration::from_secs(2));
        assert!(!app.has_drawer());
    }

    #[test]
    fn test_overlay_click_closes_drawer() {
        let dir = TempDir::new().unwrap();
        let now = Instant::now();
        let mut app = logged_in(&dir, now);
        app.switch_page(ActivePage::Transactions);
        app.focused_panel = FocusedPanel::Main;
        send(&mut app, &[key(KeyCode::Enter)], now);
        assert!(app.has_drawer());

        // Inside the drawer: stays open
        send(&mut app, &[click(110, 10)], now);
        app.tick(now + Duration::from_secs(2));
        assert!(app.has_drawer());

        // Left of the drawer: closes
        send(&mut app, &[click(5, 10)], now + Duration::from_secs(2));
        app.tick(now + Duration::from_secs(4));
        assert!(!app.has_drawer());
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let dir = TempDir::new().unwrap();
        let now = Instant::now();
        let mut app = logged_in(&dir, now);

        send(&mut app, &[key(KeyCode::Char('?'))], now);
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        send(&mut app, &[key(KeyCode::Char('x'))], now);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_new_card_opens_wizard_from_dashboard() {
        let dir = TempDir::new().unwrap();
        let now = Instant::now();
        let mut app = logged_in(&dir, now);

        send(&mut app, &[key(KeyCode::Char('n'))], now);
        assert_eq!(app.active_dialog, ActiveDialog::Wizard);
        assert!(app.wizard.is_some());

        send(&mut app, &[key(KeyCode::Esc)], now);
        assert!(!app.has_dialog());
        assert!(app.wizard.is_none());
    }

    #[test]
    fn test_entry_cursor_keys_only_edit_focused_entry() {
        let dir = TempDir::new().unwrap();
        let now = Instant::now();
        let mut app = logged_in(&dir, now);
        send(&mut app, &[key(KeyCode::Char('n'))], now);

        let state = app.wizard.as_mut().unwrap();
        state.advance();
        state.advance();
        state.focus = 3;
        for c in "Amazon".chars() {
            state.insert(c);
        }

        send(&mut app, &[key(KeyCode::Home), key(KeyCode::Delete)], now);
        assert_eq!(app.wizard.as_ref().unwrap().entry.value(), "mazon");

        // A mode selector has focus: the pending entry stays put
        app.wizard.as_mut().unwrap().focus = 0;
        send(&mut app, &[key(KeyCode::End), key(KeyCode::Delete)], now);
        let state = app.wizard.as_ref().unwrap();
        assert_eq!(state.entry.value(), "mazon");
        assert_eq!(state.entry.cursor, 0);
    }
}
