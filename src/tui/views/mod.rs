//! TUI Views module
//!
//! Contains the pages (dashboard, accounts, cards, transactions) as well as
//! the login screen, the sidebar and the status bar.

pub mod accounts;
pub mod cards;
pub mod dashboard;
pub mod login;
pub mod sidebar;
pub mod status_bar;
pub mod transactions;

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, ActivePage, App, InputMode};
use super::dialogs;
use super::layout::{centered_rect_fixed, AppLayout};
use super::widgets::{NotificationWidget, TextInput};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App, now: Instant) {
    app.viewport = frame.area();

    if let Some(login) = app.login.as_ref() {
        login::render(frame, login, &app.theme, now);
        return;
    }

    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.active_page {
        ActivePage::Dashboard => dashboard::render(frame, app, layout.main),
        ActivePage::Accounts => accounts::render(frame, app, layout.main),
        ActivePage::Cards => cards::render(frame, app, layout.main),
        ActivePage::Transactions => transactions::render(frame, app, layout.main),
        page => render_placeholder(frame, app, layout.main, page.label()),
    }

    status_bar::render(frame, app, layout.status_bar);

    dialogs::card_drawer::render(frame, app, now);
    dialogs::transaction_drawer::render(frame, app, now);

    match app.active_dialog {
        ActiveDialog::Wizard => dialogs::wizard::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        let area = frame.area();
        let toast = Rect::new(
            area.x + area.width.saturating_sub(42),
            area.y + 1,
            40.min(area.width),
            4.min(area.height),
        );
        frame.render_widget(NotificationWidget::new(notification, &app.theme), toast);
    }
}

/// Render a placeholder for pages without a view
fn render_placeholder(frame: &mut Frame, app: &App, area: Rect, name: &str) {
    let theme = &app.theme;
    let block = Block::default()
        .title(format!(" {} ", name))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));
    frame.render_widget(block, area);

    let message = format!("{} is coming soon", name);
    let inner = centered_rect_fixed(message.chars().count() as u16, 1, area);
    frame.render_widget(
        Paragraph::new(message).style(Style::default().fg(theme.muted)),
        inner,
    );
}

/// Render the search bar of a list page
fn render_search_bar(frame: &mut Frame, app: &App, area: Rect, query: &str, placeholder: &str) {
    let theme = &app.theme;
    let searching = app.input_mode == InputMode::Search;
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(theme.border_style(searching));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = TextInput::new()
        .placeholder(placeholder)
        .content(query)
        .focused(searching)
        .accent(theme.accent);
    frame.render_widget(input, inner);
}
