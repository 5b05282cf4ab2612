//! Terminal User Interface module
//!
//! The dashboard, card and transaction lists, the card wizard and the detail
//! drawers, rendered with ratatui. The login screen is shown first.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs and drawers
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
