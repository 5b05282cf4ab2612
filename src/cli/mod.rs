//! CLI command handlers
//!
//! Non-interactive commands over the same sample data the terminal UI shows.
//! Handlers write to any `io::Write` so they can be exercised without a
//! terminal.

pub mod cards;
pub mod dashboard;
pub mod requests;
pub mod transactions;

pub use cards::{handle_cards_command, CardArgs};
pub use dashboard::handle_dashboard_command;
pub use requests::{handle_requests_command, RequestArgs};
pub use transactions::{handle_transactions_command, TransactionArgs};
