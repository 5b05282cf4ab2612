//! spendcard - Terminal dashboard for corporate cards and business banking
//!
//! This library provides the core functionality behind the `spendcard`
//! binary: a login screen, a dashboard, card and transaction lists with
//! detail drawers, and a five-step wizard for requesting new cards. All data
//! is sample data held in memory.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and the colour theme
//! - `error`: Custom error types
//! - `models`: Cards, transactions, money and the dashboard figures
//! - `sample`: The in-memory sample data
//! - `listing`: Search and filter over the card and transaction lists
//! - `wizard`: The card creation form, its steps, summary and validation
//! - `drawer`, `login`, `timeline`: Timed UI sequences driven by an explicit clock
//! - `audit`: Log of submitted card requests
//! - `display`, `export`, `cli`: Text output for the command line
//! - `tui`: The terminal user interface
//!
//! # Example
//!
//! ```rust,ignore
//! use spendcard::config::{Settings, SpendPaths};
//!
//! let paths = SpendPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! spendcard::tui::run_tui(&settings, &paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod drawer;
pub mod error;
pub mod export;
pub mod listing;
pub mod logging;
pub mod login;
pub mod models;
pub mod sample;
pub mod timeline;
pub mod tui;
pub mod wizard;

pub use error::{SpendError, SpendResult};
