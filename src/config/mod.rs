//! Configuration module for spendcard
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence
//! - The colour theme injected into the views
//! - Amount and date formatting

pub mod format;
pub mod paths;
pub mod settings;
pub mod theme;

pub use format::DisplayFormat;
pub use paths::SpendPaths;
pub use settings::{AnimationTimings, Settings};
pub use theme::{Theme, ThemeName};
