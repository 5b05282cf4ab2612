//! Dialogs and drawers
//!
//! Modal dialogs (card wizard, help) and the slide-in detail drawers.

pub mod card_drawer;
pub mod help;
pub mod transaction_drawer;
pub mod wizard;
