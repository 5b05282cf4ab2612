//! Display formatting for terminal output
//!
//! Formats cards, transactions and the dashboard figures for the CLI,
//! using `tabled` for list tables.

pub mod card;
pub mod dashboard;
pub mod transaction;

pub use card::{format_card_details, format_card_table};
pub use dashboard::format_dashboard;
pub use transaction::{format_transaction_details, format_transaction_table};

/// Truncate a string to a maximum length with ellipsis
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Amazon", 10), "Amazon");
        assert_eq!(truncate("Adobe Creative Cloud", 10), "Adobe Cre…");
    }
}
