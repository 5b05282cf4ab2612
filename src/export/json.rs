//! JSON export
//!
//! Lists are wrapped with a schema version and timestamp.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SpendError, SpendResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// An exported list of records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListExport<T> {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub count: usize,

    pub items: Vec<T>,
}

impl<T> ListExport<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            count: items.len(),
            items,
        }
    }
}

/// Export records as pretty-printed JSON
pub fn export_json<T: Serialize, W: Write>(items: &[T], writer: &mut W) -> SpendResult<()> {
    let export = ListExport::new(items.iter().collect::<Vec<_>>());
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer).map_err(|e| SpendError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Card;
    use crate::sample;

    #[test]
    fn test_export_cards() {
        let cards = sample::cards();
        let mut out = Vec::new();
        export_json(&cards, &mut out).unwrap();

        let parsed: ListExport<Card> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.count, 5);
        assert_eq!(parsed.items, cards);
    }
}
