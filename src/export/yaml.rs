//! YAML export

use std::io::Write;

use serde::Serialize;

use crate::error::{SpendError, SpendResult};
use crate::export::json::ListExport;

/// Export records as YAML with a short header comment
pub fn export_yaml<T: Serialize, W: Write>(items: &[T], writer: &mut W) -> SpendResult<()> {
    let export = ListExport::new(items.iter().collect::<Vec<_>>());

    writeln!(writer, "# spendcard export")
        .map_err(|e| SpendError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| SpendError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use crate::sample;

    #[test]
    fn test_export_transactions() {
        let txns = sample::transactions();
        let mut out = Vec::new();
        export_yaml(&txns, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# spendcard export"));
        let parsed: ListExport<Transaction> = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.count, 5);
        assert_eq!(parsed.items[2].merchant.name, "Adobe Creative Cloud");
    }
}
