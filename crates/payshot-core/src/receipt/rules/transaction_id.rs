//! UPI transaction id extraction.

use super::FieldExtractor;
use super::patterns::UPI_TRANSACTION_ID;

/// Transaction id field extractor.
///
/// The label is matched case-sensitively and there is no fallback; a
/// looser match would pick up unrelated digit runs.
pub struct TransactionIdExtractor;

impl TransactionIdExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TransactionIdExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TransactionIdExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        UPI_TRANSACTION_ID
            .captures(text)
            .map(|caps| caps[1].to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        UPI_TRANSACTION_ID
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

/// Extract the UPI transaction id from text.
pub fn extract_transaction_id(text: &str) -> Option<String> {
    TransactionIdExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_extract_labeled_id() {
        let text = "Completed\nUPI transaction ID 123456789\n12 Jan 2024, 5:30 pm";
        assert_eq!(extract_transaction_id(text), Some("123456789".to_string()));
    }

    #[test]
    fn test_label_is_case_sensitive() {
        assert_eq!(extract_transaction_id("upi transaction id 123456789"), None);
    }

    #[test]
    fn test_absent_label() {
        assert_eq!(extract_transaction_id("Transaction ref 987654"), None);
    }

    #[test]
    fn test_extract_all() {
        let text = "UPI transaction ID 111\nUPI transaction ID 222";
        let ids = TransactionIdExtractor::new().extract_all(text);
        assert_eq!(ids, vec!["111".to_string(), "222".to_string()]);
    }
}
