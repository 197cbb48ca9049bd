//! Rule-based screenshot parser producing transaction records.

use tracing::debug;

use crate::models::config::{AmountStrategy, ExtractionConfig};
use crate::models::record::TransactionRecord;

use super::rules::{AmountExtractor, DateTimeExtractor, FieldExtractor, TransactionIdExtractor};

/// Trait for receipt parsing.
pub trait ReceiptParser {
    /// Parse one screenshot's OCR text into a record.
    ///
    /// Never fails: each field independently falls back to the not-found
    /// sentinel when no rule matches.
    fn parse(&self, text: &str) -> TransactionRecord;
}

/// Parser combining the per-field rule extractors.
pub struct RuleBasedParser {
    amounts: AmountExtractor,
    transaction_ids: TransactionIdExtractor,
    date_times: DateTimeExtractor,
}

impl RuleBasedParser {
    /// Create a parser with the default rule chains.
    pub fn new() -> Self {
        Self {
            amounts: AmountExtractor::new(),
            transaction_ids: TransactionIdExtractor::new(),
            date_times: DateTimeExtractor::new(),
        }
    }

    /// Build a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        let amounts = match config.amount_strategy {
            AmountStrategy::LineScan => AmountExtractor::line_scan(config.line_shape),
            AmountStrategy::CurrencySymbol => AmountExtractor::currency_symbol(),
        };
        Self::new().with_amount_rules(amounts)
    }

    /// Replace the amount rule chain.
    pub fn with_amount_rules(mut self, amounts: AmountExtractor) -> Self {
        self.amounts = amounts;
        self
    }
}

impl Default for RuleBasedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptParser for RuleBasedParser {
    fn parse(&self, text: &str) -> TransactionRecord {
        let amount = self.amounts.extract(text);
        let transaction_id = self.transaction_ids.extract(text);
        let date_time = self.date_times.extract(text);

        debug!(
            "Parsed record: amount={:?} transaction_id={:?} date_time={:?}",
            amount, transaction_id, date_time
        );

        TransactionRecord::new(amount.into(), transaction_id.into(), date_time.into())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::record::FieldValue;

    const SAMPLE: &str = "Paid to Grocery Mart\n\
        ₹ 250.00\n\
        Completed\n\
        12 Jan 2024, 5:30 pm\n\
        UPI transaction ID 123456789\n\
        Pay again";

    #[test]
    fn test_parse_full_record() {
        let record = RuleBasedParser::new().parse(SAMPLE);

        assert_eq!(record.amount, FieldValue::Found("250.00".to_string()));
        assert_eq!(
            record.transaction_id,
            FieldValue::Found("123456789".to_string())
        );
        assert_eq!(
            record.date_time,
            FieldValue::Found("12 Jan 2024, 5:30 pm".to_string())
        );
    }

    #[test]
    fn test_parse_without_matches_yields_sentinels() {
        let record = RuleBasedParser::new().parse("nothing recognizable here");

        assert_eq!(record.amount, FieldValue::NotFound);
        assert_eq!(record.transaction_id, FieldValue::NotFound);
        assert_eq!(record.date_time, FieldValue::NotFound);
        assert_eq!(record.amount.as_str(), "N/A");
    }

    #[test]
    fn test_fields_are_independent() {
        let record = RuleBasedParser::new().parse("UPI transaction ID 42");

        assert_eq!(record.transaction_id, FieldValue::Found("42".to_string()));
        assert_eq!(record.amount, FieldValue::NotFound);
        assert_eq!(record.date_time, FieldValue::NotFound);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let parser = RuleBasedParser::new();
        assert_eq!(parser.parse(SAMPLE), parser.parse(SAMPLE));
    }

    #[test]
    fn test_empty_input() {
        let record = RuleBasedParser::new().parse("");

        assert_eq!(record.amount, FieldValue::NotFound);
        assert_eq!(record.transaction_id, FieldValue::NotFound);
        assert_eq!(record.date_time, FieldValue::NotFound);
    }

    #[test]
    fn test_currency_symbol_configuration() {
        let config = ExtractionConfig {
            amount_strategy: AmountStrategy::CurrencySymbol,
            ..ExtractionConfig::default()
        };
        let record = RuleBasedParser::from_config(&config).parse("Paid ₹ 499 today");

        assert_eq!(record.amount, FieldValue::Found("499".to_string()));
    }
}
