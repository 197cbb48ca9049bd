//! Transaction records and extraction batches.

use std::fmt;

use serde::{Serialize, Serializer};

/// Value of a single extracted field.
///
/// `NotFound` renders as `"N/A"` (no extraction rule matched) while
/// `Failed` renders as `"Error"` (the OCR call itself failed), so a
/// consumer can tell a missing field apart from a broken image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// The matched substring, verbatim.
    Found(String),
    /// No extraction rule matched.
    NotFound,
    /// OCR failed for the whole image.
    Failed,
}

impl FieldValue {
    /// Sentinel for a field no rule matched.
    pub const NOT_FOUND: &'static str = "N/A";
    /// Sentinel for an image whose OCR call failed.
    pub const FAILED: &'static str = "Error";

    /// The rendered value: the match itself or a sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Found(value) => value,
            FieldValue::NotFound => Self::NOT_FOUND,
            FieldValue::Failed => Self::FAILED,
        }
    }

    /// True when an extraction rule matched.
    pub fn is_found(&self) -> bool {
        matches!(self, FieldValue::Found(_))
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) => FieldValue::Found(value),
            None => FieldValue::NotFound,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One image's extraction result. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    /// Monetary amount as matched.
    pub amount: FieldValue,
    /// UPI transaction id (digits only).
    pub transaction_id: FieldValue,
    /// Date/time span, verbatim.
    pub date_time: FieldValue,
}

impl TransactionRecord {
    pub fn new(amount: FieldValue, transaction_id: FieldValue, date_time: FieldValue) -> Self {
        Self {
            amount,
            transaction_id,
            date_time,
        }
    }

    /// Record for an image whose OCR call failed: every field `"Error"`.
    pub fn failed() -> Self {
        Self::new(FieldValue::Failed, FieldValue::Failed, FieldValue::Failed)
    }

    /// True when the record came from a failed OCR call.
    pub fn is_failed(&self) -> bool {
        self.amount == FieldValue::Failed
            && self.transaction_id == FieldValue::Failed
            && self.date_time == FieldValue::Failed
    }
}

/// Ordered collection of per-image records for one extraction run.
///
/// `batch[i]` always corresponds to the i-th input image; insertion order
/// is processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Batch {
    records: Vec<TransactionRecord>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TransactionRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }
}

impl From<Vec<TransactionRecord>> for Batch {
    fn from(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sentinels_render() {
        assert_eq!(FieldValue::NotFound.to_string(), "N/A");
        assert_eq!(FieldValue::Failed.to_string(), "Error");
        assert_eq!(FieldValue::Found("250.00".to_string()).to_string(), "250.00");
    }

    #[test]
    fn test_record_serializes_to_sentinel_strings() {
        let record = TransactionRecord::new(
            FieldValue::Found("499".to_string()),
            FieldValue::NotFound,
            FieldValue::Failed,
        );

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"amount":"499","transaction_id":"N/A","date_time":"Error"}"#
        );
    }

    #[test]
    fn test_failed_record() {
        let record = TransactionRecord::failed();
        assert!(record.is_failed());
        assert_eq!(record.amount.as_str(), "Error");
    }

    #[test]
    fn test_batch_keeps_insertion_order() {
        let mut batch = Batch::new();
        batch.push(TransactionRecord::failed());
        batch.push(TransactionRecord::new(
            FieldValue::Found("1".to_string()),
            FieldValue::NotFound,
            FieldValue::NotFound,
        ));

        assert_eq!(batch.len(), 2);
        assert!(batch.get(0).unwrap().is_failed());
        assert_eq!(batch.get(1).unwrap().amount.as_str(), "1");
    }
}
