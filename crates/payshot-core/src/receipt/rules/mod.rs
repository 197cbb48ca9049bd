//! Rule-based field extractors for payment screenshots.

pub mod amount;
pub mod datetime;
pub mod patterns;
pub mod transaction_id;

pub use amount::{AmountExtractor, AmountRule, LineShape, extract_amount};
pub use datetime::{DateTimeExtractor, extract_date_time};
pub use transaction_id::{TransactionIdExtractor, extract_transaction_id};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
