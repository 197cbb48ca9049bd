//! Payment receipt field extraction module.

mod parser;
pub mod rules;

pub use parser::{ReceiptParser, RuleBasedParser};
