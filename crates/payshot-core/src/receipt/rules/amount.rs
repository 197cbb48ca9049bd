//! Amount extraction from payment screenshot text.
//!
//! OCR noise makes a single pattern unreliable, so the amount is resolved
//! by an ordered list of rules; the first rule that matches wins.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::FieldExtractor;
use super::patterns::{
    AMOUNT_ANCHOR, AMOUNT_CURRENCY, AMOUNT_FALLBACK, AMOUNT_LINE_NUMERIC, AMOUNT_LINE_TOLERANT,
};

/// Accepted shape for the trimmed line immediately above an anchor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineShape {
    /// A numeral optionally preceded by non-digit, non-dot characters
    /// (currency glyphs, labels).
    Tolerant,
    /// Digits and dots only, surrounded by whitespace at most.
    NumericOnly,
}

/// A single amount-matching rule.
#[derive(Debug, Clone, Copy)]
pub enum AmountRule {
    /// Scan lines for "pay again"/"completed" and read the numeral from
    /// the line above the first qualifying anchor.
    LineScan(LineShape),
    /// Match the anchor word followed by a numeral anywhere in the text.
    WholeText,
    /// Match a currency glyph followed by an integer numeral.
    CurrencySymbol,
}

impl AmountRule {
    /// Rule name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            AmountRule::LineScan(_) => "line-scan",
            AmountRule::WholeText => "whole-text",
            AmountRule::CurrencySymbol => "currency-symbol",
        }
    }

    fn apply(&self, text: &str) -> Option<String> {
        match self {
            AmountRule::LineScan(shape) => scan_anchor_lines(text, *shape).into_iter().next(),
            AmountRule::WholeText => {
                AMOUNT_FALLBACK.captures(text).map(|caps| caps[1].to_string())
            }
            AmountRule::CurrencySymbol => {
                AMOUNT_CURRENCY.captures(text).map(|caps| caps[1].to_string())
            }
        }
    }

    fn apply_all(&self, text: &str) -> Vec<String> {
        match self {
            AmountRule::LineScan(shape) => scan_anchor_lines(text, *shape),
            AmountRule::WholeText => AMOUNT_FALLBACK
                .captures_iter(text)
                .map(|caps| caps[1].to_string())
                .collect(),
            AmountRule::CurrencySymbol => AMOUNT_CURRENCY
                .captures_iter(text)
                .map(|caps| caps[1].to_string())
                .collect(),
        }
    }
}

/// Read the numeral above every qualifying anchor line, top to bottom.
///
/// An anchor on the first line has no previous line and is skipped; an
/// anchor whose previous line does not match the shape does not stop the
/// scan.
fn scan_anchor_lines(text: &str, shape: LineShape) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let mut results = Vec::new();

    for i in 1..lines.len() {
        if !AMOUNT_ANCHOR.is_match(lines[i]) {
            continue;
        }

        let previous = lines[i - 1].trim();
        let captured = match shape {
            LineShape::Tolerant => AMOUNT_LINE_TOLERANT.captures(previous),
            LineShape::NumericOnly => AMOUNT_LINE_NUMERIC.captures(previous),
        };

        if let Some(caps) = captured {
            results.push(caps[1].to_string());
        }
    }

    results
}

/// Amount field extractor evaluating an ordered rule list.
pub struct AmountExtractor {
    rules: Vec<AmountRule>,
}

impl AmountExtractor {
    /// Default rule chain: line scan with the tolerant shape, then the
    /// whole-text fallback.
    pub fn new() -> Self {
        Self::line_scan(LineShape::Tolerant)
    }

    /// Line-scan chain with an explicit line shape.
    pub fn line_scan(shape: LineShape) -> Self {
        Self {
            rules: vec![AmountRule::LineScan(shape), AmountRule::WholeText],
        }
    }

    /// Currency-symbol-only variant for OCR sources without usable anchor
    /// lines.
    pub fn currency_symbol() -> Self {
        Self {
            rules: vec![AmountRule::CurrencySymbol],
        }
    }

    /// Custom rule order.
    pub fn with_rules(rules: Vec<AmountRule>) -> Self {
        Self { rules }
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        for rule in &self.rules {
            if let Some(amount) = rule.apply(text) {
                debug!("Amount {} matched by {} rule", amount, rule.name());
                return Some(amount);
            }
        }
        None
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.rules
            .iter()
            .flat_map(|rule| rule.apply_all(text))
            .collect()
    }
}

/// Extract the amount using the default rule chain.
pub fn extract_amount(text: &str) -> Option<String> {
    AmountExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_line_scan_with_currency_prefix() {
        let text = "₹ 250.00\nCompleted";
        assert_eq!(extract_amount(text), Some("250.00".to_string()));
    }

    #[test]
    fn test_line_scan_pay_again_anchor() {
        let text = "Paid to Grocery Mart\n120.50\nPay again\nUPI transaction ID 4215";
        assert_eq!(extract_amount(text), Some("120.50".to_string()));
    }

    #[test]
    fn test_anchor_on_first_line_is_ignored() {
        let extractor = AmountExtractor::with_rules(vec![AmountRule::LineScan(LineShape::Tolerant)]);
        assert_eq!(extractor.extract("Completed\n250.00"), None);
    }

    #[test]
    fn test_first_qualifying_anchor_wins() {
        let text = "100\nCompleted\n200\nCompleted";
        assert_eq!(extract_amount(text), Some("100".to_string()));
    }

    #[test]
    fn test_anchor_with_unusable_previous_line_is_skipped() {
        let extractor = AmountExtractor::with_rules(vec![AmountRule::LineScan(LineShape::Tolerant)]);
        let text = "Payment details\nPay again\n300\nCompleted";
        assert_eq!(extractor.extract(text), Some("300".to_string()));
    }

    #[test]
    fn test_numeric_only_shape_rejects_prefixed_line() {
        let extractor = AmountExtractor::line_scan(LineShape::NumericOnly);
        assert_eq!(extractor.extract("250.00\nCompleted"), Some("250.00".to_string()));
        assert_eq!(extractor.extract("₹ 250.00\nCompleted"), None);
    }

    #[test]
    fn test_whole_text_fallback() {
        let text = "Transaction Completed 499 thank you";
        assert_eq!(extract_amount(text), Some("499".to_string()));
    }

    #[test]
    fn test_currency_symbol_rule() {
        let extractor = AmountExtractor::currency_symbol();
        assert_eq!(extractor.extract("Paid ₹ 250 to merchant"), Some("250".to_string()));
        // anchor lines mean nothing to this rule set
        assert_eq!(extractor.extract("250.00\nCompleted"), None);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_amount("hello world"), None);
    }

    #[test]
    fn test_extract_all_collects_every_anchor() {
        let extractor = AmountExtractor::with_rules(vec![AmountRule::LineScan(LineShape::Tolerant)]);
        let results = extractor.extract_all("100\nCompleted\n200\nPay again");
        assert_eq!(results, vec!["100".to_string(), "200".to_string()]);
    }
}
