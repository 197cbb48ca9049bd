//! Common regex patterns for payment screenshot extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anchor lines: the line above them carries the amount
    pub static ref AMOUNT_ANCHOR: Regex = Regex::new(
        r"(?i)pay again|completed"
    ).unwrap();

    // Amount line shapes (applied to the trimmed line above an anchor)
    pub static ref AMOUNT_LINE_TOLERANT: Regex = Regex::new(
        r"^[^.\d]*([\d.]+)\s*$"
    ).unwrap();

    pub static ref AMOUNT_LINE_NUMERIC: Regex = Regex::new(
        r"^\s*([\d.]+)\s*$"
    ).unwrap();

    // Whole-text fallback: anchor word directly followed by a numeral
    pub static ref AMOUNT_FALLBACK: Regex = Regex::new(
        r"(?i)(?:pay again|completed)\s*([\d.]+)"
    ).unwrap();

    // Currency glyph followed by an integer numeral
    pub static ref AMOUNT_CURRENCY: Regex = Regex::new(
        r"[₹$€£]\s*(\d+)"
    ).unwrap();

    // UPI transaction id label; the match is case sensitive
    pub static ref UPI_TRANSACTION_ID: Regex = Regex::new(
        r"UPI transaction ID\s*(\d+)"
    ).unwrap();

    // Date/time, e.g. "12 Jan 2024, 5:30 pm" or "3 September 2023, 11:05 AM"
    pub static ref DATE_TIME: Regex = Regex::new(
        r"(?i)\d{1,2}\s*[A-Za-z]{3,9}\s*\d{4},\s*\d{1,2}:\d{2}\s*(?:am|pm)"
    ).unwrap();
}
