//! Date/time extraction.

use super::FieldExtractor;
use super::patterns::DATE_TIME;

/// Date/time field extractor.
///
/// The matched span is kept verbatim, am/pm case included; the value is
/// display data, not a parsed timestamp.
pub struct DateTimeExtractor;

impl DateTimeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateTimeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateTimeExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        DATE_TIME.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DATE_TIME
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Extract the date/time span from text.
pub fn extract_date_time(text: &str) -> Option<String> {
    DateTimeExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_abbreviated_month() {
        let text = "Paid on 12 Jan 2024, 5:30 pm via UPI";
        assert_eq!(extract_date_time(text), Some("12 Jan 2024, 5:30 pm".to_string()));
    }

    #[test]
    fn test_full_month_and_uppercase_meridiem() {
        let text = "12 January 2024, 5:30 PM";
        assert_eq!(extract_date_time(text), Some("12 January 2024, 5:30 PM".to_string()));
    }

    #[test]
    fn test_meridiem_case_preserved() {
        assert_eq!(
            extract_date_time("1 Mar 2023, 11:05 Am"),
            Some("1 Mar 2023, 11:05 Am".to_string())
        );
    }

    #[test]
    fn test_absent() {
        assert_eq!(extract_date_time("no timestamps here"), None);
    }

    #[test]
    fn test_missing_comma_rejected() {
        assert_eq!(extract_date_time("12 Jan 2024 5:30 pm"), None);
    }
}
