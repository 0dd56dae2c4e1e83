//! Logical Line Reconstruction
//!
//! PDF text extraction wraps long transaction rows across physical lines.
//! This module stitches them back together: a line opening with a date
//! token starts a transaction, following lines are its continuations.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lines shorter than this carry no transaction content
const MIN_MEANINGFUL_LEN: usize = 4;

/// Header rows, page furniture and summary lines across the supported banks,
/// matched as lowercase substrings
const NOISE_MARKERS: &[&str] = &[
    "date narration",
    "withdrawal amt",
    "deposit amt",
    "withdrawals deposits",
    "tran date",
    "date details",
    "date description",
    "transaction date",
    "date value date",
    "chq no particulars",
    "opening balance",
    "closing balance",
    "grand total",
    "statement of account",
    "account number",
    "ifsc code",
    "micr code",
    "computer generated",
    "page ",
    "---",
];

static TRANSACTION_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}[/-]\d{2}[/-](?:\d{4}|\d{2})\b").unwrap());

/// One reconstructed transaction line
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalLine {
    pub text: String,
    /// 1-based physical line number of the start line
    pub line_no: usize,
}

/// Whether a trimmed line opens a new transaction (leading date token)
pub fn is_transaction_start(line: &str) -> bool {
    TRANSACTION_START.is_match(line)
}

fn is_noise(line: &str) -> bool {
    let lowered = line.to_lowercase();
    NOISE_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Rebuild transaction lines from raw statement text
///
/// Continuations are space-joined onto the open line; continuations before
/// the first start line have nothing to attach to and are dropped.
pub fn logical_lines(text: &str) -> Vec<LogicalLine> {
    let mut lines = Vec::new();
    let mut current: Option<LogicalLine> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.len() < MIN_MEANINGFUL_LEN || is_noise(line) {
            continue;
        }

        if is_transaction_start(line) {
            if let Some(done) = current.take() {
                lines.push(done);
            }
            current = Some(LogicalLine {
                text: line.to_string(),
                line_no: idx + 1,
            });
        } else if let Some(open) = current.as_mut() {
            open.text.push(' ');
            open.text.push_str(line);
        }
    }

    if let Some(done) = current.take() {
        lines.push(done);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_detection() {
        assert!(is_transaction_start("01/06/24 UPI-RAJ STORE 10.00"));
        assert!(is_transaction_start("01/06/2024 Grocery Store 500.00"));
        assert!(is_transaction_start("10-06-2024 NEFT TRANSFER 100.00"));
        assert!(!is_transaction_start("UPI-RAJ STORE 10.00"));
        assert!(!is_transaction_start("1/6/2024 short tokens"));
        assert!(!is_transaction_start("01/06/245 odd year"));
    }

    #[test]
    fn test_wrapped_transaction_joins_into_one_line() {
        let text = "01/06/24 UPI-RAJ STORE-PAYTMQR281005\n\
                    050101IQKFNTI 0000415389418321\n\
                    01/06/24 10.00 22.22";
        // The third physical line starts with a date, so it opens its own
        // logical line; only genuinely wrapped text merges.
        let lines = logical_lines(text);
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0].text,
            "01/06/24 UPI-RAJ STORE-PAYTMQR281005 050101IQKFNTI 0000415389418321"
        );
        assert_eq!(lines[0].line_no, 1);
    }

    #[test]
    fn test_three_part_wrap() {
        let text = "01/06/2024 NEFT ACME TRADERS PRIVATE\n\
                    LIMITED INVOICE SETTLEMENT\n\
                    REF555 1,000.00 0.00 9,500.00";
        let lines = logical_lines(text);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0].text,
            "01/06/2024 NEFT ACME TRADERS PRIVATE LIMITED INVOICE SETTLEMENT REF555 1,000.00 0.00 9,500.00"
        );
    }

    #[test]
    fn test_orphan_continuation_is_dropped() {
        let text = "stray continuation with no start\n01/06/2024 Real Line 500.00";
        let lines = logical_lines(text);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "01/06/2024 Real Line 500.00");
        assert_eq!(lines[0].line_no, 2);
    }

    #[test]
    fn test_noise_and_short_lines_are_filtered() {
        let text = "Date Narration Chq./Ref.No. Value Dt Withdrawal Amt. Deposit Amt. Closing Balance\n\
                    01/06/24 POS PURCHASE\n\
                    Cr\n\
                    Page 1 of 2\n\
                    -----------------\n\
                    MERCHANT NAME 500.00 9,500.00";
        let lines = logical_lines(text);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "01/06/24 POS PURCHASE MERCHANT NAME 500.00 9,500.00");
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(logical_lines("").is_empty());
        assert!(logical_lines("   \n\n  ").is_empty());
    }
}
