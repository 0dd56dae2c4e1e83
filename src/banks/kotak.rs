//! Kotak Mahindra Bank Descriptor
//!
//! Two-amount format: description, instrument token, debit amount, credit
//! amount, available balance.

use crate::classify::ClassificationPolicy;
use crate::models::BankId;

use super::{BankDescriptor, ExtractionRule, MarkerMatch};

const MARKERS: &[&str] = &[
    "KOTAK MAHINDRA BANK LIMITED",
    "Kotak Bank",
    "Date Description Instrument Debit Amount Credit Amount Available Balance",
];

pub fn descriptor() -> BankDescriptor {
    BankDescriptor {
        id: BankId::Kotak,
        name: "Kotak Mahindra Bank",
        markers: MARKERS,
        marker_match: MarkerMatch::CaseSensitive,
        rules: vec![
            // Date Description Instrument Debit Credit Balance
            ExtractionRule::new(
                "with-instrument",
                r"^(?P<date>\d{2}/\d{2}/\d{4})\s+(?P<desc>.+?)\s+(?P<ref>\w+)\s+(?P<debit>[\d,]+\.\d{2})\s+(?P<credit>[\d,]+\.\d{2})\s+(?P<balance>[\d,]+\.\d{2})$",
            ),
        ],
        policy: ClassificationPolicy::DebitCredit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;
    use crate::reconstruct::LogicalLine;

    fn line(text: &str) -> LogicalLine {
        LogicalLine {
            text: text.to_string(),
            line_no: 1,
        }
    }

    #[test]
    fn test_detect() {
        let descriptor = descriptor();
        assert!(descriptor.detect("KOTAK MAHINDRA BANK LIMITED"));
        assert!(descriptor
            .detect("Date Description Instrument Debit Amount Credit Amount Available Balance"));
        assert!(!descriptor.detect("THE FEDERAL BANK LTD"));
    }

    #[test]
    fn test_debit_is_expense() {
        let extract = descriptor()
            .extract(&line("01/06/2024 UPI AMAZON PAY IN500221 1,200.00 0.00 23,800.00"))
            .unwrap();
        assert_eq!(extract.record.direction, Direction::Expense);
        assert_eq!(extract.record.amount, 1200.00);
        assert_eq!(extract.record.description, "UPI AMAZON PAY");
    }

    #[test]
    fn test_credit_is_income() {
        let extract = descriptor()
            .extract(&line("02/06/2024 SALARY ACME CORP NEFT0012 0.00 65,000.00 88,800.00"))
            .unwrap();
        assert_eq!(extract.record.direction, Direction::Income);
        assert_eq!(extract.record.amount, 65000.00);
        assert_eq!(extract.record.balance, Some(88800.00));
    }
}
