//! State Bank of India Descriptor
//!
//! SBI statements expose a single credit-style column and no debit column,
//! so direction can only be inferred from the narration. This is the least
//! reliable classification path in the registry. Marker matching is
//! case-insensitive because observed SBI statements vary in casing.

use crate::classify::{ClassificationPolicy, TextPredicate, TextRule};
use crate::models::{BankId, Direction};

use super::{BankDescriptor, ExtractionRule, MarkerMatch};

const MARKERS: &[&str] = &[
    "STATE BANK OF INDIA",
    "SBI Bank",
    "Date Details Ref No./Cheque No Credit Balance",
    "Details Ref No./Cheque No Credit",
];

// Expense terms are checked before income terms; a narration matching both
// resolves expense and gets flagged for review.
const RULES: &[TextRule] = &[
    TextRule {
        label: "expense-terms",
        predicate: TextPredicate::ContainsAny(&[
            "withdrawal",
            "atm",
            "purchase",
            "payment",
            "debit",
        ]),
        direction: Direction::Expense,
        heuristic: true,
    },
    TextRule {
        label: "income-terms",
        predicate: TextPredicate::ContainsAny(&[
            "deposit",
            "salary",
            "credit",
            "transfer in",
            "interest",
        ]),
        direction: Direction::Income,
        heuristic: true,
    },
];

pub fn descriptor() -> BankDescriptor {
    BankDescriptor {
        id: BankId::Sbi,
        name: "State Bank of India",
        markers: MARKERS,
        marker_match: MarkerMatch::CaseInsensitive,
        rules: vec![
            // Date Details RefNo Credit Balance
            ExtractionRule::new(
                "with-ref",
                r"^(?P<date>\d{2}/\d{2}/\d{4})\s+(?P<desc>.+?)\s+(?P<ref>\w+)\s+(?P<credit>[\d,]+\.\d{2})\s+(?P<balance>[\d,]+\.\d{2})$",
            ),
            // Date Details Credit Balance
            ExtractionRule::new(
                "bare",
                r"^(?P<date>\d{2}/\d{2}/\d{4})\s+(?P<desc>.+?)\s+(?P<credit>[\d,]+\.\d{2})\s+(?P<balance>[\d,]+\.\d{2})$",
            ),
        ],
        policy: ClassificationPolicy::CreditOnly { rules: RULES },
    }
}
