//! HDFC Bank Descriptor
//!
//! Single-amount format: narration, reference, value date, amount, closing
//! balance. Direction comes from ordered textual overrides layered over
//! balance arithmetic; the UPI prefix rule is the load-bearing one.

use crate::classify::{ClassificationPolicy, TextPredicate, TextRule, LARGE_CREDIT_THRESHOLD};
use crate::models::{BankId, Direction};

use super::{BankDescriptor, ExtractionRule, MarkerMatch};

const MARKERS: &[&str] = &[
    "HDFC BANK LTD",
    "HDFC Bank Limited",
    "Date Narration Chq./Ref.No. Value Dt Withdrawal Amt. Deposit Amt. Closing Balance",
    "Withdrawal Amt. Deposit Amt. Closing Balance",
];

// Ordered override chain. The UPI rule is a hard business rule: UPI-prefixed
// narrations are outgoing peer payments even when the balance arithmetic
// reads like a deposit. Everything after it is heuristic. Reordering this
// table changes classification.
const OVERRIDES: &[TextRule] = &[
    TextRule {
        label: "upi-prefix",
        predicate: TextPredicate::StartsWith("upi-"),
        direction: Direction::Expense,
        heuristic: false,
    },
    TextRule {
        label: "income-terms",
        predicate: TextPredicate::ContainsAny(&[
            "interest paid",
            "salary",
            "dividend",
            "bonus",
            "refund",
            "interest",
        ]),
        direction: Direction::Income,
        heuristic: true,
    },
    TextRule {
        label: "company-payment",
        predicate: TextPredicate::CompanyPayment,
        direction: Direction::Income,
        heuristic: true,
    },
    TextRule {
        label: "expense-terms",
        predicate: TextPredicate::ContainsAny(&[
            "atw-",
            "atm-",
            "eaw-",
            "withdrawal",
            "pos ",
            "bill payment",
            "fee",
            "charge",
        ]),
        direction: Direction::Expense,
        heuristic: true,
    },
    TextRule {
        label: "large-credit",
        predicate: TextPredicate::AmountAtLeast(LARGE_CREDIT_THRESHOLD),
        direction: Direction::Income,
        heuristic: true,
    },
];

pub fn descriptor() -> BankDescriptor {
    BankDescriptor {
        id: BankId::Hdfc,
        name: "HDFC Bank",
        markers: MARKERS,
        marker_match: MarkerMatch::CaseSensitive,
        rules: vec![
            // Date Narration RefNo ValueDate Amount Balance
            ExtractionRule::new(
                "ref-and-value-date",
                r"^(?P<date>\d{2}/\d{2}/\d{2,4})\s+(?P<desc>.+?)\s+(?P<ref>\d{10,})\s+(?P<value_date>\d{2}/\d{2}/\d{2,4})\s+(?P<amount>[\d,]+\.\d{2})\s+(?P<balance>[\d,]+\.\d{2})$",
            ),
            // Date Narration RefNo Amount Balance
            ExtractionRule::new(
                "short-ref",
                r"^(?P<date>\d{2}/\d{2}/\d{2,4})\s+(?P<desc>.+?)\s+(?P<ref>\d{8,})\s+(?P<amount>[\d,]+\.\d{2})\s+(?P<balance>[\d,]+\.\d{2})$",
            ),
            // Date Narration Amount Balance
            ExtractionRule::new(
                "bare",
                r"^(?P<date>\d{2}/\d{2}/\d{2,4})\s+(?P<desc>.+?)\s+(?P<amount>[\d,]+\.\d{2})\s+(?P<balance>[\d,]+\.\d{2})$",
            ),
        ],
        policy: ClassificationPolicy::BalanceDelta {
            overrides: OVERRIDES,
        },
    }
}
