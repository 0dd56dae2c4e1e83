//! IDFC First Bank Descriptor
//!
//! Two-amount format without a reference token: transaction date,
//! description, debit, credit, balance.

use crate::classify::ClassificationPolicy;
use crate::models::BankId;

use super::{BankDescriptor, ExtractionRule, MarkerMatch};

const MARKERS: &[&str] = &[
    "IDFC FIRST BANK LIMITED",
    "IDFC Bank",
    "Transaction Date Description Debit Credit Balance",
];

pub fn descriptor() -> BankDescriptor {
    BankDescriptor {
        id: BankId::IdfcFirst,
        name: "IDFC First Bank",
        markers: MARKERS,
        marker_match: MarkerMatch::CaseSensitive,
        rules: vec![
            // Date Description Debit Credit Balance
            ExtractionRule::new(
                "bare",
                r"^(?P<date>\d{2}/\d{2}/\d{4})\s+(?P<desc>.+?)\s+(?P<debit>[\d,]+\.\d{2})\s+(?P<credit>[\d,]+\.\d{2})\s+(?P<balance>[\d,]+\.\d{2})$",
            ),
        ],
        policy: ClassificationPolicy::DebitCredit,
    }
}
