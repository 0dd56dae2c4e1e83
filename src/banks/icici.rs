//! ICICI Bank Descriptor
//!
//! Two-amount format: withdrawal and deposit columns plus balance, with an
//! optional numeric cheque number between description and amounts. The
//! populated column is authoritative.

use crate::classify::ClassificationPolicy;
use crate::models::BankId;

use super::{BankDescriptor, ExtractionRule, MarkerMatch};

const MARKERS: &[&str] = &[
    "ICICI BANK LIMITED",
    "ICICI Bank",
    "Withdrawal Deposit Balance",
];

pub fn descriptor() -> BankDescriptor {
    BankDescriptor {
        id: BankId::Icici,
        name: "ICICI Bank",
        markers: MARKERS,
        marker_match: MarkerMatch::CaseSensitive,
        rules: vec![
            // Date Description ChequeNo Withdrawal Deposit Balance
            ExtractionRule::new(
                "with-cheque",
                r"^(?P<date>\d{2}/\d{2}/\d{2,4})\s+(?P<desc>.+?)\s+(?P<ref>\d{6,})\s+(?P<debit>[\d,]+\.\d{2})\s+(?P<credit>[\d,]+\.\d{2})\s+(?P<balance>[\d,]+\.\d{2})$",
            ),
            // Date Description Withdrawal Deposit Balance
            ExtractionRule::new(
                "bare",
                r"^(?P<date>\d{2}/\d{2}/\d{2,4})\s+(?P<desc>.+?)\s+(?P<debit>[\d,]+\.\d{2})\s+(?P<credit>[\d,]+\.\d{2})\s+(?P<balance>[\d,]+\.\d{2})$",
            ),
        ],
        policy: ClassificationPolicy::DebitCredit,
    }
}
