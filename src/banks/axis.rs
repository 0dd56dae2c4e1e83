//! Axis Bank Descriptor
//!
//! Two-amount format with an alphanumeric cheque/reference token between
//! particulars and the debit/credit/balance columns.

use crate::classify::ClassificationPolicy;
use crate::models::BankId;

use super::{BankDescriptor, ExtractionRule, MarkerMatch};

const MARKERS: &[&str] = &[
    "AXIS BANK LTD",
    "Axis Bank Limited",
    "Tran Date Chq No Particulars Debit Credit Balance Init.",
    "Tran Date Chq No Particulars",
];

pub fn descriptor() -> BankDescriptor {
    BankDescriptor {
        id: BankId::Axis,
        name: "Axis Bank",
        markers: MARKERS,
        marker_match: MarkerMatch::CaseSensitive,
        rules: vec![
            // TranDate Particulars ChqNo Debit Credit Balance
            ExtractionRule::new(
                "with-ref",
                r"^(?P<date>\d{2}/\d{2}/\d{4})\s+(?P<desc>.+?)\s+(?P<ref>\w+)\s+(?P<debit>[\d,]+\.\d{2})\s+(?P<credit>[\d,]+\.\d{2})\s+(?P<balance>[\d,]+\.\d{2})$",
            ),
            // TranDate Particulars Debit Credit Balance
            ExtractionRule::new(
                "bare",
                r"^(?P<date>\d{2}/\d{2}/\d{4})\s+(?P<desc>.+?)\s+(?P<debit>[\d,]+\.\d{2})\s+(?P<credit>[\d,]+\.\d{2})\s+(?P<balance>[\d,]+\.\d{2})$",
            ),
        ],
        policy: ClassificationPolicy::DebitCredit,
    }
}
