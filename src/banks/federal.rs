//! Federal Bank Descriptor
//!
//! The widest format in the registry: date, value date, particulars, tran
//! type, tran id, cheque details, withdrawals, deposits, balance and a
//! trailing DR/CR token. Dates are dash-separated. The columns decide
//! direction; a contradicting DR/CR token flags the record for review.

use crate::classify::ClassificationPolicy;
use crate::models::BankId;

use super::{BankDescriptor, ExtractionRule, MarkerMatch};

const MARKERS: &[&str] = &[
    "THE FEDERAL BANK LTD",
    "Federal Bank Limited",
    "Date Value Date Particulars Tran",
    "Withdrawals Deposits Balance DR",
    "Tran Type Tran ID Cheque",
];

pub fn descriptor() -> BankDescriptor {
    BankDescriptor {
        id: BankId::Federal,
        name: "Federal Bank",
        markers: MARKERS,
        marker_match: MarkerMatch::CaseSensitive,
        rules: vec![
            // Date ValueDate Particulars TranType TranId ChequeDetails
            // Withdrawals Deposits Balance DR/CR
            ExtractionRule::new(
                "full",
                r"^(?P<date>\d{2}-\d{2}-\d{4})\s+(?P<value_date>\d{2}-\d{2}-\d{4})\s+(?P<desc>.+?)\s+(?P<tran_type>\w+)\s+(?P<ref>\w+)\s+(?P<cheque>.+?)\s+(?P<debit>[\d,]+\.\d{2})\s+(?P<credit>[\d,]+\.\d{2})\s+(?P<balance>[\d,]+\.\d{2})\s+(?P<marker>DR|CR)$",
            ),
            // Date Particulars Withdrawals Deposits Balance
            ExtractionRule::new(
                "bare",
                r"^(?P<date>\d{2}-\d{2}-\d{4})\s+(?P<desc>.+?)\s+(?P<debit>[\d,]+\.\d{2})\s+(?P<credit>[\d,]+\.\d{2})\s+(?P<balance>[\d,]+\.\d{2})$",
            ),
        ],
        policy: ClassificationPolicy::DebitCredit,
    }
}
