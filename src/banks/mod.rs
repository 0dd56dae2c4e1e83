//! Bank Format Descriptors
//!
//! One static descriptor per supported bank: identity markers for
//! recognition, ordered extraction rules, and a classification policy.
//! Adding a bank means adding a module here and one registry entry;
//! the engine itself never changes.

pub mod hdfc;
pub mod sbi;
pub mod icici;
pub mod axis;
pub mod kotak;
pub mod federal;
pub mod idfc;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::classify::{self, ClassificationPolicy, Resolution};
use crate::models::{BankId, Direction, SkipReason, TransactionRecord};
use crate::normalize;
use crate::reconstruct::LogicalLine;

/// How identity markers compare against statement text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerMatch {
    CaseSensitive,
    /// For banks whose statements vary in casing
    CaseInsensitive,
}

/// One anchored line pattern with named capture groups
///
/// Recognized groups: `date`, `desc`, `ref`, `debit`, `credit`, `amount`,
/// `balance` and `marker` (an explicit DR/CR token). Other groups are
/// allowed and ignored. Every rule must capture `date` and `desc`.
pub struct ExtractionRule {
    pub name: &'static str,
    pub pattern: Regex,
}

impl ExtractionRule {
    pub fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
        }
    }
}

/// Complete format description for one bank
pub struct BankDescriptor {
    pub id: BankId,
    pub name: &'static str,
    pub markers: &'static [&'static str],
    pub marker_match: MarkerMatch,
    /// Tried in order; the first full match wins
    pub rules: Vec<ExtractionRule>,
    pub policy: ClassificationPolicy,
}

/// One successfully extracted line
#[derive(Debug)]
pub struct LineExtract {
    pub record: TransactionRecord,
    /// Classification signals disagreed; keep the record, surface the doubt
    pub needs_review: bool,
}

impl BankDescriptor {
    /// Whether any identity marker appears in the statement text
    pub fn detect(&self, text: &str) -> bool {
        match self.marker_match {
            MarkerMatch::CaseSensitive => self.markers.iter().any(|m| text.contains(m)),
            MarkerMatch::CaseInsensitive => {
                let lowered = text.to_lowercase();
                self.markers
                    .iter()
                    .any(|m| lowered.contains(&m.to_lowercase()))
            }
        }
    }

    /// Extract one transaction from a reconstructed line
    pub fn extract(&self, line: &LogicalLine) -> Result<LineExtract, SkipReason> {
        let caps = self
            .rules
            .iter()
            .find_map(|rule| rule.pattern.captures(&line.text))
            .ok_or(SkipReason::NoRuleMatched)?;

        let date = caps
            .name("date")
            .and_then(|m| normalize::parse_date(m.as_str()))
            .ok_or(SkipReason::InvalidDate)?;

        let raw_desc = caps.name("desc").map(|m| m.as_str()).unwrap_or("");
        let description = normalize::clean_description(raw_desc, self.name);

        let debit = named_amount(&caps, "debit")?;
        let credit = named_amount(&caps, "credit")?;
        let amount_field = named_amount(&caps, "amount")?;
        let balance = named_amount(&caps, "balance")?;
        let marker = caps.name("marker").map(|m| m.as_str().to_uppercase());

        let (amount, resolution) = match &self.policy {
            ClassificationPolicy::DebitCredit => {
                let debit = debit.unwrap_or(0.0);
                let credit = credit.unwrap_or(0.0);
                if debit <= 0.0 && credit <= 0.0 {
                    return Err(SkipReason::ZeroAmount);
                }
                // The populated column decides; text never overrides it.
                let (amount, direction) = if debit > 0.0 {
                    (debit, Direction::Expense)
                } else {
                    (credit, Direction::Income)
                };
                let contradicted = matches!(
                    (marker.as_deref(), direction),
                    (Some("DR"), Direction::Income) | (Some("CR"), Direction::Expense)
                );
                (
                    amount,
                    Resolution {
                        direction,
                        decided_by: "columns",
                        conflicted: contradicted,
                    },
                )
            }
            ClassificationPolicy::BalanceDelta { overrides } => {
                let amount = amount_field.ok_or(SkipReason::InvalidAmount)?;
                if amount <= 0.0 {
                    return Err(SkipReason::ZeroAmount);
                }
                (
                    amount,
                    classify::resolve_with_balance(overrides, &description, amount, balance),
                )
            }
            ClassificationPolicy::CreditOnly { rules } => {
                let amount = credit.or(amount_field).ok_or(SkipReason::InvalidAmount)?;
                if amount <= 0.0 {
                    return Err(SkipReason::ZeroAmount);
                }
                (
                    amount,
                    classify::resolve_credit_only(rules, &description, amount),
                )
            }
        };

        Ok(LineExtract {
            record: TransactionRecord {
                date,
                description,
                amount,
                direction: resolution.direction,
                balance,
                bank: self.id,
                source_line: line.text.clone(),
            },
            needs_review: resolution.conflicted,
        })
    }
}

/// Parse a named amount group; absent groups are simply not present
fn named_amount(caps: &Captures, group: &str) -> Result<Option<f64>, SkipReason> {
    match caps.name(group) {
        Some(m) => normalize::parse_amount(m.as_str())
            .map(Some)
            .ok_or(SkipReason::InvalidAmount),
        None => Ok(None),
    }
}

// Recognition priority order. HDFC's header markers are the most specific,
// SBI's the loosest; a statement mentioning several banks goes to the
// earliest match.
static DESCRIPTORS: Lazy<Vec<BankDescriptor>> = Lazy::new(|| {
    vec![
        hdfc::descriptor(),
        sbi::descriptor(),
        icici::descriptor(),
        axis::descriptor(),
        kotak::descriptor(),
        federal::descriptor(),
        idfc::descriptor(),
    ]
});

/// All descriptors in recognition priority order
pub fn all_descriptors() -> &'static [BankDescriptor] {
    &DESCRIPTORS
}

/// First descriptor whose identity markers appear in the text
pub fn recognize(text: &str) -> Option<&'static BankDescriptor> {
    all_descriptors().iter().find(|d| d.detect(text))
}

/// Display names of the supported banks, in recognition priority order
pub fn supported_banks() -> Vec<&'static str> {
    all_descriptors().iter().map(|d| d.name).collect()
}
