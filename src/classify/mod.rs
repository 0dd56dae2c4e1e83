//! Direction Classification
//!
//! Each bank family resolves income vs. expense differently: two-amount
//! banks read their debit/credit columns, HDFC layers textual overrides
//! over balance arithmetic, SBI has nothing but textual terms.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Direction;

/// Credits at or above this are assumed income when no stronger signal fires
pub const LARGE_CREDIT_THRESHOLD: f64 = 5000.0;

// Company payments look like "SAS2PY SOFTWARE P L" or "ACME TECH PVT LTD".
static COMPANY_PAYMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(software|tech|solutions|services)\b.*\b(p\s*l|pvt\s*ltd)\b").unwrap()
});

/// Textual test applied to a lowercased description
#[derive(Debug, Clone, Copy)]
pub enum TextPredicate {
    /// Description starts with the given prefix
    StartsWith(&'static str),
    /// Description contains any of the given terms
    ContainsAny(&'static [&'static str]),
    /// Industry term plus a Pvt Ltd / P L company suffix
    CompanyPayment,
    /// Transaction amount at or above a threshold
    AmountAtLeast(f64),
}

/// One ordered classification rule; order within a table is behavior
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    pub label: &'static str,
    pub predicate: TextPredicate,
    pub direction: Direction,
    /// Heuristic rules participate in conflict detection; hard business
    /// rules do not
    pub heuristic: bool,
}

impl TextRule {
    fn matches(&self, description_lower: &str, amount: f64) -> bool {
        match self.predicate {
            TextPredicate::StartsWith(prefix) => description_lower.starts_with(prefix),
            TextPredicate::ContainsAny(terms) => {
                terms.iter().any(|term| description_lower.contains(term))
            }
            TextPredicate::CompanyPayment => COMPANY_PAYMENT.is_match(description_lower),
            TextPredicate::AmountAtLeast(threshold) => amount >= threshold,
        }
    }
}

/// How a bank derives transaction direction
#[derive(Debug, Clone, Copy)]
pub enum ClassificationPolicy {
    /// Separate debit and credit columns; the populated column is
    /// authoritative and textual content never overrides it
    DebitCredit,
    /// Single amount plus running balance; ordered textual overrides beat
    /// the balance-delta primary signal
    BalanceDelta { overrides: &'static [TextRule] },
    /// Single credit-style amount; textual terms or a default of income
    CreditOnly { rules: &'static [TextRule] },
}

/// Outcome of rule resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub direction: Direction,
    pub decided_by: &'static str,
    /// Matched heuristic rules disagreed with each other
    pub conflicted: bool,
}

/// First matching rule plus whether the matched heuristics disagree
fn scan<'r>(
    rules: &'r [TextRule],
    description_lower: &str,
    amount: f64,
) -> (Option<&'r TextRule>, bool) {
    let mut first: Option<&TextRule> = None;
    let mut heuristic_direction: Option<Direction> = None;
    let mut conflicted = false;

    for rule in rules {
        if !rule.matches(description_lower, amount) {
            continue;
        }
        if first.is_none() {
            first = Some(rule);
        }
        if rule.heuristic {
            match heuristic_direction {
                None => heuristic_direction = Some(rule.direction),
                Some(seen) if seen != rule.direction => conflicted = true,
                Some(_) => {}
            }
        }
    }

    (first, conflicted)
}

/// Resolve a single-amount line backed by a running balance
pub fn resolve_with_balance(
    overrides: &[TextRule],
    description: &str,
    amount: f64,
    balance_after: Option<f64>,
) -> Resolution {
    let lowered = description.to_lowercase();
    let (first, conflicted) = scan(overrides, &lowered, amount);

    if let Some(rule) = first {
        return Resolution {
            direction: rule.direction,
            decided_by: rule.label,
            conflicted,
        };
    }

    // Primary signal: reconstruct the pre-transaction balance and compare.
    let direction = match balance_after {
        Some(after) => {
            let before = after - amount;
            if after > before {
                Direction::Income
            } else {
                Direction::Expense
            }
        }
        // Without a balance there is no delta; stay conservative.
        None => Direction::Expense,
    };

    Resolution {
        direction,
        decided_by: "balance-delta",
        conflicted,
    }
}

/// Resolve a credit-only line; income unless a rule says otherwise
pub fn resolve_credit_only(rules: &[TextRule], description: &str, amount: f64) -> Resolution {
    let lowered = description.to_lowercase();
    let (first, conflicted) = scan(rules, &lowered, amount);

    match first {
        Some(rule) => Resolution {
            direction: rule.direction,
            decided_by: rule.label,
            conflicted,
        },
        None => Resolution {
            direction: Direction::Income,
            decided_by: "credit-default",
            conflicted,
        },
    }
}
