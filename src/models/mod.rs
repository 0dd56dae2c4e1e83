//! Shared Output Types
//!
//! Records, diagnostics and errors produced by statement extraction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Banks with a registered format descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankId {
    Hdfc,
    Sbi,
    Icici,
    Axis,
    Kotak,
    Federal,
    IdfcFirst,
}

/// Transaction direction, the only two values the engine ever emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Income,
    Expense,
}

/// One fully extracted statement transaction
///
/// Only constructed once every field has normalized successfully; a line
/// that fails any conversion is skipped as a whole, never half-emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub description: String,
    #[serde(serialize_with = "two_decimal")]
    pub amount: f64,
    pub direction: Direction,
    #[serde(
        serialize_with = "two_decimal_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub balance: Option<f64>,
    pub bank: BankId,
    pub source_line: String,
}

/// Why a reconstructed line produced no record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    NoRuleMatched,
    InvalidDate,
    InvalidAmount,
    ZeroAmount,
}

/// Structured diagnostics emitted alongside the extracted records
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParseEvent {
    /// No descriptor claimed the statement text
    UnrecognizedFormat,
    /// A reconstructed line was dropped instead of half-parsed
    #[serde(rename_all = "camelCase")]
    LineSkipped {
        line_no: usize,
        reason: SkipReason,
        line: String,
    },
    /// Classification signals disagreed; the record stands but deserves a look
    #[serde(rename_all = "camelCase")]
    ReviewFlagged {
        line_no: usize,
        direction: Direction,
        line: String,
    },
}

/// Everything extracted from one statement text
///
/// `bank_matched: None` with no transactions means no descriptor claimed
/// the text; a matched bank with zero transactions is a different, equally
/// valid outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementParse {
    pub bank_matched: Option<BankId>,
    pub transactions: Vec<TransactionRecord>,
    pub events: Vec<ParseEvent>,
}

impl StatementParse {
    pub fn unrecognized() -> Self {
        Self {
            bank_matched: None,
            transactions: Vec::new(),
            events: vec![ParseEvent::UnrecognizedFormat],
        }
    }

    /// Number of reconstructed lines that were skipped
    pub fn skipped_lines(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ParseEvent::LineSkipped { .. }))
            .count()
    }

    /// Number of records flagged for manual review
    pub fn review_flags(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ParseEvent::ReviewFlagged { .. }))
            .count()
    }
}

/// Hard failures; everything recoverable is a [`ParseEvent`] instead
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("statement text contains binary data and cannot be parsed as text")]
    MalformedInput,
}

fn two_decimal<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{:.2}", value))
}

fn two_decimal_opt<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => two_decimal(v, serializer),
        None => serializer.serialize_none(),
    }
}
