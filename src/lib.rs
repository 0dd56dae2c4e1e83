//! Bank Statement Transaction Extraction
//!
//! Extracts structured transactions from bank statement text (produced
//! upstream by PDF text extraction) and classifies each as income or
//! expense. Each supported bank has a static format descriptor: identity
//! markers, ordered line patterns, and a classification policy. The engine
//! routes a statement to the first matching descriptor, reconstructs
//! transaction lines that wrap across physical lines, and returns records
//! plus structured diagnostics for anything it had to skip or doubt.
//!
//! ```
//! let parse = statement_extract::parse_statement(
//!     "HDFC BANK LTD\n01/06/24 UPI-RAJ STORE 0000415389418321 01/06/24 10.00 22.22",
//! )?;
//! assert_eq!(parse.bank_matched, Some(statement_extract::BankId::Hdfc));
//! assert_eq!(parse.transactions[0].amount, 10.00);
//! # Ok::<(), statement_extract::ParseError>(())
//! ```

pub mod models;
pub mod normalize;
pub mod reconstruct;
pub mod classify;
pub mod banks;
pub mod extract;

pub use banks::{all_descriptors, recognize, supported_banks, BankDescriptor};
pub use extract::parse_statement;
pub use models::{
    BankId, Direction, ParseError, ParseEvent, SkipReason, StatementParse, TransactionRecord,
};
