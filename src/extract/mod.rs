//! Statement Extraction Engine
//!
//! The public entry point: recognize the bank from identity markers,
//! reconstruct logical transaction lines, extract each line through the
//! bank's descriptor, and return records plus structured diagnostics.

use crate::banks;
use crate::models::{ParseError, ParseEvent, StatementParse};
use crate::reconstruct;

/// Parse one statement text into transactions plus diagnostics
///
/// Recoverable problems never fail the batch: an unrecognized format or a
/// line that will not parse becomes a [`ParseEvent`] inside an `Ok` result.
/// The only hard error is input that is not text at all.
pub fn parse_statement(text: &str) -> Result<StatementParse, ParseError> {
    if text.contains('\0') {
        return Err(ParseError::MalformedInput);
    }

    let descriptor = match banks::recognize(text) {
        Some(descriptor) => descriptor,
        None => {
            log::warn!("no bank descriptor matched statement text");
            return Ok(StatementParse::unrecognized());
        }
    };
    log::info!("matched bank: {}", descriptor.name);

    let mut transactions = Vec::new();
    let mut events = Vec::new();

    for line in reconstruct::logical_lines(text) {
        match descriptor.extract(&line) {
            Ok(extract) => {
                if extract.needs_review {
                    log::debug!(
                        "classification signals disagree at line {}: {}",
                        line.line_no,
                        line.text
                    );
                    events.push(ParseEvent::ReviewFlagged {
                        line_no: line.line_no,
                        direction: extract.record.direction,
                        line: line.text.clone(),
                    });
                }
                transactions.push(extract.record);
            }
            Err(reason) => {
                log::debug!(
                    "skipped line {} ({:?}): {}",
                    line.line_no,
                    reason,
                    line.text
                );
                events.push(ParseEvent::LineSkipped {
                    line_no: line.line_no,
                    reason,
                    line: line.text,
                });
            }
        }
    }

    let skipped = events
        .iter()
        .filter(|e| matches!(e, ParseEvent::LineSkipped { .. }))
        .count();
    log::info!(
        "extracted {} transactions from {} ({} lines skipped)",
        transactions.len(),
        descriptor.name,
        skipped
    );

    Ok(StatementParse {
        bank_matched: Some(descriptor.id),
        transactions,
        events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BankId, Direction, SkipReason};
    use chrono::NaiveDate;

    const HDFC_STATEMENT: &str = "HDFC BANK LTD\n\
        Date Narration Chq./Ref.No. Value Dt Withdrawal Amt. Deposit Amt. Closing Balance\n\
        01/06/24 UPI-RAJ STORE-PAYTMQR281005050101IQKFNTI 0000415389418321 01/06/24 10.00 22.22\n\
        05/06/24 SAS2PY SOFTWARE P L 0000000000511950 05/06/24 38,000.00 38,022.22";

    #[test]
    fn test_hdfc_statement_end_to_end() {
        let parse = parse_statement(HDFC_STATEMENT).unwrap();

        assert_eq!(parse.bank_matched, Some(BankId::Hdfc));
        assert_eq!(parse.transactions.len(), 2);
        assert_eq!(parse.skipped_lines(), 0);

        let upi = &parse.transactions[0];
        assert_eq!(upi.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(upi.direction, Direction::Expense);
        assert_eq!(upi.amount, 10.00);
        assert_eq!(upi.balance, Some(22.22));

        let company = &parse.transactions[1];
        assert_eq!(company.date, NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
        assert_eq!(company.direction, Direction::Income);
        assert_eq!(company.amount, 38000.00);
        assert_eq!(company.balance, Some(38022.22));

        for record in &parse.transactions {
            assert!(record.amount > 0.0);
            assert_eq!(record.bank, BankId::Hdfc);
        }
    }

    #[test]
    fn test_parsing_is_repeatable() {
        let first = parse_statement(HDFC_STATEMENT).unwrap();
        let second = parse_statement(HDFC_STATEMENT).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_axis_statement_end_to_end() {
        let text = "AXIS BANK LTD\n\
            Tran Date Chq No Particulars Debit Credit Balance Init.Br\n\
            01/06/2024 Grocery Store XYZ123 500.00 1000.00 9500.00";
        let parse = parse_statement(text).unwrap();

        assert_eq!(parse.bank_matched, Some(BankId::Axis));
        assert_eq!(parse.transactions.len(), 1);

        let record = &parse.transactions[0];
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(record.description, "Grocery Store");
        assert_eq!(record.amount, 500.00);
        assert_eq!(record.direction, Direction::Expense);
        assert_eq!(record.balance, Some(9500.00));

        let value = serde_json::to_value(&parse).unwrap();
        assert_eq!(value["bankMatched"], serde_json::json!("AXIS"));
        assert_eq!(value["transactions"][0]["date"], serde_json::json!("2024-06-01"));
        assert_eq!(value["transactions"][0]["amount"], serde_json::json!("500.00"));
        assert_eq!(
            value["transactions"][0]["direction"],
            serde_json::json!("expense")
        );
    }

    #[test]
    fn test_wrapped_lines_join_before_matching() {
        let text = "HDFC BANK LTD\n\
            01/06/24 UPI-SOMEVENDOR-COLLECT\n\
            1234567890123456 01/06/24\n\
            150.00 9,850.00";
        let parse = parse_statement(text).unwrap();

        assert_eq!(parse.transactions.len(), 1);
        let record = &parse.transactions[0];
        assert_eq!(
            record.source_line,
            "01/06/24 UPI-SOMEVENDOR-COLLECT 1234567890123456 01/06/24 150.00 9,850.00"
        );
        assert_eq!(record.direction, Direction::Expense);
        assert_eq!(record.amount, 150.00);
    }

    #[test]
    fn test_unrecognized_statement() {
        let parse = parse_statement("Some corner shop receipt\n01/06/2024 tea 5.00").unwrap();
        assert_eq!(parse.bank_matched, None);
        assert!(parse.transactions.is_empty());
        assert_eq!(parse.events, vec![ParseEvent::UnrecognizedFormat]);

        let empty = parse_statement("").unwrap();
        assert_eq!(empty.bank_matched, None);
        assert!(empty.transactions.is_empty());
    }

    #[test]
    fn test_matched_bank_with_zero_transactions() {
        // Marker and header lines only; identifying the bank while
        // extracting nothing is a valid outcome, not a failure.
        let text = "HDFC BANK LTD\n\
            Date Narration Chq./Ref.No. Value Dt Withdrawal Amt. Deposit Amt. Closing Balance\n\
            Page 1 of 2";
        let parse = parse_statement(text).unwrap();

        assert_eq!(parse.bank_matched, Some(BankId::Hdfc));
        assert!(parse.transactions.is_empty());
        assert!(parse.events.is_empty());
    }

    #[test]
    fn test_binary_input_is_rejected() {
        let err = parse_statement("HDFC BANK LTD\0\x01\x02").unwrap_err();
        assert_eq!(err, ParseError::MalformedInput);
    }

    #[test]
    fn test_corrupted_line_skips_not_aborts() {
        let text = "ICICI BANK LIMITED\n\
            Date Description Cheque No. Withdrawal Deposit Balance\n\
            01/06/2024 POS STORE ONE 100.00 0.00 9,900.00\n\
            02/06/2024 POS STORE TWO 200.00 0.00 9,700.00\n\
            03/06/2024 NEFT IN ALPHA 0.00 1,000.00 10,700.00\n\
            04/06/2024 POS STORE THREE 5x0.00 0.00 10,400.00\n\
            05/06/2024 NEFT IN BETA 0.00 2,000.00 12,400.00\n\
            06/06/2024 POS STORE FOUR 400.00 0.00 12,000.00";
        let parse = parse_statement(text).unwrap();

        assert_eq!(parse.bank_matched, Some(BankId::Icici));
        assert_eq!(parse.transactions.len(), 5);
        assert_eq!(parse.skipped_lines(), 1);

        let skip = parse
            .events
            .iter()
            .find_map(|e| match e {
                ParseEvent::LineSkipped { line_no, reason, .. } => Some((*line_no, *reason)),
                _ => None,
            })
            .unwrap();
        assert_eq!(skip, (6, SkipReason::NoRuleMatched));

        // Document order survives the skip.
        let dates: Vec<u32> = parse
            .transactions
            .iter()
            .map(|r| r.date.format("%d").to_string().parse().unwrap())
            .collect();
        assert_eq!(dates, vec![1, 2, 3, 5, 6]);
    }

    #[test]
    fn test_review_flags_are_streamed() {
        let text = "STATE BANK OF INDIA\n\
            Date Details Ref No./Cheque No Credit Balance\n\
            08/06/2024 SALARY PAYMENT JUNE REF33 50,000.00 104,500.00";
        let parse = parse_statement(text).unwrap();

        assert_eq!(parse.transactions.len(), 1);
        assert_eq!(parse.review_flags(), 1);
        match &parse.events[0] {
            ParseEvent::ReviewFlagged { direction, line_no, .. } => {
                assert_eq!(*direction, Direction::Expense);
                assert_eq!(*line_no, 3);
            }
            other => panic!("expected review flag, got {:?}", other),
        }
    }
}
