//! Edge case tests for the settlement library.
//!
//! Exercises the validator, the record grammar, and the rounding behavior
//! through the public library interface.

use rust_decimal::Decimal;
use settlement_engine::{EngineError, SettlementEngine, ValidationError};
use std::str::FromStr;

fn settle(input: &str) -> String {
    let mut engine = SettlementEngine::new();
    engine.process_str(input).unwrap();

    let mut output = Vec::new();
    engine.write_output(&mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn settle_err(input: &str) -> EngineError {
    let mut engine = SettlementEngine::new();
    engine.process_str(input).unwrap_err()
}

// ==================== SETTLEMENT ARITHMETIC ====================

#[test]
fn test_single_participant_settles_to_zero() {
    assert_eq!(settle("1\n2\n12.50\n7.50\n0"), "$0.00\n\n");
}

#[test]
fn test_equal_payers_all_settle_to_zero() {
    assert_eq!(settle("3\n1\n5.00\n1\n5.00\n1\n5.00\n0"), "$0.00\n$0.00\n$0.00\n\n");
}

#[test]
fn test_participant_with_no_receipts_owes_full_share() {
    assert_eq!(settle("2\n0\n1\n10.00\n0"), "$5.00\n($5.00)\n\n");
}

#[test]
fn test_integer_amounts_render_with_two_places() {
    assert_eq!(settle("2\n1\n10\n1\n0\n0"), "($5.00)\n$5.00\n\n");
}

#[test]
fn test_large_amounts() {
    let output = settle("2\n1\n1000000.00\n1\n0.00\n0");
    assert_eq!(output, "($500000.00)\n$500000.00\n\n");
}

// ==================== ROUNDING ====================

#[test]
fn test_half_cent_rounds_to_even_zero() {
    // Share is 0.005; both adjustments land on the rounding boundary and
    // round to an even 0.00, with no sign or parens on either line
    assert_eq!(settle("2\n1\n0.00\n1\n0.01\n0"), "$0.00\n$0.00\n\n");
}

#[test]
fn test_boundary_rounds_up_to_even() {
    // Share is 0.015: adjustments are 0.015 and -0.015, both round to 0.02
    assert_eq!(settle("2\n1\n0.00\n1\n0.03\n0"), "$0.02\n($0.02)\n\n");
}

#[test]
fn test_boundary_rounds_down_to_even() {
    // Share is 0.025: adjustments are 0.025 and -0.025, both round to 0.02
    assert_eq!(settle("2\n1\n0.00\n1\n0.05\n0"), "$0.02\n($0.02)\n\n");
}

#[test]
fn test_rounded_adjustments_sum_within_tolerance() {
    let inputs = [
        "3\n2\n10.00\n20.00\n4\n15.00\n15.01\n3.00\n3.01\n3\n5.00\n9.00\n4.00\n0",
        "3\n1\n0.01\n1\n0.01\n1\n0.02\n0",
        "7\n1\n13.37\n0\n0\n1\n99.99\n2\n0.01\n0.02\n0\n1\n50.00\n0",
    ];

    for input in inputs {
        let mut engine = SettlementEngine::new();
        engine.process_str(input).unwrap();

        for trip in engine.trips() {
            let sum: Decimal = trip.adjustments().iter().map(|a| a.rounded()).sum();
            let tolerance =
                Decimal::from_str("0.01").unwrap() * Decimal::from(trip.participant_count());
            assert!(
                sum.abs() <= tolerance,
                "rounded adjustments sum {} exceeds tolerance {}",
                sum,
                tolerance
            );
        }
    }
}

// ==================== INPUT STRUCTURE ====================

#[test]
fn test_terminator_only_input() {
    assert_eq!(settle("0"), "");
}

#[test]
fn test_content_after_terminator_ignored() {
    assert_eq!(settle("1\n1\n10.00\n0\nleftover"), "$0.00\n\n");
}

#[test]
fn test_no_trailing_newline_on_input() {
    assert_eq!(settle("2\n1\n10.00\n1\n0.00\n0"), "($5.00)\n$5.00\n\n");
}

#[test]
fn test_three_trips_three_blocks() {
    let output = settle("1\n1\n1.00\n1\n1\n2.00\n1\n1\n3.00\n0");
    assert_eq!(output, "$0.00\n\n$0.00\n\n$0.00\n\n");
}

// ==================== VALIDATION FAILURES ====================

#[test]
fn test_blank_line_rejected() {
    let err = settle_err("2\n\n1\n10.00\n0");
    assert!(matches!(
        err,
        EngineError::Invalid(ValidationError::BlankLine { line: 2 })
    ));
}

#[test]
fn test_negative_integer_rejected() {
    let err = settle_err("2\n-1\n10.00\n0");
    assert!(matches!(
        err,
        EngineError::Invalid(ValidationError::NegativeInteger { line: 2 })
    ));
}

#[test]
fn test_negative_amount_rejected() {
    let err = settle_err("2\n1\n-10.00\n1\n0.00\n0");
    assert!(matches!(
        err,
        EngineError::Invalid(ValidationError::NegativeNumber { line: 3 })
    ));
}

#[test]
fn test_non_numeric_rejected() {
    let err = settle_err("2\n1\n10.00A\n1\n0.00\n0");
    assert!(matches!(
        err,
        EngineError::Invalid(ValidationError::NonNumeric { line: 3 })
    ));
}

#[test]
fn test_missing_terminator_rejected() {
    let err = settle_err("2\n1\n10.00\n1\n0.00");
    assert!(matches!(
        err,
        EngineError::Invalid(ValidationError::MissingTerminator)
    ));
}

#[test]
fn test_empty_input_rejected() {
    let err = settle_err("");
    assert!(matches!(
        err,
        EngineError::Invalid(ValidationError::MissingTerminator)
    ));
}

// ==================== POST-VALIDATION GRAMMAR FAILURES ====================

#[test]
fn test_truncated_participant_list_is_fatal() {
    let err = settle_err("2\n1\n5.00\n0");
    assert!(matches!(err, EngineError::Malformed { .. }));
}

#[test]
fn test_padded_zero_count_is_fatal() {
    // "00" passes the numeric scan but is a zero participant count
    let err = settle_err("00\n0");
    assert!(matches!(err, EngineError::Malformed { line: 1, .. }));
}

#[test]
fn test_failed_load_keeps_previous_trips() {
    // A failed load must not replace trips with partial data from the bad input
    let mut engine = SettlementEngine::new();
    engine.process_str("1\n1\n10.00\n0").unwrap();
    assert_eq!(engine.trips().len(), 1);

    assert!(engine.process_str("abc\n0").is_err());
    assert_eq!(engine.trips().len(), 1);
}

// ==================== IDEMPOTENCE ====================

#[test]
fn test_repeated_writes_are_byte_identical() {
    let mut engine = SettlementEngine::new();
    engine
        .process_str("3\n2\n10.00\n20.00\n4\n15.00\n15.01\n3.00\n3.01\n3\n5.00\n9.00\n4.00\n0")
        .unwrap();

    let mut first = Vec::new();
    engine.write_output(&mut first).unwrap();
    let mut second = Vec::new();
    engine.write_output(&mut second).unwrap();

    assert_eq!(first, second);
}
