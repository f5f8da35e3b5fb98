/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! Construction-time hard errors and absorbed runtime signals, exercised
//! through the public API.

use strategy_matcher::prelude::*;

#[test]
fn mismatched_symbols_on_position_arithmetic_is_a_hard_error() {
    let expiration = NaiveDate::from_ymd_opt(2020, 10, 16).unwrap();
    let a = OptionPosition::new(
        Symbol::option(
            "AAPL",
            "OCC",
            ExerciseStyle::American,
            OptionRight::Call,
            Decimal::from(100),
            expiration,
        ),
        1,
    );
    let b = OptionPosition::new(
        Symbol::option(
            "AAPL",
            "OCC",
            ExerciseStyle::American,
            OptionRight::Call,
            Decimal::from(105),
            expiration,
        ),
        1,
    );
    let err = a.checked_add(&b).unwrap_err();
    assert!(matches!(err, PositionError::MismatchedSymbols { .. }));
}

#[test]
fn forward_leg_reference_is_rejected_at_construction() {
    let err = LegPredicate::new(
        0,
        BinaryComparison::Eq,
        ReferenceValue::LegAttribute {
            leg_index: 1,
            target: Attribute::Strike,
        },
    )
    .unwrap_err();
    assert!(matches!(err, PredicateError::ForwardLegReference { defining_leg: 0, referenced_leg: 1 }));
}

#[test]
fn self_leg_reference_is_rejected_at_construction() {
    // A leg's own predicate cannot reference itself — only strictly earlier legs.
    let err = LegPredicate::new(
        2,
        BinaryComparison::Gt,
        ReferenceValue::LegAttribute {
            leg_index: 2,
            target: Attribute::Strike,
        },
    )
    .unwrap_err();
    assert!(matches!(err, PredicateError::ForwardLegReference { .. }));
}

/// An unresolvable attribute is never an error: resolving strike or
/// expiration against the underlying equity silently yields a non-match.
#[test]
fn unresolvable_attribute_on_the_underlying_is_absorbed_as_a_non_match() {
    let predicate = LegPredicate::new(0, BinaryComparison::Eq, ReferenceValue::Strike(dec!(100))).unwrap();
    let equity = OptionPosition::new(Symbol::equity("AAPL"), 500);
    assert!(!predicate.matches(&[], &equity));
}

/// `BudgetExceeded` is a soft signal, never an error: hitting `max_total_matches`
/// returns the accumulated partial result rather than propagating a failure.
#[test]
fn total_match_cap_returns_partial_result_not_an_error() {
    let expiration = NaiveDate::from_ymd_opt(2020, 10, 16).unwrap();
    let mut positions = OptionPositionCollection::empty("AAPL");
    for (low, high) in [(80, 85), (90, 95), (100, 105)] {
        positions = positions
            .add(OptionPosition::new(
                Symbol::option(
                    "AAPL", "OCC", ExerciseStyle::American, OptionRight::Call,
                    Decimal::from(low), expiration,
                ),
                1,
            ))
            .add(OptionPosition::new(
                Symbol::option(
                    "AAPL", "OCC", ExerciseStyle::American, OptionRight::Call,
                    Decimal::from(high), expiration,
                ),
                1,
            ));
    }
    let mut options = MatcherOptions::new(vec![library::bear_call_spread()]);
    options.max_total_matches = Some(1);
    let found = match_once(&positions, &options);
    assert_eq!(found.len(), 1);
}
