/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! End-to-end scenarios covering the matcher's trickier semantics (leg
//! reversal, sign-aware matching, equal strike spacing, slice correctness),
//! driven entirely through the crate's public API (`strategy_matcher::prelude`).

use strategy_matcher::prelude::*;

fn w0() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 10, 16).unwrap()
}

fn w1() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 11, 20).unwrap()
}

fn call(strike: i64, expiration: NaiveDate, qty: i64) -> OptionPosition {
    OptionPosition::new(
        Symbol::option(
            "AAPL",
            "OCC",
            ExerciseStyle::American,
            OptionRight::Call,
            Decimal::from(strike),
            expiration,
        ),
        qty,
    )
}

fn put(strike: i64, expiration: NaiveDate, qty: i64) -> OptionPosition {
    OptionPosition::new(
        Symbol::option(
            "AAPL",
            "OCC",
            ExerciseStyle::American,
            OptionRight::Put,
            Decimal::from(strike),
            expiration,
        ),
        qty,
    )
}

/// S1 — Bear Call Spread matches with leg reversal: a `+5`/`+3` call
/// portfolio five strikes apart binds the *lower* strike to the author's
/// first leg, because that's the only assignment the second leg's
/// `strike >= leg[0].strike` predicate admits.
#[test]
fn s1_bear_call_spread_reverses_legs_relative_to_strike_order() {
    let positions = OptionPositionCollection::empty("AAPL")
        .add(call(100, w0(), 5))
        .add(call(95, w0(), 3));

    let matches = library::bear_call_spread().match_against(&positions);
    assert_eq!(matches.len(), 1);
    let found = &matches[0];
    assert_eq!(found.multiplier(), 3);
    assert_eq!(found.legs().len(), 2);
    assert_eq!(
        found.legs()[0].position().symbol().and_then(|s| s.strike()),
        Some(Decimal::from(95))
    );
    assert_eq!(
        found.legs()[1].position().symbol().and_then(|s| s.strike()),
        Some(Decimal::from(100))
    );
    assert!(found.legs().iter().all(|leg| leg.position().quantity() == 3));
}

/// S2 — Straddle: `+2` call and `-1` put at the same strike/expiration match
/// at multiplier 1, leaving a `+1` call behind.
#[test]
fn s2_straddle_matches_with_one_call_left_over() {
    let positions = OptionPositionCollection::empty("AAPL")
        .add(call(100, w0(), 2))
        .add(put(100, w0(), -1));

    let found = library::straddle().try_match(&positions).unwrap();
    assert_eq!(found.multiplier(), 1);

    let remaining = positions.accept(&found);
    assert_eq!(
        remaining
            .try_get(&Symbol::option(
                "AAPL",
                "OCC",
                ExerciseStyle::American,
                OptionRight::Call,
                Decimal::from(100),
                w0(),
            ))
            .map(OptionPosition::quantity),
        Some(1)
    );
    assert!(!remaining.has_position(&Symbol::option(
        "AAPL",
        "OCC",
        ExerciseStyle::American,
        OptionRight::Put,
        Decimal::from(100),
        w0(),
    )));
}

/// S3 — Call Butterfly requires equal strike spacing: 90/100/110 (spacing
/// 10/10) matches; 90/100/115 (spacing 10/15) does not, even though both are
/// strictly increasing.
#[test]
fn s3_call_butterfly_requires_equal_strike_spacing() {
    let evenly_spaced = OptionPositionCollection::empty("AAPL")
        .add(call(90, w0(), 1))
        .add(call(100, w0(), -2))
        .add(call(110, w0(), 1));
    assert!(library::call_butterfly().try_match(&evenly_spaced).is_some());

    let unevenly_spaced = OptionPositionCollection::empty("AAPL")
        .add(call(90, w0(), 1))
        .add(call(100, w0(), -2))
        .add(call(115, w0(), 1));
    assert!(library::call_butterfly().try_match(&unevenly_spaced).is_none());
}

/// S4 — Slice-by-strike correctness: strikes {90, 95, 100, 105} plus an
/// underlying position of +1000.
#[test]
fn s4_slice_by_strike_counts_and_underlying_quantity() {
    let positions = OptionPositionCollection::empty("AAPL")
        .add(call(90, w0(), 1))
        .add(call(95, w0(), 1))
        .add(call(100, w0(), 1))
        .add(call(105, w0(), 1))
        .add(OptionPosition::new(Symbol::equity("AAPL"), 1000));

    let with_underlying = positions.slice_strike(BinaryComparison::Lt, Decimal::from(100), true);
    assert_eq!(with_underlying.count(), 3);
    assert_eq!(with_underlying.underlying_quantity(), 1000);

    let without_underlying = positions.slice_strike(BinaryComparison::Lt, Decimal::from(100), false);
    assert_eq!(without_underlying.count(), 2);
    assert_eq!(without_underlying.underlying_quantity(), 0);
}

/// S5 — Sign-aware leg match: a `-2` leg definition rejects a `+5` holding
/// outright, and against `-7` yields multiplier 3 (a matched sub-position of
/// `-6`, leaving `-1` available to later legs).
#[test]
fn s5_sign_aware_leg_match() {
    let short_two = LegDefinition::new(OptionRight::Call, -2, vec![]);

    let long_five = call(100, w0(), 5);
    assert!(short_two.try_match(&[], &long_five).is_none());

    let short_seven = call(100, w0(), -7);
    let matched = short_two.try_match(&[], &short_seven).unwrap();
    assert_eq!(matched.multiplier(), 3);
    assert_eq!(matched.position().quantity(), -6);
}

/// S6 — Matcher accepts and advances: only the Bear Call Spread is in the
/// library; a third contract at a non-matching expiration is left untouched.
#[test]
fn s6_match_once_advances_and_leaves_non_matching_expiration() {
    let positions = OptionPositionCollection::empty("AAPL")
        .add(call(100, w0(), 3))
        .add(call(95, w0(), 3))
        .add(call(105, w1(), 1));

    let options = MatcherOptions::new(vec![library::bear_call_spread()]);
    let found = match_once(&positions, &options);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].multiplier(), 3);
    assert_eq!(found[0].strategy_name(), "Bear Call Spread");

    let strategy = to_strategy(&positions, &found[0]);
    assert_eq!(strategy.name, "Bear Call Spread");
    assert_eq!(strategy.underlying, "AAPL");
    assert_eq!(strategy.option_legs.len(), 2);
    assert!(strategy.option_legs.iter().all(|leg| leg.quantity == 3));
}
