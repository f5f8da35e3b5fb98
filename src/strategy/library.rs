/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # Strategy Library Module
//!
//! Built-in [`StrategyDefinition`]s for the ten named strategies the matcher
//! must recognize at minimum: Bear Call Spread, Bear Put Spread, Bull Call
//! Spread, Bull Put Spread, Straddle, Strangle, Call Butterfly, Put
//! Butterfly, Call Calendar Spread, Put Calendar Spread.
//!
//! The sign of each leg's unit quantity is fixed by the worked examples:
//! Bear Call Spread and Straddle have concrete expected matches to follow,
//! so those two are built exactly to that shape; the rest mirror the same
//! long/short convention across the equivalent put/call or anchor/comparison
//! choice, recorded in `DESIGN.md`.

use crate::model::comparison::BinaryComparison;
use crate::model::types::OptionRight;
use crate::predicate::{Attribute, LegPredicate, ReferenceValue};
use crate::strategy::definition::{LegDefinition, StrategyDefinition, StrategyLegMatch};
use std::sync::Arc;

/// Same expiration as leg `anchor`.
fn same_expiration(defining_leg: usize, anchor: usize) -> LegPredicate {
    LegPredicate::new(
        defining_leg,
        BinaryComparison::Eq,
        ReferenceValue::LegAttribute {
            leg_index: anchor,
            target: Attribute::Expiration,
        },
    )
    .expect("anchor leg always precedes the leg being defined in this library")
}

/// Expiration strictly after leg `anchor`'s.
fn later_expiration(defining_leg: usize, anchor: usize) -> LegPredicate {
    LegPredicate::new(
        defining_leg,
        BinaryComparison::Gt,
        ReferenceValue::LegAttribute {
            leg_index: anchor,
            target: Attribute::Expiration,
        },
    )
    .expect("anchor leg always precedes the leg being defined in this library")
}

/// Strike compared against leg `anchor`'s strike.
fn strike_vs_anchor(defining_leg: usize, comparison: BinaryComparison, anchor: usize) -> LegPredicate {
    LegPredicate::new(
        defining_leg,
        comparison,
        ReferenceValue::LegAttribute {
            leg_index: anchor,
            target: Attribute::Strike,
        },
    )
    .expect("anchor leg always precedes the leg being defined in this library")
}

/// Bear Call Spread: `Call(+1)` anchor, `Call(+1, strike >= anchor.strike,
/// same expiration)`. This is the exact shape this crate's worked example
/// (a portfolio of `+5`/`+3` calls 5 strikes apart) is checked against: the
/// depth-first search binds the anchor leg to the lower-strike holding
/// because that is the only assignment the second leg's predicate admits.
pub fn bear_call_spread() -> StrategyDefinition {
    let anchor = LegDefinition::new(OptionRight::Call, 1, vec![]);
    let upper = LegDefinition::new(
        OptionRight::Call,
        1,
        vec![strike_vs_anchor(1, BinaryComparison::Ge, 0), same_expiration(1, 0)],
    );
    StrategyDefinition::new("Bear Call Spread", 0, vec![anchor, upper])
}

/// Bull Call Spread: the short-side mirror of [`bear_call_spread`] — same
/// strike/expiration shape, both legs held short instead of long.
pub fn bull_call_spread() -> StrategyDefinition {
    let anchor = LegDefinition::new(OptionRight::Call, -1, vec![]);
    let upper = LegDefinition::new(
        OptionRight::Call,
        -1,
        vec![strike_vs_anchor(1, BinaryComparison::Ge, 0), same_expiration(1, 0)],
    );
    StrategyDefinition::new("Bull Call Spread", 0, vec![anchor, upper])
}

/// Bear Put Spread: puts, anchored at the higher strike, both legs short.
pub fn bear_put_spread() -> StrategyDefinition {
    let anchor = LegDefinition::new(OptionRight::Put, -1, vec![]);
    let lower = LegDefinition::new(
        OptionRight::Put,
        -1,
        vec![strike_vs_anchor(1, BinaryComparison::Le, 0), same_expiration(1, 0)],
    );
    StrategyDefinition::new("Bear Put Spread", 0, vec![anchor, lower])
}

/// Bull Put Spread: puts, anchored at the higher strike, both legs long.
pub fn bull_put_spread() -> StrategyDefinition {
    let anchor = LegDefinition::new(OptionRight::Put, 1, vec![]);
    let lower = LegDefinition::new(
        OptionRight::Put,
        1,
        vec![strike_vs_anchor(1, BinaryComparison::Le, 0), same_expiration(1, 0)],
    );
    StrategyDefinition::new("Bull Put Spread", 0, vec![anchor, lower])
}

/// Straddle: `Call(+1)` anchor, `Put(-1, strike == anchor.strike, same
/// expiration)`. This is the exact shape this crate's worked example (a
/// `+2` call and a `-1` put at the same strike and expiration) is checked
/// against, matching at multiplier 1 with `+1` call left over.
pub fn straddle() -> StrategyDefinition {
    let call_leg = LegDefinition::new(OptionRight::Call, 1, vec![]);
    let put_leg = LegDefinition::new(
        OptionRight::Put,
        -1,
        vec![strike_vs_anchor(1, BinaryComparison::Eq, 0), same_expiration(1, 0)],
    );
    StrategyDefinition::new("Straddle", 0, vec![call_leg, put_leg])
}

/// Strangle: the same long-call/short-put sign convention as [`straddle`],
/// with the call strictly above the put's strike instead of equal to it.
pub fn strangle() -> StrategyDefinition {
    let put_leg = LegDefinition::new(OptionRight::Put, -1, vec![]);
    let call_leg = LegDefinition::new(
        OptionRight::Call,
        1,
        vec![strike_vs_anchor(1, BinaryComparison::Gt, 0), same_expiration(1, 0)],
    );
    StrategyDefinition::new("Strangle", 0, vec![put_leg, call_leg])
}

/// Whether `legs` (low, middle, high, in that order) sit at equally spaced
/// strikes: `middle - low == high - middle`. The predicate DSL can compare
/// a candidate's attribute only against a literal or a single earlier leg's
/// attribute, never against a difference between two earlier legs, so equal
/// spacing cannot be expressed as a per-leg predicate and is instead
/// enforced here as a whole-assignment validator.
fn equally_spaced_strikes(legs: &[StrategyLegMatch]) -> bool {
    let strike = |leg: &StrategyLegMatch| leg.position().symbol().and_then(|s| s.strike());
    match (strike(&legs[0]), strike(&legs[1]), strike(&legs[2])) {
        (Some(low), Some(middle), Some(high)) => middle - low == high - middle,
        _ => false,
    }
}

/// Builds a three-leg butterfly: long one contract at the lower strike,
/// short two at a strictly higher middle strike, long one at a strictly
/// higher strike still, equally spaced from the middle as the middle is
/// from the low strike — all same expiration.
fn butterfly(name: &str, right: OptionRight) -> StrategyDefinition {
    let low = LegDefinition::new(right, 1, vec![]);
    let middle = LegDefinition::new(
        right,
        -2,
        vec![strike_vs_anchor(1, BinaryComparison::Gt, 0), same_expiration(1, 0)],
    );
    let high = LegDefinition::new(
        right,
        1,
        vec![strike_vs_anchor(2, BinaryComparison::Gt, 1), same_expiration(2, 0)],
    );
    StrategyDefinition::new(name, 0, vec![low, middle, high])
        .with_validator(Arc::new(equally_spaced_strikes))
}

/// Long 1 low-strike call, short 2 middle-strike calls, long 1 high-strike
/// call, same expiration.
pub fn call_butterfly() -> StrategyDefinition {
    butterfly("Call Butterfly", OptionRight::Call)
}

/// Long 1 low-strike put, short 2 middle-strike puts, long 1 high-strike
/// put, same expiration.
pub fn put_butterfly() -> StrategyDefinition {
    butterfly("Put Butterfly", OptionRight::Put)
}

/// Builds a two-leg, same-strike, differing-expiration combination (a
/// calendar spread): sell the near-term contract, buy the far-term one.
fn calendar_spread(name: &str, right: OptionRight) -> StrategyDefinition {
    let near = LegDefinition::new(right, -1, vec![]);
    let far = LegDefinition::new(
        right,
        1,
        vec![strike_vs_anchor(1, BinaryComparison::Eq, 0), later_expiration(1, 0)],
    );
    StrategyDefinition::new(name, 0, vec![near, far])
}

/// Sell a near-term call, buy a far-term call at the same strike.
pub fn call_calendar_spread() -> StrategyDefinition {
    calendar_spread("Call Calendar Spread", OptionRight::Call)
}

/// Sell a near-term put, buy a far-term put at the same strike.
pub fn put_calendar_spread() -> StrategyDefinition {
    calendar_spread("Put Calendar Spread", OptionRight::Put)
}

/// The full built-in library: every strategy definition listed above, in no
/// particular priority order. Callers that care about match precedence
/// supply their own ordered subset to [`crate::matcher::MatcherOptions`]
/// instead of relying on this list's order.
pub fn all() -> Vec<StrategyDefinition> {
    vec![
        bear_call_spread(),
        bear_put_spread(),
        bull_call_spread(),
        bull_put_spread(),
        straddle(),
        strangle(),
        call_butterfly(),
        put_butterfly(),
        call_calendar_spread(),
        put_calendar_spread(),
    ]
}
