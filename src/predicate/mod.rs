/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # Leg Predicate Module
//!
//! A [`LegPredicate`] is one constraint on a leg candidate: a comparison
//! between the candidate's own attribute (right, strike, or expiration) and
//! either a literal or an already-matched leg's attribute.
//!
//! The reference implementation this crate follows introspects a compiled
//! expression tree to decide whether a predicate can be pushed into an
//! index. Rust has no equivalent reflection over closures, so — per the
//! redesign note in `SPEC_FULL.md` §9 — predicates here are small algebraic
//! values from the start: `ReferenceValue` is a closed enum, and deciding
//! whether a predicate is index-pushable becomes a plain match on
//! `reference.attribute()` rather than a runtime expression walk.

use crate::collection::OptionPositionCollection;
use crate::error::PredicateError;
use crate::model::comparison::BinaryComparison;
use crate::model::position::OptionPosition;
use crate::model::types::OptionRight;
use crate::strategy::definition::StrategyLegMatch;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which attribute of a candidate (or an earlier leg) a predicate concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Put or call.
    Right,
    /// Strike price.
    Strike,
    /// Expiration date.
    Expiration,
}

/// The right-hand side of a predicate: either a fixed comparand, or a
/// reference to an attribute of an already-matched leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReferenceValue {
    /// A fixed right to compare against.
    Right(OptionRight),
    /// A fixed strike to compare against.
    Strike(Decimal),
    /// A fixed expiration to compare against.
    Expiration(NaiveDate),
    /// The named attribute of `legs[leg_index]`, resolved once that leg has
    /// been matched.
    LegAttribute {
        /// Index into the strategy's already-matched legs.
        leg_index: usize,
        /// Which attribute of that leg's matched position to read.
        target: Attribute,
    },
}

impl ReferenceValue {
    /// The attribute kind this reference ultimately resolves to.
    pub fn attribute(&self) -> Attribute {
        match self {
            ReferenceValue::Right(_) => Attribute::Right,
            ReferenceValue::Strike(_) => Attribute::Strike,
            ReferenceValue::Expiration(_) => Attribute::Expiration,
            ReferenceValue::LegAttribute { target, .. } => *target,
        }
    }

    /// `true` for `Right`/`Strike`/`Expiration`, `false` for `LegAttribute`.
    ///
    /// A literal reference is index-pushable at all times; a leg-attribute
    /// reference only becomes pushable once that leg has actually been
    /// matched — the matcher itself guarantees this by only invoking
    /// `filter`/`matches` for leg `i` once `legs[0..i]` are already bound.
    pub fn is_literal(&self) -> bool {
        !matches!(self, ReferenceValue::LegAttribute { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ResolvedValue {
    Right(OptionRight),
    Strike(Decimal),
    Expiration(NaiveDate),
}

/// A single leg constraint: `candidate.attribute() <comparison> reference`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegPredicate {
    comparison: BinaryComparison,
    reference: ReferenceValue,
}

impl LegPredicate {
    /// Builds a predicate for the leg at `defining_leg` (its position in the
    /// strategy's leg list). Fails if `reference` points at `defining_leg`
    /// itself or a later leg — forward and self references can never be
    /// resolved during the depth-first search that matches legs in order.
    pub fn new(
        defining_leg: usize,
        comparison: BinaryComparison,
        reference: ReferenceValue,
    ) -> Result<Self, PredicateError> {
        if let ReferenceValue::LegAttribute { leg_index, .. } = &reference {
            if *leg_index >= defining_leg {
                return Err(PredicateError::ForwardLegReference {
                    defining_leg,
                    referenced_leg: *leg_index,
                });
            }
        }
        Ok(LegPredicate {
            comparison,
            reference,
        })
    }

    /// The candidate attribute this predicate constrains.
    pub fn attribute(&self) -> Attribute {
        self.reference.attribute()
    }

    /// Always `true` in this crate's algebraic predicate model: every
    /// `LegPredicate` is constructed already decomposed as
    /// `candidate.attribute() <cmp> reference`, so none of them ever
    /// degrade to a full scan. The method is kept as the seam a less
    /// restrictive predicate DSL would hook into.
    pub fn is_indexed(&self) -> bool {
        true
    }

    fn resolve(&self, legs_so_far: &[StrategyLegMatch]) -> Option<ResolvedValue> {
        match &self.reference {
            ReferenceValue::Right(r) => Some(ResolvedValue::Right(*r)),
            ReferenceValue::Strike(s) => Some(ResolvedValue::Strike(*s)),
            ReferenceValue::Expiration(e) => Some(ResolvedValue::Expiration(*e)),
            ReferenceValue::LegAttribute { leg_index, target } => {
                let position = legs_so_far.get(*leg_index)?.position();
                resolve_attribute(position, *target)
            }
        }
    }

    /// Evaluates this predicate against `candidate`, given the legs already
    /// matched. Returns `false` (never an error) if resolving the candidate
    /// or reference side requires an attribute the position doesn't carry —
    /// e.g. a strike predicate against the underlying equity.
    pub fn matches(&self, legs_so_far: &[StrategyLegMatch], candidate: &OptionPosition) -> bool {
        let Some(reference) = self.resolve(legs_so_far) else {
            return false;
        };
        let Some(candidate_value) = resolve_attribute(candidate, self.attribute()) else {
            return false;
        };
        match (candidate_value, reference) {
            (ResolvedValue::Right(a), ResolvedValue::Right(b)) => self.comparison.evaluate(&a, &b),
            (ResolvedValue::Strike(a), ResolvedValue::Strike(b)) => {
                self.comparison.evaluate(&a, &b)
            }
            (ResolvedValue::Expiration(a), ResolvedValue::Expiration(b)) => {
                self.comparison.evaluate(&a, &b)
            }
            _ => false,
        }
    }

    /// Pushes this predicate into the collection's index for its attribute,
    /// rather than leaving the matcher to scan and call `matches` per
    /// candidate. `legs_so_far` is needed to resolve a `LegAttribute`
    /// reference; `positions` is sliced down to the candidates that satisfy
    /// this predicate alone.
    pub fn filter(
        &self,
        legs_so_far: &[StrategyLegMatch],
        positions: &OptionPositionCollection,
        include_underlying: bool,
    ) -> OptionPositionCollection {
        match self.resolve(legs_so_far) {
            Some(ResolvedValue::Right(right)) => positions.slice_right(right, include_underlying),
            Some(ResolvedValue::Strike(strike)) => {
                positions.slice_strike(self.comparison, strike, include_underlying)
            }
            Some(ResolvedValue::Expiration(expiration)) => {
                positions.slice_expiration(self.comparison, expiration, include_underlying)
            }
            None => OptionPositionCollection::empty(positions.underlying().to_string()),
        }
    }
}

fn resolve_attribute(position: &OptionPosition, attribute: Attribute) -> Option<ResolvedValue> {
    let symbol = position.symbol()?;
    match attribute {
        Attribute::Right => symbol.right().map(ResolvedValue::Right),
        Attribute::Strike => symbol.strike().map(ResolvedValue::Strike),
        Attribute::Expiration => symbol.expiration().map(ResolvedValue::Expiration),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::symbol::Symbol;
    use crate::model::types::{ExerciseStyle, OptionRight};
    use rust_decimal_macros::dec;

    fn w0() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 10, 16).unwrap()
    }

    fn call(strike: i64, qty: i64) -> OptionPosition {
        OptionPosition::new(
            Symbol::option(
                "AAPL",
                "OCC",
                ExerciseStyle::American,
                OptionRight::Call,
                Decimal::from(strike),
                w0(),
            ),
            qty,
        )
    }

    #[test]
    fn forward_leg_reference_is_rejected() {
        let err = LegPredicate::new(
            0,
            BinaryComparison::Eq,
            ReferenceValue::LegAttribute {
                leg_index: 0,
                target: Attribute::Strike,
            },
        )
        .unwrap_err();
        assert!(matches!(err, PredicateError::ForwardLegReference { .. }));
    }

    #[test]
    fn unresolvable_attribute_is_absorbed_as_non_match() {
        let predicate =
            LegPredicate::new(0, BinaryComparison::Eq, ReferenceValue::Strike(dec!(100))).unwrap();
        let equity = OptionPosition::new(Symbol::equity("AAPL"), 100);
        assert!(!predicate.matches(&[], &equity));
    }

    #[test]
    fn literal_strike_predicate_matches_equal_strike() {
        let predicate =
            LegPredicate::new(0, BinaryComparison::Eq, ReferenceValue::Strike(dec!(100))).unwrap();
        assert!(predicate.matches(&[], &call(100, 1)));
        assert!(!predicate.matches(&[], &call(105, 1)));
    }
}
