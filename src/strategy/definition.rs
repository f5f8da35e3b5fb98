/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # Strategy Definition Module
//!
//! A [`StrategyDefinition`] is the template a strategy in `strategy::library`
//! compiles down to: an ordered list of [`LegDefinition`]s, each a right, a
//! unit quantity, and zero or more predicates. `match_against` walks the
//! legs in order with a depth-first search, so a leg's predicates may only
//! reference legs already bound — enforced at construction by
//! [`crate::predicate::LegPredicate::new`].

use crate::collection::OptionPositionCollection;
use crate::matcher::CollectionEnumerator;
use crate::model::position::OptionPosition;
use crate::model::types::OptionRight;
use crate::predicate::LegPredicate;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// One leg of a [`StrategyDefinition`]: the right it must have, the unit
/// quantity a single occurrence of the strategy requires (signed: negative
/// for a short leg), and the predicates a candidate must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct LegDefinition {
    right: OptionRight,
    quantity: i64,
    predicates: Vec<LegPredicate>,
}

impl LegDefinition {
    /// Builds a leg definition. `quantity` must be nonzero — a zero-quantity
    /// leg can never be matched against a real position.
    pub fn new(right: OptionRight, quantity: i64, predicates: Vec<LegPredicate>) -> Self {
        debug_assert_ne!(quantity, 0, "a leg definition's unit quantity must be nonzero");
        LegDefinition {
            right,
            quantity,
            predicates,
        }
    }

    /// The right this leg requires.
    pub fn right(&self) -> OptionRight {
        self.right
    }

    /// The unit quantity one occurrence of the strategy needs on this leg.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// The predicates a candidate for this leg must satisfy.
    pub fn predicates(&self) -> &[LegPredicate] {
        &self.predicates
    }

    /// Slices `positions` down to the candidates consistent with this leg's
    /// right and predicates, pushing every predicate into the collection's
    /// indexes rather than scanning.
    pub fn filter(
        &self,
        legs_so_far: &[StrategyLegMatch],
        positions: &OptionPositionCollection,
    ) -> OptionPositionCollection {
        let mut candidates = positions.slice_right(self.right, false);
        for predicate in &self.predicates {
            candidates = predicate.filter(legs_so_far, &candidates, false);
        }
        candidates
    }

    /// Attempts to bind this leg definition to `candidate`. The multiplier is
    /// floor division of `candidate.quantity()` by this leg's unit quantity
    /// — `candidate` need not be an exact multiple, in which case the
    /// returned match's position carries less than `candidate`'s full
    /// quantity and the remainder stays available to later legs. Fails if
    /// the candidate's right doesn't match, the multiplier is not at least 1
    /// (covers both a zero remainder-only quantity and a sign mismatch,
    /// since integer division in Rust truncates toward zero), or any
    /// predicate rejects the candidate.
    ///
    /// Right equality is re-checked here even though every caller inside
    /// this crate reaches `candidate` via [`Self::filter`] (which already
    /// sliced on `self.right`) — this is the "exact one-position match"
    /// entry point a caller with its own pre-aligned legs would call
    /// directly, bypassing `filter` entirely.
    pub fn try_match(
        &self,
        legs_so_far: &[StrategyLegMatch],
        candidate: &OptionPosition,
    ) -> Option<StrategyLegMatch> {
        if candidate.symbol().and_then(|s| s.right()) != Some(self.right) {
            return None;
        }
        let multiplier = candidate.quantity() / self.quantity;
        if multiplier < 1 {
            return None;
        }
        if !self
            .predicates
            .iter()
            .all(|predicate| predicate.matches(legs_so_far, candidate))
        {
            return None;
        }
        let matched_position = candidate.with_quantity(multiplier * self.quantity);
        Some(StrategyLegMatch::new(multiplier, matched_position))
    }
}

/// One leg of a completed match: how many times the strategy's unit
/// quantity this leg's matched position supports. `position.quantity() ==
/// multiplier * legDef.quantity()` always holds — this may be less than the
/// full quantity actually held on that symbol, in which case the remainder
/// stays in the matcher's working collection for a later match.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyLegMatch {
    multiplier: i64,
    position: OptionPosition,
}

impl StrategyLegMatch {
    /// Builds a leg match.
    pub fn new(multiplier: i64, position: OptionPosition) -> Self {
        StrategyLegMatch {
            multiplier,
            position,
        }
    }

    /// How many units of the strategy this leg alone could support.
    pub fn multiplier(&self) -> i64 {
        self.multiplier
    }

    /// The matched position, scaled to this leg's multiplier.
    pub fn position(&self) -> &OptionPosition {
        &self.position
    }
}

/// A structural check run once a full leg assignment is otherwise complete,
/// over the bound legs as a whole — for constraints the predicate DSL
/// cannot express because they relate two earlier legs to each other rather
/// than a candidate to one earlier leg (e.g. a butterfly's equal strike
/// spacing, which compares the gap between legs 0/1 against the gap between
/// legs 1/2).
pub type LegAssignmentValidator = Arc<dyn Fn(&[StrategyLegMatch]) -> bool + Send + Sync>;

/// The compiled shape of one strategy: a name, how much underlying one
/// occurrence requires (zero if none), the ordered leg definitions, and an
/// optional whole-assignment validator for constraints no single leg's
/// predicates can express.
#[derive(Clone)]
pub struct StrategyDefinition {
    name: String,
    underlying_lots: i64,
    legs: Vec<LegDefinition>,
    validator: Option<LegAssignmentValidator>,
}

impl fmt::Debug for StrategyDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyDefinition")
            .field("name", &self.name)
            .field("underlying_lots", &self.underlying_lots)
            .field("legs", &self.legs)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl StrategyDefinition {
    /// Builds a strategy definition with no whole-assignment validator.
    pub fn new(name: impl Into<String>, underlying_lots: i64, legs: Vec<LegDefinition>) -> Self {
        StrategyDefinition {
            name: name.into(),
            underlying_lots,
            legs,
            validator: None,
        }
    }

    /// Attaches a whole-assignment validator, run once all legs are bound
    /// and before the underlying-share check. See [`LegAssignmentValidator`].
    pub fn with_validator(mut self, validator: LegAssignmentValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// The strategy's name, as it will appear on a [`crate::strategy::output::Strategy`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered leg definitions.
    pub fn legs(&self) -> &[LegDefinition] {
        &self.legs
    }

    /// Enumerates every consistent full match of this definition within
    /// `positions`, depth-first over the leg list in declared order, trying
    /// each leg's candidates in [`CollectionEnumerator::Default`] order, with
    /// no per-leg candidate cap.
    /// Each step binds a leg to a candidate and removes the matched
    /// (possibly partial) quantity from the working collection before
    /// recursing, so a contract already consumed — in full or in part — by
    /// an earlier leg of this same match can never be bound again by a
    /// later one.
    pub fn match_against(&self, positions: &OptionPositionCollection) -> Vec<StrategyDefinitionMatch> {
        self.match_against_ordered(positions, &CollectionEnumerator::Default, &[])
    }

    /// As [`Self::match_against`], trying each leg's candidates in the order
    /// `enumerator` prescribes, and considering at most `leg_caps[i]`
    /// candidates at leg `i` (unbounded where `leg_caps` is shorter than the
    /// leg list, or carries `None` at that index) — the search-side half of
    /// `maxMatchesPerLeg`, bounding how wide the recursion can branch at each
    /// depth.
    pub fn match_against_ordered(
        &self,
        positions: &OptionPositionCollection,
        enumerator: &CollectionEnumerator,
        leg_caps: &[Option<usize>],
    ) -> Vec<StrategyDefinitionMatch> {
        let mut out = Vec::new();
        let mut legs_so_far = Vec::with_capacity(self.legs.len());
        self.search(positions.clone(), enumerator, leg_caps, &mut legs_so_far, &mut out);
        out
    }

    /// The first match found in [`CollectionEnumerator::Default`] order, if
    /// any, with no per-leg candidate cap — for callers that only need
    /// existence or a single instance rather than the full enumeration.
    pub fn try_match(&self, positions: &OptionPositionCollection) -> Option<StrategyDefinitionMatch> {
        self.try_match_ordered(positions, &CollectionEnumerator::Default, &[])
    }

    /// As [`Self::try_match`], trying each leg's candidates in the order
    /// `enumerator` prescribes and capped per leg by `leg_caps` (see
    /// [`Self::match_against_ordered`]). This is what [`crate::matcher::match_once`]
    /// calls so a configured ordering policy and per-leg cap determine which
    /// match is found first.
    pub fn try_match_ordered(
        &self,
        positions: &OptionPositionCollection,
        enumerator: &CollectionEnumerator,
        leg_caps: &[Option<usize>],
    ) -> Option<StrategyDefinitionMatch> {
        let mut legs_so_far = Vec::with_capacity(self.legs.len());
        self.search_first(positions.clone(), enumerator, leg_caps, &mut legs_so_far)
    }

    /// The non-search variant: verifies a pre-aligned `exact_positions` list
    /// (one position per leg, in leg order) independently against each leg
    /// definition, rather than searching a collection. Each leg's predicates
    /// are evaluated against the legs already verified earlier in the list,
    /// exactly as in [`Self::match_against`], so a later leg may still
    /// reference an earlier one's matched attributes.
    ///
    /// Fails if `exact_positions.len() != self.legs.len()`, any leg fails to
    /// bind (wrong right, wrong sign, multiplier below 1, or a rejected
    /// predicate), or the whole-assignment validator (if any) rejects the
    /// result. Succeeds only when every leg's multiplier is at least 1; the
    /// overall multiplier is `min` over the per-leg multipliers, and every
    /// leg's quantity in the returned match is scaled to that overall
    /// multiplier.
    pub fn try_match_exact(
        &self,
        exact_positions: &[OptionPosition],
    ) -> Option<StrategyDefinitionMatch> {
        if exact_positions.len() != self.legs.len() {
            return None;
        }
        let mut legs_so_far = Vec::with_capacity(self.legs.len());
        for (leg_def, candidate) in self.legs.iter().zip(exact_positions) {
            let leg_match = leg_def.try_match(&legs_so_far, candidate)?;
            legs_so_far.push(leg_match);
        }
        let multiplier = legs_so_far.iter().map(StrategyLegMatch::multiplier).min()?;
        if let Some(validator) = &self.validator {
            if !validator(&legs_so_far) {
                return None;
            }
        }
        let scaled_legs = legs_so_far
            .into_iter()
            .map(|leg| {
                let per_unit = leg.position().quantity() / leg.multiplier();
                StrategyLegMatch::new(multiplier, leg.position().with_quantity(per_unit * multiplier))
            })
            .collect();
        Some(StrategyDefinitionMatch::new(
            self.name.clone(),
            multiplier,
            scaled_legs,
        ))
    }

    fn search(
        &self,
        remaining: OptionPositionCollection,
        enumerator: &CollectionEnumerator,
        leg_caps: &[Option<usize>],
        legs_so_far: &mut Vec<StrategyLegMatch>,
        out: &mut Vec<StrategyDefinitionMatch>,
    ) {
        if legs_so_far.len() == self.legs.len() {
            if let Some(found) = self.finish(legs_so_far, &remaining) {
                out.push(found);
            }
            return;
        }
        if remaining.is_empty() {
            return;
        }
        let leg_index = legs_so_far.len();
        let leg_def = &self.legs[leg_index];
        let mut candidates = enumerator.order(&leg_def.filter(legs_so_far, &remaining));
        if let Some(Some(cap)) = leg_caps.get(leg_index) {
            candidates.truncate(*cap);
        }
        for candidate in &candidates {
            if let Some(leg_match) = leg_def.try_match(legs_so_far, candidate) {
                let next_remaining = remaining.remove(leg_match.position());
                legs_so_far.push(leg_match);
                self.search(next_remaining, enumerator, leg_caps, legs_so_far, out);
                legs_so_far.pop();
            }
        }
    }

    fn search_first(
        &self,
        remaining: OptionPositionCollection,
        enumerator: &CollectionEnumerator,
        leg_caps: &[Option<usize>],
        legs_so_far: &mut Vec<StrategyLegMatch>,
    ) -> Option<StrategyDefinitionMatch> {
        if legs_so_far.len() == self.legs.len() {
            return self.finish(legs_so_far, &remaining);
        }
        if remaining.is_empty() {
            return None;
        }
        let leg_index = legs_so_far.len();
        let leg_def = &self.legs[leg_index];
        let mut candidates = enumerator.order(&leg_def.filter(legs_so_far, &remaining));
        if let Some(Some(cap)) = leg_caps.get(leg_index) {
            candidates.truncate(*cap);
        }
        for candidate in &candidates {
            if let Some(leg_match) = leg_def.try_match(legs_so_far, candidate) {
                let next_remaining = remaining.remove(leg_match.position());
                legs_so_far.push(leg_match);
                if let Some(found) = self.search_first(next_remaining, enumerator, leg_caps, legs_so_far) {
                    return Some(found);
                }
                legs_so_far.pop();
            }
        }
        None
    }

    fn finish(
        &self,
        legs: &[StrategyLegMatch],
        remaining: &OptionPositionCollection,
    ) -> Option<StrategyDefinitionMatch> {
        if let Some(validator) = &self.validator {
            if !validator(legs) {
                return None;
            }
        }
        let multiplier = legs.iter().map(StrategyLegMatch::multiplier).min()?;
        if self.underlying_lots != 0 {
            let needed = self.underlying_lots * multiplier;
            let held = remaining.underlying_quantity();
            if held.signum() != needed.signum() || held.abs() < needed.abs() {
                return None;
            }
        }
        trace!(strategy = %self.name, multiplier, "strategy definition matched");
        Some(StrategyDefinitionMatch::new(
            self.name.clone(),
            multiplier,
            legs.to_vec(),
        ))
    }
}

/// A completed match of a [`StrategyDefinition`]: the legs that were bound,
/// and the overall multiplier — the minimum across legs, since the strategy
/// can only be instantiated as many times as its most constrained leg
/// allows.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyDefinitionMatch {
    strategy_name: String,
    multiplier: i64,
    legs: Vec<StrategyLegMatch>,
}

impl StrategyDefinitionMatch {
    /// Builds a match result.
    pub fn new(strategy_name: String, multiplier: i64, legs: Vec<StrategyLegMatch>) -> Self {
        StrategyDefinitionMatch {
            strategy_name,
            multiplier,
            legs,
        }
    }

    /// The name of the strategy definition that produced this match.
    pub fn strategy_name(&self) -> &str {
        &self.strategy_name
    }

    /// How many occurrences of the strategy this match represents.
    pub fn multiplier(&self) -> i64 {
        self.multiplier
    }

    /// The bound legs.
    pub fn legs(&self) -> &[StrategyLegMatch] {
        &self.legs
    }
}
