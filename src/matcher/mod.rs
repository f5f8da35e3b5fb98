/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # Matcher Module
//!
//! The outer loop: given a library of [`StrategyDefinition`]s and a starting
//! [`OptionPositionCollection`], repeatedly take the first match each
//! definition yields, in the order the caller listed them, removing what was
//! matched before moving to the next definition. See [`match_once`].

use crate::collection::OptionPositionCollection;
use crate::model::position::OptionPosition;
use crate::model::symbol::Symbol;
use crate::model::types::OptionRight;
use crate::strategy::definition::{StrategyDefinition, StrategyDefinitionMatch};
use crate::strategy::output::{OptionLeg, OrderType, Strategy, UnderlyingLeg};
use itertools::Itertools;
use rust_decimal::Decimal;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Orders the candidates a leg filter considers, within one call to
/// [`StrategyDefinition::match_against_ordered`]/`try_match_ordered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionEnumerator {
    /// Whatever order the collection's backing indexes naturally produce.
    #[default]
    Default,
    /// The underlying first, then long positions, then short puts in
    /// ascending strike, then short calls in ascending strike.
    AbsoluteRisk,
}

impl CollectionEnumerator {
    /// Materializes `collection`'s positions in this policy's order.
    pub fn order(&self, collection: &OptionPositionCollection) -> Vec<OptionPosition> {
        match self {
            CollectionEnumerator::Default => collection.iter().cloned().collect(),
            CollectionEnumerator::AbsoluteRisk => collection
                .iter()
                .cloned()
                .sorted_by_key(|p| absolute_risk_key(p))
                .collect(),
        }
    }
}

fn absolute_risk_key(p: &OptionPosition) -> (u8, Decimal, String) {
    match p.symbol() {
        None => (0, Decimal::ZERO, String::new()),
        Some(symbol) if !symbol.has_underlying() => (0, Decimal::ZERO, symbol.to_string()),
        Some(symbol) if p.is_long() => (1, symbol.strike().unwrap_or_default(), symbol.to_string()),
        Some(symbol) => match symbol.right() {
            Some(OptionRight::Put) => (2, symbol.strike().unwrap_or_default(), symbol.to_string()),
            _ => (3, symbol.strike().unwrap_or_default(), symbol.to_string()),
        },
    }
}

/// Configuration for [`match_once`]: the library to search with, the
/// enumeration policy, and the caps that bound a potentially exponential
/// search.
#[derive(Debug, Clone)]
pub struct MatcherOptions {
    /// Strategy definitions to search for, tried in this order; each is
    /// exhausted (repeatedly matched) before the next is attempted.
    pub definitions: Vec<StrategyDefinition>,
    /// Candidate ordering policy passed down to every definition's search.
    pub enumerator: CollectionEnumerator,
    /// Wall-clock budget for the whole call. `None` means unbounded.
    pub max_duration: Option<Duration>,
    /// Maximum number of matches to return in total, across all
    /// definitions. `None` means unbounded.
    pub max_total_matches: Option<usize>,
    /// Per-leg cap on how many candidates the search considers at that leg
    /// index of whichever definition is currently being matched (`legs[i]`
    /// tries at most `max_matches_per_leg[i]` candidates before giving up
    /// that branch), bounding the recursion's branching factor. Indexed by
    /// leg position, not by definition; a shorter list (or `None` at an
    /// index) means unbounded for that leg.
    pub max_matches_per_leg: Vec<Option<usize>>,
}

impl MatcherOptions {
    /// Builds matcher options over `definitions` with no caps and the
    /// default enumeration policy.
    pub fn new(definitions: Vec<StrategyDefinition>) -> Self {
        MatcherOptions {
            definitions,
            enumerator: CollectionEnumerator::Default,
            max_duration: None,
            max_total_matches: None,
            max_matches_per_leg: Vec::new(),
        }
    }
}

/// Runs the matcher loop once over `positions`: for each definition in
/// `options.definitions`, repeatedly takes the first match it yields and
/// removes it from the working collection, until that definition yields no
/// more matches, then moves to the next definition. Every definition's
/// search is capped per leg by `options.max_matches_per_leg`. Returns the
/// accumulated matches; a wall-clock or total-match cap hit mid-search
/// returns whatever has been accumulated so far rather than an error.
pub fn match_once(
    positions: &OptionPositionCollection,
    options: &MatcherOptions,
) -> Vec<StrategyDefinitionMatch> {
    let started = Instant::now();
    let mut remaining = positions.clone();
    let mut acc = Vec::new();

    for definition in &options.definitions {
        loop {
            if let Some(max_duration) = options.max_duration {
                if started.elapsed() >= max_duration {
                    warn!(elapsed = ?started.elapsed(), "matcher wall-clock budget exhausted");
                    return acc;
                }
            }
            if let Some(max_total) = options.max_total_matches {
                if acc.len() >= max_total {
                    debug!(max_total, "matcher total-match cap reached");
                    return acc;
                }
            }

            let Some(found) = definition.try_match_ordered(
                &remaining,
                &options.enumerator,
                &options.max_matches_per_leg,
            ) else {
                break;
            };
            remaining = remaining.accept(&found);
            acc.push(found);
        }
    }

    acc
}

/// Converts a completed match into the plain output record a caller sees,
/// reading each leg's symbol out of the original `positions` the match was
/// found against (the match itself only carries the scaled quantity, not
/// the full symbol metadata already available on `OptionPosition`).
pub fn to_strategy(collection: &OptionPositionCollection, found: &StrategyDefinitionMatch) -> Strategy {
    let multiplier = found.multiplier();
    let option_legs = found
        .legs()
        .iter()
        .filter_map(|leg| {
            let symbol = leg.position().symbol()?;
            match symbol {
                Symbol::Option {
                    market,
                    right,
                    strike,
                    expiration,
                    ..
                } => Some(OptionLeg {
                    market: market.clone(),
                    right: *right,
                    strike: *strike,
                    expiration: *expiration,
                    quantity: leg.position().quantity() / leg.multiplier() * multiplier,
                    order_type: OrderType::Market,
                    order_price: Decimal::ZERO,
                }),
                Symbol::Equity { .. } => None,
            }
        })
        .collect();

    let underlying_leg = collection
        .try_get(&Symbol::equity(collection.underlying().to_string()))
        .map(|p| UnderlyingLeg { quantity: p.quantity() });

    Strategy {
        name: found.strategy_name().to_string(),
        underlying: collection.underlying().to_string(),
        option_legs,
        underlying_leg,
    }
}
