/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # Strategy Output Module
//!
//! The records the matcher hands back to a caller: a recognized [`Strategy`]
//! instance, built from a [`crate::strategy::definition::StrategyDefinitionMatch`]
//! once it has been accepted. These carry no pricing — an `order_type`/
//! `order_price` pair is included only because the external interface (see
//! `SPEC_FULL.md` §6) expects every leg to be expressible as an order, not
//! because this crate computes prices.

use crate::model::types::OptionRight;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a leg's close-out order would be routed. The matcher always emits
/// [`OrderType::Market`] at a zero price — actual pricing is out of scope
/// (see `SPEC_FULL.md` §1 Non-goals) — callers that need a limit order
/// reprice the leg themselves before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderType {
    /// Execute at the prevailing market price.
    #[default]
    Market,
    /// Execute only at or better than a specified limit price.
    Limit,
}

/// One option leg of a recognized strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionLeg {
    /// Market the contract trades on.
    pub market: String,
    /// Call or put.
    pub right: OptionRight,
    /// Strike price.
    pub strike: Decimal,
    /// Expiration date.
    pub expiration: NaiveDate,
    /// Signed quantity consumed by this match (the strategy's per-leg unit
    /// quantity times the match's overall multiplier).
    pub quantity: i64,
    /// How this leg would be closed out.
    pub order_type: OrderType,
    /// Limit price, if `order_type` is [`OrderType::Limit`]; zero otherwise.
    pub order_price: Decimal,
}

/// The underlying-equity leg of a recognized strategy, present only for
/// strategies whose definition requires underlying shares (e.g. a covered
/// call).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnderlyingLeg {
    /// Signed quantity of underlying consumed by this match.
    pub quantity: i64,
}

/// A recognized strategy instance: which named definition matched, scaled by
/// how many occurrences, and the concrete legs that were consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    /// Name of the strategy definition that matched (e.g. `"Bear Call Spread"`).
    pub name: String,
    /// Ticker of the underlying equity.
    pub underlying: String,
    /// The option legs consumed by this match.
    pub option_legs: Vec<OptionLeg>,
    /// The underlying-equity leg, if this strategy requires one.
    pub underlying_leg: Option<UnderlyingLeg>,
}
