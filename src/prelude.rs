/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # strategy-matcher Prelude
//!
//! Convenient single import for the crate's public surface.
//!
//! ```rust
//! use strategy_matcher::prelude::*;
//! ```

pub use crate::collection::OptionPositionCollection;
pub use crate::error::{MatcherError, PositionError, PredicateError};
pub use crate::matcher::{CollectionEnumerator, MatcherOptions, match_once, to_strategy};
pub use crate::model::{BinaryComparison, OptionPosition, OptionRight, Symbol};
pub use crate::model::types::ExerciseStyle;
pub use crate::predicate::{Attribute, LegPredicate, ReferenceValue};
pub use crate::strategy::{
    LegDefinition, OptionLeg, OrderType, Strategy, StrategyDefinition, StrategyDefinitionMatch,
    StrategyLegMatch, UnderlyingLeg,
};
pub use crate::strategy::library;
pub use crate::utils::setup_logger;

pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;
