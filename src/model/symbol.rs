/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # Symbol Module
//!
//! A `Symbol` identifies either the underlying equity or one listed option
//! contract on it. Construction is entirely the caller's responsibility: the
//! matcher only ever reads the fields below, it never builds a symbol from
//! ticker strings or market data.

use crate::model::types::{ExerciseStyle, OptionRight};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A security identity: either the underlying equity, or one option
/// contract written on it.
///
/// Modeled as an enum rather than a flat struct with optional fields so that
/// `strike()`/`expiration()`/`right()` can return `Option<_>` honestly — the
/// equity variant simply has no such attributes, rather than carrying
/// sentinel zero values that a predicate would have to know to ignore.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// The underlying equity itself.
    Equity {
        /// Ticker of the underlying, e.g. `"AAPL"`.
        underlying: String,
    },
    /// A listed option contract.
    Option {
        /// Ticker of the underlying the contract is written on.
        underlying: String,
        /// Venue/market the contract trades on (OCC, CBOE, ...). Carried
        /// through from the holdings source but never inspected by the
        /// matcher.
        market: String,
        /// American or European exercise.
        exercise_style: ExerciseStyle,
        /// Call or put.
        right: OptionRight,
        /// Strike price.
        strike: rust_decimal::Decimal,
        /// Expiration date.
        expiration: NaiveDate,
    },
}

impl Symbol {
    /// Builds the underlying-equity symbol.
    pub fn equity(underlying: impl Into<String>) -> Self {
        Symbol::Equity {
            underlying: underlying.into(),
        }
    }

    /// Builds an option contract symbol.
    #[allow(clippy::too_many_arguments)]
    pub fn option(
        underlying: impl Into<String>,
        market: impl Into<String>,
        exercise_style: ExerciseStyle,
        right: OptionRight,
        strike: rust_decimal::Decimal,
        expiration: NaiveDate,
    ) -> Self {
        Symbol::Option {
            underlying: underlying.into(),
            market: market.into(),
            exercise_style,
            right,
            strike,
            expiration,
        }
    }

    /// The ticker of the underlying equity this symbol is ultimately defined
    /// against, whichever variant it is.
    pub fn underlying(&self) -> &str {
        match self {
            Symbol::Equity { underlying } | Symbol::Option { underlying, .. } => underlying,
        }
    }

    /// True for option contracts, false for the equity itself. Named after
    /// the derived attribute in the data model rather than `is_option`,
    /// because the matcher's predicates ask "does this candidate have an
    /// underlying" when deciding whether to include the equity leg.
    pub fn has_underlying(&self) -> bool {
        matches!(self, Symbol::Option { .. })
    }

    /// `Some(right)` for option contracts, `None` for the equity — resolving
    /// `right` against the equity is an [`UnresolvableAttribute`] case (see
    /// `error` module docs), absorbed by the caller as a non-match.
    pub fn right(&self) -> Option<OptionRight> {
        match self {
            Symbol::Option { right, .. } => Some(*right),
            Symbol::Equity { .. } => None,
        }
    }

    /// `Some(strike)` for option contracts, `None` for the equity.
    pub fn strike(&self) -> Option<rust_decimal::Decimal> {
        match self {
            Symbol::Option { strike, .. } => Some(*strike),
            Symbol::Equity { .. } => None,
        }
    }

    /// `Some(expiration)` for option contracts, `None` for the equity.
    pub fn expiration(&self) -> Option<NaiveDate> {
        match self {
            Symbol::Option { expiration, .. } => Some(*expiration),
            Symbol::Equity { .. } => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Equity { underlying } => write!(f, "{underlying}"),
            Symbol::Option {
                underlying,
                right,
                strike,
                expiration,
                ..
            } => write!(f, "{underlying} {expiration} {strike}{}", match right {
                OptionRight::Call => "C",
                OptionRight::Put => "P",
            }),
        }
    }
}
