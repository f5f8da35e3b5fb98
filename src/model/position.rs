/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # Position Module
//!
//! `OptionPosition` is the value the rest of the engine is built from: a
//! symbol (or the equity) paired with a signed quantity. It carries no
//! pricing, P&L, or Greeks — those are out of scope for the matcher (see
//! `SPEC_FULL.md` §1) — only the algebra the collection and the matcher need.

use crate::error::PositionError;
use crate::model::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A signed quantity of some symbol.
///
/// `symbol: None` is the additive identity (a default, zero-symbol,
/// zero-quantity position): adding it to anything is a no-op, and it is the
/// only position that can be added to or subtracted from any other without a
/// symbol match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OptionPosition {
    symbol: Option<Symbol>,
    quantity: i64,
}

impl OptionPosition {
    /// Builds a position. A `quantity` of zero is accepted but collapses to
    /// the identity on the next `add`/`remove` pass through a collection.
    pub fn new(symbol: Symbol, quantity: i64) -> Self {
        OptionPosition {
            symbol: Some(symbol),
            quantity,
        }
    }

    /// The additive identity: no symbol, zero quantity.
    pub fn identity() -> Self {
        OptionPosition::default()
    }

    /// `true` for the additive identity.
    pub fn is_identity(&self) -> bool {
        self.symbol.is_none()
    }

    /// The position's symbol, if it is not the identity.
    pub fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    /// The signed quantity (zero for the identity).
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Returns a copy of this position with a different quantity, keeping
    /// the symbol fixed. Used by `LegDefinition::match_against` to scale a
    /// matched candidate down to the multiplier's worth of contracts.
    pub fn with_quantity(&self, quantity: i64) -> Self {
        OptionPosition {
            symbol: self.symbol.clone(),
            quantity,
        }
    }

    /// `true` if the quantity is strictly positive (a long position).
    pub fn is_long(&self) -> bool {
        self.quantity > 0
    }

    /// `true` if the quantity is strictly negative (a short position).
    pub fn is_short(&self) -> bool {
        self.quantity < 0
    }

    /// Attempts to add `other` to `self`, enforcing the symbol-match
    /// invariant. Either side may be the identity.
    pub fn checked_add(&self, other: &OptionPosition) -> Result<OptionPosition, PositionError> {
        match (&self.symbol, &other.symbol) {
            (None, None) => Ok(OptionPosition::identity()),
            (None, Some(_)) => Ok(other.clone()),
            (Some(_), None) => Ok(self.clone()),
            (Some(a), Some(b)) if a == b => Ok(OptionPosition {
                symbol: self.symbol.clone(),
                quantity: self.quantity + other.quantity,
            }),
            (Some(a), Some(b)) => Err(PositionError::mismatched_symbols(a, b)),
        }
    }

    /// Attempts to subtract `other` from `self`; equivalent to
    /// `self.checked_add(&(-other))`. The result may have the opposite sign
    /// of `self` — subtraction is permitted to flip a position short or
    /// long, per the collection's `remove` semantics.
    pub fn checked_sub(&self, other: &OptionPosition) -> Result<OptionPosition, PositionError> {
        self.checked_add(&(-other.clone()))
    }
}

impl fmt::Display for OptionPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{} x{}", symbol, self.quantity),
            None => write!(f, "<identity>"),
        }
    }
}

impl Neg for OptionPosition {
    type Output = OptionPosition;

    fn neg(self) -> OptionPosition {
        OptionPosition {
            symbol: self.symbol,
            quantity: -self.quantity,
        }
    }
}

impl Mul<i64> for OptionPosition {
    type Output = OptionPosition;

    fn mul(self, scalar: i64) -> OptionPosition {
        OptionPosition {
            symbol: self.symbol,
            quantity: self.quantity * scalar,
        }
    }
}

/// Infallible `+`. Panics on a symbol mismatch — prefer
/// [`OptionPosition::checked_add`] wherever the two operands aren't already
/// known to agree (e.g. inside `OptionPositionCollection::add`, which only
/// ever adds a new position against the existing entry for the same key).
impl Add for OptionPosition {
    type Output = OptionPosition;

    fn add(self, rhs: OptionPosition) -> OptionPosition {
        self.checked_add(&rhs)
            .expect("OptionPosition::add called on mismatched symbols; use checked_add")
    }
}

/// Infallible `-`, with the same panic-on-mismatch caveat as `Add`.
impl Sub for OptionPosition {
    type Output = OptionPosition;

    fn sub(self, rhs: OptionPosition) -> OptionPosition {
        self.checked_sub(&rhs)
            .expect("OptionPosition::sub called on mismatched symbols; use checked_sub")
    }
}
