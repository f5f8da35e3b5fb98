/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # Position Error Module
//!
//! Errors raised by [`crate::model::position::OptionPosition`] algebra.

use thiserror::Error;

/// Errors that can occur when combining two [`OptionPosition`](crate::model::position::OptionPosition) values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PositionError {
    /// Raised when adding or subtracting two positions whose symbols are
    /// neither equal nor the additive identity (the default, zero-quantity
    /// position).
    #[error("cannot combine positions on mismatched symbols: {left} vs {right}")]
    MismatchedSymbols {
        /// Display form of the left-hand symbol.
        left: String,
        /// Display form of the right-hand symbol.
        right: String,
    },
}

impl PositionError {
    /// Builds a [`PositionError::MismatchedSymbols`] from two displayable symbols.
    pub fn mismatched_symbols(left: impl ToString, right: impl ToString) -> Self {
        PositionError::MismatchedSymbols {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_symbols_display() {
        let err = PositionError::mismatched_symbols("AAPL 100C", "AAPL 105C");
        assert_eq!(
            err.to_string(),
            "cannot combine positions on mismatched symbols: AAPL 100C vs AAPL 105C"
        );
    }
}
