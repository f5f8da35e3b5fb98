/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! Small closed enums shared across the model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of security a [`Symbol`](crate::model::symbol::Symbol) identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SecurityType {
    /// The underlying equity itself.
    Equity,
    /// A listed option contract on an equity.
    #[default]
    Option,
}

/// Exercise style of an option contract. Carried on the symbol but never
/// used by the matcher itself — legs never constrain on it — it exists
/// because the external holdings interface (§6) specifies it as part of a
/// symbol's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExerciseStyle {
    /// May be exercised at any time up to expiration.
    #[default]
    American,
    /// May only be exercised at expiration.
    European,
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseStyle::American => write!(f, "American"),
            ExerciseStyle::European => write!(f, "European"),
        }
    }
}

/// The contractual right an option grants its holder.
///
/// `Ord`/`PartialOrd` give `Call < Put` a stable, arbitrary but consistent
/// order — used only so `OptionRight` can key a `BTreeMap`-like structure if
/// a caller wants one; the matcher itself indexes by right with a
/// `HashMap`/`HashSet` and never compares two rights for order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize, Default,
)]
pub enum OptionRight {
    /// The right to buy the underlying at the strike price.
    #[default]
    Call,
    /// The right to sell the underlying at the strike price.
    Put,
}

impl OptionRight {
    /// The other right. Useful for straddle/strangle definitions that pair
    /// one leg's right against its complement.
    pub fn opposite(self) -> OptionRight {
        match self {
            OptionRight::Call => OptionRight::Put,
            OptionRight::Put => OptionRight::Call,
        }
    }
}

impl fmt::Display for OptionRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionRight::Call => write!(f, "Call"),
            OptionRight::Put => write!(f, "Put"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involutive() {
        assert_eq!(OptionRight::Call.opposite(), OptionRight::Put);
        assert_eq!(OptionRight::Put.opposite(), OptionRight::Call);
        assert_eq!(OptionRight::Call.opposite().opposite(), OptionRight::Call);
    }

    #[test]
    fn display_matches_variant_name() {
        assert_eq!(OptionRight::Call.to_string(), "Call");
        assert_eq!(OptionRight::Put.to_string(), "Put");
    }
}
