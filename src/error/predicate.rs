/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # Predicate Error Module
//!
//! Construction-time errors for [`crate::predicate::LegPredicate`]. These are
//! hard failures: a malformed predicate is rejected before it ever reaches
//! the matcher, rather than silently misbehaving during a search.

use thiserror::Error;

/// Errors raised while constructing a [`LegPredicate`](crate::predicate::LegPredicate).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredicateError {
    /// Neither side of the authored comparison refers to the candidate
    /// position's own attribute, or both sides do. Exactly one side must.
    /// Not constructed anywhere in this crate today: `LegPredicate` is
    /// always built already decomposed as `candidate.attribute() <cmp>
    /// reference`, and `ReferenceValue` has no variant that could denote
    /// "the candidate's own attribute" on the reference side, so the shape
    /// this variant reports cannot currently be authored. Kept for a future
    /// predicate expression form (e.g. one parsed from text) that could
    /// produce it.
    #[error(
        "predicate '{expression}' must compare the candidate position's attribute against \
         exactly one of a literal or an earlier leg's attribute"
    )]
    AmbiguousOperand {
        /// A human-readable rendering of the rejected expression, for diagnostics.
        expression: String,
    },

    /// The predicate referenced `legs[j]` for a `j` that is not strictly
    /// less than the leg currently being defined. Forward and self
    /// references can never be resolved during the depth-first search.
    #[error(
        "predicate on leg {defining_leg} references leg {referenced_leg}, which has not been \
         matched yet"
    )]
    ForwardLegReference {
        /// Index of the leg whose predicate list is being built.
        defining_leg: usize,
        /// Index of the leg the predicate illegally refers to.
        referenced_leg: usize,
    },
}
