/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # Matcher Error Module
//!
//! Defensive errors for the outer matcher loop. These guard against cases
//! that should be unreachable given the current enum definitions, so that a
//! future non-exhaustive refactor fails loudly instead of silently matching
//! nothing.

use thiserror::Error;

/// Errors surfaced by [`crate::matcher`] configuration and dispatch.
///
/// No function in this crate currently constructs `MatcherError` — every
/// `CollectionEnumerator` variant is matched exhaustively in `order`, so the
/// gap this type guards against cannot occur today. It is kept (and kept
/// public) so a future enumerator variant added without a matching `order`
/// arm fails with a typed error instead of a silent compiler-inserted match
/// hole; see [`UnknownEnumeratorCase`](MatcherError::UnknownEnumeratorCase).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatcherError {
    /// A [`CollectionEnumerator`](crate::matcher::CollectionEnumerator) case
    /// reached a branch with no defined ordering. Unreachable as long as
    /// `CollectionEnumerator::order` matches all of its variants; hit only if
    /// a new enumerator variant is added without updating its ordering logic.
    #[error("enumerator policy '{policy}' has no defined ordering for this collection shape")]
    UnknownEnumeratorCase {
        /// Debug name of the offending policy variant.
        policy: String,
    },
}
