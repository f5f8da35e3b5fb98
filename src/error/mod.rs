/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # Error Module
//!
//! Typed errors for the matcher engine. The taxonomy is deliberately small and
//! splits into two kinds:
//!
//! * **Hard, construction-time errors** — a malformed predicate, a symbol
//!   mismatch on `OptionPosition` arithmetic, or (defensively) an
//!   unrecognized enumerator policy. These implement [`std::error::Error`]
//!   via `thiserror` and are returned from `Result`-returning constructors.
//! * **Absorbed runtime signals** — resolving an attribute that a candidate
//!   position doesn't carry (e.g. strike on the underlying equity), or
//!   exhausting a search budget. Neither is an error type: the first makes a
//!   predicate evaluate to `false`, the second makes the matcher loop return
//!   whatever partial result it has accumulated. See [`crate::predicate`] and
//!   [`crate::matcher`] respectively.
//!
//! ## Module Structure
//!
//! ```text
//! error/
//! ├── position.rs   - OptionPosition arithmetic errors
//! ├── predicate.rs  - LegPredicate construction errors
//! └── matcher.rs    - matcher/enumerator configuration errors
//! ```

pub mod matcher;
pub mod position;
pub mod predicate;

pub use matcher::MatcherError;
pub use position::PositionError;
pub use predicate::PredicateError;
