/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! Property-based tests for the matcher engine's algebraic invariants
//! (add/remove identity, add order-independence, strike-slice partitioning,
//! comparison-flip duality), verified across a wide range of generated
//! inputs rather than the pinned-input scenarios in `tests/unit/`.

mod collection_invariants;
mod comparison_invariants;
