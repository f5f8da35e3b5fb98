/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! Property test for `BinaryComparison::flip_operands` duality.

use proptest::prelude::*;
use strategy_matcher::prelude::*;

fn any_comparison() -> impl Strategy<Value = BinaryComparison> {
    prop_oneof![
        Just(BinaryComparison::Eq),
        Just(BinaryComparison::Ne),
        Just(BinaryComparison::Lt),
        Just(BinaryComparison::Le),
        Just(BinaryComparison::Gt),
        Just(BinaryComparison::Ge),
    ]
}

proptest! {
    /// `cmp.flip_operands().evaluate(b, a) == cmp.evaluate(a, b)`
    /// for every comparison and every pair of values.
    #[test]
    fn flip_operands_evaluate_matches_swapped_operands(
        cmp in any_comparison(),
        a in -1_000i64..1_000,
        b in -1_000i64..1_000,
    ) {
        prop_assert_eq!(cmp.flip_operands().evaluate(&b, &a), cmp.evaluate(&a, &b));
    }

    /// Flipping twice is the identity.
    #[test]
    fn flip_operands_is_its_own_inverse(cmp in any_comparison()) {
        prop_assert_eq!(cmp.flip_operands().flip_operands(), cmp);
    }
}
