/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! Property tests for `OptionPositionCollection`'s algebraic invariants:
//! add/remove identity, add order-independence, and strike-slice
//! partitioning.

use proptest::collection::vec as pvec;
use proptest::prelude::*;
use strategy_matcher::prelude::*;

fn expiration() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 10, 16).unwrap()
}

fn call_at(strike: i64, quantity: i64) -> OptionPosition {
    OptionPosition::new(
        Symbol::option(
            "AAPL",
            "OCC",
            ExerciseStyle::American,
            OptionRight::Call,
            Decimal::from(strike),
            expiration(),
        ),
        quantity,
    )
}

fn nonzero_quantity() -> impl Strategy<Value = i64> {
    prop_oneof![(-20i64..=-1), (1i64..=20)]
}

fn strike_and_quantity() -> impl Strategy<Value = (i64, i64)> {
    (0i64..50, nonzero_quantity())
}

fn build_collection(entries: &[(i64, i64)]) -> OptionPositionCollection {
    entries
        .iter()
        .fold(OptionPositionCollection::empty("AAPL"), |acc, &(strike, qty)| {
            acc.add(call_at(strike, qty))
        })
}

proptest! {
    /// `C.add(p).remove(p) == C` for `p` on a symbol `C` does
    /// not already contain.
    #[test]
    fn add_then_remove_on_a_fresh_symbol_restores_the_collection(
        entries in pvec(strike_and_quantity(), 0..8),
        fresh_strike in 100i64..200,
        quantity in nonzero_quantity(),
    ) {
        let base = build_collection(&entries);
        let p = call_at(fresh_strike, quantity);
        prop_assume!(!base.has_position(p.symbol().unwrap()));

        let restored = base.add(p.clone()).remove(&p);
        prop_assert_eq!(restored, base);
    }

    /// `add` is order-independent, whether `p` and `q` land on
    /// distinct symbols or merge onto the same one.
    #[test]
    fn add_is_order_independent(
        entries in pvec(strike_and_quantity(), 0..4),
        (strike_p, qty_p) in strike_and_quantity(),
        (strike_q, qty_q) in strike_and_quantity(),
    ) {
        let base = build_collection(&entries);
        let p = call_at(strike_p, qty_p);
        let q = call_at(strike_q, qty_q);

        let via_p_then_q = base.add(p.clone()).add(q.clone());
        let via_q_then_p = base.add(q).add(p);
        prop_assert_eq!(via_p_then_q, via_q_then_p);
    }

    /// `slice(<, k).count + slice(>=, k).count ==
    /// optionOnlyCount` — the two halves of a strike split partition the
    /// option-only population exactly, with no overlap and no gap.
    #[test]
    fn strike_slice_lt_and_ge_partition_the_option_population(
        entries in pvec(strike_and_quantity(), 0..10),
        reference in 0i64..50,
    ) {
        let collection = build_collection(&entries);
        let total = collection.option_only_count();

        let below = collection.slice_strike(BinaryComparison::Lt, Decimal::from(reference), false);
        let at_or_above = collection.slice_strike(BinaryComparison::Ge, Decimal::from(reference), false);

        prop_assert_eq!(below.option_only_count() + at_or_above.option_only_count(), total);
    }
}
