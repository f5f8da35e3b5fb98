/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! Compile-time trait checks for the crate's value types: every value type
//! the matcher passes around by clone across a `match_against` search must
//! be `Clone`, `Send`, `Sync`, and serializable, since a caller may fan
//! independent matches out across threads.

use static_assertions::assert_impl_all;
use strategy_matcher::prelude::*;

#[test]
fn core_value_types_are_clone_send_sync_and_serde() {
    assert_impl_all!(Symbol: Clone, Send, Sync, serde::Serialize, std::fmt::Debug);
    assert_impl_all!(OptionPosition: Clone, Send, Sync, serde::Serialize, std::fmt::Debug);
    assert_impl_all!(OptionPositionCollection: Clone, Send, Sync, std::fmt::Debug);
    assert_impl_all!(BinaryComparison: Clone, Copy, Send, Sync, serde::Serialize);
    assert_impl_all!(LegPredicate: Clone, Send, Sync, serde::Serialize);
    assert_impl_all!(Strategy: Clone, Send, Sync, serde::Serialize, serde::de::DeserializeOwned);
}

#[test]
fn matcher_options_are_send_and_sync_for_cross_thread_use() {
    assert_impl_all!(MatcherOptions: Send, Sync);
    assert_impl_all!(StrategyDefinition: Send, Sync, Clone);
}
