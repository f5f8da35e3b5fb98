#![allow(unknown_lints)]
#![allow(clippy::literal_string_with_formatting_args)]

//!
//!  [![License: MIT](https://img.shields.io/badge/license-MIT-blue)](./LICENSE)
//!  [![Crates.io](https://img.shields.io/crates/v/strategy-matcher.svg)](https://crates.io/crates/strategy-matcher)
//!  [![Build Status](https://img.shields.io/github/workflow/status/joaquinbejar/strategy-matcher/CI)](https://github.com/joaquinbejar/strategy-matcher/actions)
//!  [![Documentation](https://img.shields.io/badge/docs-latest-blue.svg)](https://docs.rs/strategy-matcher)
//!
//!  # strategy-matcher: Option Strategy Matcher
//!
//!  ## Introduction
//!
//!  `strategy-matcher` identifies named option-trading strategies (spreads,
//!  straddles, butterflies, calendars, ...) inside an arbitrary portfolio of
//!  option positions on a single underlying equity. Given a holdings snapshot
//!  and a library of strategy definitions, it greedily decomposes the
//!  portfolio into recognized strategy instances plus whatever positions are
//!  left over.
//!
//!  This crate computes no prices, Greeks, or P&L — it answers one question:
//!  *which named shapes does this portfolio currently contain?*
//!
//!  ## Project Structure
//!
//!  1. **Model** (`model/`): the data every other module is built from —
//!     [`model::symbol::Symbol`], [`model::position::OptionPosition`],
//!     [`model::comparison::BinaryComparison`].
//!  2. **Collection** (`collection/`): [`collection::OptionPositionCollection`],
//!     the persistent, indexed multiset of positions the matcher slices and
//!     folds over.
//!  3. **Predicate** (`predicate/`): [`predicate::LegPredicate`], the
//!     algebraic leg-constraint DSL strategy definitions are built from.
//!  4. **Strategy** (`strategy/`): [`strategy::definition::StrategyDefinition`],
//!     the built-in [`strategy::library`] of named strategies, and the
//!     [`strategy::output::Strategy`] record a completed match is reported as.
//!  5. **Matcher** (`matcher/`): [`matcher::match_once`], the outer loop that
//!     runs a strategy library against a holdings snapshot.
//!  6. **Error** (`error/`): the crate's typed error taxonomy.
//!  7. **Utils** (`utils/`): ambient concerns — currently just structured
//!     logging setup.
//!
//!  ## Usage Example
//!
//!  ```rust
//!  use strategy_matcher::collection::OptionPositionCollection;
//!  use strategy_matcher::matcher::{match_once, MatcherOptions};
//!  use strategy_matcher::model::position::OptionPosition;
//!  use strategy_matcher::model::symbol::Symbol;
//!  use strategy_matcher::model::types::{ExerciseStyle, OptionRight};
//!  use strategy_matcher::strategy::library;
//!  use chrono::NaiveDate;
//!  use rust_decimal_macros::dec;
//!
//!  let expiration = NaiveDate::from_ymd_opt(2020, 10, 16).unwrap();
//!  let positions = OptionPositionCollection::empty("AAPL")
//!      .add(OptionPosition::new(
//!          Symbol::option("AAPL", "OCC", ExerciseStyle::American, OptionRight::Call, dec!(100), expiration),
//!          3,
//!      ))
//!      .add(OptionPosition::new(
//!          Symbol::option("AAPL", "OCC", ExerciseStyle::American, OptionRight::Call, dec!(95), expiration),
//!          3,
//!      ));
//!
//!  let options = MatcherOptions::new(library::all());
//!  let found = match_once(&positions, &options);
//!  assert_eq!(found.len(), 1);
//!  assert_eq!(found[0].strategy_name(), "Bear Call Spread");
//!  ```
//!
//!  ## Contribution and Contact
//!
//!  **Joaquín Béjar García**
//!  - Email: jb@taunais.com
//!  - GitHub: [joaquinbejar](https://github.com/joaquinbejar)
//!

extern crate core;

/// * `collection` - The persistent, indexed multiset of option positions the
///   matcher slices, folds, and subtracts from.
pub mod collection;

/// * `error` - The crate's typed error taxonomy, split into hard
///   construction-time errors and the runtime signals the matcher absorbs
///   rather than propagates.
pub mod error;

/// * `matcher` - The outer loop: given a strategy library and a holdings
///   snapshot, repeatedly takes the first match each definition yields.
pub mod matcher;

/// * `model` - Core data structures: symbols, positions, and the reified
///   comparison operators predicates are built from.
pub mod model;

/// * `predicate` - The algebraic leg-constraint DSL a [`strategy::definition::LegDefinition`]
///   is built from.
pub mod predicate;

/// * `strategy` - Strategy definitions, the built-in library of named
///   strategies, and the output record a completed match is reported as.
pub mod strategy;

/// * `utils` - General utility functions used across the crate, currently
///   limited to structured logging setup.
pub mod utils;

pub mod prelude;
