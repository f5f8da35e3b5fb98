/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # Option Position Collection Module
//!
//! `OptionPositionCollection` is the persistent, indexed multiset the rest of
//! the engine slices and folds over. It is built once from holdings and
//! never mutated in place afterwards: every "modifying" method returns a new
//! collection. Because the backing maps ([`im::HashMap`], [`im::OrdMap`],
//! [`im::HashSet`]) are structurally shared trees, that new collection shares
//! almost all of its interior with the old one — an `add`/`remove`/`slice`
//! costs O(log n), never an O(n) deep copy.

use crate::model::comparison::BinaryComparison;
use crate::model::position::OptionPosition;
use crate::model::symbol::Symbol;
use crate::model::types::OptionRight;
use chrono::NaiveDate;
use im::{HashMap, HashSet, OrdMap};
use rust_decimal::Decimal;
use tracing::trace;

/// A persistent, indexed multiset of [`OptionPosition`]s scoped to one
/// underlying equity.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionPositionCollection {
    underlying: String,
    positions: HashMap<Symbol, OptionPosition>,
    by_right: HashMap<OptionRight, HashSet<Symbol>>,
    by_strike: OrdMap<Decimal, HashSet<Symbol>>,
    by_expiration: OrdMap<NaiveDate, HashSet<Symbol>>,
}

impl OptionPositionCollection {
    /// An empty collection scoped to `underlying`. The underlying must
    /// always be supplied up front — see the open question in
    /// `SPEC_FULL.md` §9: there is no "underlying-less" collection.
    pub fn empty(underlying: impl Into<String>) -> Self {
        let mut by_right = HashMap::new();
        by_right.insert(OptionRight::Call, HashSet::new());
        by_right.insert(OptionRight::Put, HashSet::new());
        OptionPositionCollection {
            underlying: underlying.into(),
            positions: HashMap::new(),
            by_right,
            by_strike: OrdMap::new(),
            by_expiration: OrdMap::new(),
        }
    }

    /// Builds a collection from holdings, keeping only the holdings that
    /// belong to `underlying`: the underlying equity symbol itself, or any
    /// option symbol whose `underlying()` matches. Everything else is
    /// skipped silently.
    pub fn create(underlying: impl Into<String>, holdings: impl IntoIterator<Item = OptionPosition>) -> Self {
        let underlying = underlying.into();
        let relevant = holdings.into_iter().filter(|p| match p.symbol() {
            Some(symbol) => symbol.underlying() == underlying,
            None => false,
        });
        Self::empty(underlying).add_range(relevant)
    }

    /// The underlying equity symbol this collection is scoped to.
    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    /// Total number of distinct symbols held, including the underlying.
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// Number of distinct put contracts held.
    pub fn unique_puts(&self) -> usize {
        self.by_right
            .get(&OptionRight::Put)
            .map(|s| s.len())
            .unwrap_or(0)
    }

    /// Number of distinct call contracts held.
    pub fn unique_calls(&self) -> usize {
        self.by_right
            .get(&OptionRight::Call)
            .map(|s| s.len())
            .unwrap_or(0)
    }

    /// Number of distinct option expirations represented.
    pub fn unique_expirations(&self) -> usize {
        self.by_expiration.len()
    }

    /// Number of distinct option contracts held (excludes the underlying).
    pub fn option_only_count(&self) -> usize {
        self.unique_puts() + self.unique_calls()
    }

    /// Signed quantity of the underlying held, or zero if none.
    pub fn underlying_quantity(&self) -> i64 {
        self.underlying_position()
            .map(|p| p.quantity())
            .unwrap_or(0)
    }

    fn underlying_symbol(&self) -> Symbol {
        Symbol::equity(self.underlying.clone())
    }

    fn underlying_position(&self) -> Option<&OptionPosition> {
        self.positions.get(&self.underlying_symbol())
    }

    /// `true` if no positions (including the underlying) are held.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Looks up the position held on `symbol`, if any.
    pub fn try_get(&self, symbol: &Symbol) -> Option<&OptionPosition> {
        self.positions.get(symbol)
    }

    /// `true` if a (nonzero) position is held on `symbol`.
    pub fn has_position(&self, symbol: &Symbol) -> bool {
        self.positions.contains_key(symbol)
    }

    /// Iterates over every position held, underlying included.
    pub fn iter(&self) -> impl Iterator<Item = &OptionPosition> {
        self.positions.values()
    }

    /// Merges `p` into the collection, per the §3 merge invariants: adding a
    /// position whose symbol already exists sums the quantities, and a
    /// resulting zero quantity removes the entry (and its index
    /// memberships) entirely.
    pub fn add(&self, p: OptionPosition) -> Self {
        let Some(symbol) = p.symbol().cloned() else {
            return self.clone();
        };
        let merged = match self.positions.get(&symbol) {
            Some(existing) => existing
                .checked_add(&p)
                .expect("merging positions on the same symbol can never mismatch"),
            None => p,
        };
        self.with_symbol_quantity(symbol, merged.quantity())
    }

    /// Single-pass bulk add; semantically `holdings.fold(self, add)` but
    /// expressed as one method so a caller isn't tempted to fold with a
    /// by-value accumulator and rebuild every index once per holding.
    pub fn add_range(&self, holdings: impl IntoIterator<Item = OptionPosition>) -> Self {
        let mut acc = self.clone();
        for p in holdings {
            acc = acc.add(p);
        }
        acc
    }

    /// Subtracts `p.quantity()` from the existing position on `p`'s symbol.
    /// A resulting zero removes the entry; a sign flip is permitted.
    pub fn remove(&self, p: &OptionPosition) -> Self {
        let Some(symbol) = p.symbol().cloned() else {
            return self.clone();
        };
        let existing = self
            .positions
            .get(&symbol)
            .cloned()
            .unwrap_or_else(OptionPosition::identity);
        let remaining = existing
            .checked_sub(p)
            .expect("subtracting a position from itself can never mismatch");
        self.with_symbol_quantity(symbol, remaining.quantity())
    }

    /// Removes every leg position of `strategy_match`, each scaled by the
    /// match's overall multiplier, from the collection.
    pub fn accept(
        &self,
        strategy_match: &crate::strategy::definition::StrategyDefinitionMatch,
    ) -> Self {
        let multiplier = strategy_match.multiplier();
        let mut acc = self.clone();
        for leg in strategy_match.legs() {
            let scaled = leg.position().clone().with_quantity(
                leg.position().quantity() / leg.multiplier() * multiplier,
            );
            acc = acc.remove(&scaled);
        }
        acc
    }

    fn with_symbol_quantity(&self, symbol: Symbol, quantity: i64) -> Self {
        let mut positions = self.positions.clone();
        let mut by_right = self.by_right.clone();
        let mut by_strike = self.by_strike.clone();
        let mut by_expiration = self.by_expiration.clone();

        if quantity == 0 {
            positions.remove(&symbol);
            if let Some(right) = symbol.right() {
                by_right.entry(right).or_insert_with(HashSet::new).remove(&symbol);
            }
            if let Some(strike) = symbol.strike() {
                remove_from_index(&mut by_strike, strike, &symbol);
            }
            if let Some(expiration) = symbol.expiration() {
                remove_from_index(&mut by_expiration, expiration, &symbol);
            }
        } else {
            positions.insert(symbol.clone(), OptionPosition::new(symbol.clone(), quantity));
            if let Some(right) = symbol.right() {
                by_right
                    .entry(right)
                    .or_insert_with(HashSet::new)
                    .insert(symbol.clone());
                if let Some(strike) = symbol.strike() {
                    insert_into_index(&mut by_strike, strike, symbol.clone());
                }
                if let Some(expiration) = symbol.expiration() {
                    insert_into_index(&mut by_expiration, expiration, symbol.clone());
                }
            }
        }

        trace!(%symbol, quantity, "updated collection entry");

        OptionPositionCollection {
            underlying: self.underlying.clone(),
            positions,
            by_right,
            by_strike,
            by_expiration,
        }
    }

    /// Retains only option positions whose right equals `right`, plus the
    /// underlying position if `include_underlying` and it is held. All
    /// three indexes are rebuilt from the surviving symbols.
    pub fn slice_right(&self, right: OptionRight, include_underlying: bool) -> Self {
        let symbols = self
            .by_right
            .get(&right)
            .cloned()
            .unwrap_or_else(HashSet::new);
        self.rebuild_from_symbols(symbols, include_underlying)
    }

    /// Retains only option positions whose strike satisfies
    /// `comparison(strike, reference)`, plus the underlying if requested.
    pub fn slice_strike(
        &self,
        comparison: BinaryComparison,
        reference: Decimal,
        include_underlying: bool,
    ) -> Self {
        let matching = comparison.filter_sorted(&self.by_strike, &reference);
        let symbols = union_all(matching.values());
        self.rebuild_from_symbols(symbols, include_underlying)
    }

    /// Retains only option positions whose expiration satisfies
    /// `comparison(expiration, reference)`, plus the underlying if requested.
    pub fn slice_expiration(
        &self,
        comparison: BinaryComparison,
        reference: NaiveDate,
        include_underlying: bool,
    ) -> Self {
        let matching = comparison.filter_sorted(&self.by_expiration, &reference);
        let symbols = union_all(matching.values());
        self.rebuild_from_symbols(symbols, include_underlying)
    }

    fn rebuild_from_symbols(&self, symbols: HashSet<Symbol>, include_underlying: bool) -> Self {
        let mut acc = Self::empty(self.underlying.clone());
        for symbol in symbols {
            if let Some(p) = self.positions.get(&symbol) {
                acc = acc.add(p.clone());
            }
        }
        if include_underlying {
            if let Some(p) = self.underlying_position() {
                acc = acc.add(p.clone());
            }
        }
        acc
    }
}

fn union_all<'a>(sets: impl Iterator<Item = &'a HashSet<Symbol>>) -> HashSet<Symbol> {
    sets.fold(HashSet::new(), |acc, s| acc.union(s.clone()))
}

fn insert_into_index<K: Ord + Clone>(index: &mut OrdMap<K, HashSet<Symbol>>, key: K, symbol: Symbol) {
    index
        .entry(key)
        .or_insert_with(HashSet::new)
        .insert(symbol);
}

fn remove_from_index<K: Ord + Clone>(index: &mut OrdMap<K, HashSet<Symbol>>, key: K, symbol: &Symbol) {
    if let Some(set) = index.get_mut(&key) {
        set.remove(symbol);
        if set.is_empty() {
            index.remove(&key);
        }
    }
}
