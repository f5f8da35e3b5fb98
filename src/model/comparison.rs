/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # Binary Comparison Module
//!
//! A reified comparison operator. Keeping the operator as data (rather than
//! a closure) is what lets [`crate::predicate::LegPredicate`] decide, without
//! running anything, whether a predicate can be pushed down into one of
//! `OptionPositionCollection`'s sorted indexes instead of scanning.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six arithmetic comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryComparison {
    /// `=`
    Eq,
    /// `≠`
    Ne,
    /// `<`
    Lt,
    /// `≤`
    Le,
    /// `>`
    Gt,
    /// `≥`
    Ge,
}

impl BinaryComparison {
    /// Standard comparison semantics.
    pub fn evaluate<T: PartialOrd>(&self, a: &T, b: &T) -> bool {
        match self {
            BinaryComparison::Eq => a == b,
            BinaryComparison::Ne => a != b,
            BinaryComparison::Lt => a < b,
            BinaryComparison::Le => a <= b,
            BinaryComparison::Gt => a > b,
            BinaryComparison::Ge => a >= b,
        }
    }

    /// The comparison equivalent to swapping operands: `a <cmp> b` becomes
    /// `b <cmp.flip_operands()> a`. `=` and `≠` are self-dual.
    pub fn flip_operands(&self) -> BinaryComparison {
        match self {
            BinaryComparison::Eq => BinaryComparison::Eq,
            BinaryComparison::Ne => BinaryComparison::Ne,
            BinaryComparison::Lt => BinaryComparison::Gt,
            BinaryComparison::Le => BinaryComparison::Ge,
            BinaryComparison::Gt => BinaryComparison::Lt,
            BinaryComparison::Ge => BinaryComparison::Le,
        }
    }

    /// Filters a plain list down to the elements `x` with `cmp(x, reference)`.
    pub fn filter_list<'a, T: PartialOrd>(&self, xs: &'a [T], reference: &T) -> Vec<&'a T> {
        xs.iter().filter(|x| self.evaluate(x, reference)).collect()
    }

    /// Filters a sorted map down to the entries whose key satisfies
    /// `cmp(key, reference)`, exploiting the map's order: `<`/`≤`/`>`/`≥`
    /// take a single range slice, `=` takes the single matching entry, and
    /// `≠` unions the two open sides. `im::OrdMap` shares structure with the
    /// input, so every branch is O(log n + k) in the result size `k`.
    pub fn filter_sorted<K, V>(&self, map: &OrdMap<K, V>, reference: &K) -> OrdMap<K, V>
    where
        K: Ord + Clone,
        V: Clone,
    {
        match self {
            BinaryComparison::Lt => {
                let (left, _) = map.split(reference);
                left
            }
            BinaryComparison::Le => {
                let (left, pivot, right) = map.split_lookup(reference);
                let _ = right;
                match pivot {
                    Some(v) => left.update(reference.clone(), v),
                    None => left,
                }
            }
            BinaryComparison::Gt => {
                let (_, pivot, right) = map.split_lookup(reference);
                let _ = pivot;
                right
            }
            BinaryComparison::Ge => {
                let (_, pivot, right) = map.split_lookup(reference);
                match pivot {
                    Some(v) => right.update(reference.clone(), v),
                    None => right,
                }
            }
            BinaryComparison::Eq => match map.get(reference) {
                Some(v) => OrdMap::unit(reference.clone(), v.clone()),
                None => OrdMap::new(),
            },
            BinaryComparison::Ne => {
                let (left, _) = map.split(reference);
                let (_, right) = map.split(reference);
                left.union(right)
            }
        }
    }
}

impl fmt::Display for BinaryComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryComparison::Eq => "=",
            BinaryComparison::Ne => "\u{2260}",
            BinaryComparison::Lt => "<",
            BinaryComparison::Le => "\u{2264}",
            BinaryComparison::Gt => ">",
            BinaryComparison::Ge => "\u{2265}",
        };
        write!(f, "{symbol}")
    }
}
