/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # Strategy Module
//!
//! Everything to do with *what a strategy is*: the declarative definitions
//! the matcher searches for ([`definition`]), the built-in library of named
//! strategies ([`library`]), and the plain records a successful match is
//! reported as ([`output`]).

pub mod definition;
pub mod library;
pub mod output;

pub use definition::{LegDefinition, StrategyDefinition, StrategyDefinitionMatch, StrategyLegMatch};
pub use output::{OptionLeg, OrderType, Strategy, UnderlyingLeg};
