/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
******************************************************************************/

//! # Utils Module
//!
//! Ambient concerns that sit outside the matching algorithm itself.
//!
//! ### Logger (`logger`)
//!
//! Structured logging via `tracing`, with configurable log levels. Safe and
//! idempotent to call more than once.
//!
//! ```rust
//! use strategy_matcher::utils::logger::setup_logger;
//!
//! setup_logger();
//! ```

pub mod logger;

pub use logger::{setup_logger, setup_logger_with_level};
