//! # Dex Catalog
//!
//! The reference data crate - entity records, the generation table and the
//! read-only catalog the guessing engine draws targets from.
//! This crate holds no game state; once built, a [`Catalog`] is never mutated.

pub mod catalog;
pub mod entities;
pub mod generation;
pub mod random;

pub use catalog::*;
pub use entities::*;
pub use generation::*;
pub use random::*;
