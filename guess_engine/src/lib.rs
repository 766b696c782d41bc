//! # Guess Engine
//!
//! The game core of the Dex guessing game. This crate draws a hidden target
//! from a [`dex_catalog::Catalog`], scores each guess against it and reveals
//! hints as failed attempts accumulate.
//!
//! ## Core Components
//!
//! - **matcher**: Pure comparison of a guessed entity against the target
//! - **hints**: Hint channels and the scheduler deciding when to reveal them
//! - **session**: The `NotStarted -> InProgress -> Won/Lost` state machine
//! - **rules**: Tunable constants (attempt ceiling, hint cadence), loadable from TOML
//!
//! ## Design Philosophy
//!
//! - **Single Writer**: A session is mutated only through `start`, `submit_guess` and `restart`
//! - **Synchronous**: Every transition is complete when the call returns; animation is the caller's concern
//! - **Deterministic on Demand**: All randomness flows through an injectable `RandomSource`

pub mod hints;
pub mod matcher;
pub mod rules;
pub mod session;

pub use hints::*;
pub use matcher::*;
pub use rules::*;
pub use session::*;
