//! Core engine types: RNG, configuration, errors.
//!
//! Nothing in here knows about cards beyond the deck size; the card
//! model lives in `cards` and the rules in `rules`.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{SetConfig, TerminationPolicy, DEFAULT_POOL_SIZE, DRAW_SIZE, MAX_POOL_SIZE, SET_SIZE};
pub use error::{Result, SetError};
pub use rng::GameRng;
