//! # set-game
//!
//! The card game Set: 81 cards, each a combination of shape, color, count
//! and shading. Players look for three cards that are, on every
//! attribute, all the same or all different.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: validity and discovery are functions over card
//!    slices, with no shared mutable state.
//!
//! 2. **One owner for game state**: `Session` holds deck, pool and
//!    counters and is mutated only through its commands.
//!
//! 3. **Reproducible**: the shuffle is the only randomness, and it is
//!    seeded.
//!
//! ## Architecture
//!
//! - **Completing card**: any two distinct cards determine the unique
//!   third card of their Set, so finding a Set is a pair scan plus hash
//!   lookups, O(n²) instead of O(n³).
//!
//! - **Outcomes, not prints**: commands return `Outcome` values; text art
//!   and colour live behind the `CardRenderer` trait.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: attribute domains, cards, deck
//! - `rules`: Set validity, discovery and counting
//! - `game`: commands, outcomes, the session controller
//! - `render`: terminal presentation of cards

pub mod cards;
pub mod core;
pub mod game;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameRng, Result, SetConfig, SetError, TerminationPolicy};

pub use crate::cards::{Attribute, Card, Color, Count, Shading, Shape};

pub use crate::rules::{all_sets, count_sets, find_set, is_legal_set, is_set};

pub use crate::game::{Command, GameSummary, Outcome, SelectionError, Session, SessionEvent};

pub use crate::render::{AsciiRenderer, CardRenderer, PlainRenderer};
