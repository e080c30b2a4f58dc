//! Session configuration.
//!
//! The deck is always the full 81-card universe and cards are always
//! dealt in batches of [`DRAW_SIZE`]. What a session may tune is the size
//! of the face-up pool and when the game counts as over.

use serde::{Deserialize, Serialize};

use super::error::{Result, SetError};
use crate::cards::DECK_SIZE;

/// Number of cards in a Set.
pub const SET_SIZE: usize = 3;

/// Number of cards dealt by one draw.
pub const DRAW_SIZE: usize = SET_SIZE;

/// Default number of face-up cards after the initial deal.
pub const DEFAULT_POOL_SIZE: usize = 12;

/// Default hard cap on face-up cards.
pub const MAX_POOL_SIZE: usize = 18;

/// When a session ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationPolicy {
    /// Over when the pool holds no Set and no more cards can be drawn
    /// (deck empty, or pool already at the cap).
    #[default]
    NoSetsLeft,
    /// As `NoSetsLeft`, and also over as soon as the pool drops below the
    /// initial pool size.
    PoolBelowDefault,
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetConfig {
    /// Cards dealt face up at the start, and the level replenishment
    /// tops the pool back up to.
    pub initial_pool_size: usize,

    /// Face-up cards never exceed this.
    pub max_pool_size: usize,

    /// Game-over rule.
    pub termination: TerminationPolicy,
}

impl Default for SetConfig {
    fn default() -> Self {
        Self {
            initial_pool_size: DEFAULT_POOL_SIZE,
            max_pool_size: MAX_POOL_SIZE,
            termination: TerminationPolicy::default(),
        }
    }
}

impl SetConfig {
    /// Create the standard configuration (12 face up, cap 18).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial pool size.
    #[must_use]
    pub fn with_initial_pool_size(mut self, size: usize) -> Self {
        self.initial_pool_size = size;
        self
    }

    /// Set the pool cap.
    #[must_use]
    pub fn with_max_pool_size(mut self, max: usize) -> Self {
        self.max_pool_size = max;
        self
    }

    /// Set the termination policy.
    #[must_use]
    pub fn with_termination(mut self, policy: TerminationPolicy) -> Self {
        self.termination = policy;
        self
    }

    /// Check that the configuration describes a playable session.
    pub fn validate(&self) -> Result<()> {
        if self.initial_pool_size < SET_SIZE {
            return Err(SetError::InvalidConfig(format!(
                "initial pool size {} is smaller than a Set",
                self.initial_pool_size
            )));
        }
        if self.initial_pool_size > self.max_pool_size {
            return Err(SetError::InvalidConfig(format!(
                "initial pool size {} exceeds the maximum of {}",
                self.initial_pool_size, self.max_pool_size
            )));
        }
        if self.max_pool_size > DECK_SIZE {
            return Err(SetError::InvalidConfig(format!(
                "maximum pool size {} exceeds the deck size {}",
                self.max_pool_size, DECK_SIZE
            )));
        }
        Ok(())
    }
}
