//! Error types.
//!
//! Only caller defects and rejected setup data are errors. Player mistakes
//! (bad indices, an invalid Set, drawing from an empty deck) are reported
//! as [`Outcome`](crate::game::Outcome) values instead.

use thiserror::Error;

use crate::cards::Card;

/// Errors raised by the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// A function was called with arguments that break its contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration cannot describe a playable session.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The same card appears twice across deck and pool.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),

    /// The face-up pool holds more cards than the cap allows.
    #[error("pool of {size} cards exceeds the maximum of {max}")]
    PoolOverCapacity {
        /// Cards in the offending pool.
        size: usize,
        /// Configured cap.
        max: usize,
    },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, SetError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Count, Shading, Shape};

    #[test]
    fn test_error_messages() {
        let err = SetError::InvalidArgument("expected 3 cards, got 2".to_string());
        assert_eq!(err.to_string(), "invalid argument: expected 3 cards, got 2");

        let err = SetError::PoolOverCapacity { size: 21, max: 18 };
        assert_eq!(err.to_string(), "pool of 21 cards exceeds the maximum of 18");

        let card = Card::new(Shape::Oval, Color::Red, Count::One, Shading::Solid);
        let err = SetError::DuplicateCard(card);
        assert_eq!(err.to_string(), "duplicate card: one red solid oval");
    }
}
