//! What a command did, for the presentation layer to show.
//!
//! An outcome carries a status line (its `Display`) and, where the player
//! should see them, the cards involved. Formatting the cards is left to a
//! [`CardRenderer`](crate::render::CardRenderer).

use super::command::SelectionError;
use crate::cards::Card;
use crate::core::config::SET_SIZE;

/// Result of applying one command to a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Three cards were dealt face up.
    Drew { cards: [Card; SET_SIZE] },
    /// Draw refused: the deck has fewer than 3 cards.
    DeckEmpty,
    /// Draw refused: the pool is at the cap.
    MaxReached { max: usize },
    /// The computer found and removed a Set.
    ComputerFound { set: [Card; SET_SIZE] },
    /// The computer found no Set in the pool.
    NoSetFound,
    /// The player's selection was a Set and has been removed.
    SetAccepted { set: [Card; SET_SIZE] },
    /// The player's selection was not a Set. Nothing changed.
    InvalidSet { cards: [Card; SET_SIZE] },
    /// Sets found so far in this session.
    FoundCount(u32),
    /// Sets present among the face-up cards.
    ExistCount(usize),
    /// The input could not be read as a selection.
    Malformed(SelectionError),
}

impl Outcome {
    /// Cards to show under the status line.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Outcome::ComputerFound { set } => set,
            Outcome::InvalidSet { cards } => cards,
            _ => &[],
        }
    }

    /// Whether the command changed the deck, pool or counter.
    #[must_use]
    pub fn changed_state(&self) -> bool {
        matches!(
            self,
            Outcome::Drew { .. } | Outcome::ComputerFound { .. } | Outcome::SetAccepted { .. }
        )
    }

    /// Whether a Set was confirmed and removed.
    #[must_use]
    pub fn confirmed_set(&self) -> Option<&[Card; SET_SIZE]> {
        match self {
            Outcome::ComputerFound { set } | Outcome::SetAccepted { set } => Some(set),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Drew { .. } => write!(f, "{} more cards are face up.", SET_SIZE),
            Outcome::DeckEmpty => {
                write!(f, "The deck is empty! Cannot draw any more cards from the deck.")
            }
            Outcome::MaxReached { max } => write!(f, "Max number of face up cards reached: {}", max),
            Outcome::ComputerFound { .. } => write!(f, "The computer found the following Set:"),
            Outcome::NoSetFound => write!(f, "Could not find a Set! Type \"draw\" or restart the game."),
            Outcome::SetAccepted { .. } => write!(f, "You found a Set! Well done."),
            Outcome::InvalidSet { .. } => {
                write!(f, "The following cards do not form a valid Set. Try again :)")
            }
            Outcome::FoundCount(n) => write!(f, "So far {} Sets have been found. Good job!", n),
            Outcome::ExistCount(n) => {
                write!(f, "There are {} different Sets existing in the board.", n)
            }
            Outcome::Malformed(err) => write!(f, "{}", err),
        }
    }
}
