//! Player commands, parsed from one line of input.
//!
//! Recognized words are `draw`, `find`, `how many found` and
//! `how many exist` (case and surrounding whitespace ignored). Anything
//! else is read as a selection of three 1-based card positions, e.g.
//! `5 2 10`.

use smallvec::SmallVec;
use thiserror::Error;

use crate::core::config::SET_SIZE;

/// A command accepted while the session awaits input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Deal 3 more cards face up.
    Draw,
    /// Let the computer find a Set.
    Find,
    /// Report how many Sets have been found so far.
    HowManyFound,
    /// Report how many Sets exist among the face-up cards.
    HowManyExist,
    /// Claim a Set by position. Positions are 1-based and pairwise
    /// distinct.
    Select([usize; SET_SIZE]),
}

/// Why a selection could not be read. The `Display` text is the message
/// shown to the player.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Not exactly 3 different positions.
    #[error("Wrong number of different indices! Please insert 3 different indices exactly.")]
    WrongCount,

    /// A token is not an integer.
    #[error("'{0}' is not a valid index (not integer).")]
    NotInteger(String),

    /// A position is outside `1..=max`.
    #[error("'{token}' is not a valid index. It is not in the range of 1...{max}.")]
    OutOfRange {
        /// The offending token as typed.
        token: String,
        /// Current pool size.
        max: usize,
    },
}

impl Command {
    /// Parse a line of input against a pool of `pool_size` cards.
    ///
    /// ```
    /// use set_game::game::{Command, SelectionError};
    ///
    /// assert_eq!(Command::parse("  DRAW ", 12), Ok(Command::Draw));
    /// assert_eq!(Command::parse("5 2 10", 12), Ok(Command::Select([5, 2, 10])));
    /// assert_eq!(Command::parse("5 2", 12), Err(SelectionError::WrongCount));
    /// ```
    pub fn parse(line: &str, pool_size: usize) -> Result<Command, SelectionError> {
        let normalized = line.trim().to_lowercase();
        let tokens: SmallVec<[&str; SET_SIZE]> = normalized.split_whitespace().collect();

        match tokens.as_slice() {
            ["draw"] => return Ok(Command::Draw),
            ["find"] => return Ok(Command::Find),
            ["how", "many", "found"] => return Ok(Command::HowManyFound),
            ["how", "many", "exist"] => return Ok(Command::HowManyExist),
            _ => {}
        }

        parse_selection(&tokens, pool_size).map(Command::Select)
    }
}

fn parse_selection(tokens: &[&str], pool_size: usize) -> Result<[usize; SET_SIZE], SelectionError> {
    // Distinct tokens first, before any of them is read as a number
    match tokens {
        [a, b, c] if a != b && b != c && a != c => {}
        _ => return Err(SelectionError::WrongCount),
    }

    let mut positions = [0usize; SET_SIZE];
    for (slot, &token) in positions.iter_mut().zip(tokens) {
        let value: i64 = token
            .parse()
            .map_err(|_| SelectionError::NotInteger(token.to_string()))?;
        if value < 1 || value > pool_size as i64 {
            return Err(SelectionError::OutOfRange {
                token: token.to_string(),
                max: pool_size,
            });
        }
        *slot = value as usize;
    }

    let [i, j, k] = positions;
    if i == j || j == k || i == k {
        return Err(SelectionError::WrongCount);
    }
    Ok(positions)
}
