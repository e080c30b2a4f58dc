//! Presentation of cards for a terminal.
//!
//! The engine hands out plain card data; a `CardRenderer` turns it into
//! text. `AsciiRenderer` draws text art, `PlainRenderer` one line per card.

pub mod ascii;

pub use ascii::{AsciiRenderer, CARD_WIDTH};

use crate::cards::Card;

/// Turns cards into printable text.
pub trait CardRenderer {
    /// A group of cards, e.g. a found Set or a rejected selection.
    fn render_cards(&self, cards: &[Card]) -> String;

    /// The face-up pool, labelled with 1-based positions.
    fn render_board(&self, pool: &[Card]) -> String;
}

/// One card per line, in words.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainRenderer;

impl CardRenderer for PlainRenderer {
    fn render_cards(&self, cards: &[Card]) -> String {
        cards
            .iter()
            .map(|card| format!("  - {}", card))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_board(&self, pool: &[Card]) -> String {
        let mut out = String::from("Board:\n");
        for (i, card) in pool.iter().enumerate() {
            out.push_str(&format!("{:>3}. {}\n", i + 1, card));
        }
        out
    }
}

/// Instructions shown when a game starts.
pub const WELCOME: &str = "\
Play Set! See instructions at: https://en.wikipedia.org/wiki/Set_(card_game)
- To select a Set, type 3 indices that match 3 cards of your choice, for example: \"5 2 10\".
- To draw 3 more cards, type \"draw\".
- Want the computer to find a Set? Type \"find\".
- To see how many Sets exist in the board, type \"how many exist\".
- To track how many Sets have been found, type \"how many found\".";

/// Shown after the instructions; the game starts on the next line of input.
pub const PRESS_TO_START: &str = "Press Enter to start.";
