//! The 81-card universe and shuffled decks.

use super::attributes::{Attribute, Color, Count, Shading, Shape};
use super::card::{Card, DECK_SIZE};
use crate::core::rng::GameRng;

/// All 81 cards in a fixed order (shape, then color, count, shading).
///
/// The order matches [`Card::index`]: `universe()[i].index() == i`.
#[must_use]
pub fn universe() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for shape in Shape::ALL {
        for color in Color::ALL {
            for count in Count::ALL {
                for shading in Shading::ALL {
                    cards.push(Card::new(shape, color, count, shading));
                }
            }
        }
    }
    cards
}

/// A uniformly shuffled permutation of the 81 cards.
///
/// Dealing takes cards from the end of the returned vector.
#[must_use]
pub fn new_shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = universe();
    rng.shuffle(&mut deck);
    deck
}
