//! Set validity.
//!
//! Three cards form a Set when, for every attribute, they are either all
//! the same or all different. Two of a kind on any attribute breaks it.

use rustc_hash::FxHashSet;

use crate::cards::{Attribute, Card};
use crate::core::config::SET_SIZE;
use crate::core::error::{Result, SetError};

/// Whether three cards form a Set.
#[must_use]
pub fn is_set(a: Card, b: Card, c: Card) -> bool {
    legal_attribute(a.shape, b.shape, c.shape)
        && legal_attribute(a.color, b.color, c.color)
        && legal_attribute(a.count, b.count, c.count)
        && legal_attribute(a.shading, b.shading, c.shading)
}

/// Whether a slice of cards forms a Set.
///
/// Returns `SetError::InvalidArgument` unless given exactly 3 cards: a
/// wrong-sized selection is a caller bug, not an invalid Set.
///
/// ```
/// use set_game::cards::{Card, Color, Count, Shading, Shape};
/// use set_game::rules::is_legal_set;
///
/// let cards = [
///     Card::new(Shape::Oval, Color::Red, Count::One, Shading::Solid),
///     Card::new(Shape::Oval, Color::Red, Count::Two, Shading::Solid),
///     Card::new(Shape::Oval, Color::Red, Count::Three, Shading::Solid),
/// ];
/// assert_eq!(is_legal_set(&cards), Ok(true));
/// assert!(is_legal_set(&cards[..2]).is_err());
/// ```
pub fn is_legal_set(cards: &[Card]) -> Result<bool> {
    match cards {
        &[a, b, c] => Ok(is_set(a, b, c)),
        _ => Err(SetError::InvalidArgument(format!(
            "a Set needs exactly {} cards, got {}",
            SET_SIZE,
            cards.len()
        ))),
    }
}

/// Distinct-value count over one attribute must be 1 or 3.
fn legal_attribute<A: Attribute + std::hash::Hash>(x: A, y: A, z: A) -> bool {
    let distinct: FxHashSet<A> = [x, y, z].into_iter().collect();
    distinct.len() != 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Color, Count, Shading, Shape};

    fn card(shape: Shape, color: Color, count: Count, shading: Shading) -> Card {
        Card::new(shape, color, count, shading)
    }

    #[test]
    fn test_counts_differ_rest_same() {
        let cards = [
            card(Shape::Oval, Color::Red, Count::One, Shading::Solid),
            card(Shape::Oval, Color::Red, Count::Two, Shading::Solid),
            card(Shape::Oval, Color::Red, Count::Three, Shading::Solid),
        ];
        assert_eq!(is_legal_set(&cards), Ok(true));
    }

    #[test]
    fn test_two_of_a_kind_is_not_a_set() {
        // Count: One, One, Two
        let cards = [
            card(Shape::Oval, Color::Red, Count::One, Shading::Solid),
            card(Shape::Oval, Color::Purple, Count::One, Shading::Solid),
            card(Shape::Oval, Color::Green, Count::Two, Shading::Solid),
        ];
        assert_eq!(is_legal_set(&cards), Ok(false));
    }

    #[test]
    fn test_all_attributes_differ() {
        assert!(is_set(
            card(Shape::Oval, Color::Red, Count::One, Shading::Solid),
            card(Shape::Squiggle, Color::Purple, Count::Two, Shading::Striped),
            card(Shape::Diamond, Color::Green, Count::Three, Shading::Outlined),
        ));
    }

    #[test]
    fn test_symmetric_under_permutation() {
        let a = card(Shape::Oval, Color::Red, Count::One, Shading::Solid);
        let b = card(Shape::Squiggle, Color::Red, Count::Two, Shading::Striped);
        let c = card(Shape::Diamond, Color::Red, Count::Three, Shading::Outlined);
        let d = card(Shape::Diamond, Color::Green, Count::Three, Shading::Outlined);

        for (x, y, z) in [(a, b, c), (a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)] {
            assert!(is_set(x, y, z));
        }
        for (x, y, z) in [(a, b, d), (a, d, b), (b, a, d), (b, d, a), (d, a, b), (d, b, a)] {
            assert!(!is_set(x, y, z));
        }
    }

    #[test]
    fn test_wrong_size_is_invalid_argument() {
        let a = card(Shape::Oval, Color::Red, Count::One, Shading::Solid);

        assert!(matches!(is_legal_set(&[]), Err(SetError::InvalidArgument(_))));
        assert!(matches!(is_legal_set(&[a, a]), Err(SetError::InvalidArgument(_))));
        assert!(matches!(is_legal_set(&[a, a, a, a]), Err(SetError::InvalidArgument(_))));
    }
}
