//! A single Set card.

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, Color, Count, Shading, Shape, DOMAIN_SIZE};

/// Number of distinct cards (3^4).
pub const DECK_SIZE: usize = DOMAIN_SIZE * DOMAIN_SIZE * DOMAIN_SIZE * DOMAIN_SIZE;

/// One card: a value from each of the four attribute domains.
///
/// Cards are plain values. Two cards are the same card exactly when all
/// four attributes match.
///
/// ## Example
///
/// ```
/// use set_game::cards::{Card, Color, Count, Shading, Shape};
///
/// let a = Card::new(Shape::Oval, Color::Red, Count::One, Shading::Solid);
/// let b = Card::new(Shape::Oval, Color::Red, Count::Two, Shading::Solid);
///
/// let c = Card::completing(a, b);
/// assert_eq!(c, Card::new(Shape::Oval, Color::Red, Count::Three, Shading::Solid));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub shape: Shape,
    pub color: Color,
    pub count: Count,
    pub shading: Shading,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(shape: Shape, color: Color, count: Count, shading: Shading) -> Self {
        Self {
            shape,
            color,
            count,
            shading,
        }
    }

    /// The unique card that forms a Set with `a` and `b`.
    ///
    /// Derived attribute by attribute: kept where `a` and `b` agree, the
    /// remaining third value where they differ. For `a != b` the result
    /// differs from both inputs, since at least one attribute differs and
    /// there the result takes a value neither input has.
    #[must_use]
    pub fn completing(a: Card, b: Card) -> Card {
        Card {
            shape: a.shape.completing(b.shape),
            color: a.color.completing(b.color),
            count: a.count.completing(b.count),
            shading: a.shading.completing(b.shading),
        }
    }

    /// Compact index in `0..81`, reading the attribute indices as base-3
    /// digits (shape most significant, shading least).
    #[must_use]
    pub fn index(self) -> usize {
        ((self.shape.index() * DOMAIN_SIZE + self.color.index()) * DOMAIN_SIZE + self.count.index())
            * DOMAIN_SIZE
            + self.shading.index()
    }

    /// Inverse of [`Card::index`]. Returns `None` for `index >= 81`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Card> {
        if index >= DECK_SIZE {
            return None;
        }
        let shading = Shading::from_index(index % DOMAIN_SIZE)?;
        let count = Count::from_index(index / DOMAIN_SIZE % DOMAIN_SIZE)?;
        let color = Color::from_index(index / (DOMAIN_SIZE * DOMAIN_SIZE) % DOMAIN_SIZE)?;
        let shape = Shape::from_index(index / (DOMAIN_SIZE * DOMAIN_SIZE * DOMAIN_SIZE))?;
        Some(Card::new(shape, color, count, shading))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.count,
            self.color,
            self.shading,
            self.shape.name(self.count)
        )
    }
}
