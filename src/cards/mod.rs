//! Card model: attribute domains, cards, and the deck.
//!
//! ## Key Types
//!
//! - `Shape`, `Color`, `Count`, `Shading`: the four 3-valued domains
//! - `Attribute`: shared domain behavior (indexing, completion)
//! - `Card`: one value from each domain
//!
//! The deck is the cross product of the four domains, 81 cards, each
//! exactly once.

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{Attribute, Color, Count, Shading, Shape, DOMAIN_SIZE};
pub use card::{Card, DECK_SIZE};
pub use deck::{new_shuffled_deck, universe};
