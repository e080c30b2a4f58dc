//! The four attribute domains of a Set card.
//!
//! Every domain has exactly three values. That is what makes the
//! completing card unique: two equal values complete with the same value,
//! two different values complete with the one value left over.
//!
//! Each value has an index in `0..3`. With indices, "all same or all
//! different" is the same as "the three indices sum to a multiple of 3",
//! and the completing index of `a` and `b` is `(6 - a - b) % 3`.

use serde::{Deserialize, Serialize};

/// Number of values in each attribute domain.
pub const DOMAIN_SIZE: usize = 3;

/// Shared behavior of the four 3-valued attribute domains.
pub trait Attribute: Copy + Eq + Sized + 'static {
    /// All values, in index order.
    const ALL: [Self; DOMAIN_SIZE];

    /// Position of this value in `ALL`.
    fn index(self) -> usize;

    /// Value at `index`, if `index < 3`.
    #[must_use]
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The value that makes `{self, other, result}` all same or all
    /// different.
    #[must_use]
    fn completing(self, other: Self) -> Self {
        Self::ALL[(2 * DOMAIN_SIZE - self.index() - other.index()) % DOMAIN_SIZE]
    }
}

/// Shape printed on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    Oval,
    Squiggle,
    Diamond,
}

/// Ink color of the shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Purple,
    Green,
}

/// How many shapes are printed (1 to 3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Count {
    One,
    Two,
    Three,
}

/// Fill of the shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shading {
    Solid,
    Striped,
    Outlined,
}

impl Attribute for Shape {
    const ALL: [Self; DOMAIN_SIZE] = [Shape::Oval, Shape::Squiggle, Shape::Diamond];

    fn index(self) -> usize {
        self as usize
    }
}

impl Attribute for Color {
    const ALL: [Self; DOMAIN_SIZE] = [Color::Red, Color::Purple, Color::Green];

    fn index(self) -> usize {
        self as usize
    }
}

impl Attribute for Count {
    const ALL: [Self; DOMAIN_SIZE] = [Count::One, Count::Two, Count::Three];

    fn index(self) -> usize {
        self as usize
    }
}

impl Attribute for Shading {
    const ALL: [Self; DOMAIN_SIZE] = [Shading::Solid, Shading::Striped, Shading::Outlined];

    fn index(self) -> usize {
        self as usize
    }
}

impl Count {
    /// The count as a number, 1 to 3.
    #[must_use]
    pub fn value(self) -> usize {
        self.index() + 1
    }
}

impl Shape {
    /// Lowercase name, pluralized when more than one shape is printed.
    #[must_use]
    pub fn name(self, count: Count) -> &'static str {
        match (self, count) {
            (Shape::Oval, Count::One) => "oval",
            (Shape::Oval, _) => "ovals",
            (Shape::Squiggle, Count::One) => "squiggle",
            (Shape::Squiggle, _) => "squiggles",
            (Shape::Diamond, Count::One) => "diamond",
            (Shape::Diamond, _) => "diamonds",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Purple => "purple",
            Color::Green => "green",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Count::One => "one",
            Count::Two => "two",
            Count::Three => "three",
        };
        f.write_str(name)
    }
}

impl std::fmt::Display for Shading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Shading::Solid => "solid",
            Shading::Striped => "striped",
            Shading::Outlined => "outlined",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_domain<A: Attribute + std::fmt::Debug>() {
        for (i, value) in A::ALL.iter().enumerate() {
            assert_eq!(value.index(), i);
            assert_eq!(A::from_index(i), Some(*value));
        }
        assert_eq!(A::from_index(DOMAIN_SIZE), None);

        for a in A::ALL {
            for b in A::ALL {
                let c = a.completing(b);
                if a == b {
                    assert_eq!(c, a, "equal values complete with themselves");
                } else {
                    assert!(c != a && c != b, "{:?} and {:?} completed with {:?}", a, b, c);
                }
                // Symmetric
                assert_eq!(b.completing(a), c);
            }
        }
    }

    #[test]
    fn test_all_domains() {
        check_domain::<Shape>();
        check_domain::<Color>();
        check_domain::<Count>();
        check_domain::<Shading>();
    }

    #[test]
    fn test_count_value() {
        assert_eq!(Count::One.value(), 1);
        assert_eq!(Count::Two.value(), 2);
        assert_eq!(Count::Three.value(), 3);
    }

    #[test]
    fn test_shape_name() {
        assert_eq!(Shape::Diamond.name(Count::One), "diamond");
        assert_eq!(Shape::Squiggle.name(Count::Three), "squiggles");
    }
}
