//! Finding and counting Sets in a pool of face-up cards.
//!
//! `find_set` walks pairs and looks up the completing card in a hash set,
//! O(n²). `count_sets` and `all_sets` check every triple, O(n³); with at
//! most 18 cards that is 816 triples.

use rustc_hash::FxHashSet;

use super::validity::is_set;
use crate::cards::Card;

/// Find one Set in `pool`.
///
/// Pairs are scanned in order `(0, 1), (0, 2), ..., (1, 2), ...` and the
/// first pair whose completing card is in the pool wins, so the result is
/// deterministic for a given pool order. The returned cards are the pair
/// followed by the completing card.
#[must_use]
pub fn find_set(pool: &[Card]) -> Option<[Card; 3]> {
    let present: FxHashSet<Card> = pool.iter().copied().collect();

    for (i, &first) in pool.iter().enumerate() {
        for &second in &pool[i + 1..] {
            let third = Card::completing(first, second);
            if present.contains(&third) {
                return Some([first, second, third]);
            }
        }
    }
    None
}

/// Count every Set in `pool` by testing all triples.
#[must_use]
pub fn count_sets(pool: &[Card]) -> usize {
    triples(pool.len())
        .filter(|&[i, j, k]| is_set(pool[i], pool[j], pool[k]))
        .count()
}

/// Positions of every Set in `pool`, as `[i, j, k]` with `i < j < k`.
#[must_use]
pub fn all_sets(pool: &[Card]) -> Vec<[usize; 3]> {
    triples(pool.len())
        .filter(|&[i, j, k]| is_set(pool[i], pool[j], pool[k]))
        .collect()
}

/// All index triples `i < j < k < n`, in lexicographic order.
fn triples(n: usize) -> impl Iterator<Item = [usize; 3]> {
    (0..n).flat_map(move |i| {
        ((i + 1)..n).flat_map(move |j| ((j + 1)..n).map(move |k| [i, j, k]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{universe, Color, Count, Shading, Shape};

    fn card(shape: Shape, color: Color, count: Count, shading: Shading) -> Card {
        Card::new(shape, color, count, shading)
    }

    /// Four Oval Solid cards on a 2x2 color/count grid: any three of them
    /// repeat one color, so no Set.
    fn set_free_pool() -> Vec<Card> {
        vec![
            card(Shape::Oval, Color::Red, Count::One, Shading::Solid),
            card(Shape::Oval, Color::Red, Count::Two, Shading::Solid),
            card(Shape::Oval, Color::Purple, Count::One, Shading::Solid),
            card(Shape::Oval, Color::Purple, Count::Two, Shading::Solid),
        ]
    }

    #[test]
    fn test_find_planted_set() {
        let mut pool = set_free_pool();
        pool.push(card(Shape::Diamond, Color::Green, Count::Three, Shading::Striped));
        pool.push(card(Shape::Squiggle, Color::Green, Count::Three, Shading::Outlined));
        // Completes the two green threes above
        pool.push(card(Shape::Oval, Color::Green, Count::Three, Shading::Solid));

        let found = find_set(&pool).unwrap();
        assert!(is_set(found[0], found[1], found[2]));
        for c in found {
            assert!(pool.contains(&c));
        }
        assert!(count_sets(&pool) >= 1);
    }

    #[test]
    fn test_no_set_in_set_free_pool() {
        let pool = set_free_pool();
        assert_eq!(find_set(&pool), None);
        assert_eq!(count_sets(&pool), 0);
        assert!(all_sets(&pool).is_empty());
    }

    #[test]
    fn test_small_pools() {
        assert_eq!(find_set(&[]), None);
        assert_eq!(count_sets(&[]), 0);

        let a = card(Shape::Oval, Color::Red, Count::One, Shading::Solid);
        let b = card(Shape::Oval, Color::Red, Count::Two, Shading::Solid);
        assert_eq!(find_set(&[a, b]), None);
        assert_eq!(count_sets(&[a, b]), 0);
    }

    #[test]
    fn test_find_is_deterministic() {
        let pool: Vec<Card> = universe().into_iter().take(18).collect();
        assert_eq!(find_set(&pool), find_set(&pool));

        // First pair (0, 1) completes with card index 2 here
        let found = find_set(&pool).unwrap();
        assert_eq!(found, [pool[0], pool[1], pool[2]]);
    }

    #[test]
    fn test_count_whole_universe() {
        // Every pair of the 81 cards lies in exactly one Set: 81 * 80 / 6
        assert_eq!(count_sets(&universe()), 1080);
    }

    #[test]
    fn test_all_sets_matches_count() {
        let pool: Vec<Card> = universe().into_iter().step_by(4).take(18).collect();
        let sets = all_sets(&pool);

        assert_eq!(sets.len(), count_sets(&pool));
        for [i, j, k] in sets {
            assert!(i < j && j < k);
            assert!(is_set(pool[i], pool[j], pool[k]));
        }
    }
}
