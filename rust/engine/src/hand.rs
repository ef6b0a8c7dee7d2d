use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{all_ranks, Card, Rank};
use crate::deal::Deal;
use crate::draw;

/// The nine hand categories, ordered weakest to strongest.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    HighestCard = 0,
    OnePair = 1,
    TwoPairs = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    /// The display label, e.g. `straight-flush` or `highest-card`.
    pub fn label(&self) -> &'static str {
        match self {
            Category::HighestCard => "highest-card",
            Category::OnePair => "one-pair",
            Category::TwoPairs => "two-pairs",
            Category::ThreeOfAKind => "three-of-a-kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full-house",
            Category::FourOfAKind => "four-of-a-kind",
            Category::StraightFlush => "straight-flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All five cards share one suit.
pub fn is_flush(set: &[Card; 5]) -> bool {
    set.iter().all(|card| card.suit == set[0].suit)
}

/// Five consecutive ranks, or the Ace-low wheel (A 2 3 4 5).
pub fn is_straight(set: &[Card; 5]) -> bool {
    let mut values = set.map(|card| card.rank as u8);
    values.sort_unstable();
    if values == [2, 3, 4, 5, 14] {
        return true;
    }
    values.windows(2).all(|pair| pair[1] - pair[0] == 1)
}

pub fn is_straight_flush(set: &[Card; 5]) -> bool {
    is_straight(set) && is_flush(set)
}

/// Ranks that appear in `set` exactly `count` times, ascending.
///
/// The count must match exactly: a rank with four cards never satisfies
/// `count == 2` or `count == 3`, so quad, triple, and pair detection cannot
/// overlap.
pub fn ranks_with_count(set: &[Card; 5], count: usize) -> Vec<Rank> {
    all_ranks()
        .into_iter()
        .filter(|&rank| set.iter().filter(|card| card.rank == rank).count() == count)
        .collect()
}

pub fn is_four_of_a_kind(set: &[Card; 5]) -> bool {
    !ranks_with_count(set, 4).is_empty()
}

pub fn is_three_of_a_kind(set: &[Card; 5]) -> bool {
    !ranks_with_count(set, 3).is_empty()
}

pub fn is_one_pair(set: &[Card; 5]) -> bool {
    !ranks_with_count(set, 2).is_empty()
}

/// A pair and a triple of two different ranks. The distinctness check is a
/// contract: the pair rank and the triple rank must be different values.
pub fn is_full_house(set: &[Card; 5]) -> bool {
    let pairs = ranks_with_count(set, 2);
    let triples = ranks_with_count(set, 3);
    match (pairs.first(), triples.first()) {
        (Some(pair), Some(triple)) => pair != triple,
        _ => false,
    }
}

/// At least two distinct pair ranks.
pub fn is_two_pairs(set: &[Card; 5]) -> bool {
    ranks_with_count(set, 2).len() >= 2
}

/// Detection order, strongest first.
const CLASSIFIERS: [(Category, fn(&[Card; 5]) -> bool); 8] = [
    (Category::StraightFlush, is_straight_flush),
    (Category::FourOfAKind, is_four_of_a_kind),
    (Category::FullHouse, is_full_house),
    (Category::Flush, is_flush),
    (Category::Straight, is_straight),
    (Category::ThreeOfAKind, is_three_of_a_kind),
    (Category::TwoPairs, is_two_pairs),
    (Category::OnePair, is_one_pair),
];

/// Classifies a five-card set as its strongest matching category.
///
/// Categories are tested strongest first with a short-circuit on the first
/// match; a set that matches nothing is a [`Category::HighestCard`].
pub fn classify(set: &[Card; 5]) -> Category {
    for (category, matches) in CLASSIFIERS {
        if matches(set) {
            return category;
        }
    }
    Category::HighestCard
}

/// The best category reachable from `deal` across all 32 replacement
/// patterns. Deterministic: the same deal always yields the same category.
pub fn best_hand(deal: &Deal) -> Category {
    draw::cardsets(deal)
        .iter()
        .map(classify)
        .max()
        .unwrap_or(Category::HighestCard)
}
