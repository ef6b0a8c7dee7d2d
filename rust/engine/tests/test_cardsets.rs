use std::collections::HashSet;

use drawhand_engine::cards::Card;
use drawhand_engine::deal::Deal;
use drawhand_engine::draw::{cardsets, PATTERN_COUNT};

fn deal() -> Deal {
    // Ten distinct cards so set membership identifies hand positions.
    "2C 3C 4C 5C 6C 9H TH JH QH KH".parse().expect("valid deal")
}

#[test]
fn generates_exactly_32_cardsets_of_5_cards() {
    let sets = cardsets(&deal());
    assert_eq!(sets.len(), PATTERN_COUNT);
    for set in &sets {
        assert_eq!(set.len(), 5);
    }
}

#[test]
fn no_cardset_contains_a_duplicate_card() {
    for (i, set) in cardsets(&deal()).iter().enumerate() {
        let unique: HashSet<Card> = set.iter().copied().collect();
        assert_eq!(unique.len(), 5, "duplicate card in pattern {}", i + 1);
    }
}

#[test]
fn every_card_comes_from_the_deal() {
    let deal = deal();
    let all: HashSet<Card> = deal.hand().iter().chain(deal.pool()).copied().collect();
    for set in cardsets(&deal) {
        for card in set {
            assert!(all.contains(&card), "{} is not part of the deal", card);
        }
    }
}

#[test]
fn kept_subsets_cover_all_32_combinations() {
    // The modulo rules must form a bijection onto the 2^5 keep/replace
    // combinations; the boundary patterns (8, 16, 24, 32) are where an
    // off-by-one would show up.
    let deal = deal();
    let mut masks = HashSet::new();
    for set in cardsets(&deal) {
        let cards: HashSet<Card> = set.iter().copied().collect();
        let mut mask = 0u32;
        for (pos, card) in deal.hand().iter().enumerate() {
            if cards.contains(card) {
                mask |= 1 << pos;
            }
        }
        masks.insert(mask);
    }
    assert_eq!(masks.len(), PATTERN_COUNT, "kept-subsets must be pairwise distinct");
}

#[test]
fn replacements_are_drawn_from_the_front_of_the_pool() {
    let deal = deal();
    let hand: HashSet<Card> = deal.hand().iter().copied().collect();
    for (i, set) in cardsets(&deal).iter().enumerate() {
        let fills: Vec<Card> = set.iter().copied().filter(|c| !hand.contains(c)).collect();
        let expected: Vec<Card> = deal.pool()[..fills.len()].to_vec();
        assert_eq!(fills, expected, "pattern {} fill order", i + 1);
    }
}

#[test]
fn first_pattern_replaces_the_whole_hand() {
    let deal = deal();
    let first = cardsets(&deal)[0];
    assert_eq!(&first, deal.pool());
}

#[test]
fn last_pattern_keeps_the_whole_hand() {
    let deal = deal();
    let sets = cardsets(&deal);
    let last: HashSet<Card> = sets[PATTERN_COUNT - 1].iter().copied().collect();
    let hand: HashSet<Card> = deal.hand().iter().copied().collect();
    assert_eq!(last, hand);
}

#[test]
fn generation_is_pure_and_deterministic() {
    let deal = deal();
    let before = deal.clone();
    let first = cardsets(&deal);
    let second = cardsets(&deal);
    assert_eq!(first, second);
    assert_eq!(deal, before, "generation must not mutate the deal");
}
