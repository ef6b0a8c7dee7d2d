use std::collections::HashSet;

use drawhand_engine::cards::Card;
use drawhand_engine::deck::Deck;

#[test]
fn deck_reset_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.reset();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        deck.deal_card().is_none(),
        "after 52 cards, deck should be empty"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    // Compare first 10 cards
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn deal_draw_yields_ten_distinct_cards() {
    let mut deck = Deck::new_with_seed(777);
    deck.shuffle();
    let deal = deck.deal_draw().expect("fresh deck has ten cards");

    let mut set = HashSet::new();
    for c in deal.hand().iter().chain(deal.pool()) {
        assert!(set.insert(*c), "card {:?} dealt twice", c);
    }
    assert_eq!(set.len(), 10);
    assert_eq!(deck.remaining(), 42);
}

#[test]
fn deal_draw_stops_when_the_deck_runs_low() {
    let mut deck = Deck::new_with_seed(9);
    deck.shuffle();
    for _ in 0..5 {
        assert!(deck.deal_draw().is_some());
    }
    // 50 cards gone, two left: not enough for another draw
    assert_eq!(deck.remaining(), 2);
    assert!(deck.deal_draw().is_none());
}

#[test]
fn draws_from_one_deck_never_overlap() {
    let mut deck = Deck::new_with_seed(4242);
    deck.shuffle();
    let first = deck.deal_draw().unwrap();
    let second = deck.deal_draw().unwrap();

    let a: HashSet<Card> = first.hand().iter().chain(first.pool()).copied().collect();
    let b: HashSet<Card> = second.hand().iter().chain(second.pool()).copied().collect();
    assert!(a.is_disjoint(&b));
}
