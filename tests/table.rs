//! Table setup and pile tests.

use solitaire_deal::{
    Card, DECK_SIZE, DealError, DealPattern, Deck, FOUNDATION_CAPACITY, FOUNDATION_PILES, Pile,
    ScriptedIndices, SetupOptions, StackError, Suit, TABLEAU_PILES, Table,
};

fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit).unwrap()
}

/// Builds an unshuffled deck and returns it with its pop order (top first).
fn ordered_deck() -> (Deck<ScriptedIndices>, Vec<Card>) {
    let deck = Deck::new(false, ScriptedIndices::default());
    let mut draws = deck.cards().to_vec();
    draws.reverse();
    (deck, draws)
}

fn deck_from_draws(draws: &[Card]) -> Deck<ScriptedIndices> {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards, ScriptedIndices::default()).unwrap()
}

#[test]
fn one_card_per_tableau_pile() {
    let (deck, draws) = ordered_deck();
    let table = Table::deal(deck, &SetupOptions::default()).unwrap();

    assert_eq!(table.tableau().len(), TABLEAU_PILES);
    for (index, pile) in table.tableau().iter().enumerate() {
        assert_eq!(pile.cards(), &[draws[index]]);
    }
    assert_eq!(table.stock().len(), DECK_SIZE - TABLEAU_PILES);
    assert_eq!(table.stock().peek().unwrap(), draws[TABLEAU_PILES]);
}

#[test]
fn dealing_scenario_with_known_draws() {
    let draws = [
        card(1, Suit::Hearts),
        card(13, Suit::Spades),
        card(7, Suit::Clubs),
        card(10, Suit::Diamonds),
        card(2, Suit::Spades),
        card(12, Suit::Hearts),
        card(5, Suit::Clubs),
        card(9, Suit::Diamonds),
        card(3, Suit::Hearts),
    ];
    let table = Table::deal(deck_from_draws(&draws), &SetupOptions::default()).unwrap();

    let tops: Vec<Option<Card>> = table.tableau_tops().collect();
    let expected: Vec<Option<Card>> = draws[..TABLEAU_PILES].iter().copied().map(Some).collect();
    assert_eq!(tops, expected);
    assert_eq!(table.stock().cards(), &[card(3, Suit::Hearts), card(9, Suit::Diamonds)]);
}

#[test]
fn piles_are_allocated_with_hints() {
    let table = Table::new_game(&SetupOptions::default(), 17).unwrap();

    let hints: Vec<usize> = table.tableau().iter().map(Pile::capacity_hint).collect();
    assert_eq!(hints, vec![1, 2, 3, 4, 5, 6, 7]);

    assert_eq!(table.foundations().len(), FOUNDATION_PILES);
    for foundation in table.foundations() {
        assert!(foundation.is_empty());
        assert_eq!(foundation.capacity_hint(), FOUNDATION_CAPACITY);
    }
    assert!(table.waste().is_empty());
}

#[test]
fn classic_deal_fills_piles_row_by_row() {
    let (deck, draws) = ordered_deck();
    let options = SetupOptions::default().with_deal(DealPattern::Classic);
    let table = Table::deal(deck, &options).unwrap();

    for (index, pile) in table.tableau().iter().enumerate() {
        assert_eq!(pile.len(), index + 1);
    }
    assert_eq!(table.stock().len(), DECK_SIZE - 28);

    // First row goes out left to right, then each later row skips one more pile.
    assert_eq!(table.tableau()[0].cards(), &[draws[0]]);
    assert_eq!(table.tableau()[1].cards(), &[draws[1], draws[7]]);
    assert_eq!(table.tableau()[2].cards(), &[draws[2], draws[8], draws[13]]);
    assert_eq!(table.tableau()[6].top(), Some(&draws[27]));
    assert_eq!(table.stock().peek().unwrap(), draws[28]);
}

#[test]
fn deal_rejects_short_deck() {
    let short = deck_from_draws(&[
        card(1, Suit::Spades),
        card(2, Suit::Spades),
        card(3, Suit::Spades),
    ]);
    let err = Table::deal(short, &SetupOptions::default()).unwrap_err();
    assert_eq!(
        err,
        DealError::NotEnoughCards {
            needed: 7,
            available: 3
        }
    );

    let (mut deck, _) = ordered_deck();
    for _ in 0..30 {
        deck.pop().unwrap();
    }
    let options = SetupOptions::default().with_deal(DealPattern::Classic);
    assert_eq!(
        Table::deal(deck, &options).unwrap_err(),
        DealError::NotEnoughCards {
            needed: 28,
            available: 22
        }
    );
}

#[test]
fn same_seed_same_table() {
    let first = Table::new_game(&SetupOptions::default(), 99).unwrap();
    let second = Table::new_game(&SetupOptions::default(), 99).unwrap();

    assert_eq!(first.tableau(), second.tableau());
    assert_eq!(first.stock().cards(), second.stock().cards());
}

#[test]
fn dealt_cards_leave_the_stock() {
    let table = Table::new_game(&SetupOptions::default(), 5).unwrap();

    for card in table.tableau_tops().flatten() {
        assert!(!table.stock().contains(&card));
    }
    let total: usize =
        table.tableau().iter().map(Pile::len).sum::<usize>() + table.stock().len();
    assert_eq!(total, DECK_SIZE);
}

#[test]
fn tableau_summary_lists_tops() {
    let (deck, draws) = ordered_deck();
    let table = Table::deal(deck, &SetupOptions::default()).unwrap();
    let summary = table.tableau_summary();

    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), TABLEAU_PILES + 1);
    assert_eq!(lines[0], "tableau:");
    assert_eq!(lines[1], "K of Diamonds");
    assert_eq!(lines[1], draws[0].to_string());
    assert_eq!(lines[7], "7 of Diamonds");
}

#[test]
fn empty_pile_errors() {
    let mut pile = Pile::new();
    assert_eq!(pile.pop().unwrap_err(), StackError::EmptyCollection);
    assert_eq!(pile.peek().unwrap_err(), StackError::EmptyCollection);
    assert_eq!(pile.top(), None);

    let mut hinted = Pile::with_capacity_hint(13);
    assert_eq!(hinted.pop().unwrap_err(), StackError::EmptyCollection);
}

#[test]
fn pile_push_then_pop_is_identity() {
    let mut pile = Pile::with_capacity_hint(1);
    pile.push(card(4, Suit::Hearts));

    for pushed in [card(8, Suit::Clubs), Card::joker()] {
        pile.push(pushed);
        assert_eq!(pile.peek().unwrap(), pushed);
        assert_eq!(pile.pop().unwrap(), pushed);
        assert_eq!(pile.len(), 1);
    }

    // Capacity hints are advisory.
    pile.push(card(5, Suit::Hearts));
    assert_eq!(pile.len(), 2);
    assert_eq!(pile.capacity_hint(), 1);
}

#[test]
fn deal_pattern_counts() {
    assert_eq!(DealPattern::OnePerPile.cards_for_pile(6), 1);
    assert_eq!(DealPattern::Classic.cards_for_pile(6), 7);
    assert_eq!(DealPattern::default(), DealPattern::OnePerPile);
    assert_eq!(DealPattern::Classic.total_cards(TABLEAU_PILES), 28);
}
