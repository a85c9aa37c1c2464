//! Deck, scoring and outcome tests.

use std::collections::HashSet;

use bj21::{
    Card, DECK_SIZE, DealerHand, Deck, DeckError, Hand, Outcome, Rank, RoundResult, Suit,
    determine_outcome, rank_value, score,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand_of(ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(rank, Suit::Spades)).collect()
}

#[test]
fn shuffled_deck_has_every_card_once() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new_shuffled(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert!(unique.contains(&card(rank, suit)));
            }
        }
    }
}

#[test]
fn shuffle_changes_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let shuffled = Deck::new_shuffled(&mut rng);
    assert_ne!(shuffled, Deck::standard());
}

#[test]
fn draw_shrinks_deck_until_exhausted() {
    let mut deck = Deck::standard();
    for remaining in (0..DECK_SIZE).rev() {
        deck.draw().unwrap();
        assert_eq!(deck.len(), remaining);
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckError::Exhausted));
}

#[test]
fn rank_values() {
    assert_eq!(rank_value(Rank::Two), 2);
    assert_eq!(rank_value(Rank::Ten), 10);
    assert_eq!(rank_value(Rank::Jack), 10);
    assert_eq!(rank_value(Rank::Queen), 10);
    assert_eq!(rank_value(Rank::King), 10);
    assert_eq!(rank_value(Rank::Ace), 11);
}

#[test]
fn aces_are_demoted_one_at_a_time() {
    assert_eq!(score(&hand_of(&[Rank::Ace, Rank::Ace])), 12);
    assert_eq!(score(&hand_of(&[Rank::Ace, Rank::Nine])), 20);
    assert_eq!(score(&hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine])), 21);
    assert_eq!(score(&hand_of(&[Rank::King, Rank::Queen, Rank::Ace])), 21);
    assert_eq!(
        score(&hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace])),
        14
    );
    assert_eq!(score(&hand_of(&[Rank::King, Rank::Queen, Rank::Two])), 22);
    assert_eq!(score(&[]), 0);
}

#[test]
fn soft_hands() {
    let soft = Hand::from_iter(hand_of(&[Rank::Ace, Rank::Six]));
    assert_eq!(soft.value(), 17);
    assert!(soft.is_soft());

    let hard = Hand::from_iter(hand_of(&[Rank::Ace, Rank::Six, Rank::Ten]));
    assert_eq!(hard.value(), 17);
    assert!(!hard.is_soft());
}

#[test]
fn score_is_bounded_by_ace_extremes() {
    for seed in 0..100 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new_shuffled(&mut rng);

        for len in 1..=11 {
            let cards = &deck.cards()[..len];
            let aces = cards.iter().filter(|c| c.is_ace()).count() as u16;
            let low = cards
                .iter()
                .map(|c| u16::from(rank_value(c.rank)))
                .sum::<u16>()
                - 10 * aces;
            let high = low + 10 * aces;

            let value = score(cards);
            assert!(low <= value && value <= high);
            assert!(value <= 21 || value == low);
            assert_eq!(score(cards), value);
        }
    }
}

#[test]
fn score_counts_every_card_of_a_full_deck() {
    // 4 * (2 + ... + 10) + 12 face cards * 10 + 4 aces * 1
    assert_eq!(score(Deck::standard().cards()), 340);

    let two_decks: Vec<Card> = Deck::standard()
        .cards()
        .iter()
        .chain(Deck::standard().cards())
        .copied()
        .collect();
    assert_eq!(score(&two_decks), 680);
}

#[test]
fn busted_hand_stays_busted() {
    let mut hand = Hand::new();
    hand.add_card(card(Rank::King, Suit::Hearts));
    hand.add_card(card(Rank::Ace, Suit::Clubs));
    hand.add_card(card(Rank::Nine, Suit::Diamonds));
    hand.add_card(card(Rank::Five, Suit::Spades));
    assert!(hand.is_bust());
    let bust_value = hand.value();

    for rank in [Rank::Ace, Rank::Two, Rank::King] {
        hand.add_card(card(rank, Suit::Hearts));
        assert!(hand.is_bust());
        assert!(hand.value() >= bust_value);
    }
}

#[test]
fn dealer_hand_hides_first_card() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Rank::Ace, Suit::Hearts));
    dealer.add_card(card(Rank::Six, Suit::Clubs));

    assert!(dealer.is_hidden(0));
    assert!(!dealer.is_hidden(1));
    assert_eq!(dealer.visible_value(), 6);
    assert_eq!(dealer.value(), 17);
    assert!(dealer.card_views()[0].card().is_none());

    dealer.reveal_hole();
    assert_eq!(dealer.visible_value(), 17);
    assert_eq!(
        dealer.card_views()[0].card(),
        Some(card(Rank::Ace, Suit::Hearts))
    );

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
}

#[test]
fn outcome_priority_chain() {
    assert_eq!(determine_outcome(24, 25), Outcome::Lose);
    assert_eq!(determine_outcome(22, 17), Outcome::Lose);
    assert_eq!(determine_outcome(12, 22), Outcome::Win);
    assert_eq!(determine_outcome(20, 19), Outcome::Win);
    assert_eq!(determine_outcome(19, 19), Outcome::Push);
    assert_eq!(determine_outcome(18, 20), Outcome::Lose);
}

#[test]
fn round_result_flags_busts() {
    let result = RoundResult::new(20, 25);
    assert_eq!(result.outcome, Outcome::Win);
    assert!(!result.player_bust);
    assert!(result.dealer_bust);
}

#[test]
fn card_and_outcome_display() {
    assert_eq!(card(Rank::Ten, Suit::Spades).to_string(), "10♠");
    assert_eq!(card(Rank::Ace, Suit::Hearts).to_string(), "A♥");
    assert_eq!(Outcome::Push.to_string(), "Push.");
}
