//! Player and dealer hand representations and scoring.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::view::CardView;

/// Highest total that is not a bust.
pub const BLACKJACK: u16 = 21;

/// The dealer draws while its score is below this value.
pub const DEALER_STANDS_ON: u16 = 17;

/// Returns the optimistic value of a rank. Aces count 11 here; [`score`]
/// demotes them as needed.
#[must_use]
pub const fn rank_value(rank: Rank) -> u8 {
    match rank {
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        Rank::Ace => 11,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(u16::from(rank_value(card.rank)));
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Scores a set of cards.
///
/// Every Ace starts at 11. While the total exceeds 21 and an Ace is still
/// counted as 11, one Ace at a time drops to 1. The result is the best total
/// not above 21 when one exists, otherwise the lowest bust total. Totals are
/// exact for any number of standard decks; they saturate at `u16::MAX`.
///
/// ```
/// use bj21::{Card, Rank, Suit, score};
///
/// let ace = Card::new(Rank::Ace, Suit::Spades);
/// let nine = Card::new(Rank::Nine, Suit::Hearts);
/// assert_eq!(score(&[ace, ace]), 12);
/// assert_eq!(score(&[ace, ace, nine]), 21);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u16 {
    evaluate_cards(cards).0
}

/// Returns whether an Ace in `cards` still counts as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        score(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// The dealer's hand.
///
/// The first card dealt is the hole card. It counts toward [`value`] at once
/// but stays face down until [`reveal_hole`] is called.
///
/// [`value`]: DealerHand::value
/// [`reveal_hole`]: DealerHand::reveal_hole
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, including the hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hole card (first card).
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns whether the card at `index` is face down.
    #[must_use]
    pub const fn is_hidden(&self, index: usize) -> bool {
        index == 0 && !self.hole_revealed
    }

    /// Returns the cards as the player may see them.
    #[must_use]
    pub fn card_views(&self) -> Vec<CardView> {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, &card)| {
                if self.is_hidden(index) {
                    CardView::FaceDown
                } else {
                    CardView::FaceUp(card)
                }
            })
            .collect()
    }

    /// Calculates the value of the face-up cards only.
    #[must_use]
    pub fn visible_value(&self) -> u16 {
        if self.hole_revealed {
            self.value()
        } else {
            self.cards.get(1..).map_or(0, score)
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        score(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}
