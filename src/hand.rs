//! Hand container and sequence operations.
//!
//! [`CardSequence`] is the accessor pair every operation is built on: anything
//! that can hand out its ordered cards and take a replacement sequence gets the
//! in-place operations for free. [`Hand`] adds the copy-producing family, which
//! never touches the receiver.

use alloc::vec::Vec;
use core::slice;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use tracing::warn;

use crate::card::Card;
use crate::error::HandError;

/// Ordered cards with a get/set accessor pair.
///
/// In-place operations build the new sequence first and swap it in with a
/// single [`set_cards`](CardSequence::set_cards) call, so callers never observe
/// a half-applied edit. They return `&mut Self` for chaining.
pub trait CardSequence {
    /// Returns the cards in order.
    fn cards(&self) -> &[Card];

    /// Replaces the cards.
    fn set_cards(&mut self, cards: Vec<Card>);

    /// Appends a card.
    fn add(&mut self, card: Card) {
        let mut cards = Vec::with_capacity(self.cards().len() + 1);
        cards.extend_from_slice(self.cards());
        cards.push(card);
        self.set_cards(cards);
    }

    /// Returns whether the card is present.
    fn contains(&self, card: &Card) -> bool {
        self.cards().contains(card)
    }

    /// Returns whether every given card is present.
    fn contains_all(&self, cards: &[Card]) -> bool {
        cards.iter().all(|card| self.contains(card))
    }

    /// Returns the number of cards.
    fn count(&self) -> usize {
        self.cards().len()
    }

    /// Returns the number of cards matching the predicate.
    fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Card) -> bool,
    {
        self.cards().iter().filter(|card| predicate(card)).count()
    }

    /// Returns the card at `index`.
    ///
    /// An out-of-range index is logged and yields `None`.
    fn get_card(&self, index: usize) -> Option<Card> {
        let card = self.cards().get(index).copied();
        if card.is_none() {
            warn!(index, len = self.cards().len(), "card index out of range");
        }
        card
    }

    /// Replaces the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range or the new card has no
    /// suit or rank. The hand is left untouched in both cases.
    fn replace_card(&mut self, index: usize, card: Card) -> Result<(), HandError> {
        let len = self.cards().len();
        if index >= len {
            warn!(index, len, "cannot replace card: index out of range");
            return Err(HandError::IndexOutOfRange { index, len });
        }
        if !card.is_valid() {
            warn!(index, %card, "cannot replace card: card is invalid");
            return Err(HandError::InvalidCard);
        }

        let mut cards = self.cards().to_vec();
        cards[index] = card;
        self.set_cards(cards);
        Ok(())
    }

    /// Keeps only the cards matching the predicate.
    fn filter_in_place<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&Card) -> bool,
    {
        let cards = self.cards().iter().copied().filter(|c| predicate(c)).collect();
        self.set_cards(cards);
        self
    }

    /// Stable-sorts the cards by key, ascending.
    fn order_by_in_place<K, F>(&mut self, key: F) -> &mut Self
    where
        K: Ord,
        F: Fn(&Card) -> K,
    {
        let mut cards = self.cards().to_vec();
        cards.sort_by_key(|c| key(c));
        self.set_cards(cards);
        self
    }

    /// Stable-sorts the cards by key, descending.
    fn order_by_descending_in_place<K, F>(&mut self, key: F) -> &mut Self
    where
        K: Ord,
        F: Fn(&Card) -> K,
    {
        let mut cards = self.cards().to_vec();
        cards.sort_by(|a, b| key(b).cmp(&key(a)));
        self.set_cards(cards);
        self
    }

    /// Keeps the first `n` cards.
    fn take_in_place(&mut self, n: usize) -> &mut Self {
        let cards = self.cards().iter().copied().take(n).collect();
        self.set_cards(cards);
        self
    }

    /// Drops the first `n` cards.
    fn skip_in_place(&mut self, n: usize) -> &mut Self {
        let cards = self.cards().iter().copied().skip(n).collect();
        self.set_cards(cards);
        self
    }

    /// Removes repeated cards, keeping first occurrences.
    fn distinct_in_place(&mut self) -> &mut Self {
        let cards = distinct(self.cards());
        self.set_cards(cards);
        self
    }

    /// Replaces every card with the result of `f`.
    fn select_in_place<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(Card) -> Card,
    {
        let cards = self.cards().iter().copied().map(f).collect();
        self.set_cards(cards);
        self
    }
}

fn distinct(cards: &[Card]) -> Vec<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.iter().copied().filter(|card| seen.insert(*card)).collect()
}

/// An ordered collection of cards under evaluation.
///
/// Uniqueness is not enforced; keeping a hand free of duplicates is the
/// dealer's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand from cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consumes the hand and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
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

    /// Returns an iterator over the cards.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the cards matching the predicate as a new hand.
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&Card) -> bool,
    {
        self.iter().copied().filter(|c| predicate(c)).collect()
    }

    /// Returns a copy stable-sorted by key, ascending.
    #[must_use]
    pub fn order_by<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&Card) -> K,
    {
        let mut hand = self.clone();
        hand.order_by_in_place(key);
        hand
    }

    /// Returns a copy stable-sorted by key, descending.
    #[must_use]
    pub fn order_by_descending<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&Card) -> K,
    {
        let mut hand = self.clone();
        hand.order_by_descending_in_place(key);
        hand
    }

    /// Returns the first `n` cards as a new hand.
    #[must_use]
    pub fn take(&self, n: usize) -> Self {
        self.iter().copied().take(n).collect()
    }

    /// Returns all but the first `n` cards as a new hand.
    #[must_use]
    pub fn skip(&self, n: usize) -> Self {
        self.iter().copied().skip(n).collect()
    }

    /// Returns a copy without repeated cards.
    #[must_use]
    pub fn distinct(&self) -> Self {
        Self::from_cards(distinct(&self.cards))
    }

    /// Returns a copy with every card mapped through `f`.
    #[must_use]
    pub fn map_cards<F>(&self, f: F) -> Self
    where
        F: Fn(Card) -> Card,
    {
        self.iter().copied().map(f).collect()
    }

    /// Projects every card, e.g. `hand.select(|c| c.suit)`.
    #[must_use]
    pub fn select<T, F>(&self, f: F) -> Vec<T>
    where
        F: Fn(&Card) -> T,
    {
        self.iter().map(f).collect()
    }

    /// Returns this hand's cards followed by `other`'s.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut result = Self::new();
        self.concat_to(other, &mut result);
        result
    }

    /// Returns the distinct cards of this hand that are not in `other`.
    #[must_use]
    pub fn except(&self, other: &Self) -> Self {
        let mut result = Self::new();
        self.except_to(other, &mut result);
        result
    }

    /// Returns the distinct cards of this hand that are also in `other`.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let mut result = Self::new();
        self.intersect_to(other, &mut result);
        result
    }

    /// Writes the concatenation of this hand and `other` into `result`.
    pub fn concat_to<S: CardSequence + ?Sized>(&self, other: &Self, result: &mut S) {
        let mut cards = Vec::with_capacity(self.len() + other.len());
        cards.extend_from_slice(&self.cards);
        cards.extend_from_slice(&other.cards);
        result.set_cards(cards);
    }

    /// Writes the set difference of this hand and `other` into `result`.
    pub fn except_to<S: CardSequence + ?Sized>(&self, other: &Self, result: &mut S) {
        let mut seen: HashSet<Card> = other.iter().copied().collect();
        let cards = self.iter().copied().filter(|c| seen.insert(*c)).collect();
        result.set_cards(cards);
    }

    /// Writes the set intersection of this hand and `other` into `result`.
    pub fn intersect_to<S: CardSequence + ?Sized>(&self, other: &Self, result: &mut S) {
        let mut remaining: HashSet<Card> = other.iter().copied().collect();
        let cards = self.iter().copied().filter(|c| remaining.remove(c)).collect();
        result.set_cards(cards);
    }
}

impl CardSequence for Hand {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}

impl CardSequence for Vec<Card> {
    fn cards(&self) -> &[Card] {
        self
    }

    fn set_cards(&mut self, cards: Vec<Card>) {
        *self = cards;
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self::from_cards(cards.to_vec())
    }
}

impl<const N: usize> From<[Card; N]> for Hand {
    fn from(cards: [Card; N]) -> Self {
        Self::from_cards(cards.to_vec())
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter.into_iter().collect())
    }
}

impl AsRef<[Card]> for Hand {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
