//! Pure hand analysis.
//!
//! Every function reads a slice of cards (plus an optional trump card) and
//! answers with `bool`, [`Rank`] or a count. A hand that does not qualify is not
//! an error: predicates return `false` and rank lookups return [`Rank::None`].

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Rank, Suit};

mod groups;
mod sequence;
mod trump;

pub use groups::{
    four_of_a_kind_rank, is_full_house, is_multiple_pairs, is_multiple_triplets, is_pair,
    pair_ranks, three_of_a_kind_rank,
};
pub use sequence::{can_form_sequence_with_wild, is_sequence, optimal_wild_card_value};
pub use trump::{
    first_non_trump_rank_or_default, has_trump_card, is_rank_adjacent_to_trump,
    is_trump_in_middle,
};

/// Occurrences of each rank within a hand.
pub type RankCounts = HashMap<Rank, usize>;

/// Counts how often each rank occurs, skipping cards whose rank is excluded.
#[must_use]
pub fn rank_counts(cards: &[Card], exclude: &[Rank]) -> RankCounts {
    let mut counts = RankCounts::new();
    for card in cards.iter().filter(|c| !exclude.contains(&c.rank)) {
        *counts.entry(card.rank).or_insert(0) += 1;
    }
    counts
}

/// Returns whether exactly `n` cards have the given rank.
#[must_use]
pub fn is_n_of_a_kind_rank(cards: &[Card], rank: Rank, n: usize) -> bool {
    cards.iter().filter(|c| c.rank == rank).count() == n
}

/// Returns whether any rank occurs exactly `n` times.
#[must_use]
pub fn is_n_of_a_kind(cards: &[Card], n: usize) -> bool {
    rank_counts(cards, &[]).values().any(|&count| count == n)
}

/// Returns whether all cards share one suit. Empty hands never do.
#[must_use]
pub fn is_same_suits(cards: &[Card]) -> bool {
    let Some(first) = cards.first() else {
        return false;
    };
    first.suit != Suit::None && cards.iter().all(|c| c.suit == first.suit)
}

/// Returns whether the hand is a flush (all cards one suit).
#[must_use]
pub fn is_flush(cards: &[Card]) -> bool {
    is_same_suits(cards)
}

/// Returns whether all cards share one color while both suits of that color
/// appear.
#[must_use]
pub fn is_same_color_and_different_suits(cards: &[Card]) -> bool {
    let Some(color) = cards.first().and_then(|c| c.color()) else {
        return false;
    };
    if cards.iter().any(|c| c.color() != Some(color)) {
        return false;
    }
    !is_same_suits(cards)
}

/// Returns whether the hand is a royal sequence: one suit, and the ranks sorted
/// from high to low match [`Rank::ROYAL`] position by position.
#[must_use]
pub fn is_royal_sequence(cards: &[Card]) -> bool {
    if cards.is_empty() || cards.len() > Rank::ROYAL.len() || !is_same_suits(cards) {
        return false;
    }

    let mut ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks == Rank::ROYAL[..ranks.len()]
}

/// Returns the highest card ranked at least `minimum`.
///
/// Ties keep the earliest card.
#[must_use]
pub fn find_highest_card(cards: &[Card], minimum: Rank) -> Option<Card> {
    cards
        .iter()
        .filter(|c| c.rank >= minimum)
        .fold(None, |best: Option<Card>, &card| match best {
            Some(b) if b.rank >= card.rank => Some(b),
            _ => Some(card),
        })
}

/// Returns the lowest card.
///
/// Ties keep the earliest card.
#[must_use]
pub fn find_worst_card(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .fold(None, |worst: Option<Card>, &card| match worst {
            Some(w) if w.rank <= card.rank => Some(w),
            _ => Some(card),
        })
}

/// Sorted rank values of the hand, ascending.
fn sorted_values(cards: &[Card]) -> Vec<u8> {
    let mut values: Vec<u8> = cards.iter().map(|c| c.value()).collect();
    values.sort_unstable();
    values
}
