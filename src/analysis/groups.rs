//! Same-rank groupings: pairs, N of a kind, full house.

use alloc::vec;
use alloc::vec::Vec;

use crate::card::{Card, Rank};

use super::trump::active_trump;
use super::{is_sequence, rank_counts};

/// Hand sizes in which a pair is recognized.
const PAIR_HAND_SIZES: core::ops::RangeInclusive<usize> = 3..=9;

/// Returns the ranks that form pairs, highest first.
///
/// Returns `None` when the hand size is outside `3..=9`, when the hand is a
/// sequence, when the trump card is in play and held, when any rank occurs
/// more than twice, or when no rank occurs exactly twice.
#[must_use]
pub fn pair_ranks(cards: &[Card], trump: Option<Card>, use_trump: bool) -> Option<Vec<Rank>> {
    if !PAIR_HAND_SIZES.contains(&cards.len()) || is_sequence(cards) {
        return None;
    }
    if active_trump(cards, trump, use_trump).is_some() {
        return None;
    }

    let mut pairs = Vec::new();
    for (&rank, &count) in &rank_counts(cards, &[]) {
        if count > 2 {
            return None;
        }
        if count == 2 {
            pairs.push(rank);
        }
    }
    pairs.sort_unstable_by(|a, b| b.cmp(a));
    (!pairs.is_empty()).then_some(pairs)
}

/// Returns whether the hand holds at least one pair. See [`pair_ranks`].
#[must_use]
pub fn is_pair(cards: &[Card], trump: Option<Card>, use_trump: bool) -> bool {
    pair_ranks(cards, trump, use_trump).is_some()
}

/// Finds the highest rank occurring exactly `size` times, or `size - 1` times
/// when a single held trump card can complete it. Aces and the trump rank never
/// qualify.
fn completed_group_rank(cards: &[Card], trump: Option<Card>, use_trump: bool, size: usize) -> Rank {
    let trump = trump.filter(|_| use_trump);
    let mut exclude = vec![Rank::None, Rank::Ace];
    if let Some(trump) = trump {
        exclude.push(trump.rank);
    }
    let wild = trump.is_some_and(|t| cards.iter().filter(|c| **c == t).count() == 1);

    let mut groups: Vec<(Rank, usize)> = rank_counts(cards, &exclude).into_iter().collect();
    groups.sort_unstable_by(|a, b| b.0.cmp(&a.0));
    groups
        .into_iter()
        .find(|&(_, count)| count == size || (wild && count + 1 == size))
        .map_or(Rank::None, |(rank, _)| rank)
}

/// Returns the rank of a three of a kind, or [`Rank::None`].
///
/// Aces are never counted (three aces is the top full house). With
/// `use_trump`, the trump rank is skipped too and a trump card held exactly
/// once completes a natural pair.
#[must_use]
pub fn three_of_a_kind_rank(cards: &[Card], trump: Option<Card>, use_trump: bool) -> Rank {
    completed_group_rank(cards, trump, use_trump, 3)
}

/// Returns the rank of a four of a kind, or [`Rank::None`].
///
/// Same exclusions and trump completion as [`three_of_a_kind_rank`].
#[must_use]
pub fn four_of_a_kind_rank(cards: &[Card], trump: Option<Card>, use_trump: bool) -> Rank {
    completed_group_rank(cards, trump, use_trump, 4)
}

/// Returns whether the hand is a full house for a game of `hand_size` cards.
///
/// The primary rank is the ace and the secondary the king; when the held trump
/// is itself an ace they step down to king and queen. The primary group needs
/// three cards in a three-card game and four otherwise, the secondary group
/// takes the rest. A held trump of any other rank joins the larger group, the
/// primary on a tie.
#[must_use]
pub fn is_full_house(cards: &[Card], trump: Option<Card>, use_trump: bool, hand_size: usize) -> bool {
    if hand_size == 0 {
        return false;
    }

    let trump = active_trump(cards, trump, use_trump);
    let (primary, secondary) = if trump.is_some_and(|t| t.rank == Rank::Ace) {
        (Rank::King, Rank::Queen)
    } else {
        (Rank::Ace, Rank::King)
    };
    let required_primary = if hand_size == 3 { 3 } else { 4 };
    let required_secondary = hand_size.saturating_sub(required_primary);

    let count = |rank: Rank| cards.iter().filter(|c| c.rank == rank).count();
    let mut primary_count = count(primary);
    let mut secondary_count = count(secondary);

    if trump.is_some_and(|t| t.rank != primary && t.rank != secondary) {
        if primary_count >= secondary_count {
            primary_count += 1;
        } else {
            secondary_count += 1;
        }
    }

    primary_count >= required_primary && secondary_count >= required_secondary
}

/// Returns whether at least two different ranks occur two or more times in a
/// hand of four or more cards.
#[must_use]
pub fn is_multiple_pairs(cards: &[Card]) -> bool {
    if cards.len() < 4 {
        return false;
    }
    rank_counts(cards, &[Rank::None])
        .values()
        .filter(|&&count| count >= 2)
        .count()
        >= 2
}

/// Returns whether at least two different ranks reach three cards in a hand of
/// six or more cards.
///
/// Aces and kings never qualify. A held trump card (with `use_trump`) is taken
/// out of the count and may complete one group of two.
#[must_use]
pub fn is_multiple_triplets(cards: &[Card], trump: Option<Card>, use_trump: bool) -> bool {
    if cards.len() < 6 {
        return false;
    }

    let trump = active_trump(cards, trump, use_trump);
    let mut naturals = cards.to_vec();
    if let Some(index) = trump.and_then(|t| naturals.iter().position(|c| *c == t)) {
        naturals.remove(index);
    }

    let counts = rank_counts(&naturals, &[Rank::None, Rank::Ace, Rank::King]);
    let full = counts.values().filter(|&&count| count >= 3).count();
    let near = counts.values().filter(|&&count| count == 2).count();
    full >= 2 || (trump.is_some() && full >= 1 && near >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    const fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn completed_group_prefers_higher_rank() {
        let cards = [
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Spades, Rank::Five),
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::Nine),
        ];
        assert_eq!(completed_group_rank(&cards, None, false, 3), Rank::Nine);
    }

    #[test]
    fn trump_held_twice_does_not_complete() {
        let trump = card(Suit::Diamonds, Rank::Two);
        let cards = [
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Five),
            trump,
            trump,
        ];
        assert_eq!(completed_group_rank(&cards, Some(trump), true, 3), Rank::None);
    }
}
