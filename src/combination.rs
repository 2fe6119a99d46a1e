//! Combination classification and hand ranking.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::analysis::{
    four_of_a_kind_rank, has_trump_card, is_flush, is_full_house, is_multiple_pairs,
    is_multiple_triplets, is_pair, is_royal_sequence, is_sequence, optimal_wild_card_value,
    rank_counts, three_of_a_kind_rank,
};
use crate::card::{Card, Rank, Suit};
use crate::options::GameMode;

/// Combinations a hand can form, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Combination {
    /// No combination; the highest card decides.
    HighCard,
    /// One or more pairs.
    Pair,
    /// Two or more ranks held at least twice (four cards or more).
    MultiplePairs,
    /// All cards of one suit.
    Flush,
    /// Consecutive ranks.
    Sequence,
    /// Consecutive ranks of one suit.
    StraightFlush,
    /// Three cards of one rank (aces excluded).
    ThreeOfAKind,
    /// Two ranks held three times (six cards or more).
    MultipleTriplets,
    /// Four cards of one rank (aces excluded).
    FourOfAKind,
    /// Aces over kings, or three aces in a three-card game.
    FullHouse,
    /// The top same-suit run: A, K, Q, ...
    RoyalSequence,
}

impl Combination {
    /// Every combination, weakest first.
    pub const ALL: [Self; 11] = [
        Self::HighCard,
        Self::Pair,
        Self::MultiplePairs,
        Self::Flush,
        Self::Sequence,
        Self::StraightFlush,
        Self::ThreeOfAKind,
        Self::MultipleTriplets,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::RoyalSequence,
    ];
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HighCard => "high card",
            Self::Pair => "pair",
            Self::MultiplePairs => "multiple pairs",
            Self::Flush => "flush",
            Self::Sequence => "sequence",
            Self::StraightFlush => "straight flush",
            Self::ThreeOfAKind => "three of a kind",
            Self::MultipleTriplets => "multiple triplets",
            Self::FourOfAKind => "four of a kind",
            Self::FullHouse => "full house",
            Self::RoyalSequence => "royal sequence",
        };
        f.pad(name)
    }
}

/// How a wild trump completes a sequence, if it does: the natural cards and the
/// rank the trump stands in for.
fn wild_sequence(
    cards: &[Card],
    trump: Option<Card>,
    mode: &GameMode,
) -> Option<(Vec<Card>, Rank)> {
    let trump = trump.filter(|t| mode.use_magic_cards && has_trump_card(cards, *t))?;
    let stand_in = optimal_wild_card_value(cards, trump);
    if stand_in == Rank::None {
        return None;
    }
    let mut naturals = cards.to_vec();
    if let Some(index) = naturals.iter().position(|c| *c == trump) {
        naturals.remove(index);
    }
    Some((naturals, stand_in))
}

/// Classifies a hand, checking from the strongest combination down.
///
/// With `use_magic_cards`, a held trump card may stand in for the missing
/// card of a sequence; the flush check then looks at the other cards only.
#[must_use]
pub fn classify(cards: &[Card], trump: Option<Card>, mode: &GameMode) -> Combination {
    let use_trump = mode.use_trump;

    if is_royal_sequence(cards) {
        return Combination::RoyalSequence;
    }
    if is_full_house(cards, trump, use_trump, mode.number_of_cards) {
        return Combination::FullHouse;
    }
    if four_of_a_kind_rank(cards, trump, use_trump) != Rank::None {
        return Combination::FourOfAKind;
    }
    if is_multiple_triplets(cards, trump, use_trump) {
        return Combination::MultipleTriplets;
    }
    if three_of_a_kind_rank(cards, trump, use_trump) != Rank::None {
        return Combination::ThreeOfAKind;
    }

    if is_sequence(cards) {
        return if is_flush(cards) {
            Combination::StraightFlush
        } else {
            Combination::Sequence
        };
    }
    if let Some((naturals, _)) = wild_sequence(cards, trump, mode) {
        return if is_flush(&naturals) {
            Combination::StraightFlush
        } else {
            Combination::Sequence
        };
    }

    if is_flush(cards) {
        Combination::Flush
    } else if is_multiple_pairs(cards) {
        Combination::MultiplePairs
    } else if is_pair(cards, trump, use_trump) {
        Combination::Pair
    } else {
        Combination::HighCard
    }
}

/// Strength of a hand, ordered by combination and then by rank values.
///
/// Rank values are listed by group size, largest group first, and by value
/// within equal group sizes. A-2-3 therefore lists as `[14, 3, 2]`. A magic
/// trump completing a sequence is listed as the rank it stands in for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandStrength {
    /// The combination formed.
    pub combination: Combination,
    /// Tie-break values, most significant first.
    pub values: Vec<u8>,
}

/// Evaluates the strength of a hand.
#[must_use]
pub fn evaluate(cards: &[Card], trump: Option<Card>, mode: &GameMode) -> HandStrength {
    let combination = classify(cards, trump, mode);

    // A wild that completes a sequence counts as the rank it stands in for.
    let wild = match combination {
        Combination::Sequence | Combination::StraightFlush if !is_sequence(cards) => {
            wild_sequence(cards, trump, mode)
        }
        _ => None,
    };
    let ranked = match wild {
        Some((mut naturals, stand_in)) => {
            naturals.push(Card::new(Suit::None, stand_in));
            naturals
        }
        None => cards.to_vec(),
    };

    let mut groups: Vec<(Rank, usize)> = rank_counts(&ranked, &[]).into_iter().collect();
    groups.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    let values = groups
        .into_iter()
        .flat_map(|(rank, count)| core::iter::repeat_n(rank.value(), count))
        .collect();

    HandStrength {
        combination,
        values,
    }
}

/// Compares two hands under the same trump and game mode.
#[must_use]
pub fn compare_hands(a: &[Card], b: &[Card], trump: Option<Card>, mode: &GameMode) -> Ordering {
    evaluate(a, trump, mode).cmp(&evaluate(b, trump, mode))
}
