//! Sequence detection and wild card completion.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

use super::sorted_values;

/// Three-card runs that wrap around the ace, as sorted values:
/// A-2-3, K-A-2 and Q-K-A.
const WRAPAROUND_RUNS: [[u8; 3]; 3] = [[2, 3, 14], [2, 13, 14], [12, 13, 14]];

const ACE: u8 = Rank::Ace.value();

fn is_ascending_run(values: &[u8]) -> bool {
    values.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

/// Returns whether the cards form a sequence of consecutive ranks.
///
/// A sequence needs at least three cards. Three-card hands additionally accept
/// the wraparound runs A-2-3, K-A-2 and Q-K-A; no other wrap is recognized.
#[must_use]
pub fn is_sequence(cards: &[Card]) -> bool {
    if cards.len() < 3 || cards.iter().any(|c| c.rank == Rank::None) {
        return false;
    }

    let values = sorted_values(cards);
    if values.len() == 3 && WRAPAROUND_RUNS.iter().any(|run| run[..] == values[..]) {
        return true;
    }
    is_ascending_run(&values)
}

/// Returns the rank a single wild card must take so that it and the natural
/// cards form a sequence, or [`Rank::None`] if no single card can.
///
/// `wild` is removed once from `cards` if present; the remaining natural cards
/// must number at least two. Two natural cards may use the wraparound runs;
/// otherwise the naturals may contain at most one gap of one missing rank.
/// With no gap the wild extends the run upwards, or downwards when the run
/// already ends on the ace.
///
/// A gap is filled with the missing rank itself rather than the rank after the
/// gap clamped to the ace, since only the missing rank completes the run.
#[must_use]
pub fn optimal_wild_card_value(cards: &[Card], wild: Card) -> Rank {
    let mut naturals: Vec<Card> = cards.to_vec();
    if let Some(index) = naturals.iter().position(|c| *c == wild) {
        naturals.remove(index);
    }
    if naturals.len() < 2 || naturals.iter().any(|c| c.rank == Rank::None) {
        return Rank::None;
    }

    let values = sorted_values(&naturals);
    if values.windows(2).any(|pair| pair[0] == pair[1]) {
        return Rank::None;
    }

    let completed = match values[..] {
        [2, 3] => Some(4),
        [2, 13] | [12, 13] => Some(ACE),
        [2, ACE] => Some(3),
        [3, ACE] => Some(2),
        _ => fill_single_gap(&values),
    };
    completed.and_then(Rank::from_value).unwrap_or(Rank::None)
}

fn fill_single_gap(values: &[u8]) -> Option<u8> {
    let mut gap = None;
    for pair in values.windows(2) {
        match pair[1] - pair[0] {
            1 => {}
            2 if gap.is_none() => gap = Some(pair[0] + 1),
            _ => return None,
        }
    }

    if gap.is_some() {
        return gap;
    }
    let (low, high) = (values[0], values[values.len() - 1]);
    if high < ACE {
        Some(high + 1)
    } else {
        Some(low - 1)
    }
}

/// Returns whether a single wild card can complete a sequence.
///
/// See [`optimal_wild_card_value`] for the rules.
#[must_use]
pub fn can_form_sequence_with_wild(cards: &[Card], wild: Card) -> bool {
    optimal_wild_card_value(cards, wild) != Rank::None
}
