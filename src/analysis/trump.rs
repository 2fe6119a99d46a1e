//! Trump card relations.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Returns the trump card when it is in play and held.
pub(super) fn active_trump(cards: &[Card], trump: Option<Card>, use_trump: bool) -> Option<Card> {
    trump.filter(|t| use_trump && cards.contains(t))
}

/// Returns whether the hand holds the trump card.
#[must_use]
pub fn has_trump_card(cards: &[Card], trump: Card) -> bool {
    cards.contains(&trump)
}

/// Returns whether `rank` sits next to the trump rank. The ace and the two
/// count as neighbors.
#[must_use]
pub fn is_rank_adjacent_to_trump(rank: Rank, trump: Card) -> bool {
    if rank == Rank::None || trump.rank == Rank::None {
        return false;
    }
    let (a, b) = (rank.value(), trump.value());
    a.abs_diff(b) == 1 || matches!((a, b), (2, 14) | (14, 2))
}

/// Returns whether the held trump card lands in the middle of the hand once
/// sorted by rank. Even-sized hands have two middle slots and either one counts.
///
/// Slots are compared by rank, so cards sharing the trump rank do not make the
/// answer depend on the input order.
#[must_use]
pub fn is_trump_in_middle(cards: &[Card], trump: Card) -> bool {
    if !has_trump_card(cards, trump) {
        return false;
    }

    let mut ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
    ranks.sort_unstable();
    let mid = ranks.len() / 2;
    if ranks.len() % 2 == 1 {
        ranks[mid] == trump.rank
    } else {
        ranks[mid - 1] == trump.rank || ranks[mid] == trump.rank
    }
}

/// Returns the rank of the first card that is not the trump card, or
/// [`Rank::None`].
#[must_use]
pub fn first_non_trump_rank_or_default(cards: &[Card], trump: Option<Card>) -> Rank {
    cards
        .iter()
        .find(|c| Some(**c) != trump)
        .map_or(Rank::None, |c| c.rank)
}
