//! Conversion between hands and display symbols such as `"10♠"`.
//!
//! Parsing here is permissive: an unknown rank or suit becomes
//! [`Rank::None`] or [`Suit::None`] and a warning is logged. Use
//! [`str::parse::<Card>`](core::str::FromStr) for strict parsing.

use alloc::string::String;
use alloc::vec::Vec;

use tracing::warn;

use crate::card::{Card, Rank, Suit};
use crate::hand::Hand;

/// Separator written between card symbols.
pub const SYMBOL_SEPARATOR: &str = ", ";

/// Renders a hand as symbols joined by [`SYMBOL_SEPARATOR`], e.g. `"A♠, K♠, Q♠"`.
#[must_use]
pub fn hand_as_symbols(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.symbol())
        .collect::<Vec<_>>()
        .join(SYMBOL_SEPARATOR)
}

/// Parses one symbol, falling back to `None` parts for unknown tokens.
#[must_use]
pub fn card_from_symbol(symbol: &str) -> Card {
    let symbol = symbol.trim();
    let mut chars = symbol.chars();
    let suit = chars
        .next_back()
        .and_then(Suit::from_symbol)
        .unwrap_or(Suit::None);
    let rank = Rank::from_symbol(chars.as_str()).unwrap_or(Rank::None);

    if rank == Rank::None || suit == Suit::None {
        warn!(symbol, ?rank, ?suit, "unrecognized card symbol");
    }
    Card::new(suit, rank)
}

/// Builds a hand from individual symbols, preserving their order.
#[must_use]
pub fn convert_from_symbols<S: AsRef<str>>(symbols: &[S]) -> Hand {
    symbols.iter().map(|s| card_from_symbol(s.as_ref())).collect()
}

/// Builds a hand from a string of symbols separated by commas or whitespace.
///
/// This is the inverse of [`hand_as_symbols`].
#[must_use]
pub fn hand_from_symbol_string(symbols: &str) -> Hand {
    symbols
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(card_from_symbol)
        .collect()
}
