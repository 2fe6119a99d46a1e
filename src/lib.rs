//! A Three Card Brag hand evaluation engine with optional `no_std` support.
//!
//! The crate classifies hands of playing cards into brag combinations (pairs,
//! sequences, flushes, N of a kind, full houses, royal sequences), applies
//! trump card substitution, ranks hands against each other and generates
//! example hands for rule previews.
//!
//! # Example
//!
//! ```
//! use bragrs::{Combination, GameMode, classify, hand_from_symbol_string};
//!
//! let hand = hand_from_symbol_string("A♠, K♠, Q♠");
//! let mode = GameMode::default();
//! assert_eq!(classify(hand.cards(), None, &mode), Combination::RoyalSequence);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod analysis;
pub mod card;
pub mod combination;
pub mod error;
pub mod generate;
pub mod hand;
pub mod options;
pub mod symbols;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit, full_deck};
pub use combination::{Combination, HandStrength, classify, compare_hands, evaluate};
pub use error::{GenerateError, HandError, SymbolError};
pub use generate::{HandGenerator, highest_sequence, royal_sequence_as_rank};
pub use hand::{CardSequence, Hand};
pub use options::GameMode;
pub use symbols::{card_from_symbol, convert_from_symbols, hand_as_symbols, hand_from_symbol_string};
