//! Error types for hand operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when editing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Index is past the end of the hand.
    #[error("card index {index} out of range for hand of {len} cards")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
    /// Card has no suit or no rank.
    #[error("card has no suit or no rank")]
    InvalidCard,
}

/// Errors that can occur while parsing card symbols.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// Symbol is empty.
    #[error("symbol is empty")]
    Empty,
    /// Rank token is not recognized.
    #[error("unknown rank token {0:?}")]
    UnknownRank(String),
    /// Suit character is not recognized.
    #[error("unknown suit symbol {0:?}")]
    UnknownSuit(char),
}

/// Errors that can occur while generating synthetic hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The requested hand size cannot hold the combination.
    #[error("cannot generate {requested} cards (supported: {min}..={max})")]
    InvalidSize {
        /// Requested number of cards.
        requested: usize,
        /// Smallest supported size.
        min: usize,
        /// Largest supported size.
        max: usize,
    },
    /// Rejection sampling did not find a valid result.
    #[error("no valid result after {attempts} attempts")]
    RetriesExhausted {
        /// Number of attempts made.
        attempts: usize,
    },
}
