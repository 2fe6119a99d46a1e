//! Card types and deck utilities.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::SymbolError;

/// Card suit.
///
/// `None` is the placeholder suit produced when a symbol cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Suit {
    /// No suit.
    #[default]
    None,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

/// Suit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Clubs and spades.
    Black,
}

impl Suit {
    /// The four real suits.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the color of the suit, or `None` for [`Suit::None`].
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Hearts | Self::Diamonds => Some(Color::Red),
            Self::Clubs | Self::Spades => Some(Color::Black),
            Self::None => None,
        }
    }

    /// Returns the display symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
            Self::None => '?',
        }
    }

    /// Maps a suit symbol (or its ASCII letter) to a suit.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '♥' | 'H' | 'h' => Some(Self::Hearts),
            '♦' | 'D' | 'd' => Some(Self::Diamonds),
            '♣' | 'C' | 'c' => Some(Self::Clubs),
            '♠' | 'S' | 's' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, ordered by value with the ace high.
///
/// `None` has value 0 and sorts below every real rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Rank {
    /// No rank.
    #[default]
    None = 0,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Ace.
    Ace = 14,
}

impl Rank {
    /// The thirteen real ranks in ascending order.
    pub const ASCENDING: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// The royal template, highest first. A royal sequence of `n` cards uses
    /// the first `n` entries.
    pub const ROYAL: [Self; 9] = [
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
    ];

    /// Returns the numeric value (2..=14, 0 for `None`).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Maps a numeric value back to a rank.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            10 => Some(Self::Ten),
            11 => Some(Self::Jack),
            12 => Some(Self::Queen),
            13 => Some(Self::King),
            14 => Some(Self::Ace),
            _ => None,
        }
    }

    /// Returns the display token of the rank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
            Self::None => "?",
        }
    }

    /// Maps a rank token back to a rank.
    #[must_use]
    pub fn from_symbol(token: &str) -> Option<Self> {
        match token {
            "2" => Some(Self::Two),
            "3" => Some(Self::Three),
            "4" => Some(Self::Four),
            "5" => Some(Self::Five),
            "6" => Some(Self::Six),
            "7" => Some(Self::Seven),
            "8" => Some(Self::Eight),
            "9" => Some(Self::Nine),
            "10" => Some(Self::Ten),
            "J" | "j" => Some(Self::Jack),
            "Q" | "q" => Some(Self::Queen),
            "K" | "k" => Some(Self::King),
            "A" | "a" => Some(Self::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
///
/// Two cards are equal when suit and rank are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the rank value (2..=14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// Returns whether both suit and rank are real.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self.suit, Suit::None) && !matches!(self.rank, Rank::None)
    }

    /// Returns the color of the card's suit.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        self.suit.color()
    }

    /// Returns the display symbol, e.g. `"10♠"`.
    #[must_use]
    pub fn symbol(self) -> alloc::string::String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = SymbolError;

    /// Parses a symbol such as `"J♠"` or `"10h"`: a one or two character rank
    /// token followed by a single suit character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or(SymbolError::Empty)?;
        let token = chars.as_str();
        if token.is_empty() {
            return Err(SymbolError::UnknownRank(s.to_string()));
        }

        let rank =
            Rank::from_symbol(token).ok_or_else(|| SymbolError::UnknownRank(token.to_string()))?;
        let suit = Suit::from_symbol(suit_char).ok_or(SymbolError::UnknownSuit(suit_char))?;
        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns a full deck ordered by suit, then ascending rank.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ASCENDING {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}
