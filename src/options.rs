//! Game mode configuration.

/// Default number of cards in a hand.
pub const DEFAULT_NUMBER_OF_CARDS: usize = 3;

/// Rules that size and parameterize hand evaluation.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bragrs::GameMode;
///
/// let mode = GameMode::default()
///     .with_number_of_cards(5)
///     .with_use_trump(true);
/// assert_eq!(mode.number_of_cards, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameMode {
    /// Number of cards dealt to each hand.
    pub number_of_cards: usize,
    /// Whether the trump card may complete groups.
    pub use_trump: bool,
    /// Whether the trump card acts as a wild card for sequences.
    pub use_magic_cards: bool,
}

impl Default for GameMode {
    fn default() -> Self {
        Self {
            number_of_cards: DEFAULT_NUMBER_OF_CARDS,
            use_trump: false,
            use_magic_cards: false,
        }
    }
}

impl GameMode {
    /// Sets the number of cards per hand.
    ///
    /// # Example
    ///
    /// ```
    /// use bragrs::GameMode;
    ///
    /// let mode = GameMode::default().with_number_of_cards(4);
    /// assert_eq!(mode.number_of_cards, 4);
    /// ```
    #[must_use]
    pub const fn with_number_of_cards(mut self, number_of_cards: usize) -> Self {
        self.number_of_cards = number_of_cards;
        self
    }

    /// Sets whether the trump card may complete groups.
    ///
    /// # Example
    ///
    /// ```
    /// use bragrs::GameMode;
    ///
    /// let mode = GameMode::default().with_use_trump(true);
    /// assert!(mode.use_trump);
    /// ```
    #[must_use]
    pub const fn with_use_trump(mut self, use_trump: bool) -> Self {
        self.use_trump = use_trump;
        self
    }

    /// Sets whether the trump card acts as a wild card for sequences.
    ///
    /// # Example
    ///
    /// ```
    /// use bragrs::GameMode;
    ///
    /// let mode = GameMode::default().with_use_magic_cards(true);
    /// assert!(mode.use_magic_cards);
    /// ```
    #[must_use]
    pub const fn with_use_magic_cards(mut self, use_magic_cards: bool) -> Self {
        self.use_magic_cards = use_magic_cards;
        self
    }
}
