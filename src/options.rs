//! Deck configuration options.

/// Configuration options for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_shuffle(false)
///     .with_jokers(true)
///     .with_aces_high(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckOptions {
    /// Whether the freshly-populated deck is shuffled. When `false` the
    /// deck starts in canonical order.
    pub shuffle: bool,
    /// Whether two jokers are added to the deck.
    pub jokers: bool,
    /// Whether aces sort above kings.
    pub aces_high: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            shuffle: true,
            jokers: false,
            aces_high: true,
        }
    }
}

impl DeckOptions {
    /// Sets whether the freshly-populated deck is shuffled.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle(false);
    /// assert!(!options.shuffle);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets whether two jokers are added to the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(true);
    /// assert!(options.jokers);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: bool) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets whether aces sort above kings.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_aces_high(false);
    /// assert!(!options.aces_high);
    /// ```
    #[must_use]
    pub const fn with_aces_high(mut self, aces_high: bool) -> Self {
        self.aces_high = aces_high;
        self
    }
}
