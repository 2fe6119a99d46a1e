//! Synthetic hand generation for rule previews and fixtures.
//!
//! [`HandGenerator`] owns its random source so that output is reproducible from
//! a seed. Rejection sampling is bounded by [`MAX_ATTEMPTS`]; running out of
//! attempts is reported as a [`GenerateError`].

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::card::{Card, Rank, Suit, full_deck};
use crate::combination::{Combination, classify};
use crate::error::GenerateError;
use crate::hand::Hand;
use crate::options::GameMode;

/// Attempts made by rejection sampling before giving up.
pub const MAX_ATTEMPTS: usize = 64;

/// Number of real ranks.
const RANK_COUNT: usize = Rank::ASCENDING.len();

/// Returns the `n` highest ranks in ascending order, e.g. Q, K, A for three.
#[must_use]
pub fn highest_sequence(n: usize) -> Vec<Rank> {
    let n = n.min(RANK_COUNT);
    Rank::ASCENDING[RANK_COUNT - n..].to_vec()
}

/// Returns the first `n` ranks of the royal template, highest first.
#[must_use]
pub fn royal_sequence_as_rank(n: usize) -> Vec<Rank> {
    Rank::ROYAL[..n.min(Rank::ROYAL.len())].to_vec()
}

/// Returns whether a run matches the royal template for its size. Runs longer
/// than the template are never royal, as with
/// [`is_royal_sequence`](crate::analysis::is_royal_sequence).
fn is_royal_run(ranks: &[Rank]) -> bool {
    if ranks.len() > Rank::ROYAL.len() {
        return false;
    }
    let mut sorted = ranks.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted == Rank::ROYAL[..sorted.len()]
}

/// Hand sizes for which [`HandGenerator::example_hand`] can build `combination`.
#[must_use]
pub const fn supported_sizes(combination: Combination) -> RangeInclusive<usize> {
    match combination {
        Combination::HighCard | Combination::Flush => 3..=12,
        Combination::Pair => 3..=9,
        Combination::MultiplePairs | Combination::FourOfAKind => 4..=13,
        Combination::Sequence | Combination::StraightFlush | Combination::ThreeOfAKind => 3..=13,
        Combination::MultipleTriplets => 6..=13,
        Combination::FullHouse => 3..=8,
        Combination::RoyalSequence => 3..=9,
    }
}

/// Generates ranks and hands from an owned random source.
#[derive(Debug, Clone)]
pub struct HandGenerator<R = ChaCha8Rng> {
    rng: R,
}

impl HandGenerator<ChaCha8Rng> {
    /// Creates a generator seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bragrs::HandGenerator;
    ///
    /// let mut a = HandGenerator::new(7);
    /// let mut b = HandGenerator::new(7);
    /// assert_eq!(a.straight_flush(3), b.straight_flush(3));
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> HandGenerator<R> {
    /// Creates a generator drawing from `rng`.
    #[must_use]
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the random source.
    pub const fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    fn random_suit(&mut self) -> Suit {
        Suit::ALL[self.rng.random_range(0..Suit::ALL.len())]
    }

    /// Takes `n` consecutive ranks from a random start. Only three-card runs
    /// may wrap past the ace (K-A-2, A-2-3).
    fn random_run(&mut self, n: usize) -> Vec<Rank> {
        if n == 3 {
            let start = self.rng.random_range(0..RANK_COUNT);
            (0..n)
                .map(|i| Rank::ASCENDING[(start + i) % RANK_COUNT])
                .collect()
        } else {
            let start = self.rng.random_range(0..=RANK_COUNT - n);
            Rank::ASCENDING[start..start + n].to_vec()
        }
    }

    /// Picks a random run of `n` ranks that is not the royal run.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is outside `3..=13` or no non-royal run was
    /// drawn within [`MAX_ATTEMPTS`].
    pub fn straight_flush(&mut self, n: usize) -> Result<Vec<Rank>, GenerateError> {
        let sizes = supported_sizes(Combination::StraightFlush);
        if !sizes.contains(&n) {
            return Err(GenerateError::InvalidSize {
                requested: n,
                min: *sizes.start(),
                max: *sizes.end(),
            });
        }

        for attempt in 1..=MAX_ATTEMPTS {
            let run = self.random_run(n);
            if !is_royal_run(&run) {
                debug!(n, attempt, "drew straight flush run");
                return Ok(run);
            }
        }
        warn!(n, attempts = MAX_ATTEMPTS, "no non-royal run drawn");
        Err(GenerateError::RetriesExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Builds a straight flush hand of `n` cards in one random suit.
    ///
    /// # Errors
    ///
    /// See [`straight_flush`](Self::straight_flush).
    pub fn straight_flush_hand(&mut self, n: usize) -> Result<Hand, GenerateError> {
        let suit = self.random_suit();
        let ranks = self.straight_flush(n)?;
        Ok(ranks.into_iter().map(|rank| Card::new(suit, rank)).collect())
    }

    /// Samples up to `n` distinct ranks from two through ten, skipping the trump
    /// rank. Returns fewer when the pool runs out.
    pub fn select_non_high_ranks(&mut self, n: usize, trump: Option<Card>) -> Vec<Rank> {
        let pool: Vec<Rank> = Rank::ASCENDING
            .into_iter()
            .filter(|&rank| rank < Rank::Jack && trump.is_none_or(|t| t.rank != rank))
            .collect();
        if pool.len() < n {
            warn!(requested = n, available = pool.len(), "non-high rank pool too small");
        }
        pool.choose_multiple(&mut self.rng, n).copied().collect()
    }

    /// Samples up to `n` distinct cards ranked jack or higher, never the trump
    /// card. Returns fewer when the pool runs out.
    pub fn select_high_ranking_non_trump_cards(
        &mut self,
        n: usize,
        trump: Option<Card>,
    ) -> Vec<Card> {
        let pool: Vec<Card> = full_deck()
            .into_iter()
            .filter(|&card| card.rank >= Rank::Jack && Some(card) != trump)
            .collect();
        if pool.len() < n {
            warn!(requested = n, available = pool.len(), "high card pool too small");
        }
        pool.choose_multiple(&mut self.rng, n).copied().collect()
    }

    /// Deals each `(rank, count)` group in distinct suits, then `fillers`
    /// singletons of other ranks in random suits.
    fn deal_groups(&mut self, groups: &[(Rank, usize)], fillers: usize) -> Vec<Card> {
        let mut cards = Vec::new();
        for &(rank, count) in groups {
            let mut suits = Suit::ALL;
            suits.shuffle(&mut self.rng);
            cards.extend(suits.iter().take(count).map(|&suit| Card::new(suit, rank)));
        }

        let pool: Vec<Rank> = Rank::ASCENDING
            .into_iter()
            .filter(|rank| groups.iter().all(|(g, _)| g != rank))
            .collect();
        let ranks: Vec<Rank> = pool.choose_multiple(&mut self.rng, fillers).copied().collect();
        for rank in ranks {
            let suit = self.random_suit();
            cards.push(Card::new(suit, rank));
        }
        cards
    }

    fn distinct_ranks(&mut self, n: usize, exclude: &[Rank]) -> Vec<Rank> {
        let pool: Vec<Rank> = Rank::ASCENDING
            .into_iter()
            .filter(|rank| !exclude.contains(rank))
            .collect();
        pool.choose_multiple(&mut self.rng, n).copied().collect()
    }

    fn candidate(&mut self, combination: Combination, n: usize) -> Vec<Card> {
        match combination {
            Combination::HighCard => self.deal_groups(&[], n),
            Combination::Pair => {
                let rank = self.distinct_ranks(1, &[]);
                let groups: Vec<_> = rank.into_iter().map(|r| (r, 2)).collect();
                self.deal_groups(&groups, n - 2)
            }
            Combination::MultiplePairs => {
                let groups: Vec<_> = self.distinct_ranks(2, &[]).into_iter().map(|r| (r, 2)).collect();
                self.deal_groups(&groups, n - 4)
            }
            Combination::ThreeOfAKind => {
                let groups: Vec<_> = self
                    .distinct_ranks(1, &[Rank::Ace])
                    .into_iter()
                    .map(|r| (r, 3))
                    .collect();
                self.deal_groups(&groups, n - 3)
            }
            Combination::MultipleTriplets => {
                let groups: Vec<_> = self
                    .distinct_ranks(2, &[Rank::Ace, Rank::King])
                    .into_iter()
                    .map(|r| (r, 3))
                    .collect();
                self.deal_groups(&groups, n - 6)
            }
            Combination::FourOfAKind => {
                let groups: Vec<_> = self
                    .distinct_ranks(1, &[Rank::Ace])
                    .into_iter()
                    .map(|r| (r, 4))
                    .collect();
                self.deal_groups(&groups, n - 4)
            }
            Combination::FullHouse => {
                let aces = if n == 3 { 3 } else { 4 };
                self.deal_groups(&[(Rank::Ace, aces), (Rank::King, n - aces)], 0)
            }
            Combination::Flush => {
                let suit = self.random_suit();
                self.distinct_ranks(n, &[])
                    .into_iter()
                    .map(|rank| Card::new(suit, rank))
                    .collect()
            }
            Combination::Sequence => self
                .random_run(n)
                .into_iter()
                .map(|rank| Card::new(self.random_suit(), rank))
                .collect(),
            Combination::StraightFlush => self
                .straight_flush_hand(n)
                .map(Hand::into_cards)
                .unwrap_or_default(),
            Combination::RoyalSequence => {
                let suit = self.random_suit();
                royal_sequence_as_rank(n)
                    .into_iter()
                    .map(|rank| Card::new(suit, rank))
                    .collect()
            }
        }
    }

    /// Builds a shuffled hand of `mode.number_of_cards` cards that classifies as
    /// `combination` when evaluated without a trump card. The trump card, if
    /// given, is never dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand size cannot hold the combination (see
    /// [`supported_sizes`]) or no valid hand was drawn within
    /// [`MAX_ATTEMPTS`].
    ///
    /// # Example
    ///
    /// ```
    /// use bragrs::{Combination, GameMode, HandGenerator, classify};
    ///
    /// let mode = GameMode::default();
    /// let mut generator = HandGenerator::new(1);
    /// let hand = generator.example_hand(Combination::Pair, &mode, None).unwrap();
    /// assert_eq!(classify(hand.cards(), None, &mode), Combination::Pair);
    /// ```
    pub fn example_hand(
        &mut self,
        combination: Combination,
        mode: &GameMode,
        trump: Option<Card>,
    ) -> Result<Hand, GenerateError> {
        let n = mode.number_of_cards;
        let sizes = supported_sizes(combination);
        if !sizes.contains(&n) {
            return Err(GenerateError::InvalidSize {
                requested: n,
                min: *sizes.start(),
                max: *sizes.end(),
            });
        }

        for attempt in 1..=MAX_ATTEMPTS {
            let mut cards = self.candidate(combination, n);
            let holds_trump = trump.is_some_and(|t| cards.contains(&t));
            if cards.len() == n && !holds_trump && classify(&cards, None, mode) == combination {
                debug!(%combination, n, attempt, "generated example hand");
                cards.shuffle(&mut self.rng);
                return Ok(Hand::from_cards(cards));
            }
        }
        warn!(%combination, n, attempts = MAX_ATTEMPTS, "no example hand generated");
        Err(GenerateError::RetriesExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}
