//! The game session controller.
//!
//! A `Session` exclusively owns the deck, the face-up pool and the
//! found-Set counter. Commands mutate it through `&mut self`; the rules
//! functions only ever see `&self.pool`.
//!
//! ## Lifecycle
//!
//! 1. Dealing: shuffle the 81 cards, deal `initial_pool_size` face up.
//! 2. Before each prompt, [`Session::is_terminal`] decides whether the
//!    game is over.
//! 3. Otherwise one [`Command`] is applied and reported as an [`Outcome`].
//!
//! ## Invariants
//!
//! - deck, pool and claimed Sets partition the 81 cards
//! - the pool never exceeds `max_pool_size`
//! - `sets_found` goes up by exactly 1 per confirmed Set

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::command::{Command, SelectionError};
use super::outcome::Outcome;
use crate::cards::{new_shuffled_deck, Card};
use crate::core::config::{SetConfig, TerminationPolicy, DRAW_SIZE, SET_SIZE};
use crate::core::error::{Result, SetError};
use crate::core::rng::GameRng;
use crate::rules::{count_sets, find_set, is_set};

/// Who confirmed a Set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Claimant {
    /// The player, by selecting three positions.
    Player,
    /// The computer, via `find`.
    Computer,
}

/// A state change, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Initial face-up cards.
    Dealt { cards: Vec<Card> },
    /// Cards dealt by an explicit draw.
    Drew { cards: [Card; DRAW_SIZE] },
    /// A Set was confirmed and removed from the pool.
    SetClaimed { set: [Card; SET_SIZE], by: Claimant },
    /// Cards dealt automatically after a claim left the pool short.
    Replenished { cards: [Card; DRAW_SIZE] },
}

/// A recorded event with its position in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position in the history, starting at 0.
    pub sequence: u32,
    /// What happened.
    pub event: SessionEvent,
}

/// Why the session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Deck empty and no Set face up.
    DeckExhausted,
    /// No Set face up and the pool is already at the cap.
    BoardFull,
    /// The pool dropped below the initial size.
    PoolBelowDefault { min: usize },
    /// The player stopped before the game was over.
    Abandoned,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::DeckExhausted => {
                write!(f, "No sets to find, and the deck is empty. this game is over :)")
            }
            EndReason::BoardFull => {
                write!(f, "No sets to find, and no more cards fit on the board. this game is over :)")
            }
            EndReason::PoolBelowDefault { min } => {
                write!(f, "Fewer than {} cards are face up. this game is over :)", min)
            }
            EndReason::Abandoned => write!(f, "The game was left unfinished."),
        }
    }
}

/// Final report of a finished session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Sets confirmed during the session.
    pub sets_found: u32,
    /// Undealt cards at the end.
    pub cards_left_in_deck: usize,
    /// Face-up cards at the end.
    pub cards_left_in_pool: usize,
    /// Which termination rule fired.
    pub reason: EndReason,
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You finished the game!!! {} Sets have been found. Well done.",
            self.sets_found
        )
    }
}

/// One game of Set.
///
/// ## Usage
///
/// ```
/// use set_game::core::SetConfig;
/// use set_game::game::{Outcome, Session};
///
/// let mut session = Session::with_seed(SetConfig::default(), 42).unwrap();
/// assert_eq!(session.pool().len(), 12);
/// assert_eq!(session.deck_len(), 69);
///
/// match session.handle_input("find") {
///     Outcome::ComputerFound { .. } => assert_eq!(session.sets_found(), 1),
///     Outcome::NoSetFound => assert_eq!(session.sets_found(), 0),
///     other => panic!("unexpected outcome: {:?}", other),
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: SetConfig,
    seed: Option<u64>,
    /// Undealt cards; dealing takes from the end.
    deck: Vec<Card>,
    /// Face-up cards in display order.
    pool: Vec<Card>,
    sets_found: u32,
    history: Vector<EventRecord>,
}

impl Session {
    /// Start a session with a freshly shuffled deck.
    ///
    /// The seed is kept only when `rng` had not been used yet, since only
    /// then does it replay this deal.
    pub fn new(config: SetConfig, rng: &mut GameRng) -> Result<Self> {
        let seed = rng.is_fresh().then(|| rng.seed());
        let deck = new_shuffled_deck(rng);
        let mut session = Self::from_deck(config, deck)?;
        session.seed = seed;
        Ok(session)
    }

    /// Start a session whose shuffle is reproducible from `seed`.
    pub fn with_seed(config: SetConfig, seed: u64) -> Result<Self> {
        Self::new(config, &mut GameRng::new(seed))
    }

    /// Start a session from a deck in dealing order (last card dealt first).
    ///
    /// The deck must hold distinct cards, at least `initial_pool_size` of
    /// them.
    pub fn from_deck(config: SetConfig, mut deck: Vec<Card>) -> Result<Self> {
        config.validate()?;
        if deck.len() < config.initial_pool_size {
            return Err(SetError::InvalidArgument(format!(
                "deck of {} cards cannot fill a pool of {}",
                deck.len(),
                config.initial_pool_size
            )));
        }
        check_distinct(deck.iter())?;

        let pool = deck.split_off(deck.len() - config.initial_pool_size);
        // Deal order: the last card of the deck is the first card face up
        let pool: Vec<Card> = pool.into_iter().rev().collect();
        Ok(Self::assemble(config, deck, pool))
    }

    /// Resume from an explicit deck and pool, e.g. a planted position.
    ///
    /// Cards must be distinct across both, and the pool must fit the cap.
    pub fn from_parts(config: SetConfig, deck: Vec<Card>, pool: Vec<Card>) -> Result<Self> {
        config.validate()?;
        if pool.len() > config.max_pool_size {
            return Err(SetError::PoolOverCapacity {
                size: pool.len(),
                max: config.max_pool_size,
            });
        }
        check_distinct(deck.iter().chain(pool.iter()))?;
        Ok(Self::assemble(config, deck, pool))
    }

    fn assemble(config: SetConfig, deck: Vec<Card>, pool: Vec<Card>) -> Self {
        let mut session = Self {
            config,
            seed: None,
            deck,
            pool,
            sets_found: 0,
            history: Vector::new(),
        };
        session.record(SessionEvent::Dealt {
            cards: session.pool.clone(),
        });
        session
    }

    // === Accessors ===

    /// The configuration this session runs with.
    #[must_use]
    pub fn config(&self) -> &SetConfig {
        &self.config
    }

    /// Seed that replays this deal, when known.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Face-up cards in display order. Position `i` is shown as `i + 1`.
    #[must_use]
    pub fn pool(&self) -> &[Card] {
        &self.pool
    }

    /// Undealt cards, last one dealt next.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Sets confirmed so far.
    #[must_use]
    pub fn sets_found(&self) -> u32 {
        self.sets_found
    }

    /// Every state change so far.
    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    /// Number of Sets among the face-up cards.
    #[must_use]
    pub fn count_existing(&self) -> usize {
        count_sets(&self.pool)
    }

    // === Commands ===

    /// Parse one line of input and apply it.
    pub fn handle_input(&mut self, line: &str) -> Outcome {
        match Command::parse(line, self.pool.len()) {
            Ok(command) => self.apply(&command),
            Err(err) => Outcome::Malformed(err),
        }
    }

    /// Apply a parsed command.
    pub fn apply(&mut self, command: &Command) -> Outcome {
        match command {
            Command::Draw => self.draw(),
            Command::Find => self.find(),
            Command::HowManyFound => Outcome::FoundCount(self.sets_found),
            Command::HowManyExist => Outcome::ExistCount(self.count_existing()),
            Command::Select(positions) => self.select(*positions),
        }
    }

    /// Deal 3 more cards face up, unless the pool is full or the deck
    /// is out.
    pub fn draw(&mut self) -> Outcome {
        if !self.has_room() {
            return Outcome::MaxReached {
                max: self.config.max_pool_size,
            };
        }
        match self.deal_batch() {
            Some(cards) => {
                self.record(SessionEvent::Drew { cards });
                Outcome::Drew { cards }
            }
            None => Outcome::DeckEmpty,
        }
    }

    /// Let the computer find a Set and claim it.
    pub fn find(&mut self) -> Outcome {
        match find_set(&self.pool) {
            Some(set) => {
                self.claim(set, Claimant::Computer);
                Outcome::ComputerFound { set }
            }
            None => Outcome::NoSetFound,
        }
    }

    /// Claim the cards at three 1-based positions as a Set.
    pub fn select(&mut self, positions: [usize; SET_SIZE]) -> Outcome {
        let cards = match self.resolve(positions) {
            Ok(cards) => cards,
            Err(err) => return Outcome::Malformed(err),
        };

        let [a, b, c] = cards;
        if is_set(a, b, c) {
            self.claim(cards, Claimant::Player);
            Outcome::SetAccepted { set: cards }
        } else {
            Outcome::InvalidSet { cards }
        }
    }

    // === Termination ===

    /// Whether the game is over, checked before each prompt.
    ///
    /// Returns the final summary when it is, `None` while play continues.
    #[must_use]
    pub fn is_terminal(&self) -> Option<GameSummary> {
        let reason = self.end_reason()?;
        Some(self.summary(reason))
    }

    /// Summary of the session as it stands: the terminal summary when the
    /// game is over, otherwise one marked `Abandoned`.
    #[must_use]
    pub fn finish(&self) -> GameSummary {
        self.is_terminal()
            .unwrap_or_else(|| self.summary(EndReason::Abandoned))
    }

    fn end_reason(&self) -> Option<EndReason> {
        if self.config.termination == TerminationPolicy::PoolBelowDefault
            && self.pool.len() < self.config.initial_pool_size
        {
            return Some(EndReason::PoolBelowDefault {
                min: self.config.initial_pool_size,
            });
        }

        // find_set is None exactly when the pool holds no Set
        if find_set(&self.pool).is_some() {
            return None;
        }
        if self.deck.len() < DRAW_SIZE {
            Some(EndReason::DeckExhausted)
        } else if !self.has_room() {
            Some(EndReason::BoardFull)
        } else {
            None
        }
    }

    fn summary(&self, reason: EndReason) -> GameSummary {
        GameSummary {
            sets_found: self.sets_found,
            cards_left_in_deck: self.deck.len(),
            cards_left_in_pool: self.pool.len(),
            reason,
        }
    }

    // === Internals ===

    fn has_room(&self) -> bool {
        self.pool.len() + DRAW_SIZE <= self.config.max_pool_size
    }

    /// Move 3 cards from the deck to the end of the pool.
    fn deal_batch(&mut self) -> Option<[Card; DRAW_SIZE]> {
        let start = self.deck.len().checked_sub(DRAW_SIZE)?;
        let dealt = self.deck.split_off(start);
        // Last card of the deck comes off first
        let cards = [dealt[2], dealt[1], dealt[0]];
        self.pool.extend_from_slice(&cards);
        Some(cards)
    }

    fn resolve(&self, positions: [usize; SET_SIZE]) -> std::result::Result<[Card; SET_SIZE], SelectionError> {
        let [i, j, k] = positions;
        if i == j || j == k || i == k {
            return Err(SelectionError::WrongCount);
        }

        let card_at = |position: usize| {
            position
                .checked_sub(1)
                .and_then(|idx| self.pool.get(idx))
                .copied()
                .ok_or_else(|| SelectionError::OutOfRange {
                    token: position.to_string(),
                    max: self.pool.len(),
                })
        };
        Ok([card_at(i)?, card_at(j)?, card_at(k)?])
    }

    /// Remove a confirmed Set, count it, and top the pool back up.
    fn claim(&mut self, set: [Card; SET_SIZE], by: Claimant) {
        self.pool.retain(|card| !set.contains(card));
        self.sets_found += 1;
        self.record(SessionEvent::SetClaimed { set, by });

        if self.pool.len() < self.config.initial_pool_size && self.has_room() {
            if let Some(cards) = self.deal_batch() {
                self.record(SessionEvent::Replenished { cards });
            }
        }
    }

    fn record(&mut self, event: SessionEvent) {
        let sequence = self.history.len() as u32;
        self.history.push_back(EventRecord { sequence, event });
    }
}

fn check_distinct<'a>(cards: impl Iterator<Item = &'a Card>) -> Result<()> {
    let mut seen = FxHashSet::default();
    for &card in cards {
        if !seen.insert(card) {
            return Err(SetError::DuplicateCard(card));
        }
    }
    Ok(())
}
