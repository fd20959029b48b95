//! Memory match: flip face-down cards and find the pairs.
//!
//! Each definition pair is dealt as two cards sharing a `pair_id`, shuffled
//! into a random layout. Flips fill a two-slot buffer; the second flip runs
//! the comparison and counts one move. The outcome is *pending* until a
//! [`MemoryInput::Resolve`] re-enters the queue; the session hands the host
//! a delayed input for that, short for a match reveal, longer for a mismatch
//! flip-back, so reveal effects stay ordered with regular input. Flipping a
//! third card while a resolution is pending resolves it immediately first.

use std::collections::HashSet;

use crate::definition::MemoryContent;
use crate::error::ContentError;
use crate::scoring;
use crate::shuffle::SessionRng;
use crate::{DelayedInput, MiniGame, Progress, Reaction};

/// How long a matched pair stays face up before it is marked matched.
pub const MATCH_REVEAL_MS: u64 = 600;
/// How long a mismatched pair stays face up before flipping back.
pub const MISMATCH_RESET_MS: u64 = 1200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryInput {
    /// Turn the card with this id face up.
    Flip(usize),
    /// Apply the pending comparison outcome (fed back by the host after the
    /// reveal/reset delay).
    Resolve,
}

/// One dealt card. `id` is the card's position-independent identity; cards of
/// the same pair share `pair_id`.
#[derive(Debug, Clone)]
pub struct MemoryCard {
    pub id: usize,
    pub pair_id: usize,
    pub face: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingOutcome {
    first: usize,
    second: usize,
    matched: bool,
}

#[derive(Debug, Clone)]
pub struct MemoryState {
    /// Cards in dealt (shuffled) order.
    cards: Vec<MemoryCard>,
    /// Ids currently face up, at most two.
    flipped: Vec<usize>,
    /// Ids locked as matched.
    matched: HashSet<usize>,
    /// Comparison awaiting its reveal/reset delay.
    pending: Option<PendingOutcome>,
    /// One per comparison, not per flip.
    moves: u32,
    pair_count: usize,
}

impl MemoryState {
    pub fn new(content: MemoryContent, rng: &mut SessionRng) -> Result<Self, ContentError> {
        if content.pairs.is_empty() {
            return Err(ContentError::NoPairs);
        }

        let mut cards = Vec::with_capacity(content.pairs.len() * 2);
        for (pair_id, pair) in content.pairs.iter().enumerate() {
            cards.push(MemoryCard {
                id: cards.len(),
                pair_id,
                face: pair.first.clone(),
            });
            cards.push(MemoryCard {
                id: cards.len(),
                pair_id,
                face: pair.second.clone(),
            });
        }
        rng.shuffle(&mut cards);

        Ok(MemoryState {
            pair_count: content.pairs.len(),
            cards,
            flipped: Vec::new(),
            matched: HashSet::new(),
            pending: None,
            moves: 0,
        })
    }

    /// Cards in dealt order.
    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matched_pairs(&self) -> u32 {
        (self.matched.len() / 2) as u32
    }

    /// Face up means flipped this turn or already matched.
    pub fn is_face_up(&self, id: usize) -> bool {
        self.matched.contains(&id) || self.flipped.contains(&id)
    }

    pub fn is_matched(&self, id: usize) -> bool {
        self.matched.contains(&id)
    }

    fn card_by_id(&self, id: usize) -> Option<&MemoryCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    fn resolve_pending(&mut self) {
        if let Some(outcome) = self.pending.take() {
            if outcome.matched {
                self.matched.insert(outcome.first);
                self.matched.insert(outcome.second);
            }
            self.flipped.clear();
        }
    }
}

impl MiniGame for MemoryState {
    type Input = MemoryInput;

    fn apply_input(&mut self, input: &Self::Input) -> Reaction<Self::Input> {
        match *input {
            MemoryInput::Flip(id) => {
                let Some(card) = self.card_by_id(id) else {
                    return Reaction::Ignored;
                };
                let pair_id = card.pair_id;

                // Validated against the layout the pending resolution will
                // leave behind: an invalid flip must stay a pure no-op, never
                // settle the comparison on its way to being dropped.
                let locked = self.matched.contains(&id)
                    || self
                        .pending
                        .map_or(false, |p| p.matched && (p.first == id || p.second == id));
                if locked || (self.pending.is_none() && self.flipped.contains(&id)) {
                    return Reaction::Ignored;
                }

                // A flip that races the reveal delay settles the comparison
                // first, then lands on the fresh layout.
                self.resolve_pending();
                self.flipped.push(id);
                if self.flipped.len() < 2 {
                    return Reaction::Applied;
                }

                let first = self.flipped[0];
                let matched = self
                    .card_by_id(first)
                    .map(|c| c.pair_id == pair_id)
                    .unwrap_or(false);
                self.moves += 1;
                self.pending = Some(PendingOutcome {
                    first,
                    second: id,
                    matched,
                });

                let delay = if matched { MATCH_REVEAL_MS } else { MISMATCH_RESET_MS };
                Reaction::Schedule(DelayedInput::new(delay, MemoryInput::Resolve))
            }
            MemoryInput::Resolve => {
                if self.pending.is_none() {
                    return Reaction::Ignored;
                }
                self.resolve_pending();
                Reaction::Applied
            }
        }
    }

    fn is_terminal(&self) -> bool {
        self.matched.len() == self.cards.len()
    }

    fn score(&self, points: u32) -> u32 {
        if self.is_terminal() {
            let excess = self.moves.saturating_sub(self.pair_count as u32);
            scoring::penalized(points, 2, excess, 0)
        } else {
            scoring::ratio_score(self.matched_pairs(), self.pair_count as u32, points)
        }
    }

    fn progress(&self) -> Progress {
        Progress::new(self.matched_pairs(), self.pair_count as u32)
    }
}
