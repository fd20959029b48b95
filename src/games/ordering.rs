//! Sequence ordering: drag items into their authored order, then check.
//!
//! Correctness is only evaluated on an explicit check, never continuously,
//! and every check counts an attempt. A solved check latches the state.

use crate::definition::OrderingContent;
use crate::error::ContentError;
use crate::scoring;
use crate::shuffle::SessionRng;
use crate::{MiniGame, Progress, Reaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingInput {
    /// Drag: remove the item at `from`, reinsert it at `to`.
    MoveItem { from: usize, to: usize },
    /// Evaluate the current order against the solution.
    Check,
}

#[derive(Debug, Clone)]
pub struct OrderingState {
    /// Item faces by id; id `i` belongs at position `i`.
    items: Vec<String>,
    /// Item ids in display order.
    order: Vec<usize>,
    attempts: u32,
    solved: bool,
}

impl OrderingState {
    pub fn new(content: OrderingContent, rng: &mut SessionRng) -> Result<Self, ContentError> {
        if content.items.len() < 2 {
            return Err(ContentError::NotEnoughItems);
        }

        let mut order: Vec<usize> = (0..content.items.len()).collect();
        // Re-deal until the sequence starts unsolved.
        loop {
            rng.shuffle(&mut order);
            if order.iter().enumerate().any(|(pos, &id)| pos != id) {
                break;
            }
        }

        Ok(OrderingState {
            items: content.items,
            order,
            attempts: 0,
            solved: false,
        })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    fn placed_count(&self) -> u32 {
        self.order
            .iter()
            .enumerate()
            .filter(|&(pos, &id)| pos == id)
            .count() as u32
    }
}

impl MiniGame for OrderingState {
    type Input = OrderingInput;

    fn apply_input(&mut self, input: &Self::Input) -> Reaction<Self::Input> {
        if self.solved {
            return Reaction::Ignored;
        }
        match *input {
            OrderingInput::MoveItem { from, to } => {
                if from == to || from >= self.order.len() || to >= self.order.len() {
                    return Reaction::Ignored;
                }
                let id = self.order.remove(from);
                self.order.insert(to, id);
                Reaction::Applied
            }
            OrderingInput::Check => {
                self.attempts += 1;
                if self.order.iter().enumerate().all(|(pos, &id)| pos == id) {
                    self.solved = true;
                }
                Reaction::Applied
            }
        }
    }

    fn is_terminal(&self) -> bool {
        self.solved
    }

    fn score(&self, points: u32) -> u32 {
        if self.solved {
            scoring::penalized(points, 2, self.attempts.saturating_sub(1), 0)
        } else {
            // No partial credit without a solved check.
            0
        }
    }

    fn progress(&self) -> Progress {
        Progress::new(self.placed_count(), self.items.len() as u32)
    }
}
