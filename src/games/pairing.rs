//! Pairing ("connect"): link items from two fixed columns.
//!
//! A pick on each side forms an attempt, checked against the definition's
//! exact `(left, right)` index set. Correct attempts commit permanently and
//! lock both items. Incorrect attempts stay visible as a rejected entry
//! until the scheduled [`PairingInput::ClearRejected`] lands (or a new pick
//! preempts it); they count as mistakes, never as connections made.

use std::collections::HashSet;

use crate::definition::{Connection, PairingContent};
use crate::error::ContentError;
use crate::scoring;
use crate::{DelayedInput, MiniGame, Progress, Reaction};

/// How long a rejected attempt stays on screen before it is discarded.
pub const REJECT_FLASH_MS: u64 = 900;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingInput {
    PickLeft(usize),
    PickRight(usize),
    /// Discard the rejected attempt (fed back by the host after the flash).
    ClearRejected,
}

/// A connection the player has attempted, kept for host display. Incorrect
/// entries are transient; only correct ones persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MadeConnection {
    pub left: usize,
    pub right: usize,
    pub correct: bool,
}

#[derive(Debug, Clone)]
pub struct PairingState {
    left: Vec<String>,
    right: Vec<String>,
    answers: HashSet<Connection>,
    made: Vec<MadeConnection>,
    picked_left: Option<usize>,
    picked_right: Option<usize>,
    mistakes: u32,
}

impl PairingState {
    pub fn new(content: PairingContent) -> Result<Self, ContentError> {
        if content.connections.is_empty() {
            return Err(ContentError::NoConnections);
        }
        for conn in &content.connections {
            if conn.left >= content.left.len() || conn.right >= content.right.len() {
                return Err(ContentError::ConnectionOutOfRange {
                    left: conn.left,
                    right: conn.right,
                });
            }
        }

        Ok(PairingState {
            answers: content.connections.iter().copied().collect(),
            left: content.left,
            right: content.right,
            made: Vec::new(),
            picked_left: None,
            picked_right: None,
            mistakes: 0,
        })
    }

    pub fn left_items(&self) -> &[String] {
        &self.left
    }

    pub fn right_items(&self) -> &[String] {
        &self.right
    }

    /// Attempts on display, committed and (at most one) rejected.
    pub fn made(&self) -> &[MadeConnection] {
        &self.made
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn picked_left(&self) -> Option<usize> {
        self.picked_left
    }

    pub fn picked_right(&self) -> Option<usize> {
        self.picked_right
    }

    pub fn connections_made(&self) -> u32 {
        self.made.iter().filter(|c| c.correct).count() as u32
    }

    fn is_committed_left(&self, index: usize) -> bool {
        self.made.iter().any(|c| c.correct && c.left == index)
    }

    fn is_committed_right(&self, index: usize) -> bool {
        self.made.iter().any(|c| c.correct && c.right == index)
    }

    fn has_rejected(&self) -> bool {
        self.made.iter().any(|c| !c.correct)
    }

    fn drop_rejected(&mut self) {
        self.made.retain(|c| c.correct);
    }

    /// Runs the comparison once both sides are picked.
    fn try_connect(&mut self) -> Reaction<PairingInput> {
        let (Some(left), Some(right)) = (self.picked_left, self.picked_right) else {
            return Reaction::Applied;
        };
        self.picked_left = None;
        self.picked_right = None;

        let correct = self.answers.contains(&Connection { left, right });
        self.made.push(MadeConnection { left, right, correct });
        if correct {
            Reaction::Applied
        } else {
            self.mistakes += 1;
            Reaction::Schedule(DelayedInput::new(REJECT_FLASH_MS, PairingInput::ClearRejected))
        }
    }
}

impl MiniGame for PairingState {
    type Input = PairingInput;

    fn apply_input(&mut self, input: &Self::Input) -> Reaction<Self::Input> {
        match *input {
            PairingInput::PickLeft(index) => {
                if index >= self.left.len() || self.is_committed_left(index) {
                    return Reaction::Ignored;
                }
                // A fresh pick preempts the flash.
                self.drop_rejected();
                self.picked_left = Some(index);
                self.try_connect()
            }
            PairingInput::PickRight(index) => {
                if index >= self.right.len() || self.is_committed_right(index) {
                    return Reaction::Ignored;
                }
                self.drop_rejected();
                self.picked_right = Some(index);
                self.try_connect()
            }
            PairingInput::ClearRejected => {
                if !self.has_rejected() {
                    return Reaction::Ignored;
                }
                self.drop_rejected();
                Reaction::Applied
            }
        }
    }

    fn is_terminal(&self) -> bool {
        self.connections_made() as usize == self.answers.len()
    }

    fn score(&self, points: u32) -> u32 {
        if self.is_terminal() {
            scoring::penalized(points, 3, self.mistakes, scoring::half(points))
        } else {
            scoring::ratio_score(self.connections_made(), self.answers.len() as u32, points)
        }
    }

    fn progress(&self) -> Progress {
        Progress::new(self.connections_made(), self.answers.len() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translations() -> PairingState {
        let content = PairingContent {
            left: ["dog", "cat", "bird", "fish", "horse"]
                .map(String::from)
                .to_vec(),
            right: ["Hund", "Katze", "Vogel", "Fisch", "Pferd"]
                .map(String::from)
                .to_vec(),
            connections: (0..5).map(|i| Connection { left: i, right: i }).collect(),
        };
        PairingState::new(content).unwrap()
    }

    fn connect(state: &mut PairingState, left: usize, right: usize) -> Reaction<PairingInput> {
        state.apply_input(&PairingInput::PickLeft(left));
        state.apply_input(&PairingInput::PickRight(right))
    }

    #[test]
    fn correct_attempt_commits() {
        let mut state = translations();
        assert_eq!(connect(&mut state, 0, 0), Reaction::Applied);
        assert_eq!(state.connections_made(), 1);
        assert_eq!(state.mistakes(), 0);
        assert_eq!(
            state.made(),
            &[MadeConnection { left: 0, right: 0, correct: true }]
        );
    }

    #[test]
    fn wrong_attempt_flashes_then_clears() {
        let mut state = translations();
        let outcome = connect(&mut state, 0, 3);
        assert_eq!(
            outcome,
            Reaction::Schedule(DelayedInput::new(
                REJECT_FLASH_MS,
                PairingInput::ClearRejected
            ))
        );
        assert_eq!(state.mistakes(), 1);
        assert_eq!(state.connections_made(), 0);
        assert!(state.made().iter().any(|c| !c.correct));

        state.apply_input(&PairingInput::ClearRejected);
        assert!(state.made().is_empty());
        assert_eq!(state.mistakes(), 1);
    }

    #[test]
    fn new_pick_preempts_the_flash() {
        let mut state = translations();
        connect(&mut state, 0, 3);
        // The flash has not been cleared yet.
        state.apply_input(&PairingInput::PickLeft(2));
        assert!(state.made().is_empty());
        assert_eq!(state.picked_left(), Some(2));
        // The late clear finds nothing to do.
        assert_eq!(
            state.apply_input(&PairingInput::ClearRejected),
            Reaction::Ignored
        );
    }

    #[test]
    fn committed_items_are_locked() {
        let mut state = translations();
        connect(&mut state, 0, 0);
        assert_eq!(state.apply_input(&PairingInput::PickLeft(0)), Reaction::Ignored);
        assert_eq!(state.apply_input(&PairingInput::PickRight(0)), Reaction::Ignored);
        assert_eq!(state.picked_left(), None);
        assert_eq!(state.picked_right(), None);
    }

    #[test]
    fn repick_replaces_selection() {
        let mut state = translations();
        state.apply_input(&PairingInput::PickLeft(0));
        state.apply_input(&PairingInput::PickLeft(1));
        assert_eq!(state.picked_left(), Some(1));
        assert_eq!(connect(&mut state, 1, 1), Reaction::Applied);
        assert_eq!(state.connections_made(), 1);
    }

    #[test]
    fn out_of_range_pick_is_ignored() {
        let mut state = translations();
        assert_eq!(state.apply_input(&PairingInput::PickLeft(5)), Reaction::Ignored);
        assert_eq!(state.apply_input(&PairingInput::PickRight(9)), Reaction::Ignored);
    }

    #[test]
    fn two_mistakes_on_full_board_score_94() {
        let mut state = translations();
        connect(&mut state, 0, 1);
        state.apply_input(&PairingInput::ClearRejected);
        connect(&mut state, 0, 2);
        state.apply_input(&PairingInput::ClearRejected);
        for i in 0..5 {
            connect(&mut state, i, i);
        }
        assert!(state.is_terminal());
        assert_eq!(state.mistakes(), 2);
        assert_eq!(state.score(100), 94);
    }

    #[test]
    fn completion_score_never_drops_below_half() {
        let mut state = translations();
        // Twenty mistakes would cost 60 points without the floor.
        for _ in 0..20 {
            connect(&mut state, 0, 1);
            state.apply_input(&PairingInput::ClearRejected);
        }
        for i in 0..5 {
            connect(&mut state, i, i);
        }
        assert!(state.is_terminal());
        assert_eq!(state.score(100), 50);
    }

    #[test]
    fn timeout_partial_is_ratio_of_connections_made() {
        let mut state = translations();
        connect(&mut state, 0, 0);
        connect(&mut state, 1, 1);
        assert!(!state.is_terminal());
        assert_eq!(state.score(100), 40);
        assert_eq!(state.progress(), Progress::new(2, 5));
    }

    #[test]
    fn rejects_bad_content() {
        let empty = PairingContent {
            left: vec!["a".into()],
            right: vec!["b".into()],
            connections: vec![],
        };
        assert_eq!(
            PairingState::new(empty).unwrap_err(),
            ContentError::NoConnections
        );

        let out_of_range = PairingContent {
            left: vec!["a".into()],
            right: vec!["b".into()],
            connections: vec![Connection { left: 1, right: 0 }],
        };
        assert_eq!(
            PairingState::new(out_of_range).unwrap_err(),
            ContentError::ConnectionOutOfRange { left: 1, right: 0 }
        );
    }
}
