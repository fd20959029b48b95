//! Sliding puzzle: swap pieces until every one sits at its home position.
//!
//! Piece `i`'s home is position `i`. The deal shuffles positions and re-deals
//! until at least one piece is displaced, so a session never opens solved.

use crate::definition::PuzzleContent;
use crate::error::ContentError;
use crate::scoring;
use crate::shuffle::SessionRng;
use crate::{MiniGame, Progress, Reaction};

/// Selects the board position that was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInput(pub usize);

#[derive(Debug, Clone)]
pub struct PuzzlePiece {
    /// Identity, which is also the solved position.
    pub id: usize,
    pub face: String,
    /// Current board position.
    pub position: usize,
}

#[derive(Debug, Clone)]
pub struct PuzzleState {
    /// Indexed by piece id.
    pieces: Vec<PuzzlePiece>,
    /// Board position awaiting a swap partner.
    selected: Option<usize>,
    moves: u32,
}

impl PuzzleState {
    pub fn new(content: PuzzleContent, rng: &mut SessionRng) -> Result<Self, ContentError> {
        if content.pieces.len() < 2 {
            return Err(ContentError::NotEnoughPieces);
        }

        let mut positions: Vec<usize> = (0..content.pieces.len()).collect();
        // Re-deal until something is displaced.
        loop {
            rng.shuffle(&mut positions);
            if positions.iter().enumerate().any(|(i, &p)| i != p) {
                break;
            }
        }

        let pieces = content
            .pieces
            .into_iter()
            .zip(positions)
            .enumerate()
            .map(|(id, (face, position))| PuzzlePiece { id, face, position })
            .collect();

        Ok(PuzzleState {
            pieces,
            selected: None,
            moves: 0,
        })
    }

    pub fn pieces(&self) -> &[PuzzlePiece] {
        &self.pieces
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn correct_count(&self) -> u32 {
        self.pieces.iter().filter(|p| p.id == p.position).count() as u32
    }

    fn swap_positions(&mut self, a: usize, b: usize) {
        let pa = self.pieces.iter().position(|p| p.position == a);
        let pb = self.pieces.iter().position(|p| p.position == b);
        if let (Some(pa), Some(pb)) = (pa, pb) {
            self.pieces[pa].position = b;
            self.pieces[pb].position = a;
        }
    }
}

impl MiniGame for PuzzleState {
    type Input = PuzzleInput;

    fn apply_input(&mut self, input: &Self::Input) -> Reaction<Self::Input> {
        let position = input.0;
        if position >= self.pieces.len() {
            return Reaction::Ignored;
        }
        match self.selected {
            None => {
                self.selected = Some(position);
                Reaction::Applied
            }
            // Second click on the same piece backs out without a move.
            Some(held) if held == position => {
                self.selected = None;
                Reaction::Applied
            }
            Some(held) => {
                self.swap_positions(held, position);
                self.selected = None;
                self.moves += 1;
                Reaction::Applied
            }
        }
    }

    fn is_terminal(&self) -> bool {
        self.pieces.iter().all(|p| p.id == p.position)
    }

    fn score(&self, points: u32) -> u32 {
        if self.is_terminal() {
            let excess = self.moves.saturating_sub(self.pieces.len() as u32);
            scoring::penalized(points, 3, excess, scoring::half(points))
        } else {
            scoring::ratio_score(self.correct_count(), self.pieces.len() as u32, points)
        }
    }

    fn progress(&self) -> Progress {
        Progress::new(self.correct_count(), self.pieces.len() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(pieces: usize, seed: u64) -> PuzzleState {
        let content = PuzzleContent {
            pieces: (0..pieces).map(|i| format!("tile-{i}")).collect(),
        };
        PuzzleState::new(content, &mut SessionRng::seeded(seed)).unwrap()
    }

    /// Board position currently holding the given piece.
    fn position_of(state: &PuzzleState, id: usize) -> usize {
        state.pieces()[id].position
    }

    /// Place every piece with a selection-sort walk, at most n−1 swaps.
    fn solve(state: &mut PuzzleState) {
        for home in 0..state.piece_count() {
            let from = position_of(state, home);
            if from != home {
                state.apply_input(&PuzzleInput(home));
                state.apply_input(&PuzzleInput(from));
            }
        }
    }

    #[test]
    fn deal_is_never_already_solved() {
        for seed in 0..20 {
            let state = deal(4, seed);
            assert!(!state.is_terminal(), "seed {seed} dealt a solved board");
            let mut held: Vec<usize> = state.pieces().iter().map(|p| p.position).collect();
            held.sort_unstable();
            assert_eq!(held, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn clicking_same_piece_deselects_without_a_move() {
        let mut state = deal(4, 7);
        state.apply_input(&PuzzleInput(2));
        assert_eq!(state.selected(), Some(2));
        state.apply_input(&PuzzleInput(2));
        assert_eq!(state.selected(), None);
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let mut state = deal(4, 7);
        assert_eq!(state.apply_input(&PuzzleInput(4)), Reaction::Ignored);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn two_pieces_solved_in_one_swap_scores_full() {
        // A displaced two-piece board has exactly one layout.
        let mut state = deal(2, 11);
        state.apply_input(&PuzzleInput(0));
        state.apply_input(&PuzzleInput(1));
        assert!(state.is_terminal());
        assert_eq!(state.moves(), 1);
        assert_eq!(state.score(100), 100);
    }

    #[test]
    fn extra_swaps_cost_three_points_each() {
        let mut state = deal(2, 11);
        for _ in 0..3 {
            state.apply_input(&PuzzleInput(0));
            state.apply_input(&PuzzleInput(1));
        }
        assert!(state.is_terminal());
        assert_eq!(state.moves(), 3);
        // One move past the piece count.
        assert_eq!(state.score(100), 97);
    }

    #[test]
    fn completion_score_never_drops_below_half() {
        let mut state = deal(2, 11);
        for _ in 0..19 {
            state.apply_input(&PuzzleInput(0));
            state.apply_input(&PuzzleInput(1));
        }
        assert!(state.is_terminal());
        assert_eq!(state.score(100), 50);
    }

    #[test]
    fn optimal_solve_is_full_score_for_any_deal() {
        for seed in 0..10 {
            let mut state = deal(6, seed);
            solve(&mut state);
            assert!(state.is_terminal());
            assert!(state.moves() < 6);
            assert_eq!(state.score(100), 100);
        }
    }

    #[test]
    fn timeout_partial_is_ratio_of_placed_pieces() {
        let mut state = deal(4, 3);
        solve(&mut state);
        // Displace two pieces again: 2 of 4 remain placed.
        state.apply_input(&PuzzleInput(2));
        state.apply_input(&PuzzleInput(3));
        assert!(!state.is_terminal());
        assert_eq!(state.correct_count(), 2);
        assert_eq!(state.score(100), 50);
        assert_eq!(state.progress(), Progress::new(2, 4));
    }

    #[test]
    fn rejects_single_piece_content() {
        let content = PuzzleContent {
            pieces: vec!["only".into()],
        };
        let err = PuzzleState::new(content, &mut SessionRng::seeded(1)).unwrap_err();
        assert_eq!(err, ContentError::NotEnoughPieces);
    }
}
