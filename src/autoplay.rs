//! Scripted players for the demo binary.
//!
//! Each variant gets a player that reads the live engine state and produces
//! the next input a reasonable human would: mostly correct play with a few
//! deliberate blunders, so penalties and partial credit show up in the
//! transcript. The driver paces inputs, ticks the session once per simulated
//! second, and feeds scheduled inputs back after their delay, exactly as a
//! browser host would.

use std::collections::VecDeque;

use log::warn;

use minigames::definition::{Connection, GameContent, GameDefinition};
use minigames::game_wrapper::{GameWrapper, InputWrapper};
use minigames::games::grouping::{GroupingInput, GroupingState};
use minigames::games::memory::{MemoryInput, MemoryState};
use minigames::games::ordering::{OrderingInput, OrderingState};
use minigames::games::pairing::{PairingInput, PairingState};
use minigames::games::puzzle::{PuzzleInput, PuzzleState};
use minigames::games::quiz::{QuizInput, QuizState};
use minigames::games::word_search::{WordSearchInput, WordSearchState};
use minigames::session::{EventOutcome, GameSession};

/// Simulated time between player inputs.
const INPUT_PERIOD_MS: u64 = 700;
/// Driver resolution; ticks land on whole seconds.
const STEP_MS: u64 = 100;
/// Bail-out for a player that stops making progress.
const MAX_DEMO_MS: u64 = 30 * 60 * 1000;

/// Produces inputs for one session, one at a time.
pub struct Autoplayer {
    content: GameContent,
    /// Deliberate mistakes still to make; meaning varies by variant.
    blunders_left: u32,
    /// Literal inputs played before any scripted decision.
    opening: VecDeque<InputWrapper>,
}

impl Autoplayer {
    pub fn new(definition: &GameDefinition) -> Self {
        let blunders_left = match &definition.content {
            GameContent::Memory(_) => 2,
            GameContent::WordSearch(_) => 0,
            _ => 1,
        };
        let opening: VecDeque<InputWrapper> = match &definition.content {
            // Two wasted swaps: move a piece out and straight back.
            GameContent::Puzzle(_) => [0, 1, 0, 1]
                .into_iter()
                .map(|p| InputWrapper::Puzzle(PuzzleInput(p)))
                .collect(),
            GameContent::Grouping(_) => {
                VecDeque::from([InputWrapper::Grouping(GroupingInput::Reshuffle)])
            }
            _ => VecDeque::new(),
        };
        Autoplayer {
            content: definition.content.clone(),
            blunders_left,
            opening,
        }
    }

    /// The next input for the current state, `None` when there is nothing
    /// sensible to do (e.g. a resolution is pending).
    pub fn next_input(&mut self, game: &GameWrapper) -> Option<InputWrapper> {
        if let Some(queued) = self.opening.pop_front() {
            return Some(queued);
        }
        match game {
            GameWrapper::Quiz(state) => self.quiz(state),
            GameWrapper::Memory(state) => self.memory(state),
            GameWrapper::Puzzle(state) => self.puzzle(state),
            GameWrapper::Pairing(state) => self.pairing(state),
            GameWrapper::Grouping(state) => self.grouping(state),
            GameWrapper::WordSearch(state) => self.word_search(state),
            GameWrapper::Ordering(state) => self.ordering(state),
        }
    }

    /// Answers from the question itself, fumbling the second question once.
    fn quiz(&mut self, state: &QuizState) -> Option<InputWrapper> {
        let question = state.current_question()?;
        let mut choice = question.correct_answer;
        if state.current_index() == 1 && self.blunders_left > 0 {
            self.blunders_left -= 1;
            choice = (choice + 1) % question.answers.len();
        }
        Some(InputWrapper::Quiz(QuizInput(choice)))
    }

    fn memory(&mut self, state: &MemoryState) -> Option<InputWrapper> {
        let revealed: Vec<usize> = state
            .cards()
            .iter()
            .map(|card| card.id)
            .filter(|&id| state.is_face_up(id) && !state.is_matched(id))
            .collect();
        match revealed.len() {
            0 => {
                let first = state.cards().iter().find(|c| !state.is_matched(c.id))?;
                Some(InputWrapper::Memory(MemoryInput::Flip(first.id)))
            }
            1 => {
                let held = revealed[0];
                let held_pair = state.cards().iter().find(|c| c.id == held)?.pair_id;
                if self.blunders_left > 0 {
                    if let Some(other) = state
                        .cards()
                        .iter()
                        .find(|c| !state.is_matched(c.id) && c.pair_id != held_pair)
                    {
                        self.blunders_left -= 1;
                        return Some(InputWrapper::Memory(MemoryInput::Flip(other.id)));
                    }
                }
                let partner = state
                    .cards()
                    .iter()
                    .find(|c| c.pair_id == held_pair && c.id != held)?;
                Some(InputWrapper::Memory(MemoryInput::Flip(partner.id)))
            }
            // Comparison pending; wait for the scheduled resolve.
            _ => None,
        }
    }

    /// Selection sort over board positions.
    fn puzzle(&mut self, state: &PuzzleState) -> Option<InputWrapper> {
        match state.selected() {
            None => {
                let home = (0..state.piece_count()).find(|&home| {
                    state
                        .pieces()
                        .iter()
                        .find(|p| p.position == home)
                        .map(|p| p.id != home)
                        .unwrap_or(false)
                })?;
                Some(InputWrapper::Puzzle(PuzzleInput(home)))
            }
            Some(home) => {
                let from = state.pieces().iter().find(|p| p.id == home)?.position;
                Some(InputWrapper::Puzzle(PuzzleInput(from)))
            }
        }
    }

    fn pairing(&mut self, state: &PairingState) -> Option<InputWrapper> {
        let GameContent::Pairing(content) = &self.content else {
            return None;
        };
        let is_made = |conn: &Connection| {
            state
                .made()
                .iter()
                .any(|m| m.correct && m.left == conn.left && m.right == conn.right)
        };

        if let Some(held) = state.picked_left() {
            let correct = content.connections.iter().find(|c| c.left == held)?.right;
            if self.blunders_left > 0 {
                let committed_right =
                    |r: usize| state.made().iter().any(|m| m.correct && m.right == r);
                if let Some(wrong) = (0..state.right_items().len())
                    .find(|&r| r != correct && !committed_right(r))
                {
                    self.blunders_left -= 1;
                    return Some(InputWrapper::Pairing(PairingInput::PickRight(wrong)));
                }
            }
            Some(InputWrapper::Pairing(PairingInput::PickRight(correct)))
        } else {
            let next = content.connections.iter().find(|c| !is_made(c))?;
            Some(InputWrapper::Pairing(PairingInput::PickLeft(next.left)))
        }
    }

    fn grouping(&mut self, state: &GroupingState) -> Option<InputWrapper> {
        let selection = state.selection();
        if selection.len() == 4 {
            return Some(InputWrapper::Grouping(GroupingInput::Submit));
        }

        let base_group = match selection.first() {
            Some(&first) => state.pool()[first].group,
            None => state.pool().first()?.group,
        };
        // A blunder is three of one group plus a stray fourth.
        if self.blunders_left > 0 && selection.len() == 3 {
            let (stray, _) = state
                .pool()
                .iter()
                .enumerate()
                .find(|(_, w)| w.group != base_group)?;
            self.blunders_left -= 1;
            return Some(InputWrapper::Grouping(GroupingInput::ToggleWord(stray)));
        }
        let (next, _) = state
            .pool()
            .iter()
            .enumerate()
            .find(|(i, w)| w.group == base_group && !selection.contains(i))?;
        Some(InputWrapper::Grouping(GroupingInput::ToggleWord(next)))
    }

    fn word_search(&mut self, state: &WordSearchState) -> Option<InputWrapper> {
        let target = state
            .words()
            .iter()
            .find(|&w| !state.found_words().contains(w))?;
        let (start, end) = find_line(state, target)?;
        let length = target.chars().count();

        if state.path().is_empty() {
            Some(InputWrapper::WordSearch(WordSearchInput::PathStart(
                start.0, start.1,
            )))
        } else if state.path().len() < length {
            Some(InputWrapper::WordSearch(WordSearchInput::PathMove(
                end.0, end.1,
            )))
        } else {
            Some(InputWrapper::WordSearch(WordSearchInput::PathEnd))
        }
    }

    fn ordering(&mut self, state: &OrderingState) -> Option<InputWrapper> {
        let sorted = state.order().iter().enumerate().all(|(pos, &id)| pos == id);
        if sorted {
            return Some(InputWrapper::Ordering(OrderingInput::Check));
        }
        // One premature check before doing the work.
        if self.blunders_left > 0 {
            self.blunders_left -= 1;
            return Some(InputWrapper::Ordering(OrderingInput::Check));
        }
        let target = (0..state.item_count()).find(|&pos| state.order()[pos] != pos)?;
        let from = state.order().iter().position(|&id| id == target)?;
        Some(InputWrapper::Ordering(OrderingInput::MoveItem {
            from,
            to: target,
        }))
    }
}

/// Scans the grid for a word in all eight directions; returns the start and
/// end cells of the first hit.
fn find_line(
    state: &WordSearchState,
    word: &str,
) -> Option<((usize, usize), (usize, usize))> {
    const DIRECTIONS: [(isize, isize); 8] = [
        (0, 1),
        (0, -1),
        (1, 0),
        (-1, 0),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    let target = word.to_lowercase();
    let length = word.chars().count() as isize;
    let (rows, cols) = (state.rows() as isize, state.cols() as isize);

    for row in 0..rows {
        for col in 0..cols {
            for (dr, dc) in DIRECTIONS {
                let end_row = row + dr * (length - 1);
                let end_col = col + dc * (length - 1);
                if end_row < 0 || end_col < 0 || end_row >= rows || end_col >= cols {
                    continue;
                }
                let spelled: String = (0..length)
                    .filter_map(|k| {
                        state.letter((row + dr * k) as usize, (col + dc * k) as usize)
                    })
                    .collect();
                if spelled.to_lowercase() == target {
                    return Some((
                        (row as usize, col as usize),
                        (end_row as usize, end_col as usize),
                    ));
                }
            }
        }
    }
    None
}

/// Runs a session to completion under the scripted player.
///
/// Simulated time advances in coarse steps; ticks land once per second,
/// scheduled inputs are fed back when due, and the player pauses while one
/// is outstanding. Returns the final score, or `None` if the player gave up
/// and exited.
pub fn drive(session: &mut GameSession, player: &mut Autoplayer) -> Option<u32> {
    let mut now_ms: u64 = 0;
    let mut next_input_at = INPUT_PERIOD_MS;
    let mut pending: Vec<(u64, InputWrapper)> = Vec::new();

    loop {
        now_ms += STEP_MS;
        if now_ms > MAX_DEMO_MS {
            warn!(
                "session {}: no progress after {}s, giving up",
                session.id(),
                now_ms / 1000
            );
            session.exit();
            return None;
        }

        if now_ms % 1000 == 0 {
            if let EventOutcome::Completed(score) = session.tick() {
                return Some(score);
            }
        }

        let mut due: Vec<InputWrapper> = Vec::new();
        pending.retain(|(at, input)| {
            if *at <= now_ms {
                due.push(input.clone());
                false
            } else {
                true
            }
        });
        for input in due {
            match session.handle_input(input) {
                EventOutcome::Completed(score) => return Some(score),
                EventOutcome::Scheduled(delayed) => {
                    pending.push((now_ms + delayed.after_ms, delayed.input));
                }
                _ => {}
            }
        }

        if pending.is_empty() && now_ms >= next_input_at {
            if let Some(input) = player.next_input(session.game()) {
                next_input_at = now_ms + INPUT_PERIOD_MS;
                match session.handle_input(input) {
                    EventOutcome::Completed(score) => return Some(score),
                    EventOutcome::Scheduled(delayed) => {
                        pending.push((now_ms + delayed.after_ms, delayed.input));
                    }
                    _ => {}
                }
            }
        }
    }
}
