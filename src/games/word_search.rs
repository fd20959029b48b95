//! Word search: drag straight lines across a letter grid.
//!
//! A selection path is anchored by [`WordSearchInput::PathStart`] and grows
//! with [`WordSearchInput::PathMove`]: the path is always the full straight
//! line from the anchor to the cursor, and only lines along a row, a column,
//! or an exact diagonal are accepted (anything else leaves the path alone).
//! [`WordSearchInput::PathEnd`] reads the letters off the line and checks
//! them against the unfound words, forward and reversed, case-insensitively.
//! A hit records the word as authored; a miss just clears the path.

use crate::definition::WordSearchContent;
use crate::error::ContentError;
use crate::scoring;
use crate::{MiniGame, Progress, Reaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSearchInput {
    /// Anchor a new path at `(row, col)`.
    PathStart(usize, usize),
    /// Extend the path toward `(row, col)`.
    PathMove(usize, usize),
    /// Finish the gesture and check the selected letters.
    PathEnd,
}

#[derive(Debug, Clone)]
pub struct WordSearchState {
    /// Row-major letter grid, rectangular.
    grid: Vec<Vec<char>>,
    cols: usize,
    /// Words to find, in authored casing.
    words: Vec<String>,
    /// Found words, in authored casing.
    found: Vec<String>,
    /// Cells of the in-progress selection, anchor first.
    path: Vec<(usize, usize)>,
}

impl WordSearchState {
    pub fn new(content: WordSearchContent) -> Result<Self, ContentError> {
        let grid: Vec<Vec<char>> = content
            .grid
            .iter()
            .map(|row| row.chars().collect())
            .collect();
        let cols = grid.first().map(|row| row.len()).unwrap_or(0);
        if cols == 0 || grid.iter().any(|row| row.len() != cols) {
            return Err(ContentError::MalformedGrid);
        }
        if content.words.is_empty() {
            return Err(ContentError::NoWords);
        }

        Ok(WordSearchState {
            grid,
            cols,
            words: content.words,
            found: Vec::new(),
            path: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    /// Cells of the in-progress selection, anchor first.
    pub fn path(&self) -> &[(usize, usize)] {
        &self.path
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.grid.len() && col < self.cols
    }

    /// The selected letters, anchor to cursor.
    fn selected_letters(&self) -> String {
        self.path.iter().map(|&(r, c)| self.grid[r][c]).collect()
    }
}

impl MiniGame for WordSearchState {
    type Input = WordSearchInput;

    fn apply_input(&mut self, input: &Self::Input) -> Reaction<Self::Input> {
        match *input {
            WordSearchInput::PathStart(row, col) => {
                if !self.in_bounds(row, col) {
                    return Reaction::Ignored;
                }
                self.path = vec![(row, col)];
                Reaction::Applied
            }
            WordSearchInput::PathMove(row, col) => {
                if self.path.is_empty() || !self.in_bounds(row, col) {
                    return Reaction::Ignored;
                }
                let (anchor_row, anchor_col) = self.path[0];
                let dr = row as isize - anchor_row as isize;
                let dc = col as isize - anchor_col as isize;
                // Row, column, or exact diagonal only.
                if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
                    return Reaction::Ignored;
                }
                let steps = dr.abs().max(dc.abs());
                let (step_r, step_c) = (dr.signum(), dc.signum());
                self.path = (0..=steps)
                    .map(|k| {
                        (
                            (anchor_row as isize + k * step_r) as usize,
                            (anchor_col as isize + k * step_c) as usize,
                        )
                    })
                    .collect();
                Reaction::Applied
            }
            WordSearchInput::PathEnd => {
                if self.path.is_empty() {
                    return Reaction::Ignored;
                }
                let lowered = self.selected_letters().to_lowercase();
                let reversed: String = lowered.chars().rev().collect();
                self.path.clear();

                let hit = self
                    .words
                    .iter()
                    .find(|word| {
                        let lw = word.to_lowercase();
                        (lw == lowered || lw == reversed) && !self.found.contains(*word)
                    })
                    .cloned();
                if let Some(word) = hit {
                    self.found.push(word);
                }
                Reaction::Applied
            }
        }
    }

    fn is_terminal(&self) -> bool {
        self.found.len() == self.words.len()
    }

    // Finding every word is worth the full point value, so the proportional
    // formula covers completion and timeout alike.
    fn score(&self, points: u32) -> u32 {
        scoring::ratio_score(self.found.len() as u32, self.words.len() as u32, points)
    }

    fn progress(&self) -> Progress {
        Progress::new(self.found.len() as u32, self.words.len() as u32)
    }
}
