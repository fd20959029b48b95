//! Category grouping ("connexo"): pull four-word categories out of a mixed
//! pool.
//!
//! The pool holds every word of every group, shuffled together. The player
//! accumulates exactly [`GROUP_SIZE`] selections, then submits: a submission
//! whose words all share one group removes them from the pool, anything else
//! is a mistake. Hitting [`MISTAKE_CAP`] ends the game early with the
//! partial-credit score. The pool can be reshuffled at any time.

use crate::definition::GroupingContent;
use crate::error::ContentError;
use crate::scoring;
use crate::shuffle::SessionRng;
use crate::{MiniGame, Progress, Reaction};

/// Words per group; submissions are only accepted at exactly this size.
pub const GROUP_SIZE: usize = 4;
/// Wrong submissions allowed before the game ends early.
pub const MISTAKE_CAP: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingInput {
    /// Select or unselect the pool word at this index.
    ToggleWord(usize),
    /// Submit the current four-word selection.
    Submit,
    /// Re-deal the remaining pool.
    Reshuffle,
}

/// A pool entry: the word and the group it belongs to.
#[derive(Debug, Clone)]
pub struct PoolWord {
    pub word: String,
    pub group: usize,
}

#[derive(Debug, Clone)]
pub struct GroupingState {
    group_names: Vec<String>,
    /// Words not yet bound into a found group, in display order.
    pool: Vec<PoolWord>,
    /// Indices into `pool`, at most `GROUP_SIZE`.
    selection: Vec<usize>,
    /// Group indices in the order they were found.
    found: Vec<usize>,
    mistakes: u32,
    rng: SessionRng,
}

impl GroupingState {
    pub fn new(content: GroupingContent, rng: &mut SessionRng) -> Result<Self, ContentError> {
        if content.groups.is_empty() {
            return Err(ContentError::NoGroups);
        }
        for (index, group) in content.groups.iter().enumerate() {
            if group.words.len() != GROUP_SIZE {
                return Err(ContentError::BadGroupSize {
                    group: index,
                    len: group.words.len(),
                });
            }
        }

        let mut own = rng.fork();
        let mut pool = Vec::with_capacity(content.groups.len() * GROUP_SIZE);
        let mut group_names = Vec::with_capacity(content.groups.len());
        for (group, def) in content.groups.into_iter().enumerate() {
            group_names.push(def.name);
            pool.extend(def.words.into_iter().map(|word| PoolWord { word, group }));
        }
        own.shuffle(&mut pool);

        Ok(GroupingState {
            group_names,
            pool,
            selection: Vec::new(),
            found: Vec::new(),
            mistakes: 0,
            rng: own,
        })
    }

    pub fn pool(&self) -> &[PoolWord] {
        &self.pool
    }

    pub fn group_names(&self) -> &[String] {
        &self.group_names
    }

    /// Pool indices currently selected.
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Group indices in the order they were found.
    pub fn found(&self) -> &[usize] {
        &self.found
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn all_found(&self) -> bool {
        self.found.len() == self.group_names.len()
    }
}

impl MiniGame for GroupingState {
    type Input = GroupingInput;

    fn apply_input(&mut self, input: &Self::Input) -> Reaction<Self::Input> {
        match *input {
            GroupingInput::ToggleWord(index) => {
                if index >= self.pool.len() {
                    return Reaction::Ignored;
                }
                if let Some(held) = self.selection.iter().position(|&i| i == index) {
                    self.selection.remove(held);
                    return Reaction::Applied;
                }
                if self.selection.len() == GROUP_SIZE {
                    return Reaction::Ignored;
                }
                self.selection.push(index);
                Reaction::Applied
            }
            GroupingInput::Submit => {
                if self.selection.len() != GROUP_SIZE {
                    return Reaction::Ignored;
                }
                let group = self.pool[self.selection[0]].group;
                if self.selection.iter().all(|&i| self.pool[i].group == group) {
                    // Remove back to front so earlier indices stay valid.
                    let mut picked: Vec<usize> = self.selection.drain(..).collect();
                    picked.sort_unstable_by(|a, b| b.cmp(a));
                    for index in picked {
                        self.pool.remove(index);
                    }
                    self.found.push(group);
                } else {
                    self.mistakes += 1;
                    self.selection.clear();
                }
                Reaction::Applied
            }
            GroupingInput::Reshuffle => {
                self.selection.clear();
                let mut pool = std::mem::take(&mut self.pool);
                self.rng.shuffle(&mut pool);
                self.pool = pool;
                Reaction::Applied
            }
        }
    }

    fn is_terminal(&self) -> bool {
        self.all_found() || self.mistakes >= MISTAKE_CAP
    }

    fn score(&self, points: u32) -> u32 {
        if self.all_found() {
            scoring::penalized(points, 5, self.mistakes, scoring::half(points))
        } else {
            // Timeout and mistake cap both take the partial formula.
            scoring::ratio_score(
                self.found.len() as u32,
                self.group_names.len() as u32,
                points,
            )
        }
    }

    fn progress(&self) -> Progress {
        Progress::new(self.found.len() as u32, self.group_names.len() as u32)
    }
}
