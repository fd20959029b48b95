//! Unified interface over the seven variant engines.
//!
//! The session controller and host UI work against [`GameWrapper`] and
//! [`InputWrapper`] instead of the per-variant types, so one controller and
//! one event loop serve every game. A closed enum pair keeps dispatch
//! exhaustive at compile time: adding a variant without wiring it in here is
//! a build error, not a runtime surprise.
//!
//! A session only ever holds one variant, so an input of the wrong variant
//! can never be a legal transition; it is dropped like any other invalid
//! input rather than treated as fatal.

use std::fmt;

use crate::definition::{GameContent, GameDefinition};
use crate::error::ContentError;
use crate::games::grouping::{GroupingInput, GroupingState};
use crate::games::memory::{MemoryInput, MemoryState};
use crate::games::ordering::{OrderingInput, OrderingState};
use crate::games::pairing::{PairingInput, PairingState};
use crate::games::puzzle::{PuzzleInput, PuzzleState};
use crate::games::quiz::{QuizInput, QuizState};
use crate::games::word_search::{WordSearchInput, WordSearchState};
use crate::shuffle::SessionRng;
use crate::{MiniGame, Progress, Reaction};

/// One live variant engine, selected by the definition's type tag.
#[derive(Debug, Clone)]
pub enum GameWrapper {
    Quiz(QuizState),
    Memory(MemoryState),
    Puzzle(PuzzleState),
    Pairing(PairingState),
    Grouping(GroupingState),
    WordSearch(WordSearchState),
    Ordering(OrderingState),
}

/// A player input for whichever variant the session runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputWrapper {
    Quiz(QuizInput),
    Memory(MemoryInput),
    Puzzle(PuzzleInput),
    Pairing(PairingInput),
    Grouping(GroupingInput),
    WordSearch(WordSearchInput),
    Ordering(OrderingInput),
}

impl fmt::Display for InputWrapper {
    /// Compact form for transcripts and logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWrapper::Quiz(QuizInput(choice)) => write!(f, "answer({})", choice),
            InputWrapper::Memory(MemoryInput::Flip(id)) => write!(f, "flip({})", id),
            InputWrapper::Memory(MemoryInput::Resolve) => write!(f, "resolve"),
            InputWrapper::Puzzle(PuzzleInput(position)) => write!(f, "select({})", position),
            InputWrapper::Pairing(PairingInput::PickLeft(i)) => write!(f, "left({})", i),
            InputWrapper::Pairing(PairingInput::PickRight(i)) => write!(f, "right({})", i),
            InputWrapper::Pairing(PairingInput::ClearRejected) => write!(f, "clear"),
            InputWrapper::Grouping(GroupingInput::ToggleWord(i)) => write!(f, "toggle({})", i),
            InputWrapper::Grouping(GroupingInput::Submit) => write!(f, "submit"),
            InputWrapper::Grouping(GroupingInput::Reshuffle) => write!(f, "reshuffle"),
            InputWrapper::WordSearch(WordSearchInput::PathStart(r, c)) => {
                write!(f, "path-start({},{})", r, c)
            }
            InputWrapper::WordSearch(WordSearchInput::PathMove(r, c)) => {
                write!(f, "path-move({},{})", r, c)
            }
            InputWrapper::WordSearch(WordSearchInput::PathEnd) => write!(f, "path-end"),
            InputWrapper::Ordering(OrderingInput::MoveItem { from, to }) => {
                write!(f, "move({},{})", from, to)
            }
            InputWrapper::Ordering(OrderingInput::Check) => write!(f, "check"),
        }
    }
}

macro_rules! impl_variant_dispatch {
    ($($variant:ident),*) => {
        impl GameWrapper {
            /// Builds the engine matching the definition's variant tag.
            ///
            /// The random source drives every layout shuffle the variant
            /// needs, so a seeded source deals a reproducible session.
            pub fn from_definition(
                definition: &GameDefinition,
                rng: &mut SessionRng,
            ) -> Result<GameWrapper, ContentError> {
                if definition.points == 0 {
                    return Err(ContentError::ZeroPoints);
                }
                Ok(match &definition.content {
                    GameContent::Quiz(content) => {
                        GameWrapper::Quiz(QuizState::new(content.clone())?)
                    }
                    GameContent::Memory(content) => {
                        GameWrapper::Memory(MemoryState::new(content.clone(), rng)?)
                    }
                    GameContent::Puzzle(content) => {
                        GameWrapper::Puzzle(PuzzleState::new(content.clone(), rng)?)
                    }
                    GameContent::Pairing(content) => {
                        GameWrapper::Pairing(PairingState::new(content.clone())?)
                    }
                    GameContent::Grouping(content) => {
                        GameWrapper::Grouping(GroupingState::new(content.clone(), rng)?)
                    }
                    GameContent::WordSearch(content) => {
                        GameWrapper::WordSearch(WordSearchState::new(content.clone())?)
                    }
                    GameContent::Ordering(content) => {
                        GameWrapper::Ordering(OrderingState::new(content.clone(), rng)?)
                    }
                })
            }

            /// The variant tag, matching the definition JSON and logs.
            pub fn variant_name(&self) -> &'static str {
                match self {
                    GameWrapper::Quiz(_) => "quiz",
                    GameWrapper::Memory(_) => "memory",
                    GameWrapper::Puzzle(_) => "puzzle",
                    GameWrapper::Pairing(_) => "pairing",
                    GameWrapper::Grouping(_) => "grouping",
                    GameWrapper::WordSearch(_) => "wordSearch",
                    GameWrapper::Ordering(_) => "ordering",
                }
            }

            /// Applies an input, dropping it if it belongs to another
            /// variant.
            pub fn apply_input(&mut self, input: &InputWrapper) -> Reaction<InputWrapper> {
                match (self, input) {
                    $(
                        (GameWrapper::$variant(game), InputWrapper::$variant(input)) => {
                            game.apply_input(input).map_input(InputWrapper::$variant)
                        }
                    )*
                    _ => Reaction::Ignored,
                }
            }

            /// True once the gameplay objective is satisfied.
            pub fn is_terminal(&self) -> bool {
                match self {
                    $(GameWrapper::$variant(game) => game.is_terminal(),)*
                }
            }

            /// Score for the current state, bounded by `points`.
            pub fn score(&self, points: u32) -> u32 {
                match self {
                    $(GameWrapper::$variant(game) => game.score(points),)*
                }
            }

            /// Objective progress for host display.
            pub fn progress(&self) -> Progress {
                match self {
                    $(GameWrapper::$variant(game) => game.progress(),)*
                }
            }
        }
    };
}

impl_variant_dispatch!(Quiz, Memory, Puzzle, Pairing, Grouping, WordSearch, Ordering);
