//! Graded mini-game session engine.
//!
//! Seven interactive learning-game variants (quiz, memory match, sliding
//! puzzle, pairing, category grouping, word-search, sequence ordering), each
//! implemented as its own state machine behind the [`MiniGame`] contract.
//! [`session::GameSession`] wires a variant together with a countdown timer
//! and guarantees the host's completion callback fires exactly once.

pub mod definition;
pub mod error;
pub mod game_wrapper;
pub mod games;
pub mod samples;
pub mod scoring;
pub mod session;
pub mod shuffle;
pub mod timer;

pub use definition::GameDefinition;
pub use error::ContentError;
pub use game_wrapper::{GameWrapper, InputWrapper};
pub use session::{EventOutcome, GameSession, SessionStatus};
pub use shuffle::SessionRng;

/// One mini-game variant's state machine.
///
/// Implementations own their gameplay state and transition rules. State is
/// created from validated definition content, mutated only through
/// `apply_input`, and read by the session controller through the terminal
/// predicate and score function. Must be cloneable so hosts can snapshot a
/// state for display without touching the live session.
pub trait MiniGame: Clone {
    /// The type of a player input for this variant.
    type Input: Clone + PartialEq + std::fmt::Debug;

    /// Applies one input to the state.
    ///
    /// Invalid input is a normal UI race (clicking an already-matched card,
    /// submitting a short selection) and is dropped with
    /// [`Reaction::Ignored`], never an error.
    fn apply_input(&mut self, input: &Self::Input) -> Reaction<Self::Input>;

    /// Returns true once the gameplay objective is satisfied, independent of
    /// any timer.
    fn is_terminal(&self) -> bool;

    /// Computes the score for the current state, bounded by `points`.
    ///
    /// Terminal states use the variant's completion formula; anything else
    /// uses the partial-credit formula applied on forced termination.
    fn score(&self, points: u32) -> u32;

    /// Objective progress for host display (e.g. words found / total words).
    fn progress(&self) -> Progress;
}

/// What an engine asks of its host after an input has been processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction<I> {
    /// The state advanced; nothing further to do.
    Applied,
    /// The input was not a legal transition and was dropped.
    Ignored,
    /// The state advanced and a follow-up input must re-enter the event
    /// queue after a delay (reveal/reset effects). Feeding it back through
    /// the same queue keeps ordering relative to other input deterministic.
    Schedule(DelayedInput<I>),
}

impl<I> Reaction<I> {
    /// Converts the scheduled input, keeping the delay. Used to lift a
    /// variant's reaction into the wrapper's input type.
    pub fn map_input<J>(self, f: impl FnOnce(I) -> J) -> Reaction<J> {
        match self {
            Reaction::Applied => Reaction::Applied,
            Reaction::Ignored => Reaction::Ignored,
            Reaction::Schedule(delayed) => {
                Reaction::Schedule(DelayedInput::new(delayed.after_ms, f(delayed.input)))
            }
        }
    }
}

/// A follow-up input the host schedules back into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayedInput<I> {
    /// Delay before the input should re-enter the queue, in milliseconds.
    pub after_ms: u64,
    /// The input to feed back through `handle_input`.
    pub input: I,
}

impl<I> DelayedInput<I> {
    pub fn new(after_ms: u64, input: I) -> Self {
        Self { after_ms, input }
    }
}

/// Objective progress: how much of the win condition is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Completed units (answered questions, matched pairs, found words...).
    pub done: u32,
    /// Total units required by the definition.
    pub total: u32,
}

impl Progress {
    pub fn new(done: u32, total: u32) -> Self {
        Self { done, total }
    }

    /// Completion ratio in `[0, 1]`; a zero total counts as complete.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            f64::from(self.done) / f64::from(self.total)
        }
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.done, self.total)
    }
}
