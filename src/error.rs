//! Non-playable content errors.
//!
//! A definition whose content cannot initialize a playable state is a local,
//! recoverable condition: the session never starts and the host shows an
//! inline "not available" message instead of a play surface. Nothing here
//! ever propagates as a panic.

use std::fmt;

/// Reasons a game definition cannot be initialized into a playable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The quiz has no questions.
    NoQuestions,
    /// A quiz question has no answers, or its correct-answer index is out of
    /// range.
    MalformedQuestion { index: usize },
    /// The memory game has no card pairs.
    NoPairs,
    /// The sliding puzzle needs at least two pieces to be playable.
    NotEnoughPieces,
    /// The pairing game has no connections to make.
    NoConnections,
    /// A pairing connection references a left/right item that does not exist.
    ConnectionOutOfRange { left: usize, right: usize },
    /// The grouping game has no groups.
    NoGroups,
    /// A word group does not contain exactly the required number of words.
    BadGroupSize { group: usize, len: usize },
    /// The word-search grid is empty or not rectangular.
    MalformedGrid,
    /// The word-search has no words to find.
    NoWords,
    /// The ordering game needs at least two items to reorder.
    NotEnoughItems,
    /// The definition's point value must be positive.
    ZeroPoints,
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::NoQuestions => write!(f, "quiz has no questions"),
            ContentError::MalformedQuestion { index } => {
                write!(f, "quiz question {} has no valid answer set", index)
            }
            ContentError::NoPairs => write!(f, "memory game has no card pairs"),
            ContentError::NotEnoughPieces => {
                write!(f, "sliding puzzle needs at least two pieces")
            }
            ContentError::NoConnections => write!(f, "pairing game has no connections"),
            ContentError::ConnectionOutOfRange { left, right } => {
                write!(f, "pairing connection ({}, {}) is out of range", left, right)
            }
            ContentError::NoGroups => write!(f, "grouping game has no groups"),
            ContentError::BadGroupSize { group, len } => {
                write!(f, "group {} has {} words, expected 4", group, len)
            }
            ContentError::MalformedGrid => {
                write!(f, "word-search grid is empty or not rectangular")
            }
            ContentError::NoWords => write!(f, "word-search has no words to find"),
            ContentError::NotEnoughItems => {
                write!(f, "ordering game needs at least two items")
            }
            ContentError::ZeroPoints => write!(f, "game definition has a zero point value"),
        }
    }
}

impl std::error::Error for ContentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_problem() {
        let err = ContentError::BadGroupSize { group: 2, len: 3 };
        assert_eq!(format!("{}", err), "group 2 has 3 words, expected 4");
        assert_eq!(format!("{}", ContentError::NoQuestions), "quiz has no questions");
    }
}
