//! Game definitions as the platform delivers them.
//!
//! A [`GameDefinition`] is immutable input: the host fetches it (out of scope
//! here) and hands it to [`crate::session::GameSession::start`]. The payload
//! is adjacently tagged, so the JSON carries a `variantType` discriminator
//! next to a variant-shaped `content` object:
//!
//! ```json
//! {
//!   "id": "mission-7-quiz",
//!   "variantType": "quiz",
//!   "content": { "questions": [ ... ] },
//!   "points": 100,
//!   "timeLimitSeconds": 90,
//!   "maxAttempts": 3
//! }
//! ```

use serde::{Deserialize, Serialize};

/// An immutable mini-game definition supplied by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDefinition {
    /// Platform identifier, echoed in logs only.
    pub id: String,
    /// Variant discriminator plus variant-shaped payload.
    #[serde(flatten)]
    pub content: GameContent,
    /// Maximum attainable score. Must be positive.
    pub points: u32,
    /// Session time limit in seconds; 0 means unlimited.
    #[serde(default)]
    pub time_limit_seconds: u32,
    /// Attempt allowance, informational here (the host enforces it).
    #[serde(default)]
    pub max_attempts: u32,
}

/// The variant-shaped payload of a definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "variantType", content = "content", rename_all = "camelCase")]
pub enum GameContent {
    Quiz(QuizContent),
    Memory(MemoryContent),
    Puzzle(PuzzleContent),
    Pairing(PairingContent),
    Grouping(GroupingContent),
    WordSearch(WordSearchContent),
    Ordering(OrderingContent),
}

impl GameContent {
    /// The variant tag as it appears in definition JSON and logs.
    pub fn variant_name(&self) -> &'static str {
        match self {
            GameContent::Quiz(_) => "quiz",
            GameContent::Memory(_) => "memory",
            GameContent::Puzzle(_) => "puzzle",
            GameContent::Pairing(_) => "pairing",
            GameContent::Grouping(_) => "grouping",
            GameContent::WordSearch(_) => "wordSearch",
            GameContent::Ordering(_) => "ordering",
        }
    }
}

/// Questions answered one at a time, in authored order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizContent {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub prompt: String,
    pub answers: Vec<String>,
    /// Index into `answers`.
    pub correct_answer: usize,
}

/// Card pairs; each pair is dealt as two face-down cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryContent {
    pub pairs: Vec<CardPair>,
}

/// The two faces of one matching pair (e.g. a term and its translation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardPair {
    pub first: String,
    pub second: String,
}

/// Picture pieces; piece `i` belongs at position `i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleContent {
    pub pieces: Vec<String>,
}

/// Two fixed columns and the exact index pairs that connect them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingContent {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub connections: Vec<Connection>,
}

/// One correct left/right index pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub left: usize,
    pub right: usize,
}

/// Named categories of exactly four words each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupingContent {
    pub groups: Vec<WordGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordGroup {
    pub name: String,
    pub words: Vec<String>,
}

/// A rectangular letter grid (one string per row) and the words hidden in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSearchContent {
    pub grid: Vec<String>,
    pub words: Vec<String>,
}

/// Items whose authored order is the solution; item `i` belongs at position `i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderingContent {
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_definition_parses() {
        let raw = r#"{
            "id": "mission-7-quiz",
            "variantType": "quiz",
            "content": {
                "questions": [
                    {
                        "prompt": "Which planet is closest to the sun?",
                        "answers": ["Venus", "Mercury", "Mars"],
                        "correctAnswer": 1
                    }
                ]
            },
            "points": 100,
            "timeLimitSeconds": 60,
            "maxAttempts": 3
        }"#;

        let def: GameDefinition = serde_json::from_str(raw).unwrap();
        assert_eq!(def.id, "mission-7-quiz");
        assert_eq!(def.points, 100);
        assert_eq!(def.time_limit_seconds, 60);
        assert_eq!(def.content.variant_name(), "quiz");
        match &def.content {
            GameContent::Quiz(quiz) => {
                assert_eq!(quiz.questions.len(), 1);
                assert_eq!(quiz.questions[0].correct_answer, 1);
            }
            other => panic!("expected quiz content, got {}", other.variant_name()),
        }
    }

    #[test]
    fn time_limit_defaults_to_unlimited() {
        let raw = r#"{
            "id": "ws-1",
            "variantType": "wordSearch",
            "content": { "grid": ["CAT", "DOG"], "words": ["CAT"] },
            "points": 50
        }"#;

        let def: GameDefinition = serde_json::from_str(raw).unwrap();
        assert_eq!(def.time_limit_seconds, 0);
        assert_eq!(def.max_attempts, 0);
        assert_eq!(def.content.variant_name(), "wordSearch");
    }
}
