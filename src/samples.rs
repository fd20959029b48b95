//! Built-in game definitions, one per variant.
//!
//! These stand in for the platform's fetched definitions in the demo binary
//! and the integration tests. Content is small but real: the word-search
//! grid actually contains its words, the pairing columns are deliberately
//! misaligned, and the quiz keys are spread across positions.

use crate::definition::{
    CardPair, Connection, GameContent, GameDefinition, GroupingContent, MemoryContent,
    OrderingContent, PairingContent, PuzzleContent, QuizContent, QuizQuestion, WordGroup,
    WordSearchContent,
};

pub fn quiz() -> GameDefinition {
    let questions = [
        ("Which planet is closest to the sun?", ["Venus", "Mercury", "Mars"], 1),
        ("What is the capital of France?", ["Paris", "Rome", "Madrid"], 0),
        ("How many continents are there?", ["Five", "Six", "Seven"], 2),
        ("Which gas do plants absorb?", ["Oxygen", "Carbon dioxide", "Nitrogen"], 1),
    ];
    GameDefinition {
        id: "sample-quiz".into(),
        content: GameContent::Quiz(QuizContent {
            questions: questions
                .iter()
                .map(|(prompt, answers, correct)| QuizQuestion {
                    prompt: (*prompt).into(),
                    answers: answers.map(String::from).to_vec(),
                    correct_answer: *correct,
                })
                .collect(),
        }),
        points: 100,
        time_limit_seconds: 120,
        max_attempts: 3,
    }
}

pub fn memory() -> GameDefinition {
    let pairs = [
        ("Hund", "dog"),
        ("Katze", "cat"),
        ("Vogel", "bird"),
        ("Fisch", "fish"),
    ];
    GameDefinition {
        id: "sample-memory".into(),
        content: GameContent::Memory(MemoryContent {
            pairs: pairs
                .iter()
                .map(|(first, second)| CardPair {
                    first: (*first).into(),
                    second: (*second).into(),
                })
                .collect(),
        }),
        points: 100,
        time_limit_seconds: 90,
        max_attempts: 3,
    }
}

pub fn puzzle() -> GameDefinition {
    GameDefinition {
        id: "sample-puzzle".into(),
        content: GameContent::Puzzle(PuzzleContent {
            pieces: (0..3)
                .flat_map(|r| (0..3).map(move |c| format!("r{r}c{c}")))
                .collect(),
        }),
        points: 100,
        time_limit_seconds: 120,
        max_attempts: 3,
    }
}

pub fn pairing() -> GameDefinition {
    GameDefinition {
        id: "sample-pairing".into(),
        content: GameContent::Pairing(PairingContent {
            left: ["Germany", "France", "Spain", "Italy", "Austria"]
                .map(String::from)
                .to_vec(),
            right: ["Madrid", "Berlin", "Vienna", "Paris", "Rome"]
                .map(String::from)
                .to_vec(),
            connections: vec![
                Connection { left: 0, right: 1 },
                Connection { left: 1, right: 3 },
                Connection { left: 2, right: 0 },
                Connection { left: 3, right: 4 },
                Connection { left: 4, right: 2 },
            ],
        }),
        points: 100,
        time_limit_seconds: 90,
        max_attempts: 3,
    }
}

pub fn grouping() -> GameDefinition {
    let groups = [
        ("Instruments", ["violin", "piano", "flute", "drum"]),
        ("Fruits", ["apple", "pear", "plum", "fig"]),
        ("Weather", ["rain", "snow", "wind", "fog"]),
        ("Body parts", ["arm", "leg", "hand", "foot"]),
    ];
    GameDefinition {
        id: "sample-grouping".into(),
        content: GameContent::Grouping(GroupingContent {
            groups: groups
                .iter()
                .map(|(name, words)| WordGroup {
                    name: (*name).into(),
                    words: words.map(String::from).to_vec(),
                })
                .collect(),
        }),
        points: 100,
        time_limit_seconds: 150,
        max_attempts: 3,
    }
}

/// STERN across the top, MOND and ERDE down the sides, SONNE on the diagonal.
pub fn word_search() -> GameDefinition {
    GameDefinition {
        id: "sample-word-search".into(),
        content: GameContent::WordSearch(WordSearchContent {
            grid: ["STERNE", "MSATUR", "OKOMED", "NAUNIE", "DTRBNP", "KUGELE"]
                .map(String::from)
                .to_vec(),
            words: ["STERN", "MOND", "SONNE", "ERDE"].map(String::from).to_vec(),
        }),
        points: 100,
        time_limit_seconds: 180,
        max_attempts: 3,
    }
}

pub fn ordering() -> GameDefinition {
    GameDefinition {
        id: "sample-ordering".into(),
        content: GameContent::Ordering(OrderingContent {
            items: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
                .map(String::from)
                .to_vec(),
        }),
        points: 100,
        time_limit_seconds: 90,
        max_attempts: 3,
    }
}

/// Every sample, in variant-table order.
pub fn all() -> Vec<GameDefinition> {
    vec![
        quiz(),
        memory(),
        puzzle(),
        pairing(),
        grouping(),
        word_search(),
        ordering(),
    ]
}

/// Looks a sample up by its variant tag.
pub fn by_variant(name: &str) -> Option<GameDefinition> {
    all()
        .into_iter()
        .find(|definition| definition.content.variant_name().eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_all_seven_variants() {
        let names: Vec<&str> = all().iter().map(|d| d.content.variant_name()).collect();
        assert_eq!(
            names,
            vec![
                "quiz",
                "memory",
                "puzzle",
                "pairing",
                "grouping",
                "wordSearch",
                "ordering"
            ]
        );
    }

    #[test]
    fn lookup_ignores_case() {
        assert!(by_variant("WORDSEARCH").is_some());
        assert!(by_variant("quiz").is_some());
        assert!(by_variant("chess").is_none());
    }

    #[test]
    fn word_search_grid_contains_its_words() {
        let GameContent::WordSearch(content) = word_search().content else {
            panic!("wrong content");
        };
        // Hand-placed: STERN row 0, MOND column 0, ERDE column 5,
        // SONNE down the diagonal from (1,1).
        assert_eq!(&content.grid[0][0..5], "STERN");
        let column: String = content.grid[1..5].iter().map(|row| &row[0..1]).collect();
        assert_eq!(column, "MOND");
        let right: String = content.grid[0..4].iter().map(|row| &row[5..6]).collect();
        assert_eq!(right, "ERDE");
        let diagonal: String = (1..6).map(|i| &content.grid[i][i..i + 1]).collect();
        assert_eq!(diagonal, "SONNE");
    }
}
