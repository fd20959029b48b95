//! Definition documents as the platform actually sends them: adjacently
//! tagged variant payloads with camelCase keys.

use minigames::definition::GameContent;
use minigames::games::quiz::QuizInput;
use minigames::{EventOutcome, GameDefinition, GameSession, InputWrapper, SessionRng};

fn parse(raw: &str) -> GameDefinition {
    serde_json::from_str(raw).expect("valid definition document")
}

#[test]
fn memory_definition_parses() {
    let def = parse(
        r#"{
            "id": "lesson-3-vocab",
            "variantType": "memory",
            "content": {
                "pairs": [
                    { "first": "der Hund", "second": "the dog" },
                    { "first": "die Katze", "second": "the cat" },
                    { "first": "der Vogel", "second": "the bird" }
                ]
            },
            "points": 60,
            "timeLimitSeconds": 90,
            "maxAttempts": 2
        }"#,
    );
    assert_eq!(def.points, 60);
    assert_eq!(def.max_attempts, 2);
    let GameContent::Memory(memory) = &def.content else {
        panic!("expected memory content");
    };
    assert_eq!(memory.pairs.len(), 3);
    assert_eq!(memory.pairs[1].second, "the cat");
}

#[test]
fn pairing_definition_parses() {
    let def = parse(
        r#"{
            "id": "lesson-5-capitals",
            "variantType": "pairing",
            "content": {
                "left": ["France", "Japan"],
                "right": ["Tokyo", "Paris"],
                "connections": [
                    { "left": 0, "right": 1 },
                    { "left": 1, "right": 0 }
                ]
            },
            "points": 40
        }"#,
    );
    assert_eq!(def.time_limit_seconds, 0);
    let GameContent::Pairing(pairing) = &def.content else {
        panic!("expected pairing content");
    };
    assert_eq!(pairing.left.len(), 2);
    assert_eq!(pairing.connections[0].right, 1);
}

#[test]
fn grouping_definition_parses() {
    let def = parse(
        r#"{
            "id": "lesson-8-categories",
            "variantType": "grouping",
            "content": {
                "groups": [
                    { "name": "Colors", "words": ["rot", "blau", "gelb", "gruen"] },
                    { "name": "Numbers", "words": ["eins", "zwei", "drei", "vier"] }
                ]
            },
            "points": 80,
            "timeLimitSeconds": 120
        }"#,
    );
    let GameContent::Grouping(grouping) = &def.content else {
        panic!("expected grouping content");
    };
    assert_eq!(grouping.groups.len(), 2);
    assert_eq!(grouping.groups[0].name, "Colors");
    assert_eq!(grouping.groups[1].words[3], "vier");
}

#[test]
fn puzzle_and_ordering_definitions_parse() {
    let puzzle = parse(
        r#"{
            "id": "lesson-2-picture",
            "variantType": "puzzle",
            "content": { "pieces": ["top-left", "top-right", "bottom-left", "bottom-right"] },
            "points": 30,
            "timeLimitSeconds": 60
        }"#,
    );
    let GameContent::Puzzle(pieces) = &puzzle.content else {
        panic!("expected puzzle content");
    };
    assert_eq!(pieces.pieces.len(), 4);

    let ordering = parse(
        r#"{
            "id": "lesson-6-steps",
            "variantType": "ordering",
            "content": { "items": ["wake up", "get dressed", "eat breakfast", "leave"] },
            "points": 50
        }"#,
    );
    let GameContent::Ordering(items) = &ordering.content else {
        panic!("expected ordering content");
    };
    assert_eq!(items.items[0], "wake up");
}

#[test]
fn unknown_variant_tag_is_rejected() {
    let raw = r#"{
        "id": "lesson-9",
        "variantType": "crossword",
        "content": {},
        "points": 100
    }"#;
    assert!(serde_json::from_str::<GameDefinition>(raw).is_err());
}

/// Wire to score: a parsed document starts a session and plays through.
#[test]
fn parsed_definition_plays_to_completion() {
    let def = parse(
        r#"{
            "id": "lesson-1-warmup",
            "variantType": "quiz",
            "content": {
                "questions": [
                    {
                        "prompt": "2 + 2?",
                        "answers": ["3", "4"],
                        "correctAnswer": 1
                    },
                    {
                        "prompt": "3 * 3?",
                        "answers": ["9", "6"],
                        "correctAnswer": 0
                    }
                ]
            },
            "points": 20,
            "timeLimitSeconds": 30
        }"#,
    );

    let mut session =
        GameSession::start(&def, &mut SessionRng::seeded(1), Box::new(|_| {})).unwrap();
    assert_eq!(
        session.handle_input(InputWrapper::Quiz(QuizInput(1))),
        EventOutcome::Applied
    );
    assert_eq!(
        session.handle_input(InputWrapper::Quiz(QuizInput(0))),
        EventOutcome::Completed(20)
    );
    assert_eq!(session.final_score(), Some(20));
}
