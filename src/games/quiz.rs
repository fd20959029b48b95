//! Quiz: answer authored questions one at a time.
//!
//! Questions are presented in authored order. A choice is recorded for the
//! current question, correctness is tallied, and the index advances; there is
//! no going back. Credit is proportional to correct answers over the full
//! question count, which doubles as the time-up partial formula.

use crate::definition::{QuizContent, QuizQuestion};
use crate::error::ContentError;
use crate::scoring;
use crate::{MiniGame, Progress, Reaction};

/// Choose the answer with this index for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizInput(pub usize);

#[derive(Debug, Clone)]
pub struct QuizState {
    questions: Vec<QuizQuestion>,
    current: usize,
    /// Selected answer per question, recorded in presentation order.
    selected: Vec<Option<usize>>,
    correct: u32,
}

impl QuizState {
    pub fn new(content: QuizContent) -> Result<Self, ContentError> {
        if content.questions.is_empty() {
            return Err(ContentError::NoQuestions);
        }
        for (index, question) in content.questions.iter().enumerate() {
            if question.answers.is_empty() || question.correct_answer >= question.answers.len() {
                return Err(ContentError::MalformedQuestion { index });
            }
        }

        let count = content.questions.len();
        Ok(QuizState {
            questions: content.questions,
            current: 0,
            selected: vec![None; count],
            correct: 0,
        })
    }

    /// The question awaiting an answer, if any remain.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    /// Index of the question being asked; equals the count once exhausted.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    pub fn selected_answers(&self) -> &[Option<usize>] {
        &self.selected
    }
}

impl MiniGame for QuizState {
    type Input = QuizInput;

    fn apply_input(&mut self, input: &Self::Input) -> Reaction<Self::Input> {
        let Some(question) = self.questions.get(self.current) else {
            return Reaction::Ignored;
        };
        if input.0 >= question.answers.len() {
            return Reaction::Ignored;
        }

        self.selected[self.current] = Some(input.0);
        if input.0 == question.correct_answer {
            self.correct += 1;
        }
        self.current += 1;
        Reaction::Applied
    }

    fn is_terminal(&self) -> bool {
        self.current >= self.questions.len()
    }

    fn score(&self, points: u32) -> u32 {
        // Progress so far over the full question count; the same formula
        // covers natural completion and forced termination.
        scoring::ratio_score(self.correct, self.questions.len() as u32, points)
    }

    fn progress(&self) -> Progress {
        Progress::new(self.current as u32, self.questions.len() as u32)
    }
}
