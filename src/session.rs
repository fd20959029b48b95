//! Session controller: one mini-game run from start to completion or exit.
//!
//! The session is the single owner of the live variant state. Every gameplay
//! event goes through [`GameSession::handle_input`] or [`GameSession::tick`],
//! processed one at a time, and the host-supplied completion callback fires
//! exactly once: whichever of the terminal predicate and the timer expiry
//! happens first wins the latch, and everything afterwards is a no-op. An
//! abandoned session reports nothing.

use log::{debug, info, trace};

use crate::definition::GameDefinition;
use crate::error::ContentError;
use crate::game_wrapper::{GameWrapper, InputWrapper};
use crate::shuffle::SessionRng;
use crate::timer::CountdownTimer;
use crate::{DelayedInput, Reaction};

/// Receives the final score, exactly once.
pub type CompletionCallback = Box<dyn FnOnce(u32)>;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Accepting input and ticks.
    InProgress,
    /// The callback has fired with the final score.
    Completed,
    /// Abandoned before completion; nothing was reported.
    Exited,
}

impl SessionStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, SessionStatus::InProgress)
    }
}

/// What one event did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// State advanced.
    Applied,
    /// Dropped: not a legal transition, or the session is already over.
    Ignored,
    /// State advanced and the host must feed this input back after its
    /// delay (reveal/reset effects re-entering the queue).
    Scheduled(DelayedInput<InputWrapper>),
    /// This event ended the session; the callback fired with this score.
    Completed(u32),
}

/// One applied input, for diagnostics and transcripts.
#[derive(Debug, Clone)]
pub struct InputLogEntry {
    /// Seconds elapsed when the input landed.
    pub at_second: u32,
    pub input: InputWrapper,
}

/// A running mini-game: variant engine, countdown, score latch.
pub struct GameSession {
    id: String,
    game: GameWrapper,
    timer: CountdownTimer,
    points: u32,
    status: SessionStatus,
    final_score: Option<u32>,
    /// Consumed by the first completion; `None` afterwards and after exit.
    on_complete: Option<CompletionCallback>,
    input_log: Vec<InputLogEntry>,
    elapsed_seconds: u32,
}

impl GameSession {
    /// Validates the definition, deals the variant, and arms the timer.
    ///
    /// Non-playable content is a recoverable error for the host to surface;
    /// nothing is scored and the callback is dropped unfired.
    pub fn start(
        definition: &GameDefinition,
        rng: &mut SessionRng,
        on_complete: CompletionCallback,
    ) -> Result<Self, ContentError> {
        let game = GameWrapper::from_definition(definition, rng)?;
        let timer = CountdownTimer::new(definition.time_limit_seconds);

        match timer.remaining() {
            Some(seconds) => info!(
                "session {}: starting {} for {} points, {}s limit",
                definition.id,
                game.variant_name(),
                definition.points,
                seconds
            ),
            None => info!(
                "session {}: starting {} for {} points, no time limit",
                definition.id,
                game.variant_name(),
                definition.points
            ),
        }

        Ok(GameSession {
            id: definition.id.clone(),
            game,
            timer,
            points: definition.points,
            status: SessionStatus::InProgress,
            final_score: None,
            on_complete: Some(on_complete),
            input_log: Vec::new(),
            elapsed_seconds: 0,
        })
    }

    /// Feeds one player input through the active engine.
    ///
    /// Invalid inputs are dropped silently. When the input satisfies the
    /// terminal condition the session completes on the spot.
    pub fn handle_input(&mut self, input: InputWrapper) -> EventOutcome {
        if self.status.is_over() {
            trace!("session {}: dropping {} after the end", self.id, input);
            return EventOutcome::Ignored;
        }

        let reaction = self.game.apply_input(&input);
        if reaction == Reaction::Ignored {
            debug!("session {}: ignored {}", self.id, input);
            return EventOutcome::Ignored;
        }

        debug!("session {}: applied {}", self.id, input);
        self.input_log.push(InputLogEntry {
            at_second: self.elapsed_seconds,
            input,
        });

        if self.game.is_terminal() {
            return self.complete(false);
        }
        match reaction {
            Reaction::Schedule(delayed) => EventOutcome::Scheduled(delayed),
            _ => EventOutcome::Applied,
        }
    }

    /// Advances the countdown by one second.
    ///
    /// Untimed sessions just accumulate elapsed time. The tick that reaches
    /// zero completes the session with the partial score before any further
    /// event is seen.
    pub fn tick(&mut self) -> EventOutcome {
        if self.status.is_over() {
            return EventOutcome::Ignored;
        }

        self.elapsed_seconds += 1;
        if self.timer.tick() {
            return self.complete(true);
        }
        EventOutcome::Applied
    }

    /// Abandons the session. Idempotent; after completion it has no effect,
    /// and before completion the callback is dropped unfired.
    pub fn exit(&mut self) {
        if self.status.is_over() {
            return;
        }
        self.status = SessionStatus::Exited;
        self.on_complete = None;
        info!("session {}: exited without scoring", self.id);
    }

    fn complete(&mut self, forced: bool) -> EventOutcome {
        let score = self.game.score(self.points);
        self.status = SessionStatus::Completed;
        self.final_score = Some(score);

        if forced {
            info!(
                "session {}: time expired at {}, partial score {}/{}",
                self.id,
                self.game.progress(),
                score,
                self.points
            );
        } else {
            info!(
                "session {}: completed with score {}/{}",
                self.id, score, self.points
            );
        }

        if let Some(callback) = self.on_complete.take() {
            callback(score);
        }
        EventOutcome::Completed(score)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// The latched score; `Some` exactly when the session completed.
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Seconds left, `None` for untimed sessions.
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.timer.remaining()
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    /// The live engine, for host rendering.
    pub fn game(&self) -> &GameWrapper {
        &self.game
    }

    pub fn variant_name(&self) -> &'static str {
        self.game.variant_name()
    }

    pub fn progress(&self) -> crate::Progress {
        self.game.progress()
    }

    /// Applied inputs in arrival order.
    pub fn input_log(&self) -> &[InputLogEntry] {
        &self.input_log
    }

    /// The input log as display lines, one per applied input.
    pub fn format_transcript(&self) -> String {
        if self.input_log.is_empty() {
            return "no inputs".to_string();
        }
        let mut lines = String::new();
        for (number, entry) in self.input_log.iter().enumerate() {
            lines.push_str(&format!(
                "{:>3}. [{:>4}s] {}\n",
                number + 1,
                entry.at_second,
                entry.input
            ));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::quiz::QuizInput;
    use crate::samples;
    use std::cell::Cell;
    use std::rc::Rc;

    fn score_sink() -> (Rc<Cell<Option<u32>>>, CompletionCallback) {
        let scored = Rc::new(Cell::new(None));
        let sink = Rc::clone(&scored);
        (scored, Box::new(move |score| sink.set(Some(score))))
    }

    fn quiz_session() -> (GameSession, Rc<Cell<Option<u32>>>) {
        let (scored, callback) = score_sink();
        let session =
            GameSession::start(&samples::quiz(), &mut SessionRng::seeded(4), callback).unwrap();
        (session, scored)
    }

    #[test]
    fn natural_completion_fires_the_callback_once() {
        let (mut session, scored) = quiz_session();
        // Three right answers, one wrong.
        for answer in [1, 0, 2, 0] {
            session.handle_input(InputWrapper::Quiz(QuizInput(answer)));
        }
        assert_eq!(session.status(), SessionStatus::Completed);
        assert_eq!(scored.get(), Some(75));
        assert_eq!(session.final_score(), Some(75));

        // Latched: nothing moves any more.
        assert_eq!(
            session.handle_input(InputWrapper::Quiz(QuizInput(0))),
            EventOutcome::Ignored
        );
        assert_eq!(session.tick(), EventOutcome::Ignored);
        assert_eq!(scored.get(), Some(75));
    }

    #[test]
    fn timer_expiry_completes_with_partial_score() {
        let (scored, callback) = score_sink();
        let mut definition = samples::quiz();
        definition.time_limit_seconds = 3;
        let mut session =
            GameSession::start(&definition, &mut SessionRng::seeded(4), callback).unwrap();

        session.handle_input(InputWrapper::Quiz(QuizInput(1)));
        session.handle_input(InputWrapper::Quiz(QuizInput(0)));
        assert_eq!(session.tick(), EventOutcome::Applied);
        assert_eq!(session.tick(), EventOutcome::Applied);
        assert_eq!(session.tick(), EventOutcome::Completed(50));
        assert_eq!(scored.get(), Some(50));
        assert_eq!(session.remaining_seconds(), Some(0));
    }

    #[test]
    fn exit_before_completion_reports_nothing() {
        let (mut session, scored) = quiz_session();
        session.exit();
        session.exit();
        assert_eq!(session.status(), SessionStatus::Exited);
        assert_eq!(scored.get(), None);
        assert_eq!(session.final_score(), None);

        assert_eq!(
            session.handle_input(InputWrapper::Quiz(QuizInput(1))),
            EventOutcome::Ignored
        );
    }

    #[test]
    fn exit_after_completion_is_a_no_op() {
        let (mut session, scored) = quiz_session();
        for answer in [1, 0, 2, 1] {
            session.handle_input(InputWrapper::Quiz(QuizInput(answer)));
        }
        assert_eq!(scored.get(), Some(100));
        session.exit();
        assert_eq!(session.status(), SessionStatus::Completed);
        assert_eq!(session.final_score(), Some(100));
    }

    #[test]
    fn rejects_unplayable_content_without_scoring() {
        let (scored, callback) = score_sink();
        let mut definition = samples::quiz();
        definition.points = 0;
        let result = GameSession::start(&definition, &mut SessionRng::seeded(4), callback);
        assert_eq!(result.err(), Some(ContentError::ZeroPoints));
        assert_eq!(scored.get(), None);
    }

    #[test]
    fn input_log_records_applied_inputs_with_time() {
        let (mut session, _) = quiz_session();
        session.tick();
        session.tick();
        session.handle_input(InputWrapper::Quiz(QuizInput(1)));
        // Out of range: ignored, not logged.
        session.handle_input(InputWrapper::Quiz(QuizInput(9)));

        assert_eq!(session.input_log().len(), 1);
        assert_eq!(session.input_log()[0].at_second, 2);
        assert!(session.format_transcript().contains("answer(1)"));
    }

    #[test]
    fn untimed_sessions_never_expire() {
        let (scored, callback) = score_sink();
        let mut definition = samples::quiz();
        definition.time_limit_seconds = 0;
        let mut session =
            GameSession::start(&definition, &mut SessionRng::seeded(4), callback).unwrap();
        for _ in 0..10_000 {
            assert_eq!(session.tick(), EventOutcome::Applied);
        }
        assert_eq!(session.remaining_seconds(), None);
        assert_eq!(session.elapsed_seconds(), 10_000);
        assert_eq!(scored.get(), None);
    }
}
