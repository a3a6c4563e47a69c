//! Per-view state of the greetings lesson: which tab is open, whether the quiz
//! is showing, and how the learner's answers have been judged.
//!
//! Two answer paths exist and they deliberately differ:
//! - a multiple-choice pick is judged right or wrong and may be overwritten
//!   by a later pick;
//! - a detector label can only ever mark the quiz correct, and only while no
//!   verdict exists yet. Non-matching labels leave the quiz open.

use crate::catalog::greeting;
use crate::model::{Greeting, GreetingId};

/// Quiz portion of the lesson state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuizState {
    #[default]
    Browsing,
    Quizzing {
        selected_answer: Option<String>,
        is_correct: Option<bool>,
    },
}

impl QuizState {
    const fn fresh_quiz() -> Self {
        QuizState::Quizzing {
            selected_answer: None,
            is_correct: None,
        }
    }
}

/// Result of feeding one detector label into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionOutcome {
    /// Empty label; nothing changed.
    Ignored,
    /// Label stored as the last detection; no verdict change.
    Recorded,
    /// Label matched the active greeting and marked the quiz correct.
    Matched(AdvanceTicket),
}

/// Identifies the correct detection a deferred advance was armed for.
///
/// A ticket goes stale as soon as the tab changes, the quiz is retried or
/// closed, an answer is picked, or a newer match is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket {
    generation: u64,
    greeting: GreetingId,
}

impl AdvanceTicket {
    #[must_use]
    pub fn greeting(&self) -> GreetingId {
        self.greeting
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonSession {
    active: GreetingId,
    quiz: QuizState,
    last_detected_sign: Option<String>,
    is_playing: bool,
    generation: u64,
}

impl LessonSession {
    /// Fresh state: `hello` tab, quiz hidden, nothing answered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn starting_at(active: GreetingId) -> Self {
        Self {
            active,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn active_greeting_id(&self) -> GreetingId {
        self.active
    }

    #[must_use]
    pub fn active_greeting(&self) -> &'static Greeting {
        greeting(self.active)
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    #[must_use]
    pub fn quiz_visible(&self) -> bool {
        matches!(self.quiz, QuizState::Quizzing { .. })
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        match &self.quiz {
            QuizState::Quizzing {
                selected_answer, ..
            } => selected_answer.as_deref(),
            QuizState::Browsing => None,
        }
    }

    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        match self.quiz {
            QuizState::Quizzing { is_correct, .. } => is_correct,
            QuizState::Browsing => None,
        }
    }

    #[must_use]
    pub fn last_detected_sign(&self) -> Option<&str> {
        self.last_detected_sign.as_deref()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Switches tabs. Always resets the quiz, even when `id` is already active.
    pub fn select_tab(&mut self, id: GreetingId) {
        self.active = id;
        self.quiz = QuizState::Browsing;
        self.last_detected_sign = None;
        self.bump_generation();
    }

    /// Opens the quiz. No-op while already quizzing.
    pub fn start_quiz(&mut self) {
        if !self.quiz_visible() {
            self.quiz = QuizState::fresh_quiz();
        }
    }

    /// Records a multiple-choice pick and returns the verdict.
    ///
    /// Returns `None` (and changes nothing) while the quiz is hidden. A verdict
    /// that is already set does not block a new pick, and any pick overrides
    /// a pending advance.
    pub fn select_answer(&mut self, answer: &str) -> Option<bool> {
        let verdict = self.active_greeting().quiz().is_correct(answer);
        let QuizState::Quizzing {
            selected_answer,
            is_correct,
        } = &mut self.quiz
        else {
            return None;
        };
        *selected_answer = Some(answer.to_string());
        *is_correct = Some(verdict);
        self.bump_generation();
        Some(verdict)
    }

    /// Feeds one label from the sign detector.
    pub fn receive_detection(&mut self, sign: &str) -> DetectionOutcome {
        if sign.is_empty() {
            return DetectionOutcome::Ignored;
        }
        self.last_detected_sign = Some(sign.to_string());

        let greeting = self.active_greeting();
        let QuizState::Quizzing { is_correct, .. } = &mut self.quiz else {
            return DetectionOutcome::Recorded;
        };
        if is_correct.is_some() || !greeting.matches_sign(sign) {
            return DetectionOutcome::Recorded;
        }
        *is_correct = Some(true);
        self.bump_generation();
        DetectionOutcome::Matched(AdvanceTicket {
            generation: self.generation,
            greeting: self.active,
        })
    }

    /// Clears the answer, verdict and last detection; the quiz stays open.
    pub fn retry(&mut self) {
        if self.quiz_visible() {
            self.quiz = QuizState::fresh_quiz();
        }
        self.last_detected_sign = None;
        self.bump_generation();
    }

    /// Hides the quiz and drops everything it held.
    pub fn exit_quiz(&mut self) {
        self.quiz = QuizState::Browsing;
        self.last_detected_sign = None;
        self.bump_generation();
    }

    /// Flips the play/pause intent. Not tied to any media element.
    pub fn toggle_playback(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Whether `ticket` still belongs to the latest correct detection.
    #[must_use]
    pub fn is_current(&self, ticket: AdvanceTicket) -> bool {
        ticket.generation == self.generation && ticket.greeting == self.active
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}
