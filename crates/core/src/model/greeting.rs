use crate::model::ids::GreetingId;

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// Multiple-choice question attached to one greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreetingQuiz {
    question: &'static str,
    options: &'static [&'static str],
    correct_answer: &'static str,
}

impl GreetingQuiz {
    #[must_use]
    pub const fn new(
        question: &'static str,
        options: &'static [&'static str],
        correct_answer: &'static str,
    ) -> Self {
        Self {
            question,
            options,
            correct_answer,
        }
    }

    #[must_use]
    pub fn question(&self) -> &'static str {
        self.question
    }

    /// Options in display order.
    #[must_use]
    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &'static str {
        self.correct_answer
    }

    /// Exact, case-sensitive comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }
}

//
// ─── GREETING ──────────────────────────────────────────────────────────────────
//

/// One lesson of the greeting catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    id: GreetingId,
    title: &'static str,
    description: &'static str,
    instructions: &'static str,
    video_url: &'static str,
    image_url: &'static str,
    quiz: GreetingQuiz,
}

impl Greeting {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        id: GreetingId,
        title: &'static str,
        description: &'static str,
        instructions: &'static str,
        video_url: &'static str,
        image_url: &'static str,
        quiz: GreetingQuiz,
    ) -> Self {
        Self {
            id,
            title,
            description,
            instructions,
            video_url,
            image_url,
            quiz,
        }
    }

    #[must_use]
    pub fn id(&self) -> GreetingId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    #[must_use]
    pub fn instructions(&self) -> &'static str {
        self.instructions
    }

    #[must_use]
    pub fn video_url(&self) -> &'static str {
        self.video_url
    }

    #[must_use]
    pub fn image_url(&self) -> &'static str {
        self.image_url
    }

    #[must_use]
    pub fn quiz(&self) -> &GreetingQuiz {
        &self.quiz
    }

    /// Whether a detector label names this greeting.
    ///
    /// Both sides are trimmed and upper-cased before comparing, so `" hello "`
    /// and `"HELLO"` both match the `Hello` title.
    #[must_use]
    pub fn matches_sign(&self, sign: &str) -> bool {
        sign.trim().to_uppercase() == self.title.trim().to_uppercase()
    }
}
