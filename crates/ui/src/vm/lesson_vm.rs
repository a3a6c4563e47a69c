use signs_core::LessonSession;
use signs_core::catalog::greeting;
use signs_core::model::media::PLACEHOLDER_IMAGE;
use signs_core::model::{GreetingId, MediaProxy};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonTabVm {
    pub id: GreetingId,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizFeedbackVm {
    Correct,
    KeepPracticing { title: &'static str },
}

impl QuizFeedbackVm {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            QuizFeedbackVm::Correct => "Correct! Well done!".to_string(),
            QuizFeedbackVm::KeepPracticing { title } => {
                format!("Keep practicing! Try to sign \"{title}\" clearly.")
            }
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            QuizFeedbackVm::Correct => "quiz-feedback quiz-feedback--correct",
            QuizFeedbackVm::KeepPracticing { .. } => "quiz-feedback quiz-feedback--retry",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub detect_prompt: String,
    pub question: &'static str,
    pub options: Vec<QuizOptionVm>,
    pub last_detected: Option<String>,
    pub feedback: Option<QuizFeedbackVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonVm {
    pub tabs: Vec<LessonTabVm>,
    pub title: &'static str,
    pub description: &'static str,
    pub instructions: &'static str,
    pub video_src: String,
    pub video_title: String,
    pub image_src: &'static str,
    pub image_alt: String,
    pub playback_label: &'static str,
    pub quiz: Option<QuizVm>,
}

#[must_use]
pub fn map_lesson(session: &LessonSession, media: &MediaProxy) -> LessonVm {
    let current = session.active_greeting();
    let tabs = GreetingId::ALL
        .into_iter()
        .map(|id| LessonTabVm {
            id,
            label: greeting(id).title(),
            active: id == session.active_greeting_id(),
        })
        .collect();

    let video_src = match media.video_url(current.video_url()) {
        Ok(url) => url.to_string(),
        Err(err) => {
            tracing::warn!(greeting = %current.id(), error = %err, "video not proxied");
            current.video_url().to_string()
        }
    };
    let image_src = if current.image_url().is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        current.image_url()
    };

    let quiz = session.quiz_visible().then(|| {
        let selected = session.selected_answer();
        QuizVm {
            detect_prompt: format!("Sign \"{}\" and let our AI detect it", current.title()),
            question: current.quiz().question(),
            options: current
                .quiz()
                .options()
                .iter()
                .map(|&label| QuizOptionVm {
                    label,
                    selected: selected == Some(label),
                })
                .collect(),
            last_detected: session.last_detected_sign().map(str::to_string),
            feedback: session.is_correct().map(|correct| {
                if correct {
                    QuizFeedbackVm::Correct
                } else {
                    QuizFeedbackVm::KeepPracticing {
                        title: current.title(),
                    }
                }
            }),
        }
    });

    LessonVm {
        tabs,
        title: current.title(),
        description: current.description(),
        instructions: current.instructions(),
        video_src,
        video_title: format!("ASL sign for {}", current.title()),
        image_src,
        image_alt: format!("ASL sign for {}", current.title()),
        playback_label: if session.is_playing() { "Pause" } else { "Play" },
        quiz,
    }
}
