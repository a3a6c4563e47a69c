use dioxus::prelude::*;
use signs_core::model::media::IMMERSIVE_PRACTICE_EMBED;

use crate::vm::{LessonTabVm, QuizVm};

use super::view::LessonIntent;

#[component]
pub(super) fn LessonTabs(tabs: Vec<LessonTabVm>, on_intent: EventHandler<LessonIntent>) -> Element {
    rsx! {
        div { class: "lesson-tabs", role: "tablist",
            for tab in tabs {
                button {
                    key: "{tab.id}",
                    class: if tab.active { "lesson-tab lesson-tab--active" } else { "lesson-tab" },
                    id: "lesson-tab-{tab.id}",
                    role: "tab",
                    r#type: "button",
                    aria_selected: "{tab.active}",
                    onclick: move |_| on_intent.call(LessonIntent::SelectTab(tab.id)),
                    "{tab.label}"
                }
            }
        }
    }
}

#[component]
pub(super) fn QuizPanel(
    quiz: QuizVm,
    celebrating: bool,
    on_intent: EventHandler<LessonIntent>,
) -> Element {
    rsx! {
        div { class: "quiz-panel",
            h3 { class: "quiz-panel__prompt", "{quiz.detect_prompt}" }
            DetectorPanel { on_intent }
            if let Some(sign) = quiz.last_detected.as_deref() {
                p { class: "quiz-panel__last",
                    "Last detected: "
                    span { class: "quiz-panel__sign", "{sign}" }
                }
            }
            if celebrating {
                p { class: "quiz-panel__celebration", "Nice signing! Keep it up." }
            }
            p { class: "quiz-panel__question", "{quiz.question}" }
            div { class: "quiz-options",
                for option in quiz.options {
                    button {
                        key: "{option.label}",
                        class: if option.selected { "quiz-option quiz-option--selected" } else { "quiz-option" },
                        r#type: "button",
                        onclick: move |_| on_intent.call(LessonIntent::SelectAnswer(option.label.to_string())),
                        "{option.label}"
                    }
                }
            }
            if let Some(feedback) = quiz.feedback {
                div { class: "{feedback.class()}",
                    p { "{feedback.message()}" }
                }
            }
            div { class: "quiz-panel__actions",
                button {
                    class: "btn btn-secondary",
                    id: "quiz-exit",
                    r#type: "button",
                    onclick: move |_| on_intent.call(LessonIntent::ExitQuiz),
                    "Back to Lesson"
                }
                button {
                    class: "btn btn-secondary",
                    id: "quiz-retry",
                    r#type: "button",
                    onclick: move |_| on_intent.call(LessonIntent::Retry),
                    "Try Again"
                }
            }
        }
    }
}

/// Typed stand-in for the camera detector. Submitted labels take the same
/// path as labels arriving from the detection hub.
#[component]
fn DetectorPanel(on_intent: EventHandler<LessonIntent>) -> Element {
    let mut label = use_signal(String::new);

    rsx! {
        div { class: "detector-panel",
            input {
                class: "detector-panel__input",
                r#type: "text",
                placeholder: "Type a detected sign",
                value: "{label}",
                oninput: move |evt| label.set(evt.value()),
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| {
                    let sign = label.peek().clone();
                    label.set(String::new());
                    on_intent.call(LessonIntent::Detect(sign));
                },
                "Send"
            }
        }
    }
}

#[component]
pub(super) fn CulturalContext() -> Element {
    rsx! {
        section { class: "lesson-section lesson-section--culture",
            h3 { "Cultural Context" }
            p {
                "In Deaf culture, greetings often include maintaining eye contact and using appropriate "
                "facial expressions. When meeting someone for the first time, it's common to fingerspell "
                "your name after saying \"hello.\""
            }
            p {
                "Remember that ASL is a visual language, so clear hand movements and appropriate facial "
                "expressions are essential for effective communication."
            }
        }
    }
}

#[component]
pub(super) fn PracticeScenario() -> Element {
    rsx! {
        section { class: "lesson-section lesson-section--scenario",
            h3 { "Practice Scenario" }
            p { "Imagine you're meeting a Deaf person for the first time. Practice the following conversation:" }
            ol {
                li { "Sign \"Hello\"" }
                li { "Fingerspell your name" }
                li { "Sign \"Nice to meet you\"" }
                li { "At the end of your conversation, sign \"Thank you\" and \"Goodbye\"" }
            }
            p { "Practice this sequence in front of a mirror or record yourself to review your signs." }
        }
    }
}

#[component]
pub(super) fn ImmersivePractice() -> Element {
    rsx! {
        section { class: "lesson-section lesson-section--immersive",
            h3 { "Immersive Practice" }
            p {
                "Watch this video of a natural conversation using the greetings you've learned, "
                "then try to follow along."
            }
            div { class: "lesson-embed",
                iframe {
                    src: IMMERSIVE_PRACTICE_EMBED,
                    title: "ASL Greetings Conversation",
                    allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                    allowfullscreen: true,
                }
            }
            div { class: "lesson-challenge",
                h4 { "Practice Challenge:" }
                ol {
                    li { "Watch the video once through" }
                    li { "Watch again and try to identify all the greetings used" }
                    li { "Practice responding appropriately to each greeting" }
                    li { "Try recording yourself having a similar conversation" }
                }
            }
        }
    }
}
