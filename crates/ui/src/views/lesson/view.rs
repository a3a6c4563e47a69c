use dioxus::prelude::*;
use dioxus_router::Link;
use signs_core::model::GreetingId;
use signs_core::{DetectionOutcome, LessonSession};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::map_lesson;

use super::components::{CulturalContext, ImmersivePractice, LessonTabs, PracticeScenario, QuizPanel};
use super::timer::{ADVANCE_DELAY, use_advance_timer};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonIntent {
    SelectTab(GreetingId),
    StartQuiz,
    SelectAnswer(String),
    Detect(String),
    Retry,
    ExitQuiz,
    TogglePlayback,
}

#[component]
pub fn GreetingsLessonView() -> Element {
    rsx! { LessonView { initial: GreetingId::default() } }
}

/// Unknown tab keys open the default tab.
#[component]
pub fn GreetingsTabView(tab: String) -> Element {
    let initial = GreetingId::from_key_or_default(&tab);
    rsx! { LessonView { initial } }
}

#[component]
pub fn LessonView(initial: GreetingId, on_advance: Option<EventHandler<GreetingId>>) -> Element {
    let ctx = use_context::<AppContext>();
    let media = ctx.media();
    let hub = ctx.detections();

    let session = use_signal(|| LessonSession::starting_at(initial));
    let celebrating = use_signal(|| false);
    let timer = use_advance_timer();

    let dispatch_intent = use_callback(move |intent: LessonIntent| {
        let mut session = session;
        let mut celebrating = celebrating;

        match intent {
            LessonIntent::SelectTab(id) => {
                timer.cancel();
                celebrating.set(false);
                session.write().select_tab(id);
            }
            LessonIntent::StartQuiz => session.write().start_quiz(),
            LessonIntent::SelectAnswer(answer) => {
                let verdict = session.write().select_answer(&answer);
                if let Some(correct) = verdict {
                    timer.cancel();
                    celebrating.set(false);
                    tracing::info!(greeting = %session.peek().active_greeting_id(), %answer, correct, "quiz answered");
                }
            }
            LessonIntent::Detect(sign) => {
                let outcome = session.write().receive_detection(&sign);
                if let DetectionOutcome::Matched(ticket) = outcome {
                    tracing::info!(greeting = %ticket.greeting(), "sign matched");
                    celebrating.set(true);
                    timer.arm(ADVANCE_DELAY, move || {
                        if !session.peek().is_current(ticket) {
                            return;
                        }
                        celebrating.set(false);
                        if let Some(handler) = on_advance {
                            handler.call(ticket.greeting());
                        }
                    });
                }
            }
            LessonIntent::Retry => {
                celebrating.set(false);
                session.write().retry();
            }
            LessonIntent::ExitQuiz => {
                celebrating.set(false);
                session.write().exit_quiz();
            }
            LessonIntent::TogglePlayback => session.write().toggle_playback(),
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LessonTestHandles>() {
                handles.register(dispatch_intent, session);
            }
        }
    }

    // Following a route to another tab behaves like clicking that tab.
    use_effect(use_reactive((&initial,), move |(initial,)| {
        if session.peek().active_greeting_id() != initial {
            dispatch_intent.call(LessonIntent::SelectTab(initial));
        }
    }));

    // Hub labels only count while the quiz is open.
    let subscription_hub = hub.clone();
    use_future(move || {
        let hub = subscription_hub.clone();
        async move {
            let mut detections = hub.subscribe();
            while let Ok(sign) = detections.recv().await {
                if session.peek().quiz_visible() {
                    dispatch_intent.call(LessonIntent::Detect(sign));
                }
            }
        }
    });

    let label_hub = hub.clone();
    use_effect(move || {
        let guard = session.read();
        let label = guard.quiz_visible().then(|| guard.active_greeting().title());
        label_hub.set_current_label(label);
    });
    use_drop(move || hub.set_current_label(None));

    let vm = map_lesson(&session.read(), &media);
    let is_celebrating = celebrating();

    rsx! {
        div { class: "page lesson-page",
            header { class: "view-header",
                h2 { class: "view-title", "Common Greetings in ASL" }
            }
            section { class: "lesson-intro",
                h3 { "ASL Greetings" }
                p {
                    "Greetings are essential for starting conversations in any language. In this lesson, "
                    "you'll learn common ASL greetings like \"hello,\" \"goodbye,\" \"please,\" and \"thank you.\""
                }
            }
            LessonTabs { tabs: vm.tabs.clone(), on_intent: dispatch_intent }
            div { class: "lesson-card",
                div { class: "lesson-card__header",
                    h3 { class: "lesson-card__title", "{vm.title}" }
                    p { class: "lesson-card__description", "{vm.description}" }
                }
                div { class: "lesson-card__body",
                    div { class: "lesson-card__how",
                        h4 { "How to Sign" }
                        p { "{vm.instructions}" }
                        div { class: "lesson-video",
                            video {
                                src: "{vm.video_src}",
                                title: "{vm.video_title}",
                                width: "800px",
                                height: "450px",
                                controls: true,
                                "controlslist": "nodownload",
                            }
                        }
                        div { class: "lesson-video__controls",
                            button {
                                class: "btn btn-secondary",
                                id: "lesson-playback",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(LessonIntent::TogglePlayback),
                                "{vm.playback_label}"
                            }
                            button { class: "btn btn-secondary", r#type: "button", "Slow Motion" }
                        }
                    }
                    div { class: "lesson-card__practice",
                        img { class: "lesson-image", src: "{vm.image_src}", alt: "{vm.image_alt}" }
                        if let Some(quiz) = vm.quiz.clone() {
                            QuizPanel { quiz, celebrating: is_celebrating, on_intent: dispatch_intent }
                        } else {
                            button {
                                class: "btn btn-primary",
                                id: "lesson-start-quiz",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(LessonIntent::StartQuiz),
                                "Test Your Knowledge"
                            }
                        }
                    }
                }
            }
            CulturalContext {}
            PracticeScenario {}
            ImmersivePractice {}
            nav { class: "lesson-nav",
                Link { class: "btn btn-primary", to: Route::Home {}, "Back to Roadmap" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LessonTestHandles {
    dispatch: Rc<RefCell<Option<Callback<LessonIntent>>>>,
    session: Rc<RefCell<Option<Signal<LessonSession>>>>,
}

#[cfg(test)]
impl LessonTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<LessonIntent>, session: Signal<LessonSession>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<LessonIntent> {
        (*self.dispatch.borrow()).expect("lesson dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<LessonSession> {
        (*self.session.borrow()).expect("lesson session registered")
    }
}
