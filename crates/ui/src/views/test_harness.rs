use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{DetectionHub, IdentityError, IdentityProvider};
use signs_core::model::{GreetingId, Identity, MediaProxy};

use crate::context::{UiApp, build_app_context};
use crate::views::lesson::LessonTestHandles;
use crate::views::{AdminView, HomeView, LessonView};

pub const TEST_MEDIA_BASE: &str = "http://localhost:3000";

#[derive(Clone)]
struct TestApp {
    identity: Arc<dyn IdentityProvider>,
    detections: DetectionHub,
    media: MediaProxy,
}

impl UiApp for TestApp {
    fn identity(&self) -> Arc<dyn IdentityProvider> {
        Arc::clone(&self.identity)
    }

    fn detections(&self) -> DetectionHub {
        self.detections.clone()
    }

    fn media(&self) -> MediaProxy {
        self.media.clone()
    }

    fn lesson_on_launch(&self) -> Option<GreetingId> {
        None
    }
}

/// Never answers, so identity-driven views stay in their loading state.
pub struct PendingIdentityProvider;

#[async_trait::async_trait]
impl IdentityProvider for PendingIdentityProvider {
    async fn current_user(&self) -> Result<Option<Identity>, IdentityError> {
        std::future::pending().await
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Admin,
    Lesson(GreetingId),
}

/// Greetings passed to the lesson's advance hook, in firing order.
#[derive(Clone, Default)]
pub struct AdvanceLog(Rc<RefCell<Vec<GreetingId>>>);

impl AdvanceLog {
    pub fn fired(&self) -> Vec<GreetingId> {
        self.0.borrow().clone()
    }
}

/// Lets a test unmount the view under test while the dom keeps running.
#[derive(Clone, Default)]
pub struct MountHandle(Rc<RefCell<Option<Signal<bool>>>>);

impl MountHandle {
    pub fn unmount(&self) {
        let mut mounted = (*self.0.borrow()).expect("mount handle registered");
        mounted.set(false);
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    lesson_handles: Option<LessonTestHandles>,
    advances: AdvanceLog,
    mount: MountHandle,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.advances.clone());
    use_context_provider(|| props.mount.clone());
    if let Some(handles) = props.lesson_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let advances = use_context::<AdvanceLog>();
    let mount = use_context::<MountHandle>();
    let mounted = use_signal(|| true);
    if mount.0.borrow().is_none() {
        *mount.0.borrow_mut() = Some(mounted);
    }

    if !mounted() {
        return rsx! { p { "Unmounted" } };
    }
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Admin => rsx! { AdminView {} },
        ViewKind::Lesson(initial) => rsx! {
            LessonView {
                initial,
                on_advance: move |id| advances.0.borrow_mut().push(id),
            }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub detections: DetectionHub,
    pub lesson_handles: Option<LessonTestHandles>,
    pub advances: AdvanceLog,
    pub mount: MountHandle,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Lets spawned tasks and resources catch up across a few work cycles.
    pub async fn settle(&mut self) {
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn lesson(&self) -> &LessonTestHandles {
        self.lesson_handles.as_ref().expect("lesson view under test")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, identity: Arc<dyn IdentityProvider>) -> ViewHarness {
    let detections = DetectionHub::default();
    let media = MediaProxy::new(TEST_MEDIA_BASE).expect("media base");
    let lesson_handles = match view {
        ViewKind::Lesson(_) => Some(LessonTestHandles::default()),
        _ => None,
    };
    let advances = AdvanceLog::default();
    let mount = MountHandle::default();

    let app = Arc::new(TestApp {
        identity,
        detections: detections.clone(),
        media,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            lesson_handles: lesson_handles.clone(),
            advances: advances.clone(),
            mount: mount.clone(),
        },
    );

    ViewHarness {
        dom,
        detections,
        lesson_handles,
        advances,
        mount,
    }
}
