use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

/// Pause between a matched detection and the advance callback.
pub const ADVANCE_DELAY: Duration = Duration::from_secs(2);

/// Fire-once timer owned by a lesson view.
///
/// At most one callback is pending. Arming again supersedes the previous one,
/// and the pending task is cancelled when the owning component unmounts.
#[derive(Clone, Default)]
pub(crate) struct AdvanceTimer {
    pending: Rc<Cell<Option<Task>>>,
}

impl AdvanceTimer {
    pub(crate) fn arm(&self, delay: Duration, on_fire: impl FnOnce() + 'static) {
        self.cancel();
        let pending = Rc::clone(&self.pending);
        let deadline = tokio::time::Instant::now() + delay;
        let task = spawn(async move {
            tokio::time::sleep_until(deadline).await;
            pending.set(None);
            on_fire();
        });
        self.pending.set(Some(task));
    }

    pub(crate) fn cancel(&self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }
}

pub(crate) fn use_advance_timer() -> AdvanceTimer {
    let timer = use_hook(AdvanceTimer::default);
    let on_unmount = timer.clone();
    use_drop(move || on_unmount.cancel());
    timer
}
