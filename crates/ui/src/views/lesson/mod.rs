mod components;
mod timer;
mod view;

pub use view::{GreetingsLessonView, GreetingsTabView, LessonIntent, LessonView};

#[cfg(test)]
pub(crate) use timer::ADVANCE_DELAY;
#[cfg(test)]
pub(crate) use view::LessonTestHandles;
