mod admin;
mod home;
mod lesson;
mod state;

pub use admin::AdminView;
pub use home::HomeView;
pub use lesson::{GreetingsLessonView, GreetingsTabView, LessonIntent, LessonView};
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
