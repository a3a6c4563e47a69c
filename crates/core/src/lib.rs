#![forbid(unsafe_code)]

pub mod access;
pub mod catalog;
pub mod error;
pub mod lesson;
pub mod model;

pub use access::{ADMIN_NICKNAME, AccessDecision, decide_access};
pub use catalog::{CATALOG, greeting};
pub use error::Error;
pub use lesson::{AdvanceTicket, DetectionOutcome, LessonSession, QuizState};
