mod greeting;
mod identity;
mod ids;
pub mod media;

pub use greeting::{Greeting, GreetingQuiz};
pub use identity::{Identity, IdentityState};
pub use ids::{GreetingId, ParseGreetingIdError};
pub use media::{MediaError, MediaProxy};
