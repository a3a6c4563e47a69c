//! The fixed greeting catalog.

use thiserror::Error;

use crate::model::{Greeting, GreetingId, GreetingQuiz};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("{id}: correct answer {answer:?} is not one of the options")]
    AnswerNotInOptions { id: GreetingId, answer: &'static str },

    #[error("{id}: quiz needs at least two options")]
    TooFewOptions { id: GreetingId },

    #[error("{id}: entry is stored under the wrong key")]
    Misplaced { id: GreetingId },
}

/// Every greeting, in tab order. Index with [`greeting`].
pub static CATALOG: [Greeting; 4] = [
    Greeting::new(
        GreetingId::Hello,
        "Hello",
        "The most common greeting in ASL",
        "Touch your fingers to your forehead, then move your hand outward and away from your body.",
        "https://www.handspeak.com/word/h/hel/hello.mp4",
        "https://res.cloudinary.com/spiralyze/image/upload/f_auto,w_auto/BabySignLanguage/DictionaryPages/hello.svg",
        GreetingQuiz::new(
            "Which part of your body do you touch when signing 'Hello'?",
            &["Forehead", "Chin", "Chest", "Shoulder"],
            "Forehead",
        ),
    ),
    Greeting::new(
        GreetingId::Goodbye,
        "Goodbye",
        "A common way to say farewell",
        "Start with an open hand, palm facing the person you're addressing, then wave your hand.",
        "https://www.handspeak.com/word/g/goo/good-bye.mp4",
        "https://res.cloudinary.com/spiralyze/image/upload/f_auto,w_auto/BabySignLanguage/DictionaryPages/goodbye.svg",
        GreetingQuiz::new(
            "How do you sign 'Goodbye' in ASL?",
            &[
                "Tap your chest twice",
                "Wave with your palm facing outward",
                "Point to the door",
                "Make a fist and pull it down",
            ],
            "Wave with your palm facing outward",
        ),
    ),
    Greeting::new(
        GreetingId::Please,
        "Please",
        "Used when making a request or asking for something",
        "Place your dominant hand flat on your chest and make a circular motion clockwise.",
        "https://www.handspeak.com/word/p/ple/please.mp4",
        "https://res.cloudinary.com/spiralyze/image/upload/f_auto,w_auto/BabySignLanguage/DictionaryPages/please.svg",
        GreetingQuiz::new(
            "What motion do you make when signing 'Please'?",
            &["Up and down", "Side to side", "Circular", "Zigzag"],
            "Circular",
        ),
    ),
    Greeting::new(
        GreetingId::ThankYou,
        "Thank You",
        "Expressing gratitude",
        "Touch your chin or lips with the fingertips of your dominant hand, then move your hand forward and down.",
        // Shares the "please" clip until a dedicated recording exists.
        "https://www.handspeak.com/word/p/ple/please.mp4",
        "https://res.cloudinary.com/spiralyze/image/upload/f_auto,w_auto/BabySignLanguage/DictionaryPages/thank_you.svg",
        GreetingQuiz::new(
            "Where do you start the sign for 'Thank You'?",
            &["Forehead", "Chin or lips", "Chest", "Shoulder"],
            "Chin or lips",
        ),
    ),
];

/// Looks up a catalog entry. Total over `GreetingId`.
#[must_use]
pub fn greeting(id: GreetingId) -> &'static Greeting {
    let index = match id {
        GreetingId::Hello => 0,
        GreetingId::Goodbye => 1,
        GreetingId::Please => 2,
        GreetingId::ThankYou => 3,
    };
    &CATALOG[index]
}

/// Checks the catalog invariants: each entry sits under its own key and its
/// correct answer is one of at least two options.
///
/// # Errors
///
/// Returns the first `CatalogError` found.
pub fn validate(entries: &[Greeting]) -> Result<(), CatalogError> {
    for (index, entry) in entries.iter().enumerate() {
        let id = entry.id();
        if GreetingId::ALL.get(index) != Some(&id) {
            return Err(CatalogError::Misplaced { id });
        }
        let quiz = entry.quiz();
        if quiz.options().len() < 2 {
            return Err(CatalogError::TooFewOptions { id });
        }
        if !quiz.options().contains(&quiz.correct_answer()) {
            return Err(CatalogError::AnswerNotInOptions {
                id,
                answer: quiz.correct_answer(),
            });
        }
    }
    Ok(())
}
