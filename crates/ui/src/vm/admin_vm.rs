use services::IdentityError;
use signs_core::model::{Greeting, GreetingId, Identity, IdentityState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DictionaryRowVm {
    pub id: GreetingId,
    pub title: &'static str,
    pub description: &'static str,
    pub answer: &'static str,
    pub option_count: usize,
}

#[must_use]
pub fn map_dictionary_rows(entries: &[Greeting]) -> Vec<DictionaryRowVm> {
    entries
        .iter()
        .map(|entry| DictionaryRowVm {
            id: entry.id(),
            title: entry.title(),
            description: entry.description(),
            answer: entry.quiz().correct_answer(),
            option_count: entry.quiz().options().len(),
        })
        .collect()
}

/// Provider result as the admin gate sees it. Errors keep their message verbatim.
#[must_use]
pub fn identity_state_from_result(result: Result<Option<Identity>, IdentityError>) -> IdentityState {
    match result {
        Ok(identity) => IdentityState::Resolved(identity),
        Err(err) => {
            tracing::warn!(error = %err, "identity lookup failed");
            IdentityState::Failed(err.to_string())
        }
    }
}
