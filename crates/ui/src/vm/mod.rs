mod admin_vm;
mod lesson_vm;

pub use admin_vm::{DictionaryRowVm, identity_state_from_result, map_dictionary_rows};
pub use lesson_vm::{
    LessonTabVm, LessonVm, QuizFeedbackVm, QuizOptionVm, QuizVm, map_lesson,
};
