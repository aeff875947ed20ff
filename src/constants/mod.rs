pub mod quiz_prompt;

/// Fewer extracted questions than this triggers fallback padding.
pub const MIN_QUIZ_QUESTIONS: usize = 5;

/// Hard cap on the length of an assembled quiz.
pub const MAX_QUIZ_QUESTIONS: usize = 10;
