use crate::models::domain::question::{OptionLetter, Question};

/// How many questions `fallback` hands out.
pub const FALLBACK_QUESTION_COUNT: usize = 2;

/// The full deterministic bank, templated with the learner's field and role.
/// The first `FALLBACK_QUESTION_COUNT` entries are the fallback proper; the
/// rest are only used to top a short quiz up to its minimum size.
pub fn question_bank(field: &str, role: &str) -> Vec<Question> {
    vec![
        Question::labelled(
            format!("1. Which of these skills is most important for a {} in {}?", role, field),
            [
                "Technical knowledge",
                "Communication skills",
                "Problem-solving abilities",
                "Project management",
            ],
            OptionLetter::C,
        ),
        Question::labelled(
            format!(
                "2. What technology trend is most likely to impact {} in the next 5 years?",
                field
            ),
            [
                "Artificial Intelligence",
                "Blockchain",
                "Virtual Reality",
                "Quantum Computing",
            ],
            OptionLetter::A,
        ),
        Question::labelled(
            format!("3. Which habit best keeps a {} current in {}?", role, field),
            [
                "Relying on past training only",
                "Continuous learning and professional development",
                "Avoiding new tools",
                "Working in isolation",
            ],
            OptionLetter::B,
        ),
        Question::labelled(
            format!(
                "4. Facing an unfamiliar problem in {}, what should a {} do first?",
                field, role
            ),
            [
                "Guess quickly and move on",
                "Ignore it until it escalates",
                "Clarify the problem and gather information",
                "Hand it off without investigating",
            ],
            OptionLetter::C,
        ),
        Question::labelled(
            format!("5. Which quality do colleagues in {} value most in a {}?", field, role),
            [
                "Reliability",
                "Secrecy",
                "Speed at any cost",
                "Rigid routines",
            ],
            OptionLetter::A,
        ),
    ]
}

/// Placeholder questions used when generation fails or under-delivers.
pub fn fallback(field: &str, role: &str) -> Vec<Question> {
    let mut questions = question_bank(field, role);
    questions.truncate(FALLBACK_QUESTION_COUNT);
    questions
}

/// Bank questions that come after the fallback proper, in bank order.
pub fn reserve(field: &str, role: &str) -> Vec<Question> {
    question_bank(field, role)
        .into_iter()
        .skip(FALLBACK_QUESTION_COUNT)
        .collect()
}
