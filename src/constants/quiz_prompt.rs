use crate::models::domain::UserProfile;

const QUIZ_FORMAT_INSTRUCTIONS: &str = "Make the questions engaging and technically relevant to their profession. \
Format each question as:
1. Question text?
A. Option A
B. Option B
C. Option C
D. Option D
Answer: Letter of correct option

Always provide exactly 4 options (A, B, C, D) for each question.";

/// Build the generation prompt for an already-resolved profile.
pub fn quiz_generation_prompt(profile: &UserProfile) -> String {
    format!(
        "Generate a {count}-question multiple-choice quiz for {name}, a {age}-year-old from {country}. \
{name} is a {role} in the {field} field. {instructions}",
        count = super::MAX_QUIZ_QUESTIONS,
        name = profile.name,
        age = profile.age,
        country = profile.country,
        role = profile.role,
        field = profile.field,
        instructions = QUIZ_FORMAT_INSTRUCTIONS,
    )
}
