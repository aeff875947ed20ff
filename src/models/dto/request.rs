use serde::Deserialize;
use validator::Validate;

use crate::models::domain::UserProfile;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SubmitProfileRequest {
    #[serde(default)]
    #[validate(length(max = 100))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub age: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub country: String,

    // Emptiness is checked by the session so the learner gets the friendly message
    #[serde(default)]
    #[validate(length(max = 100))]
    pub field: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub role: String,
}

impl From<SubmitProfileRequest> for UserProfile {
    fn from(request: SubmitProfileRequest) -> Self {
        UserProfile {
            name: request.name,
            age: request.age,
            country: request.country,
            field: request.field,
            role: request.role,
        }
    }
}

/// One entry per question, in quiz order. `null` or `""` marks an
/// unanswered question.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAnswersRequest {
    #[validate(length(max = 10))]
    pub answers: Vec<Option<String>>,
}
