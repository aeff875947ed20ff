use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::domain::{Question, SessionPhase, SessionState, UserProfile},
    services::grading_service::{GradingService, LabelledOption, QuestionReview},
};

/// A question as shown while the quiz runs; the answer key stays hidden.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub number: usize,
    pub prompt: String,
    pub options: Vec<LabelledOption>,
}

impl QuestionView {
    fn new(index: usize, question: &Question) -> Self {
        QuestionView {
            number: index + 1,
            prompt: question.prompt().to_string(),
            options: LabelledOption::all(question),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub phase: SessionPhase,
    /// A quiz is being generated for the submitted profile.
    pub generating: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
    pub questions: Vec<QuestionView>,
    pub answers: Vec<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&SessionState> for SessionView {
    fn from(session: &SessionState) -> Self {
        SessionView {
            id: session.id,
            phase: session.phase(),
            generating: session.is_generating(),
            profile: session.profile().cloned(),
            questions: session
                .quiz()
                .questions()
                .iter()
                .enumerate()
                .map(|(index, question)| QuestionView::new(index, question))
                .collect(),
            answers: session.answers().to_vec(),
            score: session.score(),
            badge: session.badge(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub session_id: Uuid,
    pub profile: UserProfile,
    pub score: u32,
    pub total: usize,
    pub badge: &'static str,
    pub review: Vec<QuestionReview>,
}

impl TryFrom<&SessionState> for ResultsView {
    type Error = AppError;

    fn try_from(session: &SessionState) -> Result<Self, Self::Error> {
        let not_graded =
            || AppError::InvalidTransition("results are only available after grading".to_string());

        if session.phase() != SessionPhase::ShowingResults {
            return Err(not_graded());
        }

        let (Some(score), Some(badge), Some(profile), Some(answers)) = (
            session.score(),
            session.badge(),
            session.profile(),
            session.submitted_answers(),
        ) else {
            return Err(AppError::InternalError(format!(
                "graded session {} is missing its results",
                session.id
            )));
        };

        Ok(ResultsView {
            session_id: session.id,
            profile: profile.clone(),
            score,
            total: session.quiz().len(),
            badge,
            review: GradingService::review(session.quiz(), &answers),
        })
    }
}
