use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Quiz, UserProfile},
    services::{badge_resolver, grading_service::GradingService, quiz_assembler::QuizAssembler},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum SessionPhase {
    CollectingProfile,
    QuizInProgress,
    ShowingResults,
}

/// Profile accepted by [`SessionState::begin_profile`], waiting for its quiz.
/// Only the generation that issued it can complete the transition.
#[derive(Debug)]
pub struct PendingQuiz {
    ticket: Uuid,
    profile: UserProfile,
}

impl PendingQuiz {
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }
}

/// All mutable data of one user's quiz session. Only the transition methods
/// below change it, and a rejected transition leaves it untouched.
#[derive(Clone, Debug, Serialize)]
pub struct SessionState {
    pub id: Uuid,
    phase: SessionPhase,
    profile: Option<UserProfile>,
    quiz: Quiz,
    /// One slot per question, `None` until answered.
    answers: Vec<Option<String>>,
    score: Option<u32>,
    /// Ticket of the quiz generation in flight, if any.
    #[serde(skip)]
    generating: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionState {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phase: SessionPhase::CollectingProfile,
            profile: None,
            quiz: Quiz::default(),
            answers: Vec::new(),
            score: None,
            generating: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    pub fn score(&self) -> Option<u32> {
        self.score
    }

    pub fn is_generating(&self) -> bool {
        self.generating.is_some()
    }

    /// Badge for the graded score; recomputed on every call.
    pub fn badge(&self) -> Option<&'static str> {
        self.score.map(|score| badge_resolver::resolve(score as i32))
    }

    /// Answers as submitted, only once every slot is filled.
    pub fn submitted_answers(&self) -> Option<Vec<String>> {
        self.answers.iter().cloned().collect()
    }

    pub fn ensure_phase(&self, expected: SessionPhase, action: &str) -> AppResult<()> {
        if self.phase != expected {
            return Err(AppError::InvalidTransition(format!(
                "cannot {} while session is in {:?}",
                action, self.phase
            )));
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// First half of CollectingProfile -> QuizInProgress. Validates the
    /// profile and marks a generation as in flight; the phase only changes in
    /// [`complete_profile`](Self::complete_profile). A blank profile reuses
    /// the one kept by a retake.
    pub fn begin_profile(&mut self, profile: UserProfile) -> AppResult<PendingQuiz> {
        self.ensure_phase(SessionPhase::CollectingProfile, "submit a profile")?;
        if self.generating.is_some() {
            return Err(AppError::InvalidTransition(
                "a quiz is already being generated for this session".to_string(),
            ));
        }

        let profile = match (&self.profile, profile.is_blank()) {
            (Some(kept), true) => kept.clone(),
            _ => profile,
        };
        profile.validate()?;

        let ticket = Uuid::new_v4();
        self.generating = Some(ticket);
        self.touch();
        Ok(PendingQuiz {
            ticket,
            profile: profile.resolved(),
        })
    }

    /// Second half of CollectingProfile -> QuizInProgress. Fails if the
    /// session was reset while the quiz was generated.
    pub fn complete_profile(&mut self, pending: PendingQuiz, quiz: Quiz) -> AppResult<()> {
        if self.generating != Some(pending.ticket) {
            return Err(AppError::InvalidTransition(
                "session was reset while its quiz was being generated".to_string(),
            ));
        }

        self.generating = None;
        self.answers = vec![None; quiz.len()];
        self.quiz = quiz;
        self.profile = Some(pending.profile);
        self.score = None;
        self.phase = SessionPhase::QuizInProgress;
        self.touch();
        Ok(())
    }

    /// CollectingProfile -> QuizInProgress in one step, for callers that own
    /// the session exclusively.
    pub async fn submit_profile(
        &mut self,
        profile: UserProfile,
        assembler: &QuizAssembler,
    ) -> AppResult<()> {
        let pending = self.begin_profile(profile)?;
        let quiz = assembler.assemble(pending.profile()).await;
        self.complete_profile(pending, quiz)
    }

    /// QuizInProgress -> ShowingResults. Every question needs an answer; an
    /// empty string counts as unanswered.
    pub fn submit_answers(&mut self, answers: Vec<Option<String>>) -> AppResult<u32> {
        self.ensure_phase(SessionPhase::QuizInProgress, "submit answers")?;

        if answers.len() != self.quiz.len() {
            return Err(AppError::ValidationError(format!(
                "Expected {} answers, got {}.",
                self.quiz.len(),
                answers.len()
            )));
        }

        let filled: Option<Vec<String>> = answers
            .into_iter()
            .map(|answer| answer.filter(|a| !a.is_empty()))
            .collect();
        let filled = filled.ok_or_else(|| {
            AppError::ValidationError("Please answer all questions before submitting.".to_string())
        })?;

        let score = GradingService::grade(&self.quiz, &filled);
        self.answers = filled.into_iter().map(Some).collect();
        self.score = Some(score);
        self.phase = SessionPhase::ShowingResults;
        self.touch();
        Ok(score)
    }

    /// ShowingResults -> CollectingProfile, keeping the profile.
    pub fn retake(&mut self) -> AppResult<()> {
        self.ensure_phase(SessionPhase::ShowingResults, "retake the quiz")?;
        self.clear_attempt();
        self.touch();
        Ok(())
    }

    /// Any phase -> CollectingProfile, forgetting the profile and abandoning
    /// any generation in flight.
    pub fn reset(&mut self) {
        self.clear_attempt();
        self.profile = None;
        self.generating = None;
        self.touch();
    }

    fn clear_attempt(&mut self) {
        self.phase = SessionPhase::CollectingProfile;
        self.quiz = Quiz::default();
        self.answers.clear();
        self.score = None;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
