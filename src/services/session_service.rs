use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{SessionPhase, SessionState},
        dto::{
            request::{SubmitAnswersRequest, SubmitProfileRequest},
            response::{ResultsView, SessionView},
        },
    },
    repositories::{SessionHandle, SessionRepository},
    services::quiz_assembler::QuizAssembler,
};

pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
    assembler: Arc<QuizAssembler>,
}

impl SessionService {
    pub fn new(repository: Arc<dyn SessionRepository>, assembler: Arc<QuizAssembler>) -> Self {
        Self {
            repository,
            assembler,
        }
    }

    async fn handle(&self, id: &Uuid) -> AppResult<SessionHandle> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session with id '{}' not found", id)))
    }

    pub async fn create_session(&self) -> AppResult<SessionView> {
        let evicted = self.repository.evict_idle().await?;
        if evicted > 0 {
            log::info!("Evicted {} idle sessions", evicted);
        }

        let handle = self.repository.insert(SessionState::new()).await?;
        let live = self.repository.count().await?;
        let session = handle.lock().await;
        log::info!("Created session {} ({} live)", session.id, live);
        Ok(SessionView::from(&*session))
    }

    pub async fn get_session(&self, id: &Uuid) -> AppResult<SessionView> {
        let handle = self.handle(id).await?;
        let session = handle.lock().await;
        Ok(SessionView::from(&*session))
    }

    pub async fn delete_session(&self, id: &Uuid) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(format!("Session with id '{}' not found", id)));
        }
        log::info!("Deleted session {}", id);
        Ok(())
    }

    /// The session lock is released while the quiz is generated, so reads
    /// and resets stay responsive. A reset in the meantime discards the
    /// generated quiz. Generation runs on its own task and still commits if
    /// the caller goes away.
    pub async fn submit_profile(
        &self,
        id: &Uuid,
        request: SubmitProfileRequest,
    ) -> AppResult<SessionView> {
        let handle = self.handle(id).await?;
        let pending = {
            let mut session = handle.lock().await;
            session.ensure_phase(SessionPhase::CollectingProfile, "submit a profile")?;
            request.validate()?;
            session.begin_profile(request.into())?
        };

        let assembler = Arc::clone(&self.assembler);
        let view = tokio::spawn(async move {
            let quiz = assembler.assemble(pending.profile()).await;
            let mut session = handle.lock().await;
            session.complete_profile(pending, quiz)?;
            Ok::<_, AppError>(SessionView::from(&*session))
        })
        .await
        .map_err(|e| AppError::InternalError(format!("Quiz generation task failed: {}", e)))??;

        log::info!(
            "Session {} started a quiz with {} questions",
            id,
            view.questions.len()
        );
        Ok(view)
    }

    pub async fn submit_answers(
        &self,
        id: &Uuid,
        request: SubmitAnswersRequest,
    ) -> AppResult<ResultsView> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        session.ensure_phase(SessionPhase::QuizInProgress, "submit answers")?;
        request.validate()?;
        let score = session.submit_answers(request.answers)?;

        log::info!(
            "Session {} scored {}/{}",
            id,
            score,
            session.quiz().len()
        );
        ResultsView::try_from(&*session)
    }

    pub async fn retake(&self, id: &Uuid) -> AppResult<SessionView> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        session.retake()?;

        log::info!("Session {} is retaking the quiz", id);
        Ok(SessionView::from(&*session))
    }

    pub async fn reset(&self, id: &Uuid) -> AppResult<SessionView> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        session.reset();

        log::info!("Session {} was reset", id);
        Ok(SessionView::from(&*session))
    }

    pub async fn get_results(&self, id: &Uuid) -> AppResult<ResultsView> {
        let handle = self.handle(id).await?;
        let session = handle.lock().await;
        ResultsView::try_from(&*session)
    }
}
