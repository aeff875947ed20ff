use async_trait::async_trait;
use chrono::Utc;
use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::SessionState,
};

/// Shared handle to one session. Holding the lock is what serializes
/// transitions on that session.
pub type SessionHandle = Arc<Mutex<SessionState>>;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: SessionState) -> AppResult<SessionHandle>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<SessionHandle>>;
    async fn delete(&self, id: &Uuid) -> AppResult<bool>;
    async fn count(&self) -> AppResult<usize>;
    /// Drops sessions untouched for longer than the idle TTL and returns how
    /// many were removed.
    async fn evict_idle(&self) -> AppResult<usize>;
}

#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, SessionHandle>>,
    idle_ttl: Option<chrono::Duration>,
}

impl InMemorySessionRepository {
    /// Repository that never evicts.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: RwLock::default(),
            idle_ttl: chrono::Duration::from_std(idle_ttl).ok(),
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: SessionState) -> AppResult<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id) {
            return Err(AppError::InternalError(format!(
                "Session with id '{}' already exists",
                session.id
            )));
        }

        let id = session.id;
        let handle = Arc::new(Mutex::new(session));
        sessions.insert(id, Arc::clone(&handle));
        Ok(handle)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<SessionHandle>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<bool> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(id).is_some())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.sessions.read().await.len())
    }

    async fn evict_idle(&self) -> AppResult<usize> {
        let Some(cutoff) = self
            .idle_ttl
            .and_then(|ttl| Utc::now().checked_sub_signed(ttl))
        else {
            return Ok(0);
        };

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        // a locked session is in use, so it is not idle
        sessions.retain(|_, handle| {
            handle
                .try_lock()
                .map_or(true, |session| session.updated_at >= cutoff)
        });
        Ok(before - sessions.len())
    }
}
