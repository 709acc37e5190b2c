//! In-memory conversation sessions
//!
//! Each session sits behind its own lock, so turns for different
//! conversations never wait on each other. The map lock is held only long
//! enough to look up, insert or remove an entry.

use std::collections::HashMap;
use std::sync::Arc;

use shared::{Locale, Session};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub type SessionHandle = Arc<Mutex<Session>>;

/// Registry of live sessions keyed by id
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, SessionHandle>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty session
    pub async fn create(&self, locale: Locale) -> Uuid {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(Session::new(locale)));
        self.sessions.write().await.insert(id, session);
        tracing::debug!(session_id = %id, %locale, "Session created");
        id
    }

    pub async fn get(&self, id: Uuid) -> AppResult<SessionHandle> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(AppError::SessionNotFound(id))
    }

    /// Discard a session at conversation end
    pub async fn remove(&self, id: Uuid) -> AppResult<()> {
        match self.sessions.write().await.remove(&id) {
            Some(_) => {
                tracing::debug!(session_id = %id, "Session ended");
                Ok(())
            }
            None => Err(AppError::SessionNotFound(id)),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
