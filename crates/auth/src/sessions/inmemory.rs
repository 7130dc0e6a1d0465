//! In-memory session storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use porter_core::auth::{generate_session_id, Session, SessionId, SessionRepository, UserClaims};

/// In-memory session store.
///
/// Sessions live in a `HashMap` behind an `Arc<RwLock<_>>`: lookups share the
/// lock, inserts and removals take it exclusively. Clones share the same map.
/// Nothing is persisted, so a restart signs everyone out.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySessionStore {
    /// Creates a new empty in-memory session store.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionStore {
    async fn get(&self, id: &SessionId) -> Session {
        let sessions = self.sessions.read().await;
        sessions.get(id.as_str()).cloned().unwrap_or_default()
    }

    async fn set(&self, claims: UserClaims) -> Session {
        let mut sessions = self.sessions.write().await;

        // Never overwrite a live session, however unlikely the collision.
        let mut id = generate_session_id();
        while sessions.contains_key(id.as_str()) {
            id = generate_session_id();
        }

        let session = Session::authenticated(id, claims);
        sessions.insert(session.id.as_str().to_string(), session.clone());
        session
    }

    async fn delete(&self, id: &SessionId) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id.as_str());
    }
}
