use ahash::AHashMap;
use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::mvu::RoundModel;

pub const SESSION_COOKIE: &str = "golf_session";
const SESSION_ID_LEN: usize = 32;

struct Session {
    model: RoundModel,
    last_seen: DateTime<Utc>,
}

/// In-memory rounds, one per browser, keyed by the session cookie.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<AHashMap<String, Session>>>,
    idle_limit: TimeDelta,
    default_course_name: String,
}

impl SessionStore {
    #[must_use]
    pub fn new(idle_limit: TimeDelta, default_course_name: &str) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(AHashMap::new())),
            idle_limit,
            default_course_name: default_course_name.to_string(),
        }
    }

    #[must_use]
    pub fn new_session_id() -> String {
        format!("{:032x}", rand::random::<u128>())
    }

    #[must_use]
    pub fn is_well_formed(id: &str) -> bool {
        id.len() == SESSION_ID_LEN && id.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Run `f` against the session's model, creating the session if `id` is
    /// missing or unknown. Returns the id the caller should hand back to the
    /// browser along with `f`'s result.
    pub async fn with_session<F, R>(&self, id: Option<&str>, now: DateTime<Utc>, f: F) -> (String, R)
    where
        F: FnOnce(&mut RoundModel) -> R,
    {
        let mut sessions = self.sessions.write().await;

        let id = match id {
            Some(id) if sessions.contains_key(id) => id.to_string(),
            _ => {
                let id = Self::new_session_id();
                debug!(session = %id, "new session");
                id
            }
        };

        let session = sessions.entry(id.clone()).or_insert_with(|| Session {
            model: RoundModel::new(&self.default_course_name),
            last_seen: now,
        });
        session.last_seen = now;
        let out = f(&mut session.model);
        (id, out)
    }

    /// Read-only access to an existing session. Unknown ids yield `None`.
    pub async fn peek<F, R>(&self, id: Option<&str>, f: F) -> Option<R>
    where
        F: FnOnce(&RoundModel) -> R,
    {
        let sessions = self.sessions.read().await;
        id.and_then(|id| sessions.get(id)).map(|s| f(&s.model))
    }

    /// Drop sessions not seen for longer than the idle limit. Returns how many went.
    pub async fn prune_idle(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen <= self.idle_limit);
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_are_well_formed() {
        let a = SessionStore::new_session_id();
        let b = SessionStore::new_session_id();
        assert!(SessionStore::is_well_formed(&a));
        assert!(SessionStore::is_well_formed(&b));
        assert_ne!(a, b);
        assert!(!SessionStore::is_well_formed("not-a-session"));
        assert!(!SessionStore::is_well_formed(&"z".repeat(SESSION_ID_LEN)));
    }

    #[tokio::test]
    async fn test_prune_idle_drops_only_stale_sessions() {
        let store = SessionStore::new(TimeDelta::minutes(30), "Test Links");
        let start = Utc::now();

        let (stale, ()) = store.with_session(None, start, |_| ()).await;
        let (fresh, ()) = store
            .with_session(None, start + TimeDelta::minutes(25), |_| ())
            .await;
        assert_eq!(store.len().await, 2);

        let removed = store.prune_idle(start + TimeDelta::minutes(45)).await;
        assert_eq!(removed, 1);
        assert!(store.peek(Some(&stale), |_| ()).await.is_none());
        assert!(store.peek(Some(&fresh), |_| ()).await.is_some());
    }

    #[tokio::test]
    async fn test_unknown_id_gets_a_fresh_session() {
        let store = SessionStore::new(TimeDelta::minutes(30), "Test Links");
        let bogus = "0".repeat(SESSION_ID_LEN);
        let (id, course) = store
            .with_session(Some(&bogus), Utc::now(), |m| m.default_course_name.clone())
            .await;
        assert_ne!(id, bogus);
        assert_eq!(course, "Test Links");
    }
}
