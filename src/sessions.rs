use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

use crate::{names, study::StudySession};

struct Entry {
    session: StudySession,
    last_seen: Instant,
}

/// In-memory study sessions keyed by the session cookie. Nothing survives a
/// restart; sessions idle longer than the cookie lifetime are pruned.
#[derive(Clone)]
pub struct Sessions {
    inner: Arc<Mutex<HashMap<String, Entry>>>,
    max_idle: Duration,
}

impl Default for Sessions {
    fn default() -> Self {
        Self::with_max_idle(names::SESSION_MAX_AGE)
    }
}

impl Sessions {
    pub fn with_max_idle(max_idle: Duration) -> Self {
        Self {
            inner: Arc::default(),
            max_idle,
        }
    }

    pub fn new_id() -> String {
        ulid::Ulid::new().to_string()
    }

    /// Reads the session `id` without storing anything. An unknown id sees a
    /// fresh session on the landing page.
    pub async fn peek<R>(&self, id: &str, f: impl FnOnce(&StudySession) -> R) -> R {
        let mut sessions = self.inner.lock().await;
        match sessions.get_mut(id) {
            Some(entry) => {
                entry.last_seen = Instant::now();
                f(&entry.session)
            }
            None => f(&StudySession::default()),
        }
    }

    /// Runs `f` against the session `id`, creating a fresh one on first use.
    /// The lock is held only for the duration of `f`, never across a
    /// service call.
    pub async fn with<R>(&self, id: &str, f: impl FnOnce(&mut StudySession) -> R) -> R {
        let mut sessions = self.inner.lock().await;
        let entry = sessions.entry(id.to_string()).or_insert_with(|| Entry {
            session: StudySession::default(),
            last_seen: Instant::now(),
        });
        entry.last_seen = Instant::now();
        f(&mut entry.session)
    }

    /// Drops sessions idle for longer than the configured limit and returns
    /// how many went.
    pub async fn prune_idle(&self) -> usize {
        let mut sessions = self.inner.lock().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_seen.elapsed() <= self.max_idle);
        before - sessions.len()
    }

    pub async fn count(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Prunes idle sessions every `every` until the process exits.
    pub fn spawn_pruner(&self, every: Duration) -> tokio::task::JoinHandle<()> {
        let sessions = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let pruned = sessions.prune_idle().await;
                if pruned > 0 {
                    tracing::info!(
                        "pruned {pruned} idle sessions, {} active",
                        sessions.count().await
                    );
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::Screen;

    #[tokio::test]
    async fn sessions_are_isolated() {
        let sessions = Sessions::default();
        sessions.with("a", |s| s.start()).await;

        let a = sessions.with("a", |s| s.screen().name()).await;
        let b = sessions.with("b", |s| s.screen().name()).await;

        assert_eq!(a, "uploading");
        assert_eq!(b, "landing");
        assert_eq!(sessions.count().await, 2);
    }

    #[tokio::test]
    async fn peek_does_not_store_unknown_sessions() {
        let sessions = Sessions::default();
        let landing = sessions
            .peek(&Sessions::new_id(), |s| matches!(s.screen(), Screen::Landing))
            .await;
        assert!(landing);
        assert_eq!(sessions.count().await, 0);

        sessions.with("a", |s| s.start()).await;
        let a = sessions.peek("a", |s| s.screen().name()).await;
        assert_eq!(a, "uploading");
        assert_eq!(sessions.count().await, 1);
    }

    #[tokio::test]
    async fn idle_sessions_are_pruned() {
        let sessions = Sessions::with_max_idle(Duration::from_millis(20));
        sessions.with("old", |s| s.start()).await;
        tokio::time::sleep(Duration::from_millis(50)).await;
        sessions.with("fresh", |s| s.start()).await;

        assert_eq!(sessions.prune_idle().await, 1);
        assert_eq!(sessions.count().await, 1);
        let fresh = sessions.peek("fresh", |s| s.screen().name()).await;
        assert_eq!(fresh, "uploading");
    }

    #[tokio::test]
    async fn recent_activity_keeps_a_session_alive() {
        let sessions = Sessions::with_max_idle(Duration::from_secs(3600));
        sessions.with("a", |s| s.start()).await;
        assert_eq!(sessions.prune_idle().await, 0);
        assert_eq!(sessions.count().await, 1);
    }
}
