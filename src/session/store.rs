use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

use super::state::SessionState;

pub type SessionId = Uuid;

struct SessionEntry {
    state: SessionState,
    last_seen: Instant,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            state: SessionState::default(),
            last_seen: Instant::now(),
        }
    }
}

/// Process-local map of live sessions.
///
/// Entry guards are only held inside the closures passed to these
/// methods, never across an `.await`.
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<SessionId, SessionEntry>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `id` when it names a live session, otherwise starts a new one.
    pub fn resolve(&self, id: Option<SessionId>) -> SessionId {
        if let Some(id) = id
            && let Some(mut entry) = self.sessions.get_mut(&id)
        {
            entry.last_seen = Instant::now();
            return id;
        }

        let id = Uuid::new_v4();
        self.sessions.insert(id, SessionEntry::new());
        tracing::debug!("Started session {}", id);
        id
    }

    /// Runs `f` against the session state, creating a default state for an unknown id.
    pub fn with_session<R>(&self, id: SessionId, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut entry = self.sessions.entry(id).or_insert_with(SessionEntry::new);
        entry.last_seen = Instant::now();
        f(&mut entry.state)
    }

    pub fn snapshot(&self, id: SessionId) -> SessionState {
        self.with_session(id, |state| state.clone())
    }

    pub fn end(&self, id: SessionId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Discards sessions idle for longer than `max_idle`; returns how many went.
    pub fn prune_idle(&self, max_idle: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| entry.last_seen.elapsed() <= max_idle);
        let pruned = before.saturating_sub(self.sessions.len());
        if pruned > 0 {
            tracing::debug!("Pruned {} idle sessions", pruned);
        }
        pruned
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{BookSnapshot, PageId};

    #[test]
    fn resolve_reuses_live_sessions_and_replaces_unknown_ones() {
        let store = SessionStore::new();
        let id = store.resolve(None);
        assert_eq!(store.resolve(Some(id)), id);

        let unknown = Uuid::new_v4();
        let fresh = store.resolve(Some(unknown));
        assert_ne!(fresh, unknown);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn sessions_do_not_share_state() {
        let store = SessionStore::new();
        let alice = store.resolve(None);
        let bob = store.resolve(None);

        store.with_session(alice, |s| {
            s.navigate(PageId::Wishlist);
            s.add_to_wishlist(BookSnapshot {
                book_id: 1,
                name: "Dune".to_string(),
                publication_date: None,
                availability_status: "Available".to_string(),
            });
        });

        let bob_state = store.snapshot(bob);
        assert_eq!(bob_state.current_page(), PageId::Home);
        assert!(bob_state.wishlist().is_empty());
        assert_eq!(store.snapshot(alice).wishlist().len(), 1);
    }

    #[test]
    fn prune_drops_only_idle_sessions() {
        let store = SessionStore::new();
        let id = store.resolve(None);

        assert_eq!(store.prune_idle(Duration::from_secs(3600)), 0);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(store.prune_idle(Duration::ZERO), 1);
        assert!(store.is_empty());
        assert!(!store.end(id));
    }
}
