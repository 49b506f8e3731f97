//! Session Store
//!
//! Server-side state for each logged-in browser, keyed by an opaque id
//! carried in a cookie. Records are created at login, mutated by game
//! actions, and removed on logout or after sitting idle past the TTL.

use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::auth::UserIdentity;
use crate::games::NavarasaSession;

pub type SessionId = String;

/// Everything one session owns
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub user: UserIdentity,
    /// Emotion game state; `None` until the game is entered or first used
    pub navarasa: Option<NavarasaSession>,
    last_seen: Instant,
}

impl SessionRecord {
    fn new(user: UserIdentity) -> Self {
        Self {
            user,
            navarasa: None,
            last_seen: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.last_seen.elapsed() > ttl
    }

    /// Emotion state, created with a full queue and zero score if absent
    pub fn navarasa_mut(&mut self) -> &mut NavarasaSession {
        self.navarasa.get_or_insert_with(NavarasaSession::default)
    }
}

pub struct SessionStore {
    records: Mutex<HashMap<SessionId, SessionRecord>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Start a session for a freshly authenticated user. Idle records are
    /// swept under the same lock, so the store is bounded by live sessions.
    pub async fn create(&self, user: UserIdentity) -> SessionId {
        let id = uuid::Uuid::new_v4().to_string();
        info!("Session opened for '{}'", user);
        let mut records = self.records.lock().await;
        let purged = Self::retain_live(&mut records, self.ttl);
        if purged > 0 {
            debug!("Purged {} idle sessions", purged);
        }
        records.insert(id.clone(), SessionRecord::new(user));
        id
    }

    fn retain_live(records: &mut HashMap<SessionId, SessionRecord>, ttl: Duration) -> usize {
        let before = records.len();
        records.retain(|_, r| !r.is_expired(ttl));
        before - records.len()
    }

    /// Run `f` against a live record, refreshing its idle timer. Expired
    /// records are dropped and treated as missing.
    pub async fn with_record<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut SessionRecord) -> T,
    ) -> Option<T> {
        let mut records = self.records.lock().await;
        if records.get(id).is_some_and(|r| r.is_expired(self.ttl)) {
            if let Some(record) = records.remove(id) {
                info!("Session for '{}' expired after {:?} idle", record.user, self.ttl);
            }
            return None;
        }
        let record = records.get_mut(id)?;
        record.last_seen = Instant::now();
        Some(f(record))
    }

    pub async fn identity(&self, id: &str) -> Option<UserIdentity> {
        self.with_record(id, |r| r.user.clone()).await
    }

    /// Logout. Returns whether a record existed.
    pub async fn destroy(&self, id: &str) -> bool {
        match self.records.lock().await.remove(id) {
            Some(record) => {
                info!("Session closed for '{}'", record.user);
                true
            }
            None => false,
        }
    }

    /// Drop every idle record; returns how many went
    pub async fn purge_expired(&self) -> usize {
        let mut records = self.records.lock().await;
        let purged = Self::retain_live(&mut records, self.ttl);
        if purged > 0 {
            debug!("Purged {} idle sessions", purged);
        }
        purged
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}
