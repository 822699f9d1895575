/**
 * Session Management
 *
 * Server-side session store backing the admin session gate.
 *
 * # Model
 *
 * A session is an ephemeral server-side marker looked up by the random ID
 * carried in the session cookie. An entry holds at most one admin
 * identifier; entries without one exist only to carry flash notices for
 * anonymous clients (the "please log in" redirect needs somewhere to put
 * its notice).
 *
 * # Lifecycle
 *
 * - Created on login (fresh ID, so a pre-login cookie never becomes an
 *   authenticated session) or lazily when a notice is flashed.
 * - Destroyed on logout, on expiry (checked at read time), and by the
 *   periodic sweep task started in `server::init`.
 *
 * The store never touches the credential store; checking a session is a
 * pure lookup.
 */
use chrono::{DateTime, Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Cookie name for the session ID
pub const SESSION_COOKIE: &str = "libchat_admin_session";

/// One server-side session entry
#[derive(Debug, Clone)]
struct SessionEntry {
    /// Authenticated admin, if any
    admin_id: Option<i64>,
    /// Absolute expiry, fixed at creation
    expires_at: DateTime<Utc>,
    /// Pending one-shot notices, drained on the next page render
    notices: Vec<String>,
}

/// Shared in-memory session store
///
/// Cheap to clone; all clones share the same map.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl SessionStore {
    /// Create a store whose sessions live for `ttl_secs` seconds
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Generate a cryptographically secure session ID
    fn generate_session_id() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(64)
            .map(char::from)
            .collect()
    }

    fn create_entry(&self, admin_id: Option<i64>) -> String {
        let session_id = Self::generate_session_id();
        let entry = SessionEntry {
            admin_id,
            expires_at: Utc::now() + self.ttl,
            notices: Vec::new(),
        };
        self.inner
            .lock()
            .unwrap()
            .insert(session_id.clone(), entry);
        session_id
    }

    /// Create an authenticated session and return its ID
    ///
    /// Always a fresh ID; callers discard the old session first.
    pub fn sign_in(&self, admin_id: i64) -> String {
        self.create_entry(Some(admin_id))
    }

    /// Get the admin identifier bound to a session
    ///
    /// `None` means Anonymous: the ID is unknown, expired, or carries no
    /// admin. An expired entry is removed on the way out.
    pub fn get(&self, session_id: &str) -> Option<i64> {
        let mut sessions = self.inner.lock().unwrap();
        match sessions.get(session_id) {
            Some(entry) if entry.expires_at > Utc::now() => entry.admin_id,
            Some(_) => {
                sessions.remove(session_id);
                None
            }
            None => None,
        }
    }

    /// Whether the session ID refers to a live entry (authenticated or not)
    pub fn is_live(&self, session_id: &str) -> bool {
        let mut sessions = self.inner.lock().unwrap();
        match sessions.get(session_id) {
            Some(entry) if entry.expires_at > Utc::now() => true,
            Some(_) => {
                sessions.remove(session_id);
                false
            }
            None => false,
        }
    }

    /// Destroy a session (logout)
    pub fn clear(&self, session_id: &str) {
        self.inner.lock().unwrap().remove(session_id);
    }

    /// Reuse a live session or create an anonymous one for flash carriage
    ///
    /// Returns the session ID to set in the cookie.
    pub fn ensure(&self, session_id: Option<&str>) -> String {
        if let Some(sid) = session_id {
            if self.is_live(sid) {
                return sid.to_string();
            }
        }
        self.create_entry(None)
    }

    /// Queue a one-shot notice on a session
    pub fn push_notice(&self, session_id: &str, notice: impl Into<String>) {
        if let Some(entry) = self.inner.lock().unwrap().get_mut(session_id) {
            entry.notices.push(notice.into());
        }
    }

    /// Drain the pending notices for a session
    pub fn take_notices(&self, session_id: &str) -> Vec<String> {
        match self.inner.lock().unwrap().get_mut(session_id) {
            Some(entry) => std::mem::take(&mut entry.notices),
            None => Vec::new(),
        }
    }

    /// Remove all expired sessions (background sweep task)
    pub fn sweep_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.inner.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, entry| entry.expires_at > now);
        before - sessions.len()
    }

    /// Number of live entries (for tests and diagnostics)
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_get() {
        let store = SessionStore::new(3600);
        let sid = store.sign_in(7);
        assert_eq!(store.get(&sid), Some(7));
    }

    #[test]
    fn test_get_after_clear_is_anonymous() {
        let store = SessionStore::new(3600);
        let sid = store.sign_in(7);
        store.clear(&sid);
        assert_eq!(store.get(&sid), None);
        assert!(!store.is_live(&sid));
    }

    #[test]
    fn test_unknown_session_is_anonymous() {
        let store = SessionStore::new(3600);
        assert_eq!(store.get("no-such-session"), None);
    }

    #[test]
    fn test_expired_session_is_anonymous_and_evicted() {
        let store = SessionStore::new(0);
        let sid = store.sign_in(7);
        assert_eq!(store.get(&sid), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_session_ids_rotate() {
        let store = SessionStore::new(3600);
        let first = store.sign_in(7);
        let second = store.sign_in(7);
        assert_ne!(first, second);
    }

    #[test]
    fn test_anonymous_session_carries_no_admin() {
        let store = SessionStore::new(3600);
        let sid = store.ensure(None);
        assert!(store.is_live(&sid));
        assert_eq!(store.get(&sid), None);
    }

    #[test]
    fn test_ensure_reuses_live_session() {
        let store = SessionStore::new(3600);
        let sid = store.sign_in(7);
        assert_eq!(store.ensure(Some(&sid)), sid);
    }

    #[test]
    fn test_notices_drain_once() {
        let store = SessionStore::new(3600);
        let sid = store.ensure(None);
        store.push_notice(&sid, "first");
        store.push_notice(&sid, "second");
        assert_eq!(store.take_notices(&sid), vec!["first", "second"]);
        assert!(store.take_notices(&sid).is_empty());
    }

    #[test]
    fn test_sweep_removes_only_expired() {
        let expiring = SessionStore::new(0);
        expiring.sign_in(1);
        expiring.sign_in(2);
        assert_eq!(expiring.sweep_expired(), 2);
        assert!(expiring.is_empty());

        let fresh = SessionStore::new(3600);
        fresh.sign_in(1);
        assert_eq!(fresh.sweep_expired(), 0);
        assert_eq!(fresh.len(), 1);
    }
}
