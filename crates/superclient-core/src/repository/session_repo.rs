//! Session Repository
//!
//! The bearer token and login flag live in the key-value store. A 401 from
//! the backend clears them and broadcasts `AuthChanged`, throttled so a burst
//! of failing requests produces a single logout.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::traits::KeyValueStore;
use crate::api::bearer;
use crate::config::SessionConfig;
use crate::events::{AppEvent, EventBus};

pub struct Session {
    storage: Rc<dyn KeyValueStore>,
    events: EventBus,
    config: SessionConfig,
    /// Clock reading of the last broadcast logout
    last_logout: Cell<Option<Duration>>,
}

impl Session {
    pub fn new(storage: Rc<dyn KeyValueStore>, events: EventBus, config: SessionConfig) -> Self {
        Self {
            storage,
            events,
            config,
            last_logout: Cell::new(None),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage
            .get(&self.config.token_key)
            .filter(|token| !token.is_empty())
    }

    /// `Authorization` header value when a token is present
    pub fn authorization(&self) -> Option<String> {
        self.token().map(|token| bearer(&token))
    }

    pub fn is_logged_in(&self) -> bool {
        self.storage.get(&self.config.login_flag_key).as_deref() == Some("true")
            || self.token().is_some()
    }

    pub fn sign_in(&self, token: Option<&str>) {
        if let Some(token) = token {
            self.storage.set(&self.config.token_key, token);
        }
        self.storage.set(&self.config.login_flag_key, "true");
        self.events.emit(AppEvent::AuthChanged);
    }

    pub fn sign_out(&self) {
        self.clear();
        self.events.emit(AppEvent::AuthChanged);
    }

    /// React to a 401 observed at clock reading `now`.
    ///
    /// The session is always cleared; the broadcast happens at most once per
    /// throttle window. Returns whether it was broadcast.
    pub fn handle_unauthorized(&self, now: Duration) -> bool {
        self.clear();

        let throttled = self
            .last_logout
            .get()
            .is_some_and(|last| now.saturating_sub(last) < self.config.logout_throttle);
        if throttled {
            return false;
        }

        log::warn!("[SESSION] backend rejected the session token");
        self.last_logout.set(Some(now));
        self.events.emit(AppEvent::AuthChanged);
        true
    }

    fn clear(&self) {
        self.storage.remove(&self.config.token_key);
        self.storage.remove(&self.config.login_flag_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;

    fn setup() -> (Rc<MemoryStore>, Session, Rc<Cell<u32>>) {
        let storage = Rc::new(MemoryStore::new());
        let events = EventBus::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        events.subscribe(move |event| {
            if event == AppEvent::AuthChanged {
                counter.set(counter.get() + 1);
            }
        });
        let session = Session::new(storage.clone(), events, SessionConfig::default());
        (storage, session, hits)
    }

    #[test]
    fn test_authorization_header() {
        let (_, session, _) = setup();
        assert_eq!(session.authorization(), None);

        session.sign_in(Some("tok-123"));
        assert_eq!(session.authorization().as_deref(), Some("Bearer tok-123"));
        assert!(session.is_logged_in());
    }

    #[test]
    fn test_sign_in_without_token_sets_flag() {
        let (storage, session, hits) = setup();
        session.sign_in(None);
        assert_eq!(storage.get("isLoggedIn").as_deref(), Some("true"));
        assert!(session.is_logged_in());
        assert_eq!(session.token(), None);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_unauthorized_clears_and_throttles() {
        let (storage, session, hits) = setup();
        session.sign_in(Some("tok"));
        hits.set(0);

        assert!(session.handle_unauthorized(Duration::from_millis(10_000)));
        assert!(!storage.contains("sc_active_session"));
        assert!(!session.is_logged_in());

        assert!(!session.handle_unauthorized(Duration::from_millis(10_400)));
        assert!(!session.handle_unauthorized(Duration::from_millis(10_999)));
        assert_eq!(hits.get(), 1);

        assert!(session.handle_unauthorized(Duration::from_millis(11_000)));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_sign_out() {
        let (_, session, hits) = setup();
        session.sign_in(Some("tok"));
        session.sign_out();
        assert!(!session.is_logged_in());
        assert_eq!(hits.get(), 2);
    }
}
