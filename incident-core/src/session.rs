use crate::config::{STORAGE_ROLE_KEY, STORAGE_TOKEN_KEY, STORAGE_USERNAME_KEY};
use crate::error::SessionError;
use crate::model::LoginResponse;
use crate::role::Role;
use crate::route::Route;
use crate::storage::SessionStorage;
use serde::{Deserialize, Serialize};

const SESSION_KEYS: [&str; 3] = [STORAGE_TOKEN_KEY, STORAGE_USERNAME_KEY, STORAGE_ROLE_KEY];

/// The authenticated principal. Logged-out is `None`, never a partially filled session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn landing_route(&self) -> Route {
        crate::role::route_for(&self.role)
    }
}

/// Session context backed by persisted storage.
///
/// Created with [`SessionStore::init`], which reads whatever a previous page load left
/// behind, and released with [`SessionStore::teardown`]. No expiry or signature checks are
/// done here; the backend decides whether a token is still good.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    current: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn init(mut storage: S) -> Self {
        let current = read_session(&storage);
        if current.is_none() && SESSION_KEYS.iter().any(|k| storage.get(k).is_some()) {
            tracing::warn!("discarding incomplete persisted session");
            clear_keys(&mut storage);
        }
        Self { storage, current }
    }

    pub fn teardown(self) -> S {
        self.storage
    }

    /// Low-fidelity check: a non-empty token is present in storage.
    pub fn is_logged_in(&self) -> bool {
        self.storage
            .get(STORAGE_TOKEN_KEY)
            .is_some_and(|t| !t.is_empty())
    }

    pub fn current_user(&self) -> Option<Session> {
        self.current.clone()
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn username(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.username.as_str())
    }

    /// Applies a login response. On any error the previous session, in memory and in
    /// storage, is left as it was. If the previous session cannot be written back
    /// either, both memory and storage end up logged out.
    pub fn establish(&mut self, response: LoginResponse) -> Result<Session, SessionError> {
        let session = session_from_response(response)?;

        if let Err(err) = write_session(&mut self.storage, &session) {
            tracing::error!("failed to persist session: {err}");
            match &self.current {
                Some(previous) => {
                    if let Err(restore) = write_session(&mut self.storage, previous) {
                        tracing::error!("failed to restore previous session: {restore}");
                        clear_keys(&mut self.storage);
                        self.current = None;
                    }
                }
                None => clear_keys(&mut self.storage),
            }
            return Err(SessionError::Storage(err));
        }

        self.current = Some(session.clone());
        Ok(session)
    }

    /// Clears every session key regardless of prior state and returns the login route.
    pub fn logout(&mut self) -> Route {
        clear_keys(&mut self.storage);
        self.current = None;
        Route::Login
    }
}

fn session_from_response(response: LoginResponse) -> Result<Session, SessionError> {
    let token = response
        .token
        .filter(|t| !t.is_empty())
        .ok_or(SessionError::MissingToken)?;
    let username = response
        .username
        .filter(|u| !u.is_empty())
        .ok_or(SessionError::MissingUsername)?;
    let role = response
        .role
        .filter(|r| !r.trim().is_empty())
        .map(|r| Role::parse(&r))
        .ok_or(SessionError::MissingRole)?;
    Ok(Session {
        token,
        username,
        role,
    })
}

fn read_session<S: SessionStorage>(storage: &S) -> Option<Session> {
    let token = storage.get(STORAGE_TOKEN_KEY).filter(|t| !t.is_empty())?;
    let username = storage.get(STORAGE_USERNAME_KEY).filter(|u| !u.is_empty())?;
    let role = storage.get(STORAGE_ROLE_KEY).filter(|r| !r.is_empty())?;
    Some(Session {
        token,
        username,
        role: Role::parse(&role),
    })
}

fn write_session<S: SessionStorage>(storage: &mut S, session: &Session) -> Result<(), String> {
    storage.set(STORAGE_TOKEN_KEY, &session.token)?;
    storage.set(STORAGE_USERNAME_KEY, &session.username)?;
    storage.set(STORAGE_ROLE_KEY, session.role.as_str())
}

fn clear_keys<S: SessionStorage>(storage: &mut S) {
    for key in SESSION_KEYS {
        if let Err(err) = storage.remove(key) {
            tracing::warn!("failed to remove {key} from storage: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn response(token: Option<&str>, username: &str, role: &str) -> LoginResponse {
        LoginResponse {
            token: token.map(Into::into),
            username: Some(username.into()),
            role: Some(role.into()),
            message: Some("Login successful".into()),
        }
    }

    #[derive(Default)]
    struct FailingStorage {
        inner: MemoryStorage,
        fail_writes: bool,
    }

    impl SessionStorage for FailingStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
            if self.fail_writes && key == STORAGE_ROLE_KEY {
                return Err("quota exceeded".into());
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), String> {
            self.inner.remove(key)
        }
    }

    /// Accepts a fixed number of writes, then rejects every one after.
    struct LimitedStorage {
        inner: MemoryStorage,
        writes_left: usize,
    }

    impl SessionStorage for LimitedStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
            if self.writes_left == 0 {
                return Err("storage full".into());
            }
            self.writes_left -= 1;
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), String> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn establish_persists_all_three_keys() {
        let mut store = SessionStore::init(MemoryStorage::new());
        let session = store
            .establish(response(Some("jwt-1"), "al", "Admin"))
            .expect("session");

        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.landing_route(), Route::Admin);
        assert!(store.is_logged_in());
        assert_eq!(store.username(), Some("al"));

        let storage = store.teardown();
        assert_eq!(storage.get("jwtToken").as_deref(), Some("jwt-1"));
        assert_eq!(storage.get("username").as_deref(), Some("al"));
        assert_eq!(storage.get("role").as_deref(), Some("admin"));
    }

    #[test]
    fn response_without_token_leaves_session_unset() {
        let mut store = SessionStore::init(MemoryStorage::new());
        let err = store
            .establish(response(None, "al", "admin"))
            .expect_err("no token");

        assert_eq!(err, SessionError::MissingToken);
        assert!(!store.is_logged_in());
        assert_eq!(store.current_user(), None);
        assert!(store.teardown().is_empty());
    }

    #[test]
    fn failed_login_keeps_previous_session() {
        let mut store = SessionStore::init(MemoryStorage::new());
        store
            .establish(response(Some("jwt-1"), "bob", "user"))
            .expect("first");

        let err = store
            .establish(response(Some(""), "al", "admin"))
            .expect_err("empty token");
        assert_eq!(err, SessionError::MissingToken);
        assert_eq!(store.username(), Some("bob"));
        assert_eq!(store.token(), Some("jwt-1"));
    }

    #[test]
    fn storage_failure_rolls_back_partial_writes() {
        let storage = FailingStorage {
            fail_writes: true,
            ..Default::default()
        };
        let mut store = SessionStore::init(storage);
        let err = store
            .establish(response(Some("jwt-1"), "al", "admin"))
            .expect_err("write fails");

        assert!(matches!(err, SessionError::Storage(_)));
        assert!(!store.is_logged_in());
        assert!(store.teardown().inner.is_empty());
    }

    #[test]
    fn unrestorable_previous_session_is_dropped() {
        let storage = LimitedStorage {
            inner: MemoryStorage::new(),
            writes_left: 4,
        };
        let mut store = SessionStore::init(storage);
        store
            .establish(response(Some("jwt-1"), "bob", "user"))
            .expect("first");

        let err = store
            .establish(response(Some("jwt-2"), "al", "admin"))
            .expect_err("second write runs out");
        assert!(matches!(err, SessionError::Storage(_)));
        assert_eq!(store.current_user(), None);
        assert!(!store.is_logged_in());

        let storage = store.teardown();
        assert!(storage.inner.is_empty());
        let reopened = SessionStore::init(storage);
        assert_eq!(reopened.current_user(), None);
        assert!(!reopened.is_logged_in());
    }

    #[test]
    fn logout_clears_everything_from_any_state() {
        let mut store = SessionStore::init(MemoryStorage::new());
        assert_eq!(store.logout(), Route::Login);
        assert!(!store.is_logged_in());

        store
            .establish(response(Some("jwt-2"), "tech", "technician"))
            .expect("session");
        assert_eq!(store.logout(), Route::Login);
        assert!(!store.is_logged_in());
        assert_eq!(store.current_user(), None);
        assert!(store.teardown().is_empty());
    }

    #[test]
    fn init_restores_persisted_session() {
        let storage = MemoryStorage::with_entries([
            ("jwtToken", "jwt-3"),
            ("username", "tech"),
            ("role", "technician"),
        ]);
        let store = SessionStore::init(storage);
        let session = store.current_user().expect("restored");
        assert_eq!(session.username, "tech");
        assert_eq!(session.role, Role::Technician);
    }

    #[test]
    fn init_discards_half_written_session() {
        let storage = MemoryStorage::with_entries([("username", "tech"), ("role", "technician")]);
        let store = SessionStore::init(storage);
        assert_eq!(store.current_user(), None);
        assert!(store.teardown().is_empty());

        let storage = MemoryStorage::with_entries([("jwtToken", "jwt-4")]);
        let store = SessionStore::init(storage);
        assert!(!store.is_logged_in());
    }
}
