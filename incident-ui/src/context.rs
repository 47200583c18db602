use crate::bridge::{FetchTransport, LocalStorage};
use incident_core::auth::complete_login;
use incident_core::model::LoginResponse;
use incident_core::{ApiClient, AuthError, Route, Session, SessionStore};
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type Api = ApiClient<FetchTransport>;

/// Session handle injected into every view. The store owns persistence; `current`
/// mirrors it so views re-render on login and logout.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<RefCell<SessionStore<LocalStorage>>>,
    current: RwSignal<Option<Session>>,
}

impl SessionContext {
    pub fn init() -> Self {
        let store = SessionStore::init(LocalStorage::open());
        let current = create_rw_signal(store.current_user());
        Self {
            store: Rc::new(RefCell::new(store)),
            current,
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.current.get()
    }

    pub fn current_untracked(&self) -> Option<Session> {
        self.current.get_untracked()
    }

    pub fn complete_login(&self, response: LoginResponse) -> Result<Route, AuthError> {
        let (result, current) = {
            let mut store = self.store.borrow_mut();
            let result = complete_login(&mut *store, response);
            (result, store.current_user())
        };
        self.current.set(current);
        result
    }

    pub fn logout(&self) -> Route {
        let route = self.store.borrow_mut().logout();
        self.current.set(None);
        route
    }
}
