use crate::error::AuthError;
use crate::model::LoginResponse;
use crate::role::route_for;
use crate::route::Route;
use crate::session::SessionStore;
use crate::storage::SessionStorage;

/// Applies the result of `ApiClient::login` to the session and picks the landing route.
/// Navigation is left to the caller. On error the session is left as it was.
pub fn complete_login<S: SessionStorage>(
    store: &mut SessionStore<S>,
    response: LoginResponse,
) -> Result<Route, AuthError> {
    let session = store.establish(response)?;
    tracing::debug!("signed in as {} ({})", session.username, session.role);
    Ok(route_for(&session.role))
}
