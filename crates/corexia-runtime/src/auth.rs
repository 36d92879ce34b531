//! Mock authentication flow.
//!
//! Login goes to the platform API when it is reachable; otherwise the
//! console applies the same rule the API does (non-empty email, display
//! name taken from the local part) and issues a local token. Either
//! way the session is committed to the app-state store.

use crate::client::ApiClient;
use crate::store::{AppStore, User};
use crate::{Error, Result};
use uuid::Uuid;

/// Sign in and persist the session.
///
/// `client` is `None` in offline mode. A remote failure other than an
/// explicit rejection falls back to the offline rule, mirroring the
/// console's fixture-fallback behavior for data loads.
pub fn login(
    store: &mut AppStore,
    client: Option<&ApiClient>,
    email: &str,
    password: &str,
) -> Result<User> {
    if email.trim().is_empty() {
        return Err(Error::Auth("email must not be empty".to_string()));
    }

    let (user, token) = match client {
        Some(client) => match client.login(email, password) {
            Ok(session) => session,
            // The API explicitly rejected the credentials
            Err(Error::Auth(msg)) => return Err(Error::Auth(msg)),
            // Transport failure: fall back to the offline rule
            Err(_) => offline_session(email),
        },
        None => offline_session(email),
    };

    store.set_session(user.clone(), token)?;
    Ok(user)
}

/// Clear the persisted session.
pub fn logout(store: &mut AppStore) -> Result<()> {
    store.clear_session()
}

fn offline_session(email: &str) -> (User, String) {
    let name = email.split('@').next().unwrap_or("user").to_string();
    let user = User {
        name,
        email: email.to_string(),
    };
    (user, Uuid::new_v4().to_string())
}
