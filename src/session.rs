use crate::config::SESSIONS_KEY;
use crate::core::errors::AppError;
use crate::core::kv::{KeyValue, KeyValueExt};
use crate::models::models::{Profile, Session};
use crate::users;

pub fn current_user(store: &dyn KeyValue) -> Option<String> {
    store
        .load_or(SESSIONS_KEY, Session::default())
        .current_user
}

/// Resolve the logged-in username or fail the gated operation.
pub fn require_login(store: &dyn KeyValue) -> Result<String, AppError> {
    current_user(store).ok_or(AppError::NotLoggedIn)
}

/// Inputs are trimmed before the credential check, mirroring what the
/// login form did. A failed login leaves the session untouched.
pub fn login(store: &dyn KeyValue, username: &str, password: &str) -> Result<Profile, AppError> {
    let profile = users::find_by_credentials(store, username.trim(), password.trim())
        .ok_or(AppError::InvalidCredentials)?;

    let mut session = store.load_or(SESSIONS_KEY, Session::default());
    session.current_user = Some(profile.username.clone());
    store.set_json(SESSIONS_KEY, &session)?;
    Ok(profile)
}

pub fn logout(store: &dyn KeyValue) -> Result<(), AppError> {
    let mut session = store.load_or(SESSIONS_KEY, Session::default());
    session.current_user = None;
    store.set_json(SESSIONS_KEY, &session)?;
    Ok(())
}
