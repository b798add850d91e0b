use thiserror::Error;

/// Every failure a caller can be shown. Each one is terminal to the
/// operation that raised it; nothing retries.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("username and password are required")]
    MissingCredentials,
    #[error("username already exists: {0}")]
    UsernameTaken(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("not logged in")]
    NotLoggedIn,
    #[error("no such user: {0}")]
    UnknownUser(String),
    #[error("no conversation partner selected")]
    NoCounterpart,
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
