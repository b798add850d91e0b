/// Store key holding the full profile directory.
pub const USERS_KEY: &str = "users";
/// Store key holding the session record.
pub const SESSIONS_KEY: &str = "sessions";
/// Store key holding the review board, newest first.
pub const REVIEWS_KEY: &str = "reviews";
/// Store key holding the username -> match-list mapping.
pub const MATCHES_KEY: &str = "matches";
/// Prefix for per-conversation keys (`chat:<a>|<b>`, names sorted).
pub const CHAT_KEY_PREFIX: &str = "chat";

/// How many candidates a match search returns.
pub const TOP_MATCH_LIMIT: usize = 5;

pub fn store_dir() -> String {
    std::env::var("KINDRED_STORE_DIR")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "store".to_string())
}
