use crate::config::CHAT_KEY_PREFIX;
use crate::core::errors::AppError;
use crate::core::helpers::now_millis;
use crate::core::kv::{KeyValue, KeyValueExt};
use crate::models::models::Message;
use crate::session;

/// Canonical key for a two-party conversation: the usernames sorted
/// lexicographically, so both sides address the same sequence no matter
/// who writes first.
pub fn conversation_key(a: &str, b: &str) -> String {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    format!("{}:{}|{}", CHAT_KEY_PREFIX, first, second)
}

pub fn conversation(store: &dyn KeyValue, a: &str, b: &str) -> Vec<Message> {
    store.load_or(&conversation_key(a, b), Vec::new())
}

/// Append a message from the logged-in user to `to`. Whitespace-only
/// text is dropped without error, matching the original send form; the
/// conversation is created lazily on the first kept message.
pub fn send_message(
    store: &dyn KeyValue,
    to: &str,
    text: &str,
) -> Result<Option<Message>, AppError> {
    let from = session::require_login(store)?;
    if to.trim().is_empty() {
        return Err(AppError::NoCounterpart);
    }
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let key = conversation_key(&from, to);
    let mut messages: Vec<Message> = store.load_or(&key, Vec::new());
    let message = Message {
        from,
        text: text.to_string(),
        ts: now_millis(),
    };
    messages.push(message.clone());
    store.set_json(&key, &messages)?;
    Ok(Some(message))
}
