/// Epoch milliseconds, the timestamp unit messages and reviews carry.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Parse a comma-separated list into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_list;

    #[test]
    fn split_list_drops_blanks() {
        assert_eq!(split_list("hiking, yoga ,,  "), vec!["hiking", "yoga"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }
}
