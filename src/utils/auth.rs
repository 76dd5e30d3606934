use uuid::Uuid;

/// Issues the session token handed out by login and registration.
///
/// The token is an opaque placeholder: it is never stored, never expires and
/// no endpoint checks it.
pub fn issue_session_token() -> String {
    format!("runai-session-{}", Uuid::new_v4().simple())
}

/// Normalizes an email for lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        let first = issue_session_token();
        let second = issue_session_token();
        assert!(first.starts_with("runai-session-"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Runner@Example.COM "), "runner@example.com");
    }
}
