//! Log sanitization utilities
//!
//! Keeps secrets (`.env` contents, database passwords, API keys)
//! from being fully exposed in debug/error logs.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Request paths whose bodies carry secrets and are never logged.
const SECRET_PATH_SUFFIXES: &[&str] = &["/env", "/database-users", "/databases"];

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` bytes (on a char boundary)
/// with a suffix indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Body text suitable for a log line about `path`.
///
/// Environment files and database credentials are replaced by their size.
pub fn body_for_log(path: &str, body: &str) -> String {
    let bare = path.split('?').next().unwrap_or(path).trim_end_matches('/');
    if SECRET_PATH_SUFFIXES.iter().any(|suffix| bare.ends_with(suffix)) {
        format!("[redacted, {} bytes]", body.len())
    } else {
        truncate_for_log(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "服".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.starts_with('服'));
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn env_bodies_are_redacted() {
        let body = "APP_KEY=base64:secret\nDB_PASSWORD=hunter2";
        let logged = body_for_log("/servers/1/sites/2/env", body);
        assert_eq!(logged, format!("[redacted, {} bytes]", body.len()));
        assert!(!logged.contains("hunter2"));
    }

    #[test]
    fn database_creation_bodies_are_redacted() {
        let logged = body_for_log("/servers/1/database-users", r#"{"password":"x"}"#);
        assert!(logged.starts_with("[redacted"));
    }

    #[test]
    fn other_bodies_pass_through() {
        assert_eq!(body_for_log("/servers", "{}"), "{}");
    }
}
