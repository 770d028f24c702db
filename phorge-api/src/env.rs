//! `.env` parsing for display.

/// Parse `.env` content into ordered `(key, value)` pairs.
///
/// Blank lines, `#` comments and lines without `=` are skipped. Keys and values
/// are trimmed and one pair of matching surrounding quotes is removed.
/// A repeated key keeps its last value at the position of its first occurrence.
pub fn parse_env(content: &str) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim();
        let value = strip_quotes(value.trim());

        match pairs.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = value.to_string(),
            None => pairs.push((key.to_string(), value.to_string())),
        }
    }

    pairs
}

fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn basic_pairs_in_order() {
        let parsed = parse_env("APP_NAME=Laravel\nAPP_ENV=production\n");
        assert_eq!(parsed, vec![pair("APP_NAME", "Laravel"), pair("APP_ENV", "production")]);
    }

    #[test]
    fn comments_blanks_and_garbage_are_skipped() {
        let parsed = parse_env("# comment\n\n   \nNOT_A_PAIR\nKEY=value\n");
        assert_eq!(parsed, vec![pair("KEY", "value")]);
    }

    #[test]
    fn quotes_are_stripped_once() {
        let parsed = parse_env("A=\"hello world\"\nB='single'\nC=\"mismatch'\nD=\"\"");
        assert_eq!(
            parsed,
            vec![
                pair("A", "hello world"),
                pair("B", "single"),
                pair("C", "\"mismatch'"),
                pair("D", ""),
            ]
        );
    }

    #[test]
    fn value_may_contain_equals() {
        let parsed = parse_env("APP_KEY=base64:abc==");
        assert_eq!(parsed, vec![pair("APP_KEY", "base64:abc==")]);
    }

    #[test]
    fn whitespace_around_key_and_value() {
        let parsed = parse_env("  DB_HOST =  127.0.0.1  ");
        assert_eq!(parsed, vec![pair("DB_HOST", "127.0.0.1")]);
    }

    #[test]
    fn later_duplicate_wins() {
        let parsed = parse_env("A=1\nB=2\nA=3");
        assert_eq!(parsed, vec![pair("A", "3"), pair("B", "2")]);
    }
}
