use std::str::FromStr;

pub fn is_local() -> bool {
    std::env::var("LOCAL").is_ok()
}

/// Env var with a fallback when unset or empty.
pub fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(val) if !val.is_empty() => val,
        _ => default.to_string(),
    }
}

/// Env var parsed into T, falling back to `default` when unset or unparseable.
pub fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_falls_back_when_unset() {
        assert_eq!(env_or("COINLIST_TEST_UNSET_KEY", "fallback"), "fallback");
    }

    #[test]
    fn env_parse_or_falls_back_on_garbage() {
        std::env::set_var("COINLIST_TEST_GARBAGE_KEY", "not-a-number");
        assert_eq!(env_parse_or("COINLIST_TEST_GARBAGE_KEY", 42u64), 42);
        std::env::remove_var("COINLIST_TEST_GARBAGE_KEY");
    }
}
