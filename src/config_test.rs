use super::*;

#[test]
fn missing_value_uses_local_default() {
    assert_eq!(ApiConfig::from_value(None).base_url, DEFAULT_API_URL);
}

#[test]
fn blank_value_uses_local_default() {
    assert_eq!(ApiConfig::from_value(Some("   ")).base_url, DEFAULT_API_URL);
}

#[test]
fn value_is_trimmed_and_trailing_slash_dropped() {
    let config = ApiConfig::from_value(Some(" https://api.example.com/api/ "));
    assert_eq!(config.base_url, "https://api.example.com/api");
}

#[test]
fn endpoint_joins_with_or_without_leading_slash() {
    let config = ApiConfig::from_value(Some("https://api.example.com"));
    assert_eq!(config.endpoint("/auth/signin"), "https://api.example.com/auth/signin");
    assert_eq!(config.endpoint("users/4"), "https://api.example.com/users/4");
}

#[test]
fn default_matches_from_value_none() {
    assert_eq!(ApiConfig::default(), ApiConfig::from_value(None));
}
