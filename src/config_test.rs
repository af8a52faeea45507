use super::*;

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ClientConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base_url, "/api");
    assert_eq!(cfg.request_timeout_ms, 10_000);
    assert_eq!(cfg.login_route, "/login");
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = ClientConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let cfg = ClientConfig::from_values(Some("http://127.0.0.1:8000/api/"), Some("2500")).unwrap();
    assert_eq!(cfg.api_base_url, "http://127.0.0.1:8000/api");
    assert_eq!(cfg.request_timeout_ms, 2500);
}

#[test]
fn url_joins_paths_with_single_slash() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.url("/accounts/login/"), "/api/accounts/login/");
    assert_eq!(cfg.url("token/refresh/"), "/api/token/refresh/");
}

#[test]
fn invalid_timeout_is_rejected() {
    assert_eq!(
        ClientConfig::from_values(None, Some("0")),
        Err(ConfigError::InvalidTimeout("0".into()))
    );
    assert_eq!(
        ClientConfig::from_values(None, Some("fast")),
        Err(ConfigError::InvalidTimeout("fast".into()))
    );
}

#[test]
fn relative_base_without_leading_slash_is_rejected() {
    assert_eq!(
        ClientConfig::from_values(Some("api"), None),
        Err(ConfigError::InvalidBaseUrl("api".into()))
    );
}
