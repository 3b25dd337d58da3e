use super::*;

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn port_parses_trimmed_value() {
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
}

#[test]
fn port_rejects_garbage_and_zero() {
    assert_eq!(parse_port(Some("eighty")), Err(ConfigError::InvalidPort("eighty".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort("0".to_owned())));
}

#[test]
fn invalid_port_display_quotes_value() {
    let err = ConfigError::InvalidPort("abc".to_owned());
    assert_eq!(err.to_string(), "invalid PORT: \"abc\"");
}

// =============================================================================
// parse_api_url
// =============================================================================

#[test]
fn api_url_defaults_to_same_origin() {
    assert_eq!(parse_api_url(None), "/api");
    assert_eq!(parse_api_url(Some("")), "/api");
}

#[test]
fn api_url_strips_trailing_slash() {
    assert_eq!(parse_api_url(Some("https://api.ipce.example/v1/")), "https://api.ipce.example/v1");
}

#[test]
fn api_config_carries_base_url() {
    let cfg = ServerConfig { port: 3000, api_url: "https://api.ipce.example".to_owned() };
    assert_eq!(cfg.api_config().endpoint("users/logout"), "https://api.ipce.example/users/logout");
}
