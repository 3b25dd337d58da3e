use super::*;

#[test]
fn logout_url_uses_configured_base() {
    let client = ApiClient::new(ApiConfig::new("https://api.ipce.example/"));
    assert_eq!(client.logout_url(), "https://api.ipce.example/users/logout");
}

#[test]
fn logout_request_targets_endpoint_with_credentials() {
    let client = ApiClient::new(ApiConfig::new("/api"));
    assert_eq!(
        client.logout_request(),
        LogoutRequest { url: "/api/users/logout".to_owned(), include_credentials: true }
    );
}

#[test]
fn user_message_prefers_server_message() {
    let err = LogoutError::Rejected { status: 401, message: Some("Sesión expirada".to_owned()) };
    assert_eq!(err.user_message(), "Sesión expirada");
}

#[test]
fn user_message_falls_back_without_server_message() {
    let err = LogoutError::Rejected { status: 500, message: None };
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn user_message_is_generic_for_transport_failures() {
    let err = LogoutError::Transport("NetworkError when attempting to fetch resource.".to_owned());
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    assert_eq!(LogoutError::Unavailable.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn rejected_display_includes_status() {
    let err = LogoutError::Rejected { status: 503, message: None };
    assert_eq!(err.to_string(), "logout rejected with status 503");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn logout_is_unavailable_outside_browser() {
    let client = ApiClient::new(ApiConfig::default());
    let result = futures::executor::block_on(client.logout());
    assert_eq!(result, Err(LogoutError::Unavailable));
}
