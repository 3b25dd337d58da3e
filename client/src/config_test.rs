use super::*;

#[test]
fn default_points_at_same_origin_api() {
    assert_eq!(ApiConfig::default().base_url, "/api");
}

#[test]
fn endpoint_joins_with_single_slash() {
    let api = ApiConfig::new("https://api.ipce.example/v1");
    assert_eq!(api.endpoint("users/logout"), "https://api.ipce.example/v1/users/logout");
}

#[test]
fn endpoint_ignores_trailing_slash_on_base() {
    let api = ApiConfig::new("https://api.ipce.example/v1/");
    assert_eq!(api.endpoint("/users/logout"), "https://api.ipce.example/v1/users/logout");
}

#[test]
fn endpoint_on_default_base_is_relative() {
    assert_eq!(ApiConfig::default().endpoint("users/logout"), "/api/users/logout");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_document_falls_back_outside_browser() {
    assert_eq!(ApiConfig::from_document(), ApiConfig::default());
}
