use crate::HttpStatusCode;

/// **VALUE**: Verifies only 401 and 403 count as a rejected API key.
///
/// **BUG THIS CATCHES**: Would catch a range check (e.g. all 4xx) that blames the
/// key for a 404 on an unknown identifier.
#[test]
fn given_401_and_403_when_checked_then_reported_as_auth_failure() {
    assert!(HttpStatusCode(401).is_auth_failure());
    assert!(HttpStatusCode(403).is_auth_failure());
    assert!(!HttpStatusCode(404).is_auth_failure());
    assert!(!HttpStatusCode(500).is_auth_failure());
}

#[test]
fn given_u16_when_converted_then_displays_bare_number() {
    let status = HttpStatusCode::from(503);
    assert_eq!(status.to_string(), "503");
}
