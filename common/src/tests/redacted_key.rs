use crate::RedactedApiKey;

/// **VALUE**: Verifies the key value never appears in Debug or Display output.
///
/// **WHY THIS MATTERS**: Errors and log lines are printed to stderr and may be
/// pasted into bug reports. A leaked API key there grants access to the account.
///
/// **BUG THIS CATCHES**: Would catch a `#[derive(Debug)]` replacing the manual impl.
#[test]
fn given_key_when_formatted_then_value_is_redacted() {
    // GIVEN: A key with a recognizable value
    let key = RedactedApiKey::new("ak_super_secret_value");

    // WHEN: Formatting through Debug and Display
    let debug = format!("{key:?}");
    let display = format!("{key}");

    // THEN: Neither contains the value
    assert!(!debug.contains("super_secret"), "Debug leaked the key: {debug}");
    assert!(!display.contains("super_secret"), "Display leaked the key: {display}");
    assert!(debug.contains("21 chars"));
}

/// **VALUE**: Verifies serialization is refused.
///
/// **BUG THIS CATCHES**: Would catch a derived `Serialize` that writes the key into
/// a JSON body or a log record.
#[test]
fn given_key_when_serialized_then_returns_error() {
    let key = RedactedApiKey::new("ak_super_secret_value");

    let result = serde_json::to_string(&key);

    assert!(result.is_err(), "RedactedApiKey must not serialize");
}

#[test]
fn given_empty_string_when_non_empty_called_then_returns_none() {
    assert!(RedactedApiKey::non_empty("").is_none());

    let key = RedactedApiKey::non_empty("abc").expect("non-empty key");
    assert_eq!(key.expose(), "abc");
    assert_eq!(key.len(), 3);
}
