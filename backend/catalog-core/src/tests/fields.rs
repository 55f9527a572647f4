use crate::render::fields::{
    display_name, distance, is_truthy, pretty_json, score, text, truncate_chars,
};

use serde_json::json;

#[test]
fn given_sparse_entry_when_display_name_resolved_then_follows_priority() {
    assert_eq!(display_name(&json!({"summary": "S", "name": "N"})), "S");
    assert_eq!(display_name(&json!({"summary": "", "name": "N"})), "N");
    assert_eq!(display_name(&json!({"workflow_id": "wf_9"})), "wf_9");
    assert_eq!(display_name(&json!({"summary": null})), "");
    assert_eq!(display_name(&json!({})), "");
}

/// **VALUE**: Verifies score formatting across the distance → match_score → `?` chain.
///
/// **BUG THIS CATCHES**: Would catch three-decimal formatting applied to the `?`
/// placeholder or to a non-numeric score string.
#[test]
fn given_score_fields_when_formatted_then_numbers_get_three_decimals() {
    assert_eq!(score(&json!({"distance": 0.5})), "0.500");
    assert_eq!(score(&json!({"match_score": 0.12345})), "0.123");
    assert_eq!(score(&json!({"distance": 0.1, "match_score": 0.9})), "0.100");
    assert_eq!(score(&json!({"distance": "close"})), "close");
    assert_eq!(score(&json!({})), "?");
}

#[test]
fn given_missing_or_non_numeric_distance_when_read_then_defaults_to_one() {
    assert_eq!(distance(&json!({"distance": 0.25})), 0.25);
    assert_eq!(distance(&json!({})), 1.0);
    assert_eq!(distance(&json!({"distance": "far"})), 1.0);
}

#[test]
fn given_json_values_when_truthiness_checked_then_matches_scripting_rules() {
    for falsy in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
        assert!(!is_truthy(&falsy), "{falsy} should be falsy");
    }
    for truthy in [json!(true), json!(1), json!("x"), json!([0]), json!({"a": null})] {
        assert!(is_truthy(&truthy), "{truthy} should be truthy");
    }
}

#[test]
fn given_missing_and_null_fields_when_text_read_then_placeholder() {
    let entry = json!({"a": null, "b": 3, "c": "str"});

    assert_eq!(text(&entry, "a"), "?");
    assert_eq!(text(&entry, "missing"), "?");
    assert_eq!(text(&entry, "b"), "3");
    assert_eq!(text(&entry, "c"), "str");
}

#[test]
fn given_nested_value_when_pretty_printed_with_four_spaces_then_indents() {
    let rendered = pretty_json(&json!({"a": {"b": 1}}), b"    ");

    assert_eq!(rendered, "{\n    \"a\": {\n        \"b\": 1\n    }\n}");
}

#[test]
fn given_multibyte_text_when_truncated_then_counts_characters() {
    assert_eq!(truncate_chars("héllo", 2), "hé");
    assert_eq!(truncate_chars("abc", 10), "abc");
}
