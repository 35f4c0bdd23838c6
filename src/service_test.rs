use super::*;
use serde_json::json;

// =========================================================================
// extract_error_message
// =========================================================================

#[test]
fn extract_prefers_top_level_message() {
    let body = json!({ "message": "Slot no longer available", "detail": "other" });
    assert_eq!(extract_error_message(&body).as_deref(), Some("Slot no longer available"));
}

#[test]
fn extract_reads_nested_error_message() {
    let body = json!({ "error": { "code": "E_SLOT", "message": "Slot taken" } });
    assert_eq!(extract_error_message(&body).as_deref(), Some("Slot taken"));
}

#[test]
fn extract_reads_error_string_and_detail() {
    assert_eq!(extract_error_message(&json!({ "error": "Nope" })).as_deref(), Some("Nope"));
    assert_eq!(extract_error_message(&json!({ "detail": "Bad date" })).as_deref(), Some("Bad date"));
}

#[test]
fn extract_skips_blank_and_non_string_values() {
    let body = json!({ "message": "   ", "error": 42, "detail": "Fallback detail" });
    assert_eq!(extract_error_message(&body).as_deref(), Some("Fallback detail"));
    assert_eq!(extract_error_message(&json!({ "message": null })), None);
    assert_eq!(extract_error_message(&json!([1, 2])), None);
}

#[test]
fn extract_text_ignores_non_json_bodies() {
    assert_eq!(extract_error_message_text("<html>502</html>"), None);
    assert_eq!(extract_error_message_text(""), None);
    assert_eq!(extract_error_message_text(r#"{"message":"Hi"}"#).as_deref(), Some("Hi"));
}

// =========================================================================
// SubmissionError::display_message
// =========================================================================

#[test]
fn display_message_uses_extracted_text() {
    let err = SubmissionError::rejected(409, r#"{"message":"Slot no longer available"}"#);
    assert_eq!(err.display_message(), "Slot no longer available");
}

#[test]
fn display_message_falls_back_when_missing() {
    let err = SubmissionError::rejected(500, "");
    assert_eq!(err, SubmissionError::Rejected { status: 500, message: None });
    assert_eq!(err.display_message(), FALLBACK_MESSAGE);
}

#[test]
fn display_message_falls_back_for_blank_message() {
    let err = SubmissionError::Rejected { status: 400, message: Some("  ".to_owned()) };
    assert_eq!(err.display_message(), FALLBACK_MESSAGE);
}

#[test]
fn display_message_hides_transport_details() {
    assert_eq!(SubmissionError::Transport("dns error".to_owned()).display_message(), FALLBACK_MESSAGE);
    assert_eq!(SubmissionError::Decode("eof".to_owned()).display_message(), FALLBACK_MESSAGE);
}

#[test]
fn error_display_strings() {
    assert_eq!(LookupError::Status(503).to_string(), "directory responded with status 503");
    assert_eq!(
        SubmissionError::Transport("timeout".to_owned()).to_string(),
        "booking request failed: timeout"
    );
}

// =========================================================================
// candidates_from_users
// =========================================================================

fn user(id: &str, email: Option<&str>, enabled: Option<bool>) -> DirectoryUser {
    DirectoryUser { id: id.to_owned(), name: format!("User {id}"), email: email.map(str::to_owned), enabled }
}

#[test]
fn candidates_from_users_drops_disabled_and_caps() {
    let users = vec![
        user("u1", Some("a@co.com"), None),
        user("u2", Some("b@co.com"), Some(false)),
        user("u3", Some("c@co.com"), Some(true)),
        user("u4", Some("d@co.com"), Some(true)),
    ];
    let ids: Vec<_> = candidates_from_users(users, 2).into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["u1", "u3"]);
}

#[test]
fn candidates_from_users_blank_email_becomes_none() {
    let list = candidates_from_users(vec![user("u1", Some("  "), None)], 10);
    assert_eq!(list[0].email, None);
    assert_eq!(list[0].display_name, "User u1");
}

#[test]
fn directory_user_deserializes_minimal_record() {
    let u: DirectoryUser = serde_json::from_value(json!({ "id": "u1", "name": "Jane" })).unwrap();
    assert_eq!(u.email, None);
    assert_eq!(u.enabled, None);
}

#[test]
fn directory_query_includes_limit() {
    assert_eq!(directory_query(100), "users?enabled=true&limit=100");
}

// =========================================================================
// parse_*_response
// =========================================================================

#[test]
fn parse_directory_response_decodes_users() {
    let body = r#"[{"id":"u1","name":"Jane Doe","email":"jane@co.com"},{"id":"u2","name":"Off","enabled":false}]"#;
    let list = parse_directory_response(200, body, 100).unwrap();
    assert_eq!(list, vec![Candidate::directory("u1", "Jane Doe", Some("jane@co.com".to_owned()))]);
}

#[test]
fn parse_directory_response_maps_status_and_decode_errors() {
    assert_eq!(parse_directory_response(401, "", 100), Err(LookupError::Status(401)));
    assert!(matches!(parse_directory_response(200, "{}", 100), Err(LookupError::Decode(_))));
}

#[test]
fn parse_booking_response_success_variants() {
    assert_eq!(parse_booking_response(201, r#"{"id":"b1"}"#), Ok(json!({ "id": "b1" })));
    assert_eq!(parse_booking_response(204, ""), Ok(Value::Null));
    assert!(matches!(parse_booking_response(200, "not json"), Err(SubmissionError::Decode(_))));
}

#[test]
fn parse_booking_response_rejection_extracts_message() {
    let err = parse_booking_response(409, r#"{"error":{"message":"Slot no longer available"}}"#).unwrap_err();
    assert_eq!(err.display_message(), "Slot no longer available");
}
