// Host-side tests for contact-form validation, the wire format, and the
// reply-to-status mapping.

use site_core::{
    build_request, reply_status, ContactError, ContactReply, SubmitStatus, MSG_MISSING_FIELDS,
    MSG_SEND_FAILED,
};

#[test]
fn blank_fields_are_rejected_before_any_io() {
    assert_eq!(build_request("", "", ""), Err(ContactError::MissingFields));
    assert_eq!(
        build_request("Ada", "ada@example.com", ""),
        Err(ContactError::MissingFields)
    );
    // Whitespace-only counts as empty
    assert_eq!(
        build_request("   ", "ada@example.com", "hi"),
        Err(ContactError::MissingFields)
    );
}

#[test]
fn validation_error_carries_the_user_message() {
    assert_eq!(ContactError::MissingFields.to_string(), MSG_MISSING_FIELDS);
}

#[test]
fn fields_are_trimmed_into_the_request() {
    let req = build_request(" Ada ", " ada@example.com\n", "  hello  ").unwrap();
    assert_eq!(req.name, "Ada");
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.message, "hello");
}

#[test]
fn request_serializes_to_the_endpoint_shape() {
    let req = build_request("Ada", "ada@example.com", "hello").unwrap();
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "hello"
        })
    );
}

#[test]
fn successful_reply_maps_to_sent() {
    let reply: ContactReply = serde_json::from_str(r#"{"success": true}"#).unwrap();
    let status = reply_status(true, Some(reply));
    assert_eq!(status, SubmitStatus::Sent);
    assert!(status.is_success());
    assert_eq!(status.css_class(), "success");
}

#[test]
fn server_error_text_wins_over_the_generic_message() {
    let reply: ContactReply =
        serde_json::from_str(r#"{"success": false, "error": "Rate limited"}"#).unwrap();
    let status = reply_status(true, Some(reply));
    assert_eq!(status, SubmitStatus::Rejected("Rate limited".to_owned()));
    assert_eq!(status.css_class(), "error");
}

#[test]
fn success_body_on_a_failed_transport_is_not_trusted() {
    let reply: ContactReply = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert_eq!(
        reply_status(false, Some(reply)),
        SubmitStatus::Rejected(MSG_SEND_FAILED.to_owned())
    );
}

#[test]
fn unparseable_body_degrades_to_the_generic_failure() {
    assert_eq!(
        reply_status(true, None),
        SubmitStatus::Rejected(MSG_SEND_FAILED.to_owned())
    );
}

#[test]
fn lenient_reply_parsing_defaults_missing_fields() {
    let reply: ContactReply = serde_json::from_str("{}").unwrap();
    assert!(!reply.success);
    assert!(reply.error.is_none());
}
