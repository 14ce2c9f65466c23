use super::*;

#[test]
fn contact_message_uses_plain_field_names() {
    let message = ContactMessage {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello".to_owned(),
    };
    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(json, serde_json::json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"}));
}

#[test]
fn sent_response_omits_error() {
    let json = serde_json::to_string(&ContactResponse::sent()).unwrap();
    assert_eq!(json, r#"{"ok":true}"#);
}

#[test]
fn failed_response_carries_error() {
    let json = serde_json::to_value(ContactResponse::failed("relay down")).unwrap();
    assert_eq!(json, serde_json::json!({"ok": false, "error": "relay down"}));
}

#[test]
fn response_without_error_field_deserializes() {
    let response: ContactResponse = serde_json::from_str(r#"{"ok":false}"#).unwrap();
    assert!(!response.ok);
    assert_eq!(response.error, None);
}
