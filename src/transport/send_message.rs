use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{SendMessage, SendMessageResponse, Variables};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageJsonRequest<'a> {
    receiver: &'a str,
    template_name: &'a str,
    variables: &'a Variables,
}

pub fn encode_send_message_json(request: &SendMessage) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SendMessageJsonRequest {
        receiver: request.receiver().as_str(),
        template_name: request.template_name().as_str(),
        variables: request.variables(),
    })
}

pub fn decode_send_message_json_response(
    json: &str,
) -> Result<SendMessageResponse, serde_json::Error> {
    serde_json::from_str(json)
}

/// Best-effort decode of an error response body.
///
/// Returns `None` for blank bodies, invalid JSON, and JSON that is not an object.
pub fn decode_error_body(body: &str) -> Option<Map<String, Value>> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => Some(fields),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::SendMessage;

    use super::*;

    #[test]
    fn encode_uses_wire_field_names() {
        let request = SendMessage::parse(" whatsapp:+5511999999999 ", "welcome")
            .unwrap()
            .variable("name", "Ana")
            .variable("nested", json!({"list": [1, 2]}));

        let body = encode_send_message_json(&request).unwrap();
        let value: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(
            value,
            json!({
                "receiver": "whatsapp:+5511999999999",
                "templateName": "welcome",
                "variables": {"name": "Ana", "nested": {"list": [1, 2]}}
            })
        );
    }

    #[test]
    fn encode_sends_empty_variables_as_object() {
        let request = SendMessage::parse("whatsapp:+5511999999999", "welcome").unwrap();
        let body = encode_send_message_json(&request).unwrap();
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["variables"], json!({}));
    }

    #[test]
    fn decode_response_keeps_object_verbatim() {
        let resp = decode_send_message_json_response(r#"{"id":"msg-123","status":"sent"}"#)
            .unwrap();
        assert_eq!(resp.id(), Some("msg-123"));
        assert_eq!(resp.status(), Some("sent"));
        assert_eq!(resp.as_map().len(), 2);
    }

    #[test]
    fn decode_response_rejects_non_objects() {
        assert!(decode_send_message_json_response("").is_err());
        assert!(decode_send_message_json_response("{ not json }").is_err());
        assert!(decode_send_message_json_response("[1, 2]").is_err());
        assert!(decode_send_message_json_response("\"sent\"").is_err());
    }

    #[test]
    fn decode_error_body_is_best_effort() {
        let body = decode_error_body(r#"{"message":"Invalid API key"}"#).unwrap();
        assert_eq!(body.get("message"), Some(&json!("Invalid API key")));

        assert_eq!(decode_error_body(""), None);
        assert_eq!(decode_error_body("   \n"), None);
        assert_eq!(decode_error_body("<html>Bad Gateway</html>"), None);
        assert_eq!(decode_error_body("[\"message\"]"), None);
        assert_eq!(decode_error_body("null"), None);
    }
}
