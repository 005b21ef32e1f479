use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
/// JSON object returned by `POST messages`, kept verbatim.
///
/// The API does not promise a schema, so fields are looked up by name.
pub struct SendMessageResponse(Map<String, Value>);

impl SendMessageResponse {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Message id, when the server returned a string `id` field.
    pub fn id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_str)
    }

    /// Message status, when the server returned a string `status` field.
    pub fn status(&self) -> Option<&str> {
        self.get("status").and_then(Value::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<SendMessageResponse> for Value {
    fn from(value: SendMessageResponse) -> Self {
        Value::Object(value.0)
    }
}
