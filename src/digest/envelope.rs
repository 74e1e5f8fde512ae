use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The wrapped API response handed to the pipeline by the proxy layer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// HTTP status of the upstream call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,

    /// Upstream payload, passed through as received
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Set when the proxy itself failed before reaching upstream. Usually
    /// a string, but any JSON value is accepted as the raw path does.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

/// Read an envelope's status as an integer code.
///
/// Accepts JSON integers and strings holding an integer, so every view
/// renders `"200"` and `200` the same way.
pub fn status_code(status: &Value) -> Option<i64> {
    match status {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl ResponseEnvelope {
    /// Wrap an upstream HTTP response.
    ///
    /// A JSON body is passed through as `data`. Anything else is kept as
    /// text under `data.content` next to the status code.
    pub fn from_http(status: u16, body: &str) -> Self {
        let data = serde_json::from_str::<Value>(body).unwrap_or_else(|_| {
            json!({
                "status": status,
                "content": body,
            })
        });

        ResponseEnvelope {
            status: Some(i64::from(status)),
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ResponseEnvelope {
            status: None,
            data: None,
            error: Some(Value::String(message.into())),
        }
    }

    /// Raw JSON form, as the pipeline consumes it
    pub fn to_value(&self) -> Value {
        let mut obj = serde_json::Map::new();
        if let Some(status) = self.status {
            obj.insert("status".to_string(), Value::from(status));
        }
        if let Some(ref data) = self.data {
            obj.insert("data".to_string(), data.clone());
        }
        if let Some(ref error) = self.error {
            obj.insert("error".to_string(), error.clone());
        }
        Value::Object(obj)
    }
}
