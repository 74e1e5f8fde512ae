//! Line-oriented text rendering of normalized views
//!
//! All functions here are pure: the same view always renders to the same
//! text, with no locale or time zone involved.

use crate::digest::envelope::status_code;
use crate::digest::view::NormalizedView;
use serde_json::Value;

/// Placeholder for nested values inside a key/value line
pub const NESTED_PLACEHOLDER: &str = "[object]";

/// Where a raw envelope may carry a human-readable message, first match wins
const MESSAGE_POINTERS: [&str; 4] = [
    "/data/error/message/value",
    "/data/error/message",
    "/data/message",
    "/data/content",
];

/// Render a view as display text
pub fn format_readable(view: &NormalizedView) -> String {
    match view {
        NormalizedView::Error { message } => format!("Error: {}", message),
        NormalizedView::List {
            status,
            count,
            items,
        } => {
            let mut lines = Vec::with_capacity(items.len() + 2);
            lines.push(status_line(&status_text(*status)));
            lines.push(format!("Count: {}", count));
            for (idx, item) in items.iter().enumerate() {
                lines.push(format!("{}. {}", idx + 1, format_key_values(item)));
            }
            lines.join("\n")
        }
        NormalizedView::Single { status, item } => {
            format!(
                "{}\n{}",
                status_line(&status_text(*status)),
                format_key_values(item)
            )
        }
        NormalizedView::Raw { original } => format_raw(original),
    }
}

/// Render a record as `key: value` pairs joined by ` | `
pub fn format_key_values(value: &Value) -> String {
    match value {
        Value::Object(obj) => obj
            .iter()
            .map(|(key, v)| format!("{}: {}", key, format_scalar(v)))
            .collect::<Vec<_>>()
            .join(" | "),
        other => coerce_text(other),
    }
}

/// Render one field value. Nested structures are never expanded.
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Object(_) | Value::Array(_) => NESTED_PLACEHOLDER.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Plain text form of any value: strings verbatim, null as empty,
/// everything else as compact JSON
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn format_raw(original: &Value) -> String {
    let Some(envelope) = original.as_object() else {
        return coerce_text(original);
    };

    let status = envelope.get("status").filter(|s| !s.is_null());
    let has_data = envelope.get("data").is_some_and(|d| !d.is_null());
    if status.is_none() && !has_data {
        return coerce_text(original);
    }

    let line = status_line(&status_text(status.and_then(status_code)));
    match nested_message(original) {
        Some(message) => format!("{}\n{}", line, message),
        None => line,
    }
}

fn nested_message(original: &Value) -> Option<String> {
    MESSAGE_POINTERS
        .iter()
        .filter_map(|pointer| original.pointer(pointer))
        .find(|m| matches!(m, Value::String(_) | Value::Number(_) | Value::Bool(_)))
        .map(format_scalar)
}

fn status_text(status: Option<i64>) -> String {
    status.map(|s| s.to_string()).unwrap_or_default()
}

fn status_line(status: &str) -> String {
    format!("Status: {}", status).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::extractor::extract;
    use crate::digest::fields::pick_important_fields;
    use serde_json::json;

    #[test]
    fn test_collection_scenario() {
        let raw = json!({
            "status": 200,
            "data": {"d": {"results": [{"Name": "A", "Extra": 1}, {"Name": "B"}]}}
        });

        assert_eq!(
            format_readable(&extract(&raw)),
            "Status: 200\nCount: 2\n1. Name: A\n2. Name: B"
        );
    }

    #[test]
    fn test_single_scenario() {
        let raw = json!({
            "status": 200,
            "data": {"d": {"Name": "X", "QueueName": "Q1", "Other": "ignored"}}
        });

        assert_eq!(
            format_readable(&extract(&raw)),
            "Status: 200\nName: X | QueueName: Q1"
        );
    }

    #[test]
    fn test_error_scenario() {
        let raw = json!({"error": "unauthorized"});
        assert_eq!(format_readable(&extract(&raw)), "Error: unauthorized");
    }

    #[test]
    fn test_unfamiliar_record_scenario() {
        let record = json!({"Foo": "bar"});
        let picked = pick_important_fields(&record);

        assert_eq!(picked, record);
        assert_eq!(format_key_values(&picked), "Foo: bar");
    }

    #[test]
    fn test_nested_value_placeholder() {
        let record = json!({"Name": "A", "Nested": {"x": 1}});
        assert_eq!(format_key_values(&record), "Name: A | Nested: [object]");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(format_scalar(&json!(null)), "");
        assert_eq!(format_scalar(&json!([1, 2])), "[object]");
        assert_eq!(format_scalar(&json!({})), "[object]");
        assert_eq!(format_scalar(&json!("2024-01-01T00:00:00Z")), "2024-01-01T00:00:00Z");
        assert_eq!(format_scalar(&json!(42)), "42");
        assert_eq!(format_scalar(&json!(1.5)), "1.5");
        assert_eq!(format_scalar(&json!(false)), "false");
    }

    #[test]
    fn test_key_values_non_records() {
        assert_eq!(format_key_values(&json!(null)), "");
        assert_eq!(format_key_values(&json!("plain")), "plain");
        assert_eq!(format_key_values(&json!(3)), "3");
        assert_eq!(format_key_values(&json!({"State": null})), "State: ");
    }

    #[test]
    fn test_missing_status_line_is_trimmed() {
        let view = NormalizedView::List {
            status: None,
            count: 0,
            items: vec![],
        };
        assert_eq!(format_readable(&view), "Status:\nCount: 0");
    }

    #[test]
    fn test_count_reports_full_length() {
        let results: Vec<Value> = (0..75).map(|i| json!({"ID": i})).collect();
        let raw = json!({"status": 200, "data": {"d": {"results": results}}});

        let text = format_readable(&extract(&raw));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "Count: 75");
        assert_eq!(lines.len(), 2 + 50);
        assert_eq!(lines[51], "50. ID: 49");
    }

    #[test]
    fn test_raw_with_odata_error_message() {
        let raw = json!({
            "status": 404,
            "data": {"error": {"code": "NotFound", "message": {"lang": "en", "value": "No such queue"}}}
        });

        assert_eq!(format_readable(&extract(&raw)), "Status: 404\nNo such queue");
    }

    #[test]
    fn test_raw_with_text_body() {
        let raw = json!({
            "status": 502,
            "data": {"status": 502, "content": "Bad Gateway"}
        });

        assert_eq!(format_readable(&extract(&raw)), "Status: 502\nBad Gateway");
    }

    #[test]
    fn test_raw_with_plain_error_message() {
        let raw = json!({"status": 500, "data": {"error": {"message": "plain"}}});
        assert_eq!(format_readable(&extract(&raw)), "Status: 500\nplain");
    }

    #[test]
    fn test_raw_with_top_level_message() {
        let raw = json!({"status": 400, "data": {"message": "bad filter"}});
        assert_eq!(format_readable(&extract(&raw)), "Status: 400\nbad filter");
    }

    #[test]
    fn test_raw_message_priority() {
        let raw = json!({
            "status": 500,
            "data": {
                "error": {"message": {"lang": "en", "value": "odata"}},
                "message": "top",
                "content": "body"
            }
        });
        assert_eq!(format_readable(&extract(&raw)), "Status: 500\nodata");

        let raw = json!({
            "status": 500,
            "data": {"message": "top", "content": "body"}
        });
        assert_eq!(format_readable(&extract(&raw)), "Status: 500\ntop");
    }

    #[test]
    fn test_raw_skips_structured_message() {
        let raw = json!({
            "status": 500,
            "data": {"error": {"message": {"lang": "en"}}, "content": "body"}
        });
        assert_eq!(format_readable(&extract(&raw)), "Status: 500\nbody");
    }

    #[test]
    fn test_raw_data_without_status() {
        let raw = json!({"data": {"message": "hi"}});
        assert_eq!(format_readable(&extract(&raw)), "Status:\nhi");
    }

    #[test]
    fn test_structured_error_renders_placeholder() {
        let raw = json!({"error": {"code": 1}});
        assert_eq!(format_readable(&extract(&raw)), "Error: [object]");
    }

    #[test]
    fn test_string_status_renders_alike_in_every_view() {
        let list = json!({"status": "200", "data": {"d": {"results": []}}});
        let single = json!({"status": "200", "data": {"d": {"Name": "X"}}});
        let raw = json!({"status": "200", "data": {"value": []}});

        assert_eq!(format_readable(&extract(&list)), "Status: 200\nCount: 0");
        assert_eq!(format_readable(&extract(&single)), "Status: 200\nName: X");
        assert_eq!(format_readable(&extract(&raw)), "Status: 200");
    }

    #[test]
    fn test_raw_without_message() {
        assert_eq!(format_readable(&extract(&json!({"status": 204}))), "Status: 204");
        assert_eq!(
            format_readable(&extract(&json!({"status": 200, "data": {"value": []}}))),
            "Status: 200"
        );
    }

    #[test]
    fn test_raw_generic_coercion() {
        assert_eq!(format_readable(&extract(&json!("hello"))), "hello");
        assert_eq!(format_readable(&extract(&json!({"foo": 1}))), r#"{"foo":1}"#);
        assert_eq!(format_readable(&extract(&json!([1, 2]))), "[1,2]");
        assert_eq!(format_readable(&extract(&json!(null))), "");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let view = NormalizedView::Single {
            status: Some(200),
            item: json!({"Name": "A", "CreatedAt": "2024-05-01", "ID": 9}),
        };

        let first = format_readable(&view);
        for _ in 0..5 {
            assert_eq!(format_readable(&view), first);
        }
    }
}
