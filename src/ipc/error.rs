use serde_json::json;

use crate::error::SessionError;

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result
    })
}

pub fn err(
    id: &str,
    code: &str,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    let mut error = json!({
        "code": code,
        "message": message.into(),
    });
    if let Some(d) = details {
        error["details"] = d;
    }
    json!({
        "id": id,
        "ok": false,
        "error": error,
    })
}

/// Validation rejections carry the form they belong to so the UI can place the message.
pub fn session_err(id: &str, e: SessionError) -> serde_json::Value {
    let details = match e {
        SessionError::Validation(v) => Some(json!({ "form": v.form() })),
        _ => None,
    };
    err(id, e.code(), e.to_string(), details)
}

/// Error envelope for a line that never parsed, so there is no id to echo.
pub fn bad_json(message: impl Into<String>) -> serde_json::Value {
    json!({
        "ok": false,
        "error": {
            "code": "bad_json",
            "message": message.into(),
        }
    })
}
