use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::types::Request;
use crate::session::Session;

/// Form input. Missing or null reads as empty so the validators report it;
/// numbers are taken in their JSON text form.
pub fn input_text(req: &Request, key: &str) -> Result<String, serde_json::Value> {
    match req.params.get(key) {
        None | Some(serde_json::Value::Null) => Ok(String::new()),
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(err(
            &req.id,
            "bad_params",
            format!("params.{key} must be a string"),
            None,
        )),
    }
}

pub fn required_bool(req: &Request, key: &str) -> Result<bool, serde_json::Value> {
    req.params
        .get(key)
        .and_then(|v| v.as_bool())
        .ok_or_else(|| err(&req.id, "bad_params", format!("missing params.{key}"), None))
}

/// Accepts a JSON integer or a digit string, since ids round-trip through the DOM.
pub fn required_id(req: &Request, key: &str) -> Result<u64, serde_json::Value> {
    let v = req.params.get(key);
    let id = match v {
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    id.ok_or_else(|| {
        err(
            &req.id,
            "bad_params",
            format!("params.{key} must be a non-negative integer"),
            None,
        )
    })
}

/// Success envelope with the current render snapshot merged under `session`.
pub fn ok_with_snapshot(
    req: &Request,
    session: &Session,
    mut extra: serde_json::Value,
) -> serde_json::Value {
    let snapshot = match serde_json::to_value(session.snapshot()) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "serialize_failed", e.to_string(), None),
    };
    if !extra.is_object() {
        extra = json!({});
    }
    extra["session"] = snapshot;
    ok(&req.id, extra)
}
