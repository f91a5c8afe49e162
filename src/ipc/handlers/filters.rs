use crate::ipc::error::{err, session_err};
use crate::ipc::helpers::{ok_with_snapshot, required_bool};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_set_search(state: &mut AppState, req: &Request) -> serde_json::Value {
    // Unlike form inputs, a missing search text is a caller bug.
    let Some(text) = req.params.get("text").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing params.text", None);
    };
    match state.session.set_search_text(text) {
        Ok(()) => ok_with_snapshot(req, &state.session, json!({})),
        Err(e) => session_err(&req.id, e),
    }
}

fn handle_set_passing_only(state: &mut AppState, req: &Request) -> serde_json::Value {
    let passing_only = match required_bool(req, "passingOnly") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match state.session.set_passing_only(passing_only) {
        Ok(()) => ok_with_snapshot(req, &state.session, json!({})),
        Err(e) => session_err(&req.id, e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "filters.setSearch" => Some(handle_set_search(state, req)),
        "filters.setPassingOnly" => Some(handle_set_passing_only(state, req)),
        _ => None,
    }
}
