use crate::error::SessionError;
use crate::ipc::error::{err, ok, session_err};
use crate::ipc::helpers::{input_text, ok_with_snapshot, required_id};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_add(state: &mut AppState, req: &Request) -> serde_json::Value {
    let name = match input_text(req, "name") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let score = match input_text(req, "score") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match state.session.add_student(&name, &score) {
        Ok(student) => ok_with_snapshot(
            req,
            &state.session,
            json!({ "student": student, "clearInputs": true }),
        ),
        Err(e) => session_err(&req.id, e),
    }
}

fn handle_remove(state: &mut AppState, req: &Request) -> serde_json::Value {
    let id = match required_id(req, "studentId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match state.session.remove_student(id) {
        Ok(removed) => ok_with_snapshot(req, &state.session, json!({ "removed": removed })),
        Err(e) => session_err(&req.id, e),
    }
}

fn handle_list(state: &AppState, req: &Request) -> serde_json::Value {
    if !state.session.is_authenticated() {
        return session_err(&req.id, SessionError::NotAuthenticated);
    }
    let view = state.session.snapshot();
    ok(
        &req.id,
        json!({
            "students": view.students,
            "visible": view.visible,
            "totalCount": view.total_count,
            "visibleCount": view.visible_count,
            "emptyHint": view.empty_hint,
        }),
    )
}

fn handle_log_name(state: &mut AppState, req: &Request) -> serde_json::Value {
    match req.params.get("name").and_then(|v| v.as_str()) {
        Some(name) => {
            state.session.log_name(name);
            ok(&req.id, json!({ "logged": true }))
        }
        None => err(&req.id, "bad_params", "missing params.name", None),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.add" => Some(handle_add(state, req)),
        "students.remove" => Some(handle_remove(state, req)),
        "students.list" => Some(handle_list(state, req)),
        "students.logName" => Some(handle_log_name(state, req)),
        _ => None,
    }
}
