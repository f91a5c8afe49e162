use crate::error::SessionError;
use crate::ipc::error::session_err;
use crate::ipc::helpers::{input_text, ok_with_snapshot};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn respond(state: &AppState, req: &Request, res: Result<(), SessionError>) -> serde_json::Value {
    match res {
        Ok(()) => ok_with_snapshot(req, &state.session, json!({})),
        Err(e) => session_err(&req.id, e),
    }
}

fn handle_login(state: &mut AppState, req: &Request) -> serde_json::Value {
    let username = match input_text(req, "username") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let password = match input_text(req, "password") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let res = state.session.attempt_login(&username, &password);
    respond(state, req, res)
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let resp = match req.method.as_str() {
        "session.login" => handle_login(state, req),
        "session.state" => ok_with_snapshot(req, &state.session, json!({})),
        "session.logout.request" => {
            let res = state.session.request_logout();
            respond(state, req, res)
        }
        "session.logout.cancel" => {
            let res = state.session.cancel_logout();
            respond(state, req, res)
        }
        "session.logout.confirm" => {
            let res = state.session.confirm_logout();
            respond(state, req, res)
        }
        _ => return None,
    };
    Some(resp)
}
