use super::handlers;
use super::types::{AppState, Request};
use crate::ipc::error::err;
use tracing::{debug_span, warn};

pub fn handle_request(state: &mut AppState, req: Request) -> serde_json::Value {
    let _span = debug_span!("ipc", id = %req.id, method = %req.method).entered();

    if let Some(resp) = handlers::core::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::session::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::students::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::filters::try_handle(state, &req) {
        return resp;
    }

    warn!(method = %req.method, "unknown method");
    err(
        &req.id,
        "not_implemented",
        format!("unknown method: {}", req.method),
        None,
    )
}
