//! # Chatbot HTTP Routes
//!
//! File: cli/src/commands/chatbot/routes.rs
//!
//! ## Overview
//!
//! - `POST /chat`   → `{"reply": ...}` from the keyword table
//! - `GET  /status` → `{"status": "running", "service": "chatbot"}`
//! - `GET  /`       → plain `OK`
//!
//! `/chat` never rejects a request: a body that is not a JSON object with a
//! string `message` is handled as an empty message, and the route has no
//! body size limit.
//!
use super::replies::ISLAND_REPLIES;
use super::SERVICE_NAME;
use crate::common::server::{status_response, ServiceStatus};
use axum::{
    body::Bytes,
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Incoming `/chat` payload. `message` defaults to empty.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    /// Decodes a raw body leniently.
    ///
    /// Only a JSON object with a string `message` yields a message; when the
    /// key repeats, the last value wins. Anything else is the default request.
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(e) => {
                debug!("Treating malformed chat body as empty message: {}", e);
                return Self::default();
            }
        };
        let message = value
            .as_object()
            .and_then(|object| object.get("message"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        Self {
            message: message.to_owned(),
        }
    }
}

/// Outgoing `/chat` payload.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: &'static str,
}

/// Builds the chatbot router (without middleware).
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/status", get(status))
        .route("/chat", post(chat).layer(DefaultBodyLimit::disable()))
}

async fn chat(body: Bytes) -> Json<ChatReply> {
    let request = ChatRequest::from_body(&body);
    let reply = ISLAND_REPLIES.reply_for(&request.message);
    Json(ChatReply { reply })
}

async fn status() -> Json<ServiceStatus> {
    status_response(SERVICE_NAME)
}

async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
