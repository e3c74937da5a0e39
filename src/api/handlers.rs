//! HTTP request handlers

use super::telegram::{SendMessage, Update, SECRET_TOKEN_HEADER};
use super::types::{ErrorResponse, MessageRequest, MessageResponse};
use super::AppState;
use crate::runtime::RuntimeError;
use crate::state_machine::Conversation;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use subtle::ConstantTimeEq;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Telegram delivery
        .route("/telegram/webhook", post(telegram_webhook))
        // Direct conversation access
        .route("/api/conversations/:id", get(get_conversation))
        .route("/api/conversations/:id/messages", post(send_message))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Telegram Webhook
// ============================================================

async fn telegram_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(update): Json<Update>,
) -> Result<Response, AppError> {
    if let Some(expected) = state.webhook_secret.as_deref() {
        let provided = headers
            .get(SECRET_TOKEN_HEADER)
            .map_or(&[][..], |v| v.as_bytes());
        if !bool::from(provided.ct_eq(expected.as_bytes())) {
            tracing::warn!(update_id = update.update_id, "Webhook secret mismatch");
            return Err(AppError::Unauthorized);
        }
    }

    let Some(message) = update.message else {
        tracing::debug!(update_id = update.update_id, "Ignoring update without message");
        return Ok(StatusCode::OK.into_response());
    };

    tracing::debug!(
        update_id = update.update_id,
        message_id = message.message_id,
        chat_id = message.chat.id,
        user_id = message.from.as_ref().map(|u| u.id),
        "Webhook message"
    );

    let conversation_id = message.chat.id.to_string();
    let handled = state
        .runtime
        .handle_message(&conversation_id, message.text.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(SendMessage::new(message.chat.id, handled.reply)).into_response())
}

// ============================================================
// Conversations
// ============================================================

async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let handled = state.runtime.handle_message(&id, &req.text).await?;

    Ok(Json(MessageResponse {
        reply: handled.reply,
        state: handled.state,
    }))
}

async fn get_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Conversation>, AppError> {
    Ok(Json(state.runtime.get_conversation(&id).await?))
}

async fn get_version() -> &'static str {
    concat!("fitness-bot ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Unauthorized,
    Internal(String),
}

impl From<RuntimeError> for AppError {
    fn from(err: RuntimeError) -> Self {
        match err {
            RuntimeError::EmptyConversationId => AppError::BadRequest(err.to_string()),
            RuntimeError::Store(_) => {
                tracing::error!(error = %err, "Runtime failure");
                AppError::Internal(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "invalid secret token".to_string()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
