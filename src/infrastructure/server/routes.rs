//! Axum route handlers for the app's endpoints

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use crate::application::errors::AppError;
use crate::domain::entities::{CallResponse, Command};
use crate::infrastructure::manifest::Manifest;
use super::extract::CallBody;
use super::AppState;

static ICON_PNG: &[u8] = include_bytes!("../../../assets/icon.png");

// GET /manifest.json
pub async fn manifest(State(state): State<AppState>) -> Json<Manifest> {
    Json(state.manifest.as_ref().clone())
}

// GET /static/icon.png
pub async fn icon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/png")], ICON_PNG)
}

// GET|POST /bindings
pub async fn bindings(State(state): State<AppState>) -> Response {
    match state.bindings.response() {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize bindings: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CallResponse::error("Bindings are unavailable")),
            )
                .into_response()
        }
    }
}

// POST /help
// Usage is shown even when the body can't be decoded.
pub async fn help(
    State(state): State<AppState>,
    call: Result<CallBody, AppError>,
) -> Json<CallResponse> {
    let CallBody(call) = call.unwrap_or_else(|e| {
        tracing::debug!("Ignoring undecodable help call: {}", e);
        CallBody::default()
    });
    Json(state.dispatcher.dispatch(Command::Help, &call).await)
}

// POST /list
pub async fn list(State(state): State<AppState>, CallBody(call): CallBody) -> Json<CallResponse> {
    Json(state.dispatcher.dispatch(Command::List, &call).await)
}

// POST /preview
pub async fn preview(State(state): State<AppState>, CallBody(call): CallBody) -> Json<CallResponse> {
    Json(state.dispatcher.dispatch(Command::Preview, &call).await)
}

// POST /set_channel_welcome
pub async fn set_channel_welcome(
    State(state): State<AppState>,
    CallBody(call): CallBody,
) -> Json<CallResponse> {
    Json(state.dispatcher.dispatch(Command::SetChannelWelcome, &call).await)
}

// POST /get_channel_welcome
pub async fn get_channel_welcome(
    State(state): State<AppState>,
    CallBody(call): CallBody,
) -> Json<CallResponse> {
    Json(state.dispatcher.dispatch(Command::GetChannelWelcome, &call).await)
}

// POST /delete_channel_welcome
pub async fn delete_channel_welcome(
    State(state): State<AppState>,
    CallBody(call): CallBody,
) -> Json<CallResponse> {
    Json(state.dispatcher.dispatch(Command::DeleteChannelWelcome, &call).await)
}
