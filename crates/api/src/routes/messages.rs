//! Contact message handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use mindwell_core::MessageId;

use crate::db::{MessageRepository, RepositoryError};
use crate::error::{ApiError, Result};
use crate::models::message::{Message, MessageUpdate, NewMessage};
use crate::state::AppState;

/// Acknowledgement body for message mutations.
#[derive(Debug, Serialize)]
pub struct MessageAck {
    pub message: &'static str,
}

/// Submit a contact-form message.
///
/// POST /messages
///
/// # Errors
///
/// 400 when a required field is missing or blank.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewMessage>,
) -> Result<(StatusCode, Json<MessageAck>)> {
    let submission = body
        .normalize()
        .map_err(|field| ApiError::Validation(format!("{field} is required")))?;

    MessageRepository::new(state.pool())
        .create(&submission)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageAck {
            message: "Message saved successfully!",
        }),
    ))
}

/// List all messages, newest first.
///
/// GET /messages
///
/// # Errors
///
/// 500 when the query fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Message>>> {
    let messages = MessageRepository::new(state.pool()).list().await?;
    Ok(Json(messages))
}

/// Update a message.
///
/// PUT /messages/:id
///
/// # Errors
///
/// 404 when no message has the id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<MessageId>,
    Json(body): Json<MessageUpdate>,
) -> Result<Json<Message>> {
    let message = MessageRepository::new(state.pool())
        .update(id, &body)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => ApiError::NotFound("Message".to_string()),
            other => other.into(),
        })?;

    Ok(Json(message))
}

/// Delete a message.
///
/// DELETE /messages/:id
///
/// # Errors
///
/// 404 when no message has the id.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<MessageId>,
) -> Result<Json<MessageAck>> {
    MessageRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => ApiError::NotFound("Message".to_string()),
            other => other.into(),
        })?;

    Ok(Json(MessageAck {
        message: "Message deleted successfully!",
    }))
}
