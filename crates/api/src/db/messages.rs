//! Contact message repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use mindwell_core::MessageId;

use super::RepositoryError;
use crate::models::message::{Message, MessageUpdate, NewMessage};

/// Database row for a contact message.
#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
    id: i32,
    name: String,
    email: String,
    message: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

const MESSAGE_COLUMNS: &str = "id, name, email, message, created_at, updated_at";

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self {
            id: MessageId::new(row.id),
            name: row.name,
            email: row.email,
            message: row.message,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for contact message operations.
pub struct MessageRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MessageRepository<'a> {
    /// Create a new message repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a contact-form submission.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, submission: &NewMessage) -> Result<Message, RepositoryError> {
        let row = sqlx::query_as::<_, MessageRow>(&format!(
            "INSERT INTO message (name, email, message)
             VALUES ($1, $2, $3)
             RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.message)
        .fetch_one(self.pool)
        .await?;

        Ok(Message::from(row))
    }

    /// List all messages, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query_as::<_, MessageRow>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM message ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    /// Merge the supplied fields into an existing message.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` when no message has the given id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: MessageId,
        update: &MessageUpdate,
    ) -> Result<Message, RepositoryError> {
        let row = sqlx::query_as::<_, MessageRow>(&format!(
            "UPDATE message SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                message = COALESCE($4, message),
                updated_at = now()
             WHERE id = $1
             RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(id)
        .bind(update.name.as_deref())
        .bind(update.email.as_deref())
        .bind(update.message.as_deref())
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(Message::from(row))
    }

    /// Delete a message.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` when no message has the given id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: MessageId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM message WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
