use super::{map_sqlx, to_i64};
use crate::domain::contact::{
    ContactEmail, ContactMessage, ContactMessageId, ContactMessageRepository, MessageBody,
    MessageSubject, NewContactMessage, SenderName,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const MESSAGE_COLUMNS: &str = "id, reference, name, email, subject, body, is_read, created_at";

#[derive(Clone)]
pub struct PostgresContactMessageRepository {
    pool: PgPool,
}

impl PostgresContactMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MessageRow {
    id: i64,
    reference: String,
    name: String,
    email: String,
    subject: Option<String>,
    body: String,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<MessageRow> for ContactMessage {
    type Error = DomainError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        Ok(ContactMessage {
            id: ContactMessageId::new(row.id)?,
            reference: row.reference,
            name: SenderName::new(row.name)?,
            email: ContactEmail::new(row.email)?,
            subject: MessageSubject::new(row.subject)?,
            body: MessageBody::new(row.body)?,
            is_read: row.is_read,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ContactMessageRepository for PostgresContactMessageRepository {
    async fn insert(&self, message: NewContactMessage) -> DomainResult<ContactMessage> {
        let subject = Some(message.subject.as_str()).filter(|subject| !subject.is_empty());
        let row = sqlx::query_as::<_, MessageRow>(&format!(
            "INSERT INTO contact_messages (reference, name, email, subject, body, is_read, created_at)
             VALUES ($1, $2, $3, $4, $5, FALSE, $6)
             RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(&message.reference)
        .bind(message.name.as_str())
        .bind(message.email.as_str())
        .bind(subject)
        .bind(message.body.as_str())
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ContactMessage::try_from(row)
    }

    async fn find_by_id(&self, id: ContactMessageId) -> DomainResult<Option<ContactMessage>> {
        let row = sqlx::query_as::<_, MessageRow>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM contact_messages WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ContactMessage::try_from).transpose()
    }

    async fn set_read(&self, id: ContactMessageId, read: bool) -> DomainResult<ContactMessage> {
        let row = sqlx::query_as::<_, MessageRow>(&format!(
            "UPDATE contact_messages SET is_read = $2 WHERE id = $1 RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(read)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("contact message not found".into()))?;

        ContactMessage::try_from(row)
    }

    async fn delete(&self, id: ContactMessageId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("contact message not found".into()));
        }
        Ok(())
    }

    async fn count(&self, unread_only: bool) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM contact_messages WHERE ($1 = FALSE OR is_read = FALSE)",
        )
        .bind(unread_only)
        .fetch_one(&self.pool)
        .await
        .map(|count| count.unsigned_abs())
        .map_err(map_sqlx)
    }

    async fn list_page(
        &self,
        unread_only: bool,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<ContactMessage>> {
        let rows = sqlx::query_as::<_, MessageRow>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM contact_messages
             WHERE ($1 = FALSE OR is_read = FALSE)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        ))
        .bind(unread_only)
        .bind(to_i64(limit))
        .bind(to_i64(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ContactMessage::try_from).collect()
    }
}
