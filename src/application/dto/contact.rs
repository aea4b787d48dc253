use crate::domain::contact::ContactMessage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactMessageDto {
    pub id: i64,
    pub reference: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub is_read: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactMessageDto {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id.into(),
            reference: message.reference,
            name: message.name.as_str().to_string(),
            email: message.email.as_str().to_string(),
            subject: message.subject.as_str().to_string(),
            body: message.body.as_str().to_string(),
            is_read: message.is_read,
            created_at: message.created_at,
        }
    }
}

/// What the public form gets back.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactReceiptDto {
    pub reference: String,
    #[serde(with = "serde_time")]
    pub received_at: DateTime<Utc>,
}
