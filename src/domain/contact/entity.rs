// src/domain/contact/entity.rs
use crate::domain::contact::value_objects::{
    ContactEmail, ContactMessageId, MessageBody, MessageSubject, SenderName,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub reference: String,
    pub name: SenderName,
    pub email: ContactEmail,
    pub subject: MessageSubject,
    pub body: MessageBody,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub reference: String,
    pub name: SenderName,
    pub email: ContactEmail,
    pub subject: MessageSubject,
    pub body: MessageBody,
    pub created_at: DateTime<Utc>,
}
