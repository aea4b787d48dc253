// src/domain/contact/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_NAME_CHARS: usize = 120;
const MAX_SUBJECT_CHARS: usize = 200;
const MAX_BODY_CHARS: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactMessageId(pub i64);

impl ContactMessageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "contact message id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ContactMessageId> for i64 {
    fn from(value: ContactMessageId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderName(String);

impl SenderName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_NAME_CHARS {
            return Err(DomainError::Validation(format!(
                "name must be at most {MAX_NAME_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Sender address. Only the `local@domain.tld` shape is checked; delivery is
/// never attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_lowercase();
        let invalid = || DomainError::Validation(format!("'{value}' is not a valid email address"));

        let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
        let domain_ok = domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'));
        if local.is_empty() || domain.contains('@') || !domain_ok || value.contains(char::is_whitespace) {
            return Err(invalid());
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSubject(String);

impl MessageSubject {
    pub fn new(value: Option<String>) -> DomainResult<Self> {
        let value = value.unwrap_or_default().trim().to_string();
        if value.chars().count() > MAX_SUBJECT_CHARS {
            return Err(DomainError::Validation(format!(
                "subject must be at most {MAX_SUBJECT_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("message cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_BODY_CHARS {
            return Err(DomainError::Validation(format!(
                "message must be at most {MAX_BODY_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
