// src/application/authorization/principal.rs
use crate::domain::user::{Role, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Claim type carrying a granted permission name.
pub const PERMISSION_CLAIM_TYPE: &str = "Permission";
/// Claim type carrying the principal's role.
pub const ROLE_CLAIM_TYPE: &str = "Role";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub struct Claim {
    pub claim_type: String,
    pub value: String,
}

impl Claim {
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }

    pub fn permission(value: impl Into<String>) -> Self {
        Self::new(PERMISSION_CLAIM_TYPE, value)
    }
}

/// The authenticated identity behind a request.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: UserId,
    pub username: String,
    pub role: Role,
    pub claims: Vec<Claim>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Principal {
    pub fn has_claim(&self, claim_type: &str, value: &str) -> bool {
        self.claims
            .iter()
            .any(|claim| claim.claim_type == claim_type && claim.value == value)
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.has_claim(PERMISSION_CLAIM_TYPE, permission)
    }

    pub fn permissions(&self) -> impl Iterator<Item = &str> {
        self.claims
            .iter()
            .filter(|claim| claim.claim_type == PERMISSION_CLAIM_TYPE)
            .map(|claim| claim.value.as_str())
    }
}
