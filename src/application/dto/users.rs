use crate::application::authorization::{Claim, Principal};
use crate::domain::user::{Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub is_active: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileDto {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
    pub claims: Vec<Claim>,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

impl ProfileDto {
    pub fn from_principal(principal: &Principal, now: DateTime<Utc>) -> Self {
        let mut claims = principal.claims.clone();
        claims.sort_by(|a, b| {
            a.claim_type
                .cmp(&b.claim_type)
                .then_with(|| a.value.cmp(&b.value))
        });
        claims.dedup();

        Self {
            user_id: principal.user_id.into(),
            username: principal.username.clone(),
            role: principal.role,
            claims,
            expires_at: principal.expires_at,
            expires_in: principal
                .expires_at
                .signed_duration_since(now)
                .num_seconds()
                .max(0),
        }
    }
}
