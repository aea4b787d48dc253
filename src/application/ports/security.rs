// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    authorization::Principal,
    dto::{AuthTokenDto, TokenSubject},
};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    /// Verify a bearer token and rebuild the principal with its claims.
    async fn authenticate(&self, token: &str) -> ApplicationResult<Principal>;
}
