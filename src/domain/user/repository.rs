// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{entity::{NewUser, User}, value_objects::Username};
use async_trait::async_trait;

/// Storage for back-office accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn any_exist(&self) -> DomainResult<bool>;

    /// Fails with `Conflict` when the username is taken.
    async fn insert(&self, account: NewUser) -> DomainResult<User>;

    /// Insert `account` only while no account exists at all. `None` means
    /// another registration claimed the first seat; the check and the insert
    /// are atomic with respect to each other.
    async fn insert_bootstrap_admin(&self, account: NewUser) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;
}
