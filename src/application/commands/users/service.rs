// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::application::{
    error::ApplicationResult,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
};
use crate::domain::user::{NewUser, PasswordHash, Role, UserRepository, Username};

/// Account registration and sign-in for the back office.
pub struct UserCommandService {
    pub(super) accounts: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        accounts: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            accounts,
            password_hasher,
            token_manager,
            clock,
        }
    }

    /// Hash the password and stamp a new, active account.
    pub(super) async fn prepare_account(
        &self,
        username: Username,
        password: &str,
        role: Role,
    ) -> ApplicationResult<NewUser> {
        let hashed = self.password_hasher.hash(password).await?;
        Ok(NewUser::new(
            username,
            PasswordHash::new(hashed)?,
            role,
            self.clock.now(),
        ))
    }
}
