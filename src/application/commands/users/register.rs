// src/application/commands/users/register.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        authorization::{Principal, ensure_permission},
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Role, Username, permissions},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
    pub role: Option<Role>,
}

impl UserCommandService {
    /// The first account becomes the administrator; later ones need `Users.Manage`.
    pub async fn register(
        &self,
        actor: Option<&Principal>,
        command: RegisterUserCommand,
    ) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        if !self.accounts.any_exist().await? {
            let account = self
                .prepare_account(username, &command.password, Role::Admin)
                .await?;
            let admin = self
                .accounts
                .insert_bootstrap_admin(account)
                .await?
                .ok_or_else(|| {
                    ApplicationError::conflict("another account was registered first; sign in with it")
                })?;
            tracing::info!(user_id = %i64::from(admin.id), "administrator account bootstrapped");
            return Ok(admin.into());
        }

        let requester = actor
            .ok_or_else(|| ApplicationError::forbidden("administrative privileges are required"))?;
        ensure_permission(requester, permissions::USERS_MANAGE)?;

        let role = command.role.unwrap_or_default();
        let account = self
            .prepare_account(username, &command.password, role)
            .await?;
        let user = self.accounts.insert(account).await?;
        tracing::info!(
            user_id = %i64::from(user.id),
            role = %user.role,
            registered_by = %requester.username,
            "user registered"
        );

        Ok(user.into())
    }
}
