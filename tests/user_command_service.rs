// tests/user_command_service.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use showcase_cms::application::{
    authorization::{Claim, Principal},
    commands::users::{LoginUserCommand, RegisterUserCommand, UserCommandService},
    error::ApplicationError,
};
use showcase_cms::domain::errors::DomainResult;
use showcase_cms::domain::user::{NewUser, Role, User, UserId, UserRepository, Username};

mod support;

use support::{InMemoryUserRepo, PlainPasswordHasher, TickingClock, token_manager};

/// Reports an empty table, but another registration wins the first seat.
#[derive(Default)]
struct FirstSeatTaken {
    inner: InMemoryUserRepo,
}

#[async_trait]
impl UserRepository for FirstSeatTaken {
    async fn any_exist(&self) -> DomainResult<bool> {
        Ok(false)
    }

    async fn insert(&self, account: NewUser) -> DomainResult<User> {
        self.inner.insert(account).await
    }

    async fn insert_bootstrap_admin(&self, _account: NewUser) -> DomainResult<Option<User>> {
        Ok(None)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        self.inner.find_by_username(username).await
    }
}

fn service(accounts: Arc<dyn UserRepository>) -> UserCommandService {
    UserCommandService::new(
        accounts,
        Arc::new(PlainPasswordHasher),
        Arc::new(token_manager()),
        Arc::new(TickingClock::default()),
    )
}

fn registration(username: &str, role: Option<Role>) -> RegisterUserCommand {
    RegisterUserCommand {
        username: username.into(),
        password: "long enough".into(),
        role,
    }
}

fn acting(role: Role) -> Principal {
    let now = Utc::now();
    Principal {
        user_id: UserId::new(1).unwrap(),
        username: format!("{role}-actor"),
        role,
        claims: role
            .default_permissions()
            .into_iter()
            .map(Claim::permission)
            .collect(),
        issued_at: now,
        expires_at: now + chrono::Duration::hours(1),
    }
}

#[tokio::test]
async fn first_registration_ignores_the_requested_role() {
    let users = service(Arc::new(InMemoryUserRepo::default()));
    let owner = users
        .register(None, registration("owner", Some(Role::Viewer)))
        .await
        .unwrap();
    assert_eq!(owner.role, Role::Admin);
}

#[tokio::test]
async fn losing_the_first_seat_is_a_conflict() {
    let users = service(Arc::new(FirstSeatTaken::default()));
    let err = users.register(None, registration("owner", None)).await.unwrap_err();
    assert!(err.is_conflict());
}

#[tokio::test]
async fn later_registrations_need_users_manage() {
    let users = service(Arc::new(InMemoryUserRepo::default()));
    users.register(None, registration("owner", None)).await.unwrap();

    let editor = acting(Role::Editor);
    let err = users
        .register(Some(&editor), registration("writer", None))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let admin = acting(Role::Admin);
    let writer = users
        .register(Some(&admin), registration("writer", None))
        .await
        .unwrap();
    assert_eq!(writer.role, Role::default());
}

#[tokio::test]
async fn duplicate_usernames_conflict() {
    let users = service(Arc::new(InMemoryUserRepo::default()));
    users.register(None, registration("owner", None)).await.unwrap();

    let admin = acting(Role::Admin);
    let err = users
        .register(Some(&admin), registration("owner", Some(Role::Editor)))
        .await
        .unwrap_err();
    assert!(err.is_conflict());
}

#[tokio::test]
async fn login_checks_the_password() {
    let users = service(Arc::new(InMemoryUserRepo::default()));
    users.register(None, registration("owner", None)).await.unwrap();

    let err = users
        .login(LoginUserCommand {
            username: "owner".into(),
            password: "not the password".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));

    let session = users
        .login(LoginUserCommand {
            username: "owner".into(),
            password: "long enough".into(),
        })
        .await
        .unwrap();
    assert_eq!(session.user.username, "owner");
    assert!(!session.token.token.is_empty());
}
