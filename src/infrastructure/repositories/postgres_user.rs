// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{NewUser, PasswordHash, Role, User, UserId, UserRepository, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// Accounts live in a single `users` table; the role is stored as its slug.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    password_hash: String,
    role: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for User {
    type Error = DomainError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse::<Role>()?,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

const RETURNING_ACCOUNT: &str =
    " RETURNING id, username, password_hash, role, is_active, created_at";

/// `INSERT ... SELECT <values>` so callers can append a guard clause.
fn insert_account(account: &NewUser) -> QueryBuilder<'_, Postgres> {
    let mut query = QueryBuilder::new(
        "INSERT INTO users (username, password_hash, role, is_active, created_at) SELECT ",
    );
    let mut values = query.separated(", ");
    values.push_bind(account.username.as_str());
    values.push_bind(account.password_hash.as_str());
    values.push_bind(account.role.as_str());
    values.push_bind(account.is_active);
    values.push_bind(account.created_at);
    query
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn any_exist(&self) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users)")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn insert(&self, account: NewUser) -> DomainResult<User> {
        let mut query = insert_account(&account);
        query.push(RETURNING_ACCOUNT);
        let row = query
            .build_query_as::<AccountRow>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        User::try_from(row)
    }

    async fn insert_bootstrap_admin(&self, account: NewUser) -> DomainResult<Option<User>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Serializes concurrent first registrations; plain reads stay unblocked.
        sqlx::query("LOCK TABLE users IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let mut query = insert_account(&account);
        query.push(" WHERE NOT EXISTS (SELECT 1 FROM users)");
        query.push(RETURNING_ACCOUNT);
        let row = query
            .build_query_as::<AccountRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        row.map(User::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        sqlx::query_as::<_, AccountRow>(
            "SELECT id, username, password_hash, role, is_active, created_at
             FROM users WHERE username = $1",
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .map(User::try_from)
        .transpose()
    }
}
