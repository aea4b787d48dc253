// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_contact;
mod postgres_content;
mod postgres_user;

pub use error::{map_sqlx, to_i64};
pub use postgres_contact::PostgresContactMessageRepository;
pub use postgres_content::{PostgresContentReadRepository, PostgresContentWriteRepository};
pub use postgres_user::PostgresUserRepository;
