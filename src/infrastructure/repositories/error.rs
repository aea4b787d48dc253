use crate::domain::errors::DomainError;

const CNT_CONTENT_SLUG: &str = "content_items_kind_slug_key";
const CNT_CONTENT_PUBLISHED_CHECK: &str = "content_items_published_requires_timestamp_chk";
const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_CONTACT_REFERENCE: &str = "contact_messages_reference_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_CONTENT_SLUG => DomainError::Conflict("slug already exists".into()),
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_CONTACT_REFERENCE => {
                        DomainError::Conflict("message reference already exists".into())
                    }
                    CNT_CONTENT_PUBLISHED_CHECK => DomainError::Validation(
                        "published content requires published_at".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            tracing::warn!(error = %err, "database unreachable");
            DomainError::Unavailable(format!("database unavailable: {err}"))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Repository offsets and limits are unsigned; Postgres wants BIGINT.
pub fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeouts_are_unavailable() {
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Unavailable(_)
        ));
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::Persistence(_)
        ));
    }

    #[test]
    fn clamps_large_offsets() {
        assert_eq!(to_i64(5), 5);
        assert_eq!(to_i64(u64::MAX), i64::MAX);
    }
}
