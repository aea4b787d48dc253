// src/infrastructure/repositories/postgres_content.rs
use super::{map_sqlx, to_i64};
use crate::domain::content::{
    ContentFilter, ContentId, ContentItem, ContentKind, ContentReadRepository, ContentSlug,
    ContentSummary, ContentTitle, ContentUpdate, ContentWriteRepository, NewContentItem,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const CONTENT_COLUMNS: &str = "id, kind, title, slug, summary, body, published, published_at, \
     sort_order, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresContentWriteRepository {
    pool: PgPool,
}

impl PostgresContentWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresContentReadRepository {
    pool: PgPool,
}

impl PostgresContentReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentRow {
    id: i64,
    kind: String,
    title: String,
    slug: String,
    summary: String,
    body: String,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    sort_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContentRow> for ContentItem {
    type Error = DomainError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        Ok(ContentItem {
            id: ContentId::new(row.id)?,
            kind: row.kind.parse::<ContentKind>()?,
            title: ContentTitle::new(row.title)?,
            slug: ContentSlug::new(row.slug)?,
            summary: ContentSummary::new(row.summary)?,
            body: row.body,
            published: row.published,
            published_at: row.published_at,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ContentWriteRepository for PostgresContentWriteRepository {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem> {
        let NewContentItem {
            kind,
            title,
            slug,
            summary,
            body,
            published,
            published_at,
            sort_order,
            created_at,
        } = item;

        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "INSERT INTO content_items
                (kind, title, slug, summary, body, published, published_at, sort_order, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
             RETURNING {CONTENT_COLUMNS}"
        ))
        .bind(kind.as_str())
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(summary.as_str())
        .bind(body)
        .bind(published)
        .bind(published_at)
        .bind(sort_order)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ContentItem::try_from(row)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem> {
        let ContentUpdate {
            id,
            title,
            slug,
            summary,
            body,
            sort_order,
            publish_state,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE content_items SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(summary) = summary {
            builder.push(", summary = ");
            builder.push_bind(String::from(summary));
        }
        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body);
        }
        if let Some(sort_order) = sort_order {
            builder.push(", sort_order = ");
            builder.push_bind(sort_order);
        }
        if let Some(state) = publish_state {
            builder.push(", published = ");
            builder.push_bind(state.published);
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(CONTENT_COLUMNS);

        let row = builder
            .build_query_as::<ContentRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::Conflict("content update conflict, please retry".into()))?;

        ContentItem::try_from(row)
    }

    async fn delete(&self, id: ContentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM content_items WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("content not found".into()));
        }
        Ok(())
    }
}

impl PostgresContentReadRepository {
    fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ContentFilter) {
        builder.push(" WHERE TRUE");
        if let Some(kind) = filter.kind {
            builder.push(" AND kind = ");
            builder.push_bind(kind.as_str());
        }
        if !filter.include_drafts {
            builder.push(" AND published = TRUE");
        }
        if let Some(term) = filter.search.as_deref() {
            let pattern = format!("%{}%", escape_like(term));
            builder.push(" AND (title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR summary ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[async_trait]
impl ContentReadRepository for PostgresContentReadRepository {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentItem>> {
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {CONTENT_COLUMNS} FROM content_items WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ContentItem::try_from).transpose()
    }

    async fn find_by_slug(
        &self,
        kind: ContentKind,
        slug: &ContentSlug,
    ) -> DomainResult<Option<ContentItem>> {
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {CONTENT_COLUMNS} FROM content_items WHERE kind = $1 AND slug = $2"
        ))
        .bind(kind.as_str())
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ContentItem::try_from).transpose()
    }

    async fn slug_exists(
        &self,
        kind: ContentKind,
        slug: &str,
        exclude: Option<ContentId>,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM content_items
                WHERE kind = $1 AND slug = $2 AND ($3::BIGINT IS NULL OR id <> $3)
             )",
        )
        .bind(kind.as_str())
        .bind(slug)
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn count(&self, filter: &ContentFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(1) FROM content_items");
        Self::apply_filter(&mut builder, filter);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map(|count| count.unsigned_abs())
            .map_err(map_sqlx)
    }

    async fn list_page(
        &self,
        filter: &ContentFilter,
        offset: u64,
        limit: u64,
    ) -> DomainResult<Vec<ContentItem>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(CONTENT_COLUMNS);
        builder.push(" FROM content_items");
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY sort_order ASC, created_at DESC, id DESC LIMIT ");
        builder.push_bind(to_i64(limit));
        builder.push(" OFFSET ");
        builder.push_bind(to_i64(offset));

        let rows = builder
            .build_query_as::<ContentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ContentItem::try_from).collect()
    }
}
