use crate::domain::content::{ContentItem, ContentKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentDto {
    pub id: i64,
    pub kind: ContentKind,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub body: String,
    pub published: bool,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub sort_order: i32,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<ContentItem> for ContentDto {
    fn from(item: ContentItem) -> Self {
        Self {
            id: item.id.into(),
            kind: item.kind,
            title: item.title.into(),
            slug: item.slug.into(),
            summary: item.summary.into(),
            body: item.body,
            published: item.published,
            published_at: item.published_at,
            sort_order: item.sort_order,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// Listing projection: everything but the body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentSummaryDto {
    pub id: i64,
    pub kind: ContentKind,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub published: bool,
    pub sort_order: i32,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<ContentItem> for ContentSummaryDto {
    fn from(item: ContentItem) -> Self {
        Self {
            id: item.id.into(),
            kind: item.kind,
            title: item.title.into(),
            slug: item.slug.into(),
            summary: item.summary.into(),
            published: item.published,
            sort_order: item.sort_order,
            updated_at: item.updated_at,
        }
    }
}
