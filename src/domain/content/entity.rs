// src/domain/content/entity.rs
use crate::domain::content::value_objects::{
    ContentId, ContentKind, ContentSlug, ContentSummary, ContentTitle,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ContentItem {
    pub id: ContentId,
    pub kind: ContentKind,
    pub title: ContentTitle,
    pub slug: ContentSlug,
    pub summary: ContentSummary,
    pub body: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContentItem {
    pub kind: ContentKind,
    pub title: ContentTitle,
    pub slug: ContentSlug,
    pub summary: ContentSummary,
    pub body: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update guarded by the `updated_at` value the caller last read.
#[derive(Debug, Clone)]
pub struct ContentUpdate {
    pub id: ContentId,
    pub title: Option<ContentTitle>,
    pub slug: Option<ContentSlug>,
    pub summary: Option<ContentSummary>,
    pub body: Option<String>,
    pub sort_order: Option<i32>,
    pub publish_state: Option<PublishStateUpdate>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentUpdate {
    pub const fn new(id: ContentId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            summary: None,
            body: None,
            sort_order: None,
            publish_state: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: ContentTitle, slug: ContentSlug) -> Self {
        self.title = Some(title);
        self.slug = Some(slug);
        self
    }

    pub fn with_summary(mut self, summary: ContentSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub const fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    pub const fn with_publish_state(
        mut self,
        published: bool,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            published,
            published_at,
        });
        self
    }

    pub const fn touched_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.summary.is_none()
            && self.body.is_none()
            && self.sort_order.is_none()
            && self.publish_state.is_none()
    }
}

/// Listing filter shared by counting and page fetching.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    pub kind: Option<ContentKind>,
    pub include_drafts: bool,
    pub search: Option<String>,
}
