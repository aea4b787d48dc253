use std::sync::Arc;

use async_trait::async_trait;

use super::ContentQueryService;
use crate::{
    application::{
        authorization::Principal,
        dto::ContentSummaryDto,
        error::{ApplicationError, ApplicationResult},
        pagination::{PageRequest, PagedSource, PaginatedList, paginate},
    },
    domain::{
        content::{ContentFilter, ContentItem, ContentKind, ContentReadRepository},
        user::permissions,
    },
};

pub struct ListContentQuery {
    pub kind: Option<ContentKind>,
    pub include_drafts: bool,
    pub search: Option<String>,
    pub page: PageRequest,
}

/// Filtered content rows, counted and fetched lazily.
pub struct ContentListSource {
    repo: Arc<dyn ContentReadRepository>,
    filter: ContentFilter,
}

impl ContentListSource {
    pub fn new(repo: Arc<dyn ContentReadRepository>, filter: ContentFilter) -> Self {
        Self { repo, filter }
    }
}

#[async_trait]
impl PagedSource for ContentListSource {
    type Item = ContentItem;

    async fn count(&self) -> ApplicationResult<u64> {
        Ok(self.repo.count(&self.filter).await?)
    }

    async fn fetch(&self, offset: u64, limit: u64) -> ApplicationResult<Vec<ContentItem>> {
        Ok(self.repo.list_page(&self.filter, offset, limit).await?)
    }
}

impl ContentQueryService {
    pub async fn list_content(
        &self,
        actor: Option<&Principal>,
        query: ListContentQuery,
    ) -> ApplicationResult<PaginatedList<ContentSummaryDto>> {
        let include_drafts = Self::normalize_drafts(actor, query.include_drafts)?;
        let search = query
            .search
            .map(|term| term.trim().to_string())
            .filter(|term| !term.is_empty());

        let source = ContentListSource::new(
            Arc::clone(&self.read_repo),
            ContentFilter {
                kind: query.kind,
                include_drafts,
                search,
            },
        );

        paginate(&source, query.page, ContentSummaryDto::from).await
    }

    fn normalize_drafts(actor: Option<&Principal>, include_drafts: bool) -> ApplicationResult<bool> {
        if !include_drafts {
            return Ok(false);
        }
        let actor = actor.ok_or_else(|| {
            ApplicationError::unauthorized("authentication required for draft access")
        })?;
        if !actor.has_permission(permissions::CONTENT_VIEW) {
            return Err(ApplicationError::forbidden(format!(
                "missing permission {}",
                permissions::CONTENT_VIEW
            )));
        }
        Ok(true)
    }
}
