use std::{sync::Arc, time::Duration};

use crate::{
    application::{
        authorization::{PermissionGate, Principal, ensure_permission},
        cache_keys,
        dto::{
            DashboardDto, DashboardSectionDto, DashboardSummaryDto, KindCountDto, QuickActionDto,
        },
        error::ApplicationResult,
        ports::cache::CacheStore,
        queries::cached,
    },
    domain::{
        contact::ContactMessageRepository,
        content::{ContentFilter, ContentKind, ContentReadRepository},
        user::permissions,
    },
};

pub struct DashboardQueryService {
    content_repo: Arc<dyn ContentReadRepository>,
    contact_repo: Arc<dyn ContactMessageRepository>,
    cache: Arc<dyn CacheStore>,
    cache_ttl: Duration,
}

impl DashboardQueryService {
    pub fn new(
        content_repo: Arc<dyn ContentReadRepository>,
        contact_repo: Arc<dyn ContactMessageRepository>,
        cache: Arc<dyn CacheStore>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            content_repo,
            contact_repo,
            cache,
            cache_ttl,
        }
    }

    pub async fn dashboard(&self, actor: &Principal) -> ApplicationResult<DashboardDto> {
        ensure_permission(actor, permissions::DASHBOARD_VIEW)?;
        let gate = PermissionGate::new(Some(actor));
        let summary = self.summary().await?;

        let drafts: u64 = summary.content.iter().map(|kind| kind.drafts).sum();
        let sections = [
            gate.render(permissions::CONTENT_VIEW, || {
                section(
                    "content",
                    "Content",
                    "/api/v1/content?include_drafts=true",
                    Some(drafts),
                )
            }),
            gate.render(permissions::CONTACTS_VIEW, || {
                section(
                    "contact-messages",
                    "Contact messages",
                    "/api/v1/admin/contact-messages",
                    Some(summary.unread_contact_messages),
                )
            }),
        ];

        let quick_actions = [
            gate.render(permissions::CONTENT_CREATE, || {
                action("New content item", "POST", "/api/v1/admin/content")
            }),
            gate.render(permissions::CONTACTS_MANAGE, || {
                action(
                    "Review unread messages",
                    "GET",
                    "/api/v1/admin/contact-messages?unread_only=true",
                )
            }),
            gate.render(permissions::USERS_MANAGE, || {
                action("Invite a user", "POST", "/api/v1/auth/register")
            }),
        ];

        Ok(DashboardDto {
            greeting: format!("Welcome back, {}", actor.username),
            summary: Some(summary),
            sections: sections.into_iter().flatten().collect(),
            quick_actions: quick_actions.into_iter().flatten().collect(),
        })
    }

    async fn summary(&self) -> ApplicationResult<DashboardSummaryDto> {
        let key = cache_keys::DASHBOARD_SUMMARY;
        if let Some(hit) = cached::read::<DashboardSummaryDto>(self.cache.as_ref(), key).await {
            return Ok(hit);
        }

        let mut content = Vec::with_capacity(ContentKind::ALL.len());
        for kind in ContentKind::ALL {
            let total = self
                .content_repo
                .count(&ContentFilter {
                    kind: Some(kind),
                    include_drafts: true,
                    search: None,
                })
                .await?;
            let published = self
                .content_repo
                .count(&ContentFilter {
                    kind: Some(kind),
                    include_drafts: false,
                    search: None,
                })
                .await?;
            content.push(KindCountDto {
                kind,
                total,
                drafts: total.saturating_sub(published),
            });
        }

        let summary = DashboardSummaryDto {
            content,
            contact_messages: self.contact_repo.count(false).await?,
            unread_contact_messages: self.contact_repo.count(true).await?,
        };
        cached::write(self.cache.as_ref(), key, &summary, self.cache_ttl).await;
        Ok(summary)
    }
}

fn section(key: &str, title: &str, href: &str, badge: Option<u64>) -> DashboardSectionDto {
    DashboardSectionDto {
        key: key.to_string(),
        title: title.to_string(),
        href: href.to_string(),
        badge,
    }
}

fn action(label: &str, method: &str, href: &str) -> QuickActionDto {
    QuickActionDto {
        label: label.to_string(),
        method: method.to_string(),
        href: href.to_string(),
    }
}
