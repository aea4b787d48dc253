use crate::domain::content::ContentKind;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KindCountDto {
    pub kind: ContentKind,
    pub total: u64,
    pub drafts: u64,
}

/// Cached aggregate; identical for every viewer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    pub content: Vec<KindCountDto>,
    pub contact_messages: u64,
    pub unread_contact_messages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardSectionDto {
    pub key: String,
    pub title: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuickActionDto {
    pub label: String,
    pub method: String,
    pub href: String,
}

/// Per-viewer dashboard: sections and actions the viewer may not use are omitted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub greeting: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<DashboardSummaryDto>,
    pub sections: Vec<DashboardSectionDto>,
    pub quick_actions: Vec<QuickActionDto>,
}
