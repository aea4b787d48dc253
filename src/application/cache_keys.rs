// src/application/cache_keys.rs
use crate::domain::content::{ContentEvent, ContentKind};

pub const DASHBOARD_SUMMARY: &str = "dashboard:summary";

pub fn content_by_slug(kind: ContentKind, slug: &str) -> String {
    format!("content:{kind}:slug:{slug}")
}

/// Keys made stale by a content mutation: affected slugs, then the dashboard.
pub fn for_content_event(event: &ContentEvent) -> Vec<String> {
    let kind = event.kind();
    event
        .affected_slugs()
        .into_iter()
        .map(|slug| content_by_slug(kind, slug.as_str()))
        .chain(std::iter::once(DASHBOARD_SUMMARY.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{ContentId, ContentSlug};

    #[test]
    fn rename_invalidates_old_and_new_slug() {
        let event = ContentEvent::Updated {
            id: ContentId(4),
            kind: ContentKind::CaseStudy,
            previous_slug: ContentSlug::new("acme").unwrap(),
            slug: ContentSlug::new("acme-rebrand").unwrap(),
        };
        assert_eq!(
            for_content_event(&event),
            [
                "content:case_study:slug:acme",
                "content:case_study:slug:acme-rebrand",
                "dashboard:summary",
            ]
        );
    }
}
