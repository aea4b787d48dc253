// src/domain/content/events.rs
use crate::domain::content::value_objects::{ContentId, ContentKind, ContentSlug};

#[derive(Debug, Clone)]
pub enum ContentEvent {
    Created {
        id: ContentId,
        kind: ContentKind,
        slug: ContentSlug,
    },
    Updated {
        id: ContentId,
        kind: ContentKind,
        previous_slug: ContentSlug,
        slug: ContentSlug,
    },
    Deleted {
        id: ContentId,
        kind: ContentKind,
        slug: ContentSlug,
    },
}

impl ContentEvent {
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Created { kind, .. } | Self::Updated { kind, .. } | Self::Deleted { kind, .. } => {
                *kind
            }
        }
    }

    /// Slugs whose public representation changed, old slug first on renames.
    pub fn affected_slugs(&self) -> Vec<&ContentSlug> {
        match self {
            Self::Created { slug, .. } | Self::Deleted { slug, .. } => vec![slug],
            Self::Updated {
                previous_slug,
                slug,
                ..
            } if previous_slug != slug => vec![previous_slug, slug],
            Self::Updated { slug, .. } => vec![slug],
        }
    }
}
