pub mod entity;
pub mod events;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{ContentFilter, ContentItem, ContentUpdate, NewContentItem};
pub use events::ContentEvent;
pub use repository::{ContentReadRepository, ContentWriteRepository};
pub use value_objects::{ContentId, ContentKind, ContentSlug, ContentSummary, ContentTitle};
