mod get;
mod list;
mod service;

pub use get::GetContentBySlugQuery;
pub use list::{ContentListSource, ListContentQuery};
pub use service::ContentQueryService;
