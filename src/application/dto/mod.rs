pub mod auth;
pub mod contact;
pub mod content;
pub mod dashboard;
pub mod serde_time;
pub mod users;

pub use auth::{AuthTokenDto, TokenSubject};
pub use contact::{ContactMessageDto, ContactReceiptDto};
pub use content::{ContentDto, ContentSummaryDto};
pub use dashboard::{
    DashboardDto, DashboardSectionDto, DashboardSummaryDto, KindCountDto, QuickActionDto,
};
pub use users::{ProfileDto, UserDto};
