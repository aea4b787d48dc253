mod manage;
mod service;
mod submit;

pub use manage::MarkContactMessageReadCommand;
pub use service::ContactCommandService;
pub use submit::SubmitContactMessageCommand;
