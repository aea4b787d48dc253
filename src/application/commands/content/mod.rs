// src/application/commands/content/mod.rs
mod create;
mod delete;
mod publish;
mod service;
mod update;

pub use create::{CreateContentCommand, CreateContentCommandBuilder};
pub use delete::DeleteContentCommand;
pub use publish::SetPublishStateCommand;
pub use service::ContentCommandService;
pub use update::UpdateContentCommand;
