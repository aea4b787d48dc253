pub mod authorization;
pub mod cache_keys;
pub mod cancellation;
pub mod commands;
pub mod dto;
pub mod error;
pub mod notifications;
pub mod pagination;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
