// src/presentation/http/state.rs
use crate::application::{cancellation::CancellationSignal, services::ApplicationServices};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Fired when the server starts shutting down.
    pub shutdown: CancellationSignal,
}
