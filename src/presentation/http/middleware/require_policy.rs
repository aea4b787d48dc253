// src/presentation/http/middleware/require_policy.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Enforces a named authorization policy before the handler runs. Names with
/// the `Permissions.` prefix resolve to a permission-claim policy on demand.
///
/// Usage: `axum::middleware::from_fn(move |req, next| require_policy(req, next, permissions::CONTENT_EDIT))`
pub async fn require_policy(mut req: Request<Body>, next: Next, policy: &'static str) -> Response {
    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let header = req.headers().typed_get::<Authorization<Bearer>>();
    let token = header.as_ref().map(Authorization::token);

    match state.services.authorize(token, policy).await {
        Ok(principal) => {
            if let Some(principal) = principal {
                tracing::debug!(policy, user = %principal.username, "policy satisfied");
                req.extensions_mut().insert(principal);
            }
            next.run(req).await
        }
        Err(err) => {
            tracing::debug!(policy, error = %err, "policy rejected request");
            HttpError::from_error(err).into_response()
        }
    }
}
