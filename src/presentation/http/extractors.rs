// src/presentation/http/extractors.rs
use crate::{
    application::{authorization::Principal, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// A verified principal. Reuses the one the policy interceptor already
/// stored in request extensions, otherwise verifies the bearer token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Principal);

#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<Principal>);

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map(|Extension(app_state)| app_state)
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })
}

async fn resolve_principal<S: Send + Sync>(
    parts: &mut Parts,
    state: &S,
) -> Result<Option<Principal>, HttpError> {
    if let Some(principal) = parts.extensions.get::<Principal>() {
        return Ok(Some(principal.clone()));
    }

    let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() else {
        return Ok(None);
    };

    let app_state = app_state(parts, state).await?;
    let principal = app_state
        .services
        .token_manager()
        .authenticate(header.token())
        .await
        .map_err(HttpError::from_error)?;
    Ok(Some(principal))
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        resolve_principal(parts, state).await?.map(Self).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized(
                "missing Authorization header",
            ))
        })
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        resolve_principal(parts, state).await.map(Self)
    }
}
