// src/presentation/http/routes.rs
use crate::application::authorization::policy::AUTHENTICATED_POLICY;
use crate::domain::user::permissions;
use crate::presentation::http::middleware::{public_write_rate_limit_layer, require_policy};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, contact, content, dashboard},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    body::Body,
    http::{HeaderValue, Method, Request},
    middleware::{self, Next},
    routing::{MethodRouter, delete, get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Runs `route` only when the named policy admits the caller.
fn guarded(policy: &'static str, route: MethodRouter) -> MethodRouter {
    route.route_layer(middleware::from_fn(
        move |req: Request<Body>, next: Next| require_policy(req, next, policy),
    ))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, true, &[])
}

/// `rate_limit` needs the peer address, so in-process callers without
/// `ConnectInfo` switch it off.
pub fn build_router_with_options(
    state: HttpState,
    rate_limit: bool,
    allowed_origins: &[String],
) -> Router {
    let mut public_writes = Router::new()
        .route("/api/v1/contact", post(contact::submit_contact_message))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/register", post(auth::register));
    if rate_limit {
        public_writes = public_writes.layer(public_write_rate_limit_layer());
    }

    let admin = Router::new()
        .route(
            "/api/v1/admin/dashboard",
            guarded(permissions::DASHBOARD_VIEW, get(dashboard::dashboard)),
        )
        .route(
            "/api/v1/admin/content",
            guarded(permissions::CONTENT_CREATE, post(content::create_content)),
        )
        .route(
            "/api/v1/admin/content/{id}",
            guarded(permissions::CONTENT_VIEW, get(content::get_content_by_id))
                .merge(guarded(permissions::CONTENT_EDIT, put(content::update_content)))
                .merge(guarded(
                    permissions::CONTENT_DELETE,
                    delete(content::delete_content),
                )),
        )
        .route(
            "/api/v1/admin/content/{id}/publish",
            guarded(
                permissions::CONTENT_PUBLISH,
                post(content::set_publish_state),
            ),
        )
        .route(
            "/api/v1/admin/contact-messages",
            guarded(
                permissions::CONTACTS_VIEW,
                get(contact::list_contact_messages),
            ),
        )
        .route(
            "/api/v1/admin/contact-messages/{id}",
            guarded(permissions::CONTACTS_VIEW, get(contact::get_contact_message)).merge(
                guarded(
                    permissions::CONTACTS_MANAGE,
                    delete(contact::delete_contact_message),
                ),
            ),
        )
        .route(
            "/api/v1/admin/contact-messages/{id}/read",
            guarded(
                permissions::CONTACTS_MANAGE,
                post(contact::mark_contact_message_read),
            ),
        );

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/content", get(content::list_content))
        .route(
            "/api/v1/content/{kind}/{slug}",
            get(content::get_content_by_slug),
        )
        .route(
            "/api/v1/auth/me",
            guarded(AUTHENTICATED_POLICY, get(auth::profile)),
        )
        .merge(public_writes)
        .merge(admin)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
