// src/presentation/http/openapi.rs
use crate::application::{
    dto::{ContactMessageDto, ContentSummaryDto},
    pagination::PaginatedList,
};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContentListResponse {
    pub items: Vec<ContentSummaryDto>,
    pub total_count: u64,
    pub page_number: i64,
    pub page_size: i64,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactMessageListResponse {
    pub items: Vec<ContactMessageDto>,
    pub total_count: u64,
    pub page_number: i64,
    pub page_size: i64,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::content::list_content,
        crate::presentation::http::controllers::content::get_content_by_slug,
        crate::presentation::http::controllers::content::get_content_by_id,
        crate::presentation::http::controllers::content::create_content,
        crate::presentation::http::controllers::content::update_content,
        crate::presentation::http::controllers::content::set_publish_state,
        crate::presentation::http::controllers::content::delete_content,
        crate::presentation::http::controllers::contact::submit_contact_message,
        crate::presentation::http::controllers::contact::list_contact_messages,
        crate::presentation::http::controllers::contact::get_contact_message,
        crate::presentation::http::controllers::contact::mark_contact_message_read,
        crate::presentation::http::controllers::contact::delete_contact_message,
        crate::presentation::http::controllers::dashboard::dashboard,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ContentListResponse,
            ContactMessageListResponse,
            crate::presentation::http::error::ErrorBody,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::content::CreateContentRequest,
            crate::presentation::http::controllers::content::UpdateContentRequest,
            crate::presentation::http::controllers::content::PublishRequest,
            crate::presentation::http::controllers::contact::ContactRequest,
            crate::presentation::http::controllers::contact::MarkReadRequest,
            crate::application::authorization::Claim,
            crate::application::dto::UserDto,
            crate::application::dto::ProfileDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::ContentDto,
            crate::application::dto::ContentSummaryDto,
            crate::application::dto::ContactMessageDto,
            crate::application::dto::ContactReceiptDto,
            crate::application::dto::DashboardDto,
            crate::application::dto::DashboardSummaryDto,
            crate::application::dto::DashboardSectionDto,
            crate::application::dto::QuickActionDto,
            crate::application::dto::KindCountDto,
            crate::domain::content::ContentKind,
            crate::domain::user::Role
        )
    ),
    tags(
        (name = "Auth", description = "Accounts and bearer tokens"),
        (name = "Content", description = "Services, case studies, pages, testimonials and partners"),
        (name = "Contact", description = "Public contact form and the admin inbox"),
        (name = "Admin", description = "Back-office dashboard"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Showcase CMS API",
        description = "Agency website backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if !urls.iter().any(|url| url == "http://localhost:3000") {
            urls.push("http://localhost:3000".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and Redoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

impl From<PaginatedList<ContentSummaryDto>> for ContentListResponse {
    fn from(page: PaginatedList<ContentSummaryDto>) -> Self {
        Self {
            items: page.items,
            total_count: page.total_count,
            page_number: page.page_number,
            page_size: page.page_size,
            total_pages: page.total_pages,
            has_previous_page: page.has_previous_page,
            has_next_page: page.has_next_page,
        }
    }
}

impl From<PaginatedList<ContactMessageDto>> for ContactMessageListResponse {
    fn from(page: PaginatedList<ContactMessageDto>) -> Self {
        Self {
            items: page.items,
            total_count: page.total_count,
            page_number: page.page_number,
            page_size: page.page_size,
            total_pages: page.total_pages,
            has_previous_page: page.has_previous_page,
            has_next_page: page.has_next_page,
        }
    }
}
