// src/presentation/http/controllers/content.rs
use crate::application::{
    commands::content::{
        CreateContentCommand, DeleteContentCommand, SetPublishStateCommand, UpdateContentCommand,
    },
    dto::ContentDto,
    pagination::{DEFAULT_PAGE_SIZE, PageRequest},
    queries::content::{GetContentBySlugQuery, ListContentQuery},
};
use crate::domain::content::ContentKind;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::openapi::{ContentListResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

const fn default_page() -> i64 {
    1
}

const fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ContentListParams {
    pub kind: Option<ContentKind>,
    #[serde(default)]
    pub include_drafts: bool,
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateContentRequest {
    pub kind: ContentKind,
    pub title: String,
    pub summary: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub publish: bool,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateContentRequest {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub publish: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/content",
    params(ContentListParams),
    responses(
        (status = 200, description = "One page of content items.", body = ContentListResponse),
        (status = 401, description = "Drafts requested anonymously.", body = crate::presentation::http::error::ErrorBody),
        (status = 403, description = "Drafts requested without Content.View.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Content"
)]
pub async fn list_content(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<ContentListParams>,
) -> HttpResult<Json<ContentListResponse>> {
    let query = ListContentQuery {
        kind: params.kind,
        include_drafts: params.include_drafts,
        search: params.search,
        page: PageRequest::new(params.page, params.page_size),
    };

    state
        .services
        .content_queries
        .list_content(actor.0.as_ref(), query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/content/{kind}/{slug}",
    params(
        ("kind" = ContentKind, Path, description = "Content kind"),
        ("slug" = String, Path, description = "Slug, unique per kind")
    ),
    responses(
        (status = 200, description = "The content item.", body = ContentDto),
        (status = 404, description = "No visible item with that slug.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Content"
)]
pub async fn get_content_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path((kind, slug)): Path<(ContentKind, String)>,
) -> HttpResult<Json<ContentDto>> {
    state
        .services
        .content_queries
        .get_content_by_slug(actor.0.as_ref(), GetContentBySlugQuery { kind, slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/content/{id}",
    params(("id" = i64, Path, description = "Content id")),
    responses(
        (status = 200, description = "The content item, drafts included.", body = ContentDto),
        (status = 404, description = "Unknown id.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Content"
)]
pub async fn get_content_by_id(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContentDto>> {
    state
        .services
        .content_queries
        .get_content_by_id(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/content",
    request_body = CreateContentRequest,
    responses(
        (status = 201, description = "Created; the slug is unique within its kind.", body = ContentDto),
        (status = 400, description = "Invalid title or summary.", body = crate::presentation::http::error::ErrorBody),
        (status = 503, description = "Server shutting down.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Content"
)]
pub async fn create_content(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateContentRequest>,
) -> HttpResult<(StatusCode, Json<ContentDto>)> {
    let command = CreateContentCommand {
        kind: payload.kind,
        title: payload.title,
        summary: payload.summary,
        body: payload.body,
        publish: payload.publish,
        sort_order: payload.sort_order,
    };

    state
        .services
        .content_commands
        .create_content(&user, command, &state.shutdown)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/content/{id}",
    params(("id" = i64, Path, description = "Content id")),
    request_body = UpdateContentRequest,
    responses(
        (status = 200, description = "Updated; a new title regenerates the slug.", body = ContentDto),
        (status = 409, description = "Concurrent modification.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Content"
)]
pub async fn update_content(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateContentRequest>,
) -> HttpResult<Json<ContentDto>> {
    let command = UpdateContentCommand {
        id,
        title: payload.title,
        summary: payload.summary,
        body: payload.body,
        sort_order: payload.sort_order,
    };

    state
        .services
        .content_commands
        .update_content(&user, command, &state.shutdown)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/content/{id}/publish",
    params(("id" = i64, Path, description = "Content id")),
    request_body = PublishRequest,
    responses((status = 200, description = "Publish state applied.", body = ContentDto)),
    tag = "Content"
)]
pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<ContentDto>> {
    let command = SetPublishStateCommand {
        id,
        publish: payload.publish,
    };

    state
        .services
        .content_commands
        .set_publish_state(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/content/{id}",
    params(("id" = i64, Path, description = "Content id")),
    responses((status = 200, description = "Deleted.", body = StatusResponse)),
    tag = "Content"
)]
pub async fn delete_content(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .content_commands
        .delete_content(&user, DeleteContentCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
