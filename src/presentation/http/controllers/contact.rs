// src/presentation/http/controllers/contact.rs
use crate::application::{
    commands::contact::{MarkContactMessageReadCommand, SubmitContactMessageCommand},
    dto::{ContactMessageDto, ContactReceiptDto},
    pagination::{DEFAULT_PAGE_SIZE, PageRequest},
    queries::contact::ListContactMessagesQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::{ContactMessageListResponse, StatusResponse};
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

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct InboxParams {
    #[serde(default)]
    pub unread_only: bool,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkReadRequest {
    #[serde(default = "mark_read_default")]
    pub read: bool,
}

const fn mark_read_default() -> bool {
    true
}

#[utoipa::path(
    post,
    path = "/api/v1/contact",
    request_body = ContactRequest,
    responses(
        (status = 202, description = "Message stored; keep the reference.", body = ContactReceiptDto),
        (status = 400, description = "Invalid form fields.", body = crate::presentation::http::error::ErrorBody),
        (status = 429, description = "Too many submissions.")
    ),
    security(()),
    tag = "Contact"
)]
pub async fn submit_contact_message(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ContactRequest>,
) -> HttpResult<(StatusCode, Json<ContactReceiptDto>)> {
    let command = SubmitContactMessageCommand {
        name: payload.name,
        email: payload.email,
        subject: payload.subject,
        body: payload.message,
    };

    state
        .services
        .contact_commands
        .submit_contact_message(command)
        .await
        .into_http()
        .map(|receipt| (StatusCode::ACCEPTED, Json(receipt)))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/contact-messages",
    params(InboxParams),
    responses((status = 200, description = "Inbox page, newest first.", body = ContactMessageListResponse)),
    tag = "Contact"
)]
pub async fn list_contact_messages(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<InboxParams>,
) -> HttpResult<Json<ContactMessageListResponse>> {
    let query = ListContactMessagesQuery {
        unread_only: params.unread_only,
        page: PageRequest::new(params.page, params.page_size),
    };

    state
        .services
        .contact_queries
        .list_contact_messages(&user, query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/contact-messages/{id}",
    params(("id" = i64, Path, description = "Message id")),
    responses(
        (status = 200, description = "The message.", body = ContactMessageDto),
        (status = 404, description = "Unknown id.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Contact"
)]
pub async fn get_contact_message(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContactMessageDto>> {
    state
        .services
        .contact_queries
        .get_contact_message(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/contact-messages/{id}/read",
    params(("id" = i64, Path, description = "Message id")),
    request_body = MarkReadRequest,
    responses((status = 200, description = "Read flag applied.", body = ContactMessageDto)),
    tag = "Contact"
)]
pub async fn mark_contact_message_read(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<MarkReadRequest>,
) -> HttpResult<Json<ContactMessageDto>> {
    state
        .services
        .contact_commands
        .mark_contact_message_read(
            &user,
            MarkContactMessageReadCommand {
                id,
                read: payload.read,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/contact-messages/{id}",
    params(("id" = i64, Path, description = "Message id")),
    responses((status = 200, description = "Deleted.", body = StatusResponse)),
    tag = "Contact"
)]
pub async fn delete_contact_message(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .contact_commands
        .delete_contact_message(&user, id)
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
