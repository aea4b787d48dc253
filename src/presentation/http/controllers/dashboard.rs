use crate::application::dto::DashboardDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/v1/admin/dashboard",
    responses(
        (status = 200, description = "Summary plus the sections and actions the caller may use.", body = DashboardDto),
        (status = 403, description = "Missing Dashboard.View.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Admin"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<DashboardDto>> {
    state
        .services
        .dashboard_queries
        .dashboard(&user)
        .await
        .into_http()
        .map(Json)
}
