use crate::{
    abstract_trait::DynMouseService,
    domain::{
        requests::SearchProductsQuery,
        responses::{ApiResponse, MouseResponse},
    },
    errors::HttpError,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/mice",
    tag = "Mouse",
    responses(
        (status = 200, description = "List of mice", body = ApiResponse<Vec<MouseResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_mice(
    Extension(service): Extension<DynMouseService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/mice/available",
    tag = "Mouse",
    responses(
        (status = 200, description = "Mice currently in stock", body = ApiResponse<Vec<MouseResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_available_mice(
    Extension(service): Extension<DynMouseService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_available().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/mice/search",
    tag = "Mouse",
    params(SearchProductsQuery),
    responses(
        (status = 200, description = "Mice matching the term", body = ApiResponse<Vec<MouseResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn search_mice(
    Extension(service): Extension<DynMouseService>,
    Query(params): Query<SearchProductsQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.search(&params.q).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/mice/brand/{brand}",
    tag = "Mouse",
    params(("brand" = String, Path, description = "Brand name, case-insensitive")),
    responses(
        (status = 200, description = "Mice of the brand", body = ApiResponse<Vec<MouseResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_mice_by_brand(
    Extension(service): Extension<DynMouseService>,
    Path(brand): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_brand(&brand).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/mice/type/{type}",
    tag = "Mouse",
    params(("type" = String, Path, description = "Connection type, case-insensitive")),
    responses(
        (status = 200, description = "Mice of the connection type", body = ApiResponse<Vec<MouseResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_mice_by_type(
    Extension(service): Extension<DynMouseService>,
    Path(mouse_type): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_type(&mouse_type).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/mice/{id}",
    tag = "Mouse",
    params(("id" = i64, Path, description = "Mouse ID")),
    responses(
        (status = 200, description = "Mouse details", body = ApiResponse<MouseResponse>),
        (status = 404, description = "Mouse not found")
    )
)]
pub async fn get_mouse(
    Extension(service): Extension<DynMouseService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn mouse_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/mice", get(get_mice))
        .route("/api/mice/available", get(get_available_mice))
        .route("/api/mice/search", get(search_mice))
        .route("/api/mice/brand/{brand}", get(get_mice_by_brand))
        .route("/api/mice/type/{type}", get(get_mice_by_type))
        .route("/api/mice/{id}", get(get_mouse))
        .layer(Extension(app_state.di_container.mouse_service.clone()))
}
