use crate::{
    abstract_trait::DynLaptopService,
    domain::{
        requests::SearchProductsQuery,
        responses::{ApiResponse, LaptopResponse},
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
    path = "/api/laptops",
    tag = "Laptop",
    responses(
        (status = 200, description = "List of laptops", body = ApiResponse<Vec<LaptopResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_laptops(
    Extension(service): Extension<DynLaptopService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/laptops/available",
    tag = "Laptop",
    responses(
        (status = 200, description = "Laptops currently in stock", body = ApiResponse<Vec<LaptopResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_available_laptops(
    Extension(service): Extension<DynLaptopService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_available().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/laptops/search",
    tag = "Laptop",
    params(SearchProductsQuery),
    responses(
        (status = 200, description = "Laptops matching the term", body = ApiResponse<Vec<LaptopResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn search_laptops(
    Extension(service): Extension<DynLaptopService>,
    Query(params): Query<SearchProductsQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.search(&params.q).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/laptops/brand/{brand}",
    tag = "Laptop",
    params(("brand" = String, Path, description = "Brand name, case-insensitive")),
    responses(
        (status = 200, description = "Laptops of the brand", body = ApiResponse<Vec<LaptopResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_laptops_by_brand(
    Extension(service): Extension<DynLaptopService>,
    Path(brand): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_brand(&brand).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/laptops/{id}",
    tag = "Laptop",
    params(("id" = i64, Path, description = "Laptop ID")),
    responses(
        (status = 200, description = "Laptop details", body = ApiResponse<LaptopResponse>),
        (status = 404, description = "Laptop not found")
    )
)]
pub async fn get_laptop(
    Extension(service): Extension<DynLaptopService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn laptop_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/laptops", get(get_laptops))
        .route("/api/laptops/available", get(get_available_laptops))
        .route("/api/laptops/search", get(search_laptops))
        .route("/api/laptops/brand/{brand}", get(get_laptops_by_brand))
        .route("/api/laptops/{id}", get(get_laptop))
        .layer(Extension(app_state.di_container.laptop_service.clone()))
}
