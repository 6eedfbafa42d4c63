use crate::{
    abstract_trait::DynOrderService,
    domain::{
        requests::{CreateOrderRequest, UpdateOrderStatusRequest},
        responses::{ApiResponse, OrderResponse},
    },
    errors::HttpError,
    middleware::{AuthUser, SimpleValidatedJson, auth_middleware},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Insufficient stock")
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderService>,
    Extension(user): Extension<AuthUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order(user.id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Orders of the current user", body = ApiResponse<Vec<OrderResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderService>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_user_orders(user.id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = ApiResponse<OrderResponse>),
        (status = 403, description = "Order belongs to another user"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderService>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_order(id, user.id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order status updated", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Invalid status transition"),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn update_order_status(
    Extension(service): Extension<DynOrderService>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    if !user.is_admin() {
        return Err(HttpError::Forbidden(
            "Admin role required to update order status".to_string(),
        ));
    }

    let response = service.update_order_status(id, body.status).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order cancelled and stock restored", body = serde_json::Value),
        (status = 400, description = "Order is no longer pending"),
        (status = 403, description = "Order belongs to another user"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderService>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_order(id, user.id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", post(create_order))
        .route("/api/orders", get(get_orders))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}/status", put(update_order_status))
        .route("/api/orders/{id}", delete(delete_order))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
