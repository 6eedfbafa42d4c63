use crate::{
    abstract_trait::DynAuthService,
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::HttpError,
    middleware::{AuthUser, SimpleValidatedJson, auth_middleware},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/healthchecker",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = serde_json::Value)
    )
)]
pub async fn health_checker_handler() -> impl IntoResponse {
    Json(json!({
        "status": "success",
        "message": "Laptop store API is up and running"
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = ApiResponse<UserResponse>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn register_user_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<TokenResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login_user_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_me_handler(
    Extension(service): Extension<DynAuthService>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_me(user.id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/auth/register", post(register_user_handler))
        .route("/api/auth/login", post(login_user_handler))
        .route("/api/healthchecker", get(health_checker_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()));

    let private_routes = OpenApiRouter::new()
        .route("/api/auth/me", get(get_me_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.auth_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(private_routes)
}
