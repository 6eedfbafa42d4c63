use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::EmptyOrder
            | ServiceError::InvalidLineItem(_)
            | ServiceError::InvalidStatusTransition { .. } => HttpError::BadRequest(err.to_string()),

            ServiceError::ProductNotFound(_) | ServiceError::OrderNotFound => {
                HttpError::NotFound(err.to_string())
            }

            ServiceError::InsufficientStock { .. } => HttpError::Conflict(err.to_string()),

            ServiceError::Unauthorized => HttpError::Forbidden(err.to_string()),

            ServiceError::InvalidCredentials
            | ServiceError::TokenExpired
            | ServiceError::InvalidTokenType => HttpError::Unauthorized(err.to_string()),

            ServiceError::Jwt(e) => HttpError::Unauthorized(format!("JWT error: {e}")),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}
