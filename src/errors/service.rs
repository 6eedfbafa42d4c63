use crate::{
    domain::{OrderStatus, ProductRef},
    errors::repository::RepositoryError,
};
use bcrypt::BcryptError;
use jsonwebtoken::errors::Error as JwtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Order must contain at least one item")]
    EmptyOrder,

    #[error("Invalid line item: {0}")]
    InvalidLineItem(String),

    #[error("Product not found: {0}")]
    ProductNotFound(ProductRef),

    #[error("Insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: ProductRef,
        requested: i32,
        available: i32,
    },

    #[error("Order not found")]
    OrderNotFound,

    #[error("Order does not belong to the current user")]
    Unauthorized,

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: OrderStatus, to: OrderStatus },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),

    #[error("JWT error: {0}")]
    Jwt(#[from] JwtError),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid Token")]
    InvalidTokenType,

    #[error("Internal error: {0}")]
    Internal(String),
}
