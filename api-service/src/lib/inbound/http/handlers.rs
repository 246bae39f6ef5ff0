use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::TokenAuthError;
use crate::domain::simple::errors::SimpleError;

pub mod create_simple;
pub mod delete_simple;
pub mod get_simple;
pub mod health;
pub mod list_simples;
pub mod login;
pub mod me;
pub mod sign_up;
pub mod update_simple;

/// Successful response: status plus the `{message, data}` envelope.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: &str, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(message, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    message: String,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(message: &str, data: T) -> Self {
        Self {
            message: message.to_string(),
            data,
        }
    }
}

/// Failed response: status plus the `{error}` envelope.
///
/// Internal faults (hashing, signing, database) surface with a generic
/// message only; detail stays in the server logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ApiErrorBody { error: message })).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::EmailAlreadyExists(_) => ApiError::Conflict("User already exists".to_string()),
            AuthError::PasswordHash(_) => {
                ApiError::InternalServerError("Failed to process password".to_string())
            }
            AuthError::Configuration | AuthError::TokenGeneration(_) => {
                ApiError::InternalServerError("Failed to generate token".to_string())
            }
            AuthError::Database(_) => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<TokenAuthError> for ApiError {
    fn from(err: TokenAuthError) -> Self {
        match err {
            TokenAuthError::Directory(_) => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
            rejection => ApiError::Unauthorized(rejection.to_string()),
        }
    }
}

impl From<SimpleError> for ApiError {
    fn from(err: SimpleError) -> Self {
        match err {
            SimpleError::InvalidName(_) => ApiError::BadRequest(err.to_string()),
            SimpleError::NotFound(_) => ApiError::NotFound(err.to_string()),
            SimpleError::DatabaseError(_) => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}
