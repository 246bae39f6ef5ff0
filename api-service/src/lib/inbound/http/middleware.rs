use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::auth::errors::TokenAuthError;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Request gate for protected routes.
///
/// Runs the full authentication sequence: header extraction here, then
/// signature, claim-shape, expiry, and subject-resolution gates in the auth
/// service. The first failing gate short-circuits with 401 and an `{error}`
/// body; on success the resolved identity is attached to the request's
/// extensions for downstream handlers.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let identity = state
        .auth_service
        .authenticate_token(&token)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Gate 1: the `Authorization` header must be exactly `Bearer <token>` —
/// two space-separated parts, the first literally `Bearer`.
fn extract_token_from_header(req: &Request) -> Result<String, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| reject(TokenAuthError::MissingHeader))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| reject(TokenAuthError::MalformedHeader))?;

    let parts: Vec<&str> = auth_str.split(' ').collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return Err(reject(TokenAuthError::MalformedHeader));
    }

    Ok(parts[1].to_string())
}

fn reject(err: TokenAuthError) -> Response {
    ApiError::from(err).into_response()
}
