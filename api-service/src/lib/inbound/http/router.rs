use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_simple::create_simple;
use super::handlers::delete_simple::delete_simple;
use super::handlers::get_simple::get_simple;
use super::handlers::health::get_health;
use super::handlers::list_simples::list_simples;
use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::sign_up::sign_up;
use super::handlers::update_simple::update_simple;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::service::AuthService;
use crate::domain::simple::service::SimpleService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub simple_service: Arc<SimpleService>,
}

pub fn create_router(auth_service: Arc<AuthService>, simple_service: Arc<SimpleService>) -> Router {
    let state = AppState {
        auth_service,
        simple_service,
    };

    let public_routes = Router::new()
        .route("/health", get(get_health))
        .route("/auth/signup", post(sign_up))
        .route("/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/auth/me", get(me))
        .route("/simple", post(create_simple).get(list_simples))
        .route(
            "/simple/:id",
            get(get_simple).put(update_simple).delete(delete_simple),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
