use axum::{
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers::{protected, public};
use crate::middleware::require_auth;
use crate::state::AppState;

/// Assemble the full router with shared state and global layers
pub fn app(state: AppState, security: &SecurityConfig) -> Router {
    let router = Router::new()
        // Public
        .route("/health", get(public::health::health))
        .merge(auth_public_routes())
        // Protected
        .merge(user_routes(state.clone()))
        .merge(bookmark_routes(state.clone()))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    match cors_layer(security) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

fn auth_public_routes() -> Router<AppState> {
    use public::auth;

    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/signin", post(auth::signin))
}

fn user_routes(state: AppState) -> Router<AppState> {
    use protected::user;

    Router::new()
        .route("/user/me", get(user::get_me))
        .route("/user", patch(user::edit_user))
        .route_layer(from_fn_with_state(state, require_auth))
}

fn bookmark_routes(state: AppState) -> Router<AppState> {
    use protected::bookmark;

    Router::new()
        .route("/bookmark", get(bookmark::list).post(bookmark::create))
        .route(
            "/bookmark/:id",
            get(bookmark::get_by_id)
                .patch(bookmark::edit_by_id)
                .delete(bookmark::delete_by_id),
        )
        .route_layer(from_fn_with_state(state, require_auth))
}

fn cors_layer(security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }
    if security.cors_origins.is_empty() {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
