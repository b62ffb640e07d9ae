mod account;
mod extractors;
mod health;
mod middlewares;
mod swagger;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use health::{health_checker_handler, index_handler};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::AppState;

/// Assembles the full HTTP surface: routes, documentation, fallbacks and the response policy layers.
pub fn make_app(state: Arc<AppState>) -> anyhow::Result<Router> {
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_checker_handler))
        .merge(account::account_routes())
        .merge(swagger::build_documentation())
        .fallback(middlewares::not_found_handler)
        .layer(middleware::map_response(middlewares::json_method_not_allowed));

    // CORS sits inside the security layer so preflight answers get the fixed headers too.
    let app = match state.config.cors_origin.as_deref() {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin)
                .with_context(|| format!("invalid CORS origin {origin:?}"))?;
            info!("CORS enabled for {:?}", origin);
            app.layer(
                CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                    .allow_headers([CONTENT_TYPE]),
            )
        }
        None => app,
    };

    let app = app
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::security_headers,
        ))
        .layer(TraceLayer::new_for_http());

    Ok(app.with_state(state))
}
