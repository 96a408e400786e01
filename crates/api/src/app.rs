use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{eta, groups, health, products, signups};
use crate::services::RoutingClient;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub routing: Arc<RoutingClient>,
}

pub fn create_app(config: Config, pool: PgPool) -> anyhow::Result<Router> {
    let config = Arc::new(config);

    let routing = Arc::new(RoutingClient::new(&config.routing)?);

    let state = AppState {
        pool,
        config: config.clone(),
        routing,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Signup, group, ETA and product routes
    let api_routes = Router::new()
        .route("/api/update-eta", post(eta::update_eta))
        .route("/api/create", post(products::create_product))
        .route("/api/signup", post(signups::create_signup))
        .route("/api/get-signups", get(signups::get_signups))
        .route("/api/edit-signup/:doc_id", put(signups::edit_signup))
        .route("/api/delete-signup/:doc_id", delete(signups::delete_signup))
        .route(
            "/api/group/:bus_id",
            post(groups::create_group)
                .put(groups::update_group)
                .delete(groups::delete_group),
        );

    // Liveness and observability routes
    let public_routes = Router::new()
        .route("/hello-world", get(health::hello_world))
        .route("/api/health", get(health::health_check))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    let app = Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware)) // Prometheus metrics
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state);

    Ok(app)
}
