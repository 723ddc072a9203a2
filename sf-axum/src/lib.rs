#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the sf-axum crate.
//! [sf_core]: https://docs.rs/sf_core/latest/sf_core/index.html
//! [sf_axum]: https://docs.rs/sf_axum/latest/sf_axum/index.html
//! [sf_mixer]: https://docs.rs/sf_mixer/latest/sf_mixer/index.html
#![doc = include_str!("../README.md")]

mod category_routes;
mod product_routes;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json};
use schemars::JsonSchema;
use serde::Serialize;
use sf_core::{models::Merchandise, ports::Application};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Construct a full API router with the given state and config
pub fn router<T: ApiApplication>(state: T, config: AxumConfig) -> axum::Router {
    router_with_schema(state, config).0
}

/// Construct a full API router, also returning the generated OpenAPI document
pub fn router_with_schema<T: ApiApplication>(
    state: T,
    config: AxumConfig,
) -> (axum::Router, Arc<OpenApi>) {
    let cors = config.cors;
    let mut api = OpenApi::default();
    let router = ApiRouter::new()
        .api_route("/health", get(health_check))
        .nest("/products", product_routes::router())
        .nest("/categories", category_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs);

    let api = Arc::new(api);
    let router = router
        .layer(Extension(api.clone())) // Arc is very important here or you will face massive memory and performance issues
        .layer(Extension(Arc::new(config)))
        .with_state(state);

    // The storefront is a browser application served from another origin
    let router = if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    (router, api)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let service = router(app, config);
    axum::serve(listener, service).await
}

/// Axum imposes all sorts of constraints on what can pass for state. This
/// trait, coupled with a blanket implementation, specifies it all upfront and
/// in one place. If a function takes a generic `T: ApiApplication`, then
/// everything one might reasonably want to do should work.
pub trait ApiApplication:
    Clone
    + Send
    + Sync
    + 'static
    + Application<
        ProductData: Clone + Merchandise + Send + Sync + Serialize + JsonSchema + 'static,
        Repository: Send + Sync + 'static,
    >
{
}

// this is the blanket implementation
impl<T: Clone + Send + Sync + 'static> ApiApplication for T where
    T: Application<
            ProductData: Clone + Merchandise + Send + Sync + Serialize + JsonSchema + 'static,
            Repository: Send + Sync + 'static,
        >
{
}
