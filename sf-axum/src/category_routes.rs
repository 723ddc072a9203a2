//! REST API endpoints for category groups.

use crate::{ApiApplication, config::AxumConfig};
use aide::axum::{ApiRouter, routing::get_with};
use axum::{Extension, Json, extract::State, http::StatusCode};
use sf_core::{
    models::Map,
    ports::{Application as _, ProductRepository as _},
};
use std::sync::Arc;
use tracing::{Level, event};

/// Creates a router with category-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new().api_route(
        "/",
        get_with(list_categories::<T>, |op| op.tag("categories")),
    )
}

/// Count the products in each category group.
///
/// Keys are in draw order: the canonical categories first (even when empty),
/// then categories discovered in the pool, with blank categories counted
/// under "Others".
///
/// # Returns
///
/// - `200 OK`: Map of category key to product count
/// - `500 Internal Server Error`: The repository failed
async fn list_categories<T: ApiApplication>(
    State(app): State<T>,
    Extension(config): Extension<Arc<AxumConfig>>,
) -> Result<Json<Map<String, usize>>, (StatusCode, String)> {
    let products = app
        .catalog()
        .list_products(config.pool_size)
        .await
        .map_err(|err| {
            event!(Level::ERROR, err = err.to_string());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to list products".to_string(),
            )
        })?;

    Ok(Json(sf_mixer::category_counts(&products, app.categories())))
}
