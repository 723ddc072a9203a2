use crate::{ApiApplication, config::AxumConfig};

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};
use sf_core::{
    models::{ListingQuery, Page, ProductRecord},
    ports::{Application as _, ProductRepository as _},
};
use std::sync::Arc;
use tracing::{Level, event};

/// List one page of products.
///
/// Pulls a pool of products from the repository, applies the search and
/// filter parameters, arranges the survivors in the requested sort order
/// (the default, `featured`, interleaves categories round-robin), and
/// returns the requested page.
///
/// # Returns
///
/// - `200 OK`: The page, with totals and the next page request if any
/// - `400 Bad Request`: `page` or `page_size` is zero
/// - `500 Internal Server Error`: The repository failed
pub(crate) async fn list_products<T: ApiApplication>(
    State(app): State<T>,
    Extension(config): Extension<Arc<AxumConfig>>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Page<ProductRecord<T::ProductData>>>, (StatusCode, String)> {
    let request = query
        .page_request(config.default_page_size, config.page_limit)
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

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

    let page = sf_mixer::listing(&products, app.categories(), &query, request)
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    Ok(Json(page.map(|record| record.clone())))
}
