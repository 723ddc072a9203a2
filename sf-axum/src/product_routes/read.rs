use super::Id;
use crate::ApiApplication;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sf_core::{
    models::{ProductId, ProductRecord},
    ports::{Application as _, ProductRepository as _},
};
use tracing::{Level, event};

/// Retrieve a single product.
///
/// # Returns
///
/// - `200 OK`: Product record
/// - `404 Not Found`: Product does not exist
/// - `500 Internal Server Error`: The repository failed
pub(crate) async fn read_product<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { product_id }): Path<Id<ProductId>>,
) -> Result<Json<ProductRecord<T::ProductData>>, (StatusCode, String)> {
    app.catalog()
        .get_product(product_id)
        .await
        .map_err(|err| {
            event!(Level::ERROR, err = err.to_string());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to get product {}", product_id),
            )
        })?
        .map(Json)
        .ok_or((
            StatusCode::NOT_FOUND,
            format!("unknown product {}", product_id),
        ))
}
