//! REST API endpoints for product operations.
//!
//! This module provides the listing itself, where the product pool is
//! filtered, arranged and paged, as well as lookup of a single product.

use crate::ApiApplication;
use aide::axum::{ApiRouter, routing::get_with};

mod list;
mod read;

/// Path parameter for product-specific endpoints.
#[derive(serde::Deserialize, schemars::JsonSchema)]
struct Id<T> {
    /// The unique identifier of the product
    product_id: T,
}

/// Creates a router with product-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route(
            "/",
            get_with(list::list_products::<T>, |op| op.tag("products")),
        )
        .api_route(
            "/{product_id}",
            get_with(read::read_product::<T>, |op| op.tag("products")),
        )
}
