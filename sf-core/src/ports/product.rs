use crate::models::{ProductId, ProductRecord};

/// Repository interface for the product pool behind a listing.
///
/// The listing never pages through the repository itself. It asks for one
/// large pool (bounded by `limit`), arranges the whole pool in memory, and
/// slices the requested page out of the arrangement. Implementations should
/// return records in a stable order, as the round-robin keeps input order
/// within each category.
pub trait ProductRepository<ProductData> {
    /// Error type for the underlying source
    type Error: std::error::Error;

    /// Fetch up to `limit` products, in the source's natural order.
    fn list_products(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ProductRecord<ProductData>>, Self::Error>> + Send;

    /// Get a single product by id.
    ///
    /// # Returns
    ///
    /// Ok(None) if no such product exists.
    fn get_product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<Option<ProductRecord<ProductData>>, Self::Error>> + Send;
}
