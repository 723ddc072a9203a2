use super::ProductRepository;

/// The glue between a product source and the listing endpoints.
///
/// An application decides where products come from and which categories the
/// storefront treats as canonical. The REST layer is generic over this trait.
pub trait Application {
    /// The commerce payload attached to each product
    type ProductData;

    /// The product source
    type Repository: ProductRepository<Self::ProductData>;

    /// Get the product source
    fn catalog(&self) -> &Self::Repository;

    /// The canonical categories, in display priority order
    fn categories(&self) -> &[String];
}
