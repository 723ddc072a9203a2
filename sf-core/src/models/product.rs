use std::fmt;

/// The unique integer identifier of a product.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A product record combines the fields the listing reasons about with
/// implementation-specific data.
///
/// The listing only ever looks at the `id`, `name` and `category`. Everything
/// else (price, stock, images, ...) rides along in `data` and is returned to
/// the caller unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductRecord<T> {
    /// Unique identifier for the product
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Free-text category as entered by the seller; may be missing or blank
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Option<String>,
    /// Additional product-specific data defined by the implementation
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub data: T,
}

/// The commerce fields a listing can filter and sort on.
///
/// Payloads that do not implement this can still be categorized and
/// round-robin arranged, but not filtered by price or stock.
pub trait Merchandise {
    /// The unit price
    fn price(&self) -> f64;
    /// The number of units available
    fn stock(&self) -> u32;
}

/// The commerce payload of a storefront product.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductData {
    /// The unit price
    pub price: f64,
    /// The number of units available
    #[cfg_attr(feature = "serde", serde(default))]
    pub stock: u32,
    /// Image URLs, first one is the card thumbnail
    #[cfg_attr(feature = "serde", serde(default))]
    pub images: Vec<String>,
}

impl Merchandise for ProductData {
    fn price(&self) -> f64 {
        self.price
    }

    fn stock(&self) -> u32 {
        self.stock
    }
}
