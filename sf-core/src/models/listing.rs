use super::{PageError, PageRequest};
use std::str::FromStr;

/// The display order of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SortOrder {
    /// Categories interleaved round-robin, so the first screen shows a bit of everything
    #[default]
    Featured,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Highest id first
    Newest,
    /// Alphabetical by name, ignoring case
    Name,
}

impl FromStr for SortOrder {
    type Err = SortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "price_asc" | "price-low" => Ok(Self::PriceAsc),
            "price_desc" | "price-high" => Ok(Self::PriceDesc),
            "newest" => Ok(Self::Newest),
            "name" => Ok(Self::Name),
            _ => Err(SortOrderError::Unknown(s.to_owned())),
        }
    }
}

/// Error for unrecognized sort order names
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SortOrderError {
    /// The name does not correspond to any sort order
    #[error("unknown sort order: {0}")]
    Unknown(String),
}

/// The search, filter, sort and paging controls of a product listing.
///
/// Every field is optional; an empty query lists every product, featured
/// order, first page, default page size.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListingQuery {
    /// The 1-based page number (defaults to 1)
    #[cfg_attr(feature = "serde", serde(default))]
    pub page: Option<usize>,
    /// The number of items per page (defaults to the server's configured size)
    #[cfg_attr(feature = "serde", serde(default))]
    pub page_size: Option<usize>,
    /// The display order
    #[cfg_attr(feature = "serde", serde(default))]
    pub sort: SortOrder,
    /// Case-insensitive search text, matched against name and category
    #[cfg_attr(feature = "serde", serde(default))]
    pub q: Option<String>,
    /// Restrict to one category (matched the same way products are grouped)
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Option<String>,
    /// Inclusive lower price bound
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_price: Option<f64>,
    /// When true, only products with stock remaining
    #[cfg_attr(feature = "serde", serde(default))]
    pub in_stock: Option<bool>,
}

impl ListingQuery {
    /// Resolve the page request, applying the default page size and capping it at `page_limit`.
    pub fn page_request(
        &self,
        default_page_size: usize,
        page_limit: usize,
    ) -> Result<PageRequest, PageError> {
        let page_size = self
            .page_size
            .unwrap_or(default_page_size)
            .min(page_limit.max(1));
        PageRequest::new(self.page.unwrap_or(1), page_size)
    }

    /// The trimmed search text, if any remains
    pub fn search_text(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    /// Whether any filter beyond paging and sorting is present
    pub fn is_filtered(&self) -> bool {
        self.search_text().is_some()
            || self.category.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.in_stock == Some(true)
    }
}
