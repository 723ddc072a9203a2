#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use sf_core::models::{
    ListingQuery, Merchandise, Page, PageError, PageRequest, ProductRecord, SortOrder,
};
use tracing::{Level, event};

mod categorize;
pub use categorize::{Categories, CategoryResolver, categorize};

mod filter;
pub use filter::filter;

mod interleave;
pub use interleave::{RoundRobinCursor, interleave};

mod paginate;
pub use paginate::paginate;

/**
 * These are the arrangements a listing can be displayed in.
 */
mod impls;
pub use impls::*;

// We use non-std collections here for their ordering semantics and performance
pub(crate) type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

/// Anything that can stand in for a product record in a listing.
///
/// Implemented for records themselves and for references to them, so a pool
/// can be filtered into a `Vec<&ProductRecord<T>>` and arranged without
/// cloning any payloads.
pub trait Record {
    /// The commerce payload of the record
    type Data;

    /// Get the underlying record
    fn record(&self) -> &ProductRecord<Self::Data>;
}

impl<T> Record for ProductRecord<T> {
    type Data = T;

    fn record(&self) -> &ProductRecord<T> {
        self
    }
}

impl<P: Record + ?Sized> Record for &P {
    type Data = P::Data;

    fn record(&self) -> &ProductRecord<P::Data> {
        (**self).record()
    }
}

/// The Arranger trait defines how a pool of products is put in display order.
///
/// Implementations return at most `target` distinct products from `products`.
/// Growing `target` must never reorder the products already placed, so any
/// page can be sliced from an arrangement of `page * page_size` products.
pub trait Arranger<P> {
    /// Arrange up to `target` products for display
    fn arrange<'a>(&self, products: &'a [P], target: usize) -> Vec<&'a P>;
}

/// Arrange a pool in the given sort order.
///
/// `Featured` interleaves the categories round-robin; every other order is a
/// stable sort of the whole pool.
pub fn arrange<'a, P, S>(
    products: &'a [P],
    categories: &[S],
    sort: SortOrder,
    target: usize,
) -> Vec<&'a P>
where
    P: Record<Data: Merchandise>,
    S: AsRef<str>,
{
    match sort {
        SortOrder::Featured => CategoryMix::new(categories).arrange(products, target),
        order => Sorted(order).arrange(products, target),
    }
}

/// The featured listing: categorize, interleave up to the end of the requested
/// page, then slice the page out.
pub fn featured_page<'a, P: Record, S: AsRef<str>>(
    products: &'a [P],
    categories: &[S],
    request: PageRequest,
) -> Result<Vec<&'a P>, PageError> {
    request.validate()?;
    let arranged = CategoryMix::new(categories).arrange(products, request.target());
    Ok(paginate(&arranged, request.page, request.page_size)?.to_vec())
}

/// Produce one page of a listing from a product pool.
///
/// The pool is filtered by the query, arranged in the query's sort order up to
/// the end of the requested page, and the page is sliced out. The page's
/// `total` counts every product that passed the filter.
pub fn listing<'a, T: Merchandise, S: AsRef<str>>(
    products: &'a [ProductRecord<T>],
    categories: &[S],
    query: &ListingQuery,
    request: PageRequest,
) -> Result<Page<&'a ProductRecord<T>>, PageError> {
    request.validate()?;

    let pool = filter(products, categories, query);
    let arranged = arrange(&pool, categories, query.sort, request.target());
    let results = paginate(&arranged, request.page, request.page_size)?
        .iter()
        .map(|record| **record)
        .collect::<Vec<_>>();

    event!(
        Level::DEBUG,
        pool = products.len(),
        filtered = pool.len(),
        arranged = arranged.len(),
        page = request.page,
        returned = results.len(),
    );

    Ok(Page::new(results, request, pool.len()))
}

/// Count the products in each category group, in group order.
///
/// Canonical categories without products are reported with a count of zero.
pub fn category_counts<P: Record, S: AsRef<str>>(
    products: &[P],
    categories: &[S],
) -> sf_core::models::Map<String, usize> {
    categorize(products, categories)
        .groups()
        .map(|(key, group)| (key.to_owned(), group.len()))
        .collect()
}
