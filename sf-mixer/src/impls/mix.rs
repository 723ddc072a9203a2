use crate::{Arranger, Record, categorize, interleave};
use sf_core::models::DEFAULT_CATEGORIES;

/// Interleaves categories so every prefix of the listing is as varied as possible.
///
/// Each call categorizes and interleaves the pool from scratch; nothing is
/// carried over between calls.
#[derive(Debug, Clone, Copy)]
pub struct CategoryMix<'c, S> {
    categories: &'c [S],
}

impl<'c, S: AsRef<str>> CategoryMix<'c, S> {
    /// Mix with the given canonical categories, in priority order
    pub fn new(categories: &'c [S]) -> Self {
        Self { categories }
    }
}

impl Default for CategoryMix<'static, &'static str> {
    fn default() -> Self {
        Self::new(&DEFAULT_CATEGORIES)
    }
}

impl<P: Record, S: AsRef<str>> Arranger<P> for CategoryMix<'_, S> {
    fn arrange<'a>(&self, products: &'a [P], target: usize) -> Vec<&'a P> {
        interleave(&categorize(products, self.categories), target)
    }
}
