use crate::{Arranger, Record};
use sf_core::models::{Merchandise, SortOrder};

/// A stable sort of the whole pool.
///
/// Ties keep their input order. `SortOrder::Featured` has no key of its own
/// here and leaves the pool in input order; use [`crate::CategoryMix`] for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sorted(pub SortOrder);

impl<P: Record<Data: Merchandise>> Arranger<P> for Sorted {
    fn arrange<'a>(&self, products: &'a [P], target: usize) -> Vec<&'a P> {
        let mut sequence = products.iter().collect::<Vec<_>>();

        match self.0 {
            SortOrder::Featured => {}
            SortOrder::PriceAsc => sequence
                .sort_by(|a, b| a.record().data.price().total_cmp(&b.record().data.price())),
            SortOrder::PriceDesc => sequence
                .sort_by(|a, b| b.record().data.price().total_cmp(&a.record().data.price())),
            SortOrder::Newest => sequence.sort_by(|a, b| b.record().id.cmp(&a.record().id)),
            SortOrder::Name => sequence.sort_by_cached_key(|p| p.record().name.to_lowercase()),
        }

        sequence.truncate(target);
        sequence
    }
}
