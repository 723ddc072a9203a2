use crate::Categories;
use tracing::{Level, event};

/// A round-robin walk over category groups.
///
/// Holds one offset per group. Each round visits the groups in key order and
/// takes the next product from every group that still has one; the walk ends
/// after a round that takes nothing. Yields positions into the categorized pool.
///
/// Because the walk is lazy, a caller that pages forward can keep the cursor
/// and keep drawing instead of re-running [`interleave`] with a larger target.
#[derive(Debug)]
pub struct RoundRobinCursor<'c, 'a, P> {
    categories: &'c Categories<'a, P>,
    offsets: Vec<usize>,
    slot: usize,
    progressed: bool,
    remaining: usize,
}

impl<'c, 'a, P> RoundRobinCursor<'c, 'a, P> {
    /// Start a walk with every offset at zero
    pub fn new(categories: &'c Categories<'a, P>) -> Self {
        Self {
            categories,
            offsets: vec![0; categories.len()],
            slot: 0,
            progressed: false,
            remaining: categories.products().len(),
        }
    }

    /// How far the walk has advanced into each group, in key order
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }
}

impl<P> Iterator for RoundRobinCursor<'_, '_, P> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offsets.is_empty() {
            return None;
        }

        loop {
            if self.slot == self.offsets.len() {
                // a full round with nothing drawn means every group is spent
                if !self.progressed {
                    return None;
                }
                self.slot = 0;
                self.progressed = false;
            }

            let slot = self.slot;
            self.slot += 1;

            let offset = self.offsets[slot];
            let position = self
                .categories
                .positions(slot)
                .and_then(|positions| positions.get(offset).copied());

            if let Some(position) = position {
                self.offsets[slot] += 1;
                self.progressed = true;
                self.remaining -= 1;
                return Some(position);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Interleave the category groups into a display sequence of up to `target` products.
///
/// Products are drawn round-robin across the groups in key order, keeping
/// input order within each group. Should the draw fall short of `target`, the
/// remaining products of the pool are appended in input order. The result
/// holds `min(target, pool size)` distinct products.
pub fn interleave<'a, P>(categories: &Categories<'a, P>, target: usize) -> Vec<&'a P> {
    let products = categories.products();
    let target = target.min(products.len());

    let mut emitted = vec![false; products.len()];
    let mut sequence = Vec::with_capacity(target);

    for position in RoundRobinCursor::new(categories).take(target) {
        emitted[position] = true;
        sequence.push(&products[position]);
    }

    if sequence.len() < target {
        let drawn = sequence.len();
        for (position, _) in emitted.iter().enumerate().filter(|(_, seen)| !**seen) {
            if sequence.len() == target {
                break;
            }
            sequence.push(&products[position]);
        }
        event!(
            Level::DEBUG,
            drawn,
            appended = sequence.len() - drawn,
            "round-robin fell short of the target"
        );
    }

    sequence
}
