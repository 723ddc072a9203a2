use crate::{Map, Record};
use sf_core::models::OTHERS;
use tracing::{Level, event};

/// Maps free-text categories onto group keys.
///
/// A category resolves, in order of preference, to:
/// 1. the canonical spelling, when it matches a canonical category ignoring case
///    and surrounding whitespace;
/// 2. the trimmed category itself, when anything is left after trimming;
/// 3. [`OTHERS`].
#[derive(Debug, Clone, Default)]
pub struct CategoryResolver {
    // lowercased canonical name -> canonical spelling, in priority order
    canonical: Map<String, String>,
}

impl CategoryResolver {
    /// Build a resolver for the given canonical categories.
    ///
    /// Blank entries are skipped, and when two entries differ only by case the
    /// first spelling wins.
    pub fn new<S: AsRef<str>>(categories: &[S]) -> Self {
        let mut canonical = Map::default();
        for category in categories {
            let category = category.as_ref().trim();
            if category.is_empty() {
                continue;
            }
            canonical
                .entry(category.to_lowercase())
                .or_insert_with(|| category.to_owned());
        }
        Self { canonical }
    }

    /// The canonical categories, in priority order
    pub fn canonical(&self) -> impl Iterator<Item = &str> {
        self.canonical.values().map(String::as_str)
    }

    /// Resolve a product's category to its group key
    pub fn resolve<'s>(&'s self, category: Option<&'s str>) -> &'s str {
        let trimmed = category.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return OTHERS;
        }
        self.canonical
            .get(&trimmed.to_lowercase())
            .map(String::as_str)
            .unwrap_or(trimmed)
    }
}

/// A pool of products partitioned into category groups.
///
/// Groups are held as positions into the pool, so every product sits in
/// exactly one group and the pool itself is never copied.
#[derive(Debug)]
pub struct Categories<'a, P> {
    products: &'a [P],
    groups: Map<String, Vec<usize>>,
}

impl<'a, P> Categories<'a, P> {
    /// The pool the groups index into
    pub fn products(&self) -> &'a [P] {
        self.products
    }

    /// The group keys in draw order: canonical categories first, then newly
    /// discovered keys in order of first appearance.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// The number of groups, including empty canonical ones
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups at all
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The products of one group, in input order
    pub fn group(&self, key: &str) -> Option<Vec<&'a P>> {
        let products = self.products;
        self.groups
            .get(key)
            .map(|positions| positions.iter().map(|&i| &products[i]).collect())
    }

    /// Every group with its products, in draw order
    pub fn groups(&self) -> impl Iterator<Item = (&str, Vec<&'a P>)> {
        let products = self.products;
        self.groups.iter().map(move |(key, positions)| {
            (
                key.as_str(),
                positions.iter().map(|&i| &products[i]).collect(),
            )
        })
    }

    /// The positions of the products in the group at `index`, in input order
    pub(crate) fn positions(&self, index: usize) -> Option<&[usize]> {
        self.groups
            .get_index(index)
            .map(|(_, positions)| positions.as_slice())
    }
}

/// Partition a pool of products into category groups.
///
/// Every canonical category gets a group, even an empty one, so the key order
/// always starts with the canonical list. Never fails: a missing or blank
/// category lands in [`OTHERS`].
pub fn categorize<'a, P: Record, S: AsRef<str>>(
    products: &'a [P],
    categories: &[S],
) -> Categories<'a, P> {
    let resolver = CategoryResolver::new(categories);

    let mut groups: Map<String, Vec<usize>> = resolver
        .canonical()
        .map(|key| (key.to_owned(), Vec::new()))
        .collect();

    for (position, product) in products.iter().enumerate() {
        let key = resolver.resolve(product.record().category.as_deref());
        match groups.get_mut(key) {
            Some(group) => group.push(position),
            None => {
                groups.insert(key.to_owned(), vec![position]);
            }
        }
    }

    event!(
        Level::TRACE,
        products = products.len(),
        groups = groups.len(),
    );

    Categories { products, groups }
}
