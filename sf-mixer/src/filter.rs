use crate::{CategoryResolver, Record};
use sf_core::models::{ListingQuery, Merchandise};

/// Apply the search and filter controls of a listing query, keeping input order.
///
/// The category filter is resolved exactly like products are grouped, so
/// `?category=electronics` selects the "Electronics" group and
/// `?category=others` is not the same as `?category=Others`. Paging and sort
/// order are ignored here.
pub fn filter<'a, P, S>(products: &'a [P], categories: &[S], query: &ListingQuery) -> Vec<&'a P>
where
    P: Record<Data: Merchandise>,
    S: AsRef<str>,
{
    let resolver = CategoryResolver::new(categories);
    let needle = query.search_text().map(str::to_lowercase);
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| resolver.resolve(Some(c)));
    let in_stock = query.in_stock.unwrap_or(false);

    products
        .iter()
        .filter(|product| {
            let record = product.record();
            let key = resolver.resolve(record.category.as_deref());
            let price = record.data.price();

            if let Some(category) = category {
                if key != category {
                    return false;
                }
            }

            if let Some(needle) = &needle {
                let hit = record.name.to_lowercase().contains(needle.as_str())
                    || key.to_lowercase().contains(needle.as_str());
                if !hit {
                    return false;
                }
            }

            query.min_price.is_none_or(|min| price >= min)
                && query.max_price.is_none_or(|max| price <= max)
                && (!in_stock || record.data.stock() > 0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::models::{ProductData, ProductId, ProductRecord};

    fn product(
        id: u64,
        name: &str,
        category: &str,
        price: f64,
        stock: u32,
    ) -> ProductRecord<ProductData> {
        ProductRecord {
            id: ProductId(id),
            name: name.to_owned(),
            category: Some(category.to_owned()),
            data: ProductData {
                price,
                stock,
                images: Vec::new(),
            },
        }
    }

    fn catalog() -> Vec<ProductRecord<ProductData>> {
        vec![
            product(1, "Noise Cancelling Headphones", "electronics", 199.0, 4),
            product(2, "Linen Shirt", "Fashion", 35.0, 0),
            product(3, "Desk Lamp", "Home", 22.5, 12),
            product(4, "USB-C Cable", "Electronics", 9.0, 100),
            product(5, "Mystery Box", "", 15.0, 1),
        ]
    }

    fn ids(products: Vec<&ProductRecord<ProductData>>) -> Vec<u64> {
        products.into_iter().map(|p| p.id.0).collect()
    }

    const CATEGORIES: [&str; 3] = ["Electronics", "Fashion", "Home"];

    #[test]
    fn test_empty_query_keeps_everything() {
        let products = catalog();
        let kept = filter(&products, &CATEGORIES, &ListingQuery::default());
        assert_eq!(ids(kept), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_category_is_normalized() {
        let products = catalog();
        let query = ListingQuery {
            category: Some(" ELECTRONICS ".to_owned()),
            ..Default::default()
        };
        assert_eq!(ids(filter(&products, &CATEGORIES, &query)), vec![1, 4]);

        let others = ListingQuery {
            category: Some("Others".to_owned()),
            ..Default::default()
        };
        assert_eq!(ids(filter(&products, &CATEGORIES, &others)), vec![5]);
    }

    #[test]
    fn test_search_matches_name_and_category() {
        let products = catalog();
        let by_name = ListingQuery {
            q: Some("lamp".to_owned()),
            ..Default::default()
        };
        assert_eq!(ids(filter(&products, &CATEGORIES, &by_name)), vec![3]);

        let by_category = ListingQuery {
            q: Some("fashion".to_owned()),
            ..Default::default()
        };
        assert_eq!(ids(filter(&products, &CATEGORIES, &by_category)), vec![2]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let products = catalog();
        let query = ListingQuery {
            min_price: Some(15.0),
            max_price: Some(35.0),
            ..Default::default()
        };
        assert_eq!(ids(filter(&products, &CATEGORIES, &query)), vec![2, 3, 5]);
    }

    #[test]
    fn test_in_stock() {
        let products = catalog();
        let query = ListingQuery {
            in_stock: Some(true),
            ..Default::default()
        };
        assert_eq!(ids(filter(&products, &CATEGORIES, &query)), vec![1, 3, 4, 5]);
    }
}
