use rstest::*;
use sf_core::models::{
    ListingQuery, OTHERS, PageError, PageRequest, ProductData, ProductRecord, SortOrder,
};
use sf_mixer::{category_counts, categorize, featured_page, interleave, listing, paginate};

mod common;
use common::{CATEGORIES, ids, pool, product};

#[fixture]
fn storefront() -> Vec<ProductRecord<ProductData>> {
    // E1, E2, E3, F1, F2, H1
    vec![
        product(11, Some("Electronics")),
        product(12, Some("Electronics")),
        product(13, Some("Electronics")),
        product(21, Some("Fashion")),
        product(22, Some("Fashion")),
        product(31, Some("Home")),
    ]
}

#[rstest]
fn three_categories_interleave(storefront: Vec<ProductRecord<ProductData>>) {
    let categories = categorize(&storefront, &CATEGORIES);
    assert_eq!(
        ids(interleave(&categories, 6)),
        vec![11, 21, 31, 12, 22, 13]
    );
}

#[rstest]
fn partial_round_follows_key_order(storefront: Vec<ProductRecord<ProductData>>) {
    let categories = categorize(&storefront, &CATEGORIES);
    assert_eq!(ids(interleave(&categories, 4)), vec![11, 21, 31, 12]);
}

#[rstest]
fn blank_category_goes_to_others() {
    let products = vec![product(1, Some("")), product(2, None), product(3, Some("Toys"))];
    let categories = categorize(&products, &CATEGORIES);

    assert_eq!(ids(categories.group(OTHERS).unwrap()), vec![1, 2]);
    assert_eq!(categories.keys().last(), Some(OTHERS));
}

#[rstest]
fn paginate_second_page() {
    let sequence = ['a', 'b', 'c', 'd', 'e'];
    assert_eq!(paginate(&sequence, 2, 2).unwrap(), &['c', 'd']);
}

#[rstest]
fn featured_page_slices_the_interleaving(storefront: Vec<ProductRecord<ProductData>>) {
    let second = featured_page(&storefront, &CATEGORIES, PageRequest::new(2, 4).unwrap()).unwrap();
    assert_eq!(ids(second), vec![22, 13]);

    let third = featured_page(&storefront, &CATEGORIES, PageRequest::new(3, 4).unwrap()).unwrap();
    assert!(third.is_empty());
}

#[rstest]
fn featured_page_rejects_bad_requests(storefront: Vec<ProductRecord<ProductData>>) {
    let request = PageRequest {
        page: 0,
        page_size: 4,
    };
    assert_eq!(
        featured_page(&storefront, &CATEGORIES, request),
        Err(PageError::ZeroPage)
    );
}

#[rstest]
fn counts_include_empty_canonicals(storefront: Vec<ProductRecord<ProductData>>) {
    let counts = category_counts(&storefront, &CATEGORIES);

    assert_eq!(counts.len(), CATEGORIES.len());
    assert_eq!(counts.get("Electronics"), Some(&3));
    assert_eq!(counts.get("Grocery"), Some(&0));
    assert_eq!(
        counts.keys().map(String::as_str).collect::<Vec<_>>(),
        CATEGORIES.to_vec()
    );
}

#[rstest]
fn listing_reports_the_filtered_total(pool: Vec<ProductRecord<ProductData>>) {
    let query = ListingQuery {
        category: Some("electronics".to_owned()),
        ..Default::default()
    };
    let page = listing(&pool, &CATEGORIES, &query, PageRequest::new(1, 10).unwrap()).unwrap();

    let expected = pool
        .iter()
        .filter(|p| {
            p.category
                .as_deref()
                .is_some_and(|c| c.trim().eq_ignore_ascii_case("electronics"))
        })
        .count();
    assert_eq!(page.total, expected);
    assert_eq!(page.results.len(), 10.min(expected));
    assert!(
        page.results
            .iter()
            .all(|p| p.category.as_deref().unwrap().eq_ignore_ascii_case("electronics"))
    );
}

#[rstest]
fn listing_sorts_without_mixing(storefront: Vec<ProductRecord<ProductData>>) {
    let query = ListingQuery {
        sort: SortOrder::Newest,
        ..Default::default()
    };
    let page = listing(&storefront, &CATEGORIES, &query, PageRequest::new(1, 3).unwrap()).unwrap();

    assert_eq!(ids(page.results.iter().copied()), vec![31, 22, 21]);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.more, Some(PageRequest::new(2, 3).unwrap()));
}

#[rstest]
fn listing_of_nothing(storefront: Vec<ProductRecord<ProductData>>) {
    let query = ListingQuery {
        q: Some("no such product".to_owned()),
        ..Default::default()
    };
    let page = listing(&storefront, &CATEGORIES, &query, PageRequest::new(1, 3).unwrap()).unwrap();

    assert!(page.results.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.more, None);
}
