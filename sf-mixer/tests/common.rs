#![allow(dead_code)]
use rstest::fixture;
use sf_core::models::{ProductData, ProductId, ProductRecord};

pub const CATEGORIES: [&str; 8] = [
    "Electronics",
    "Fashion",
    "Home",
    "Appliances",
    "Mobiles",
    "Beauty",
    "Toys",
    "Grocery",
];

pub fn product(id: u64, category: Option<&str>) -> ProductRecord<ProductData> {
    ProductRecord {
        id: ProductId(id),
        name: format!("product {id}"),
        category: category.map(str::to_owned),
        data: ProductData {
            price: (id % 17) as f64 + 0.99,
            stock: (id % 4) as u32,
            images: vec![format!("https://cdn.example/{id}.jpg")],
        },
    }
}

pub fn ids<'a, I>(products: I) -> Vec<u64>
where
    I: IntoIterator<Item = &'a ProductRecord<ProductData>>,
{
    products.into_iter().map(|p| p.id.0).collect()
}

/// A pool with lopsided category sizes, mixed spellings, blanks and unknown categories
#[fixture]
pub fn pool() -> Vec<ProductRecord<ProductData>> {
    let raw = [
        Some("Electronics"),
        Some("electronics"),
        Some(" Fashion "),
        Some("Electronics"),
        Some("Garden"),
        None,
        Some("HOME"),
        Some("Electronics"),
        Some(""),
        Some("Toys"),
        Some("Garden"),
        Some("Electronics"),
        Some("books"),
    ];
    (0..97)
        .map(|id| product(id, raw[(id as usize * 5 + id as usize / 3) % raw.len()]))
        .collect()
}
