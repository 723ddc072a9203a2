use sf_core::{
    models::{ProductData, ProductId, ProductRecord, default_categories},
    ports::{Application, ProductRepository},
};
use std::sync::Arc;

/// A fixed, in-memory product pool
#[derive(Clone)]
pub struct TestCatalog(Arc<Vec<ProductRecord<ProductData>>>);

impl ProductRepository<ProductData> for TestCatalog {
    type Error = std::convert::Infallible;

    async fn list_products(
        &self,
        limit: usize,
    ) -> Result<Vec<ProductRecord<ProductData>>, Self::Error> {
        Ok(self.0.iter().take(limit).cloned().collect())
    }

    async fn get_product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<ProductRecord<ProductData>>, Self::Error> {
        Ok(self.0.iter().find(|record| record.id == product_id).cloned())
    }
}

#[derive(Clone)]
pub struct TestApp {
    catalog: TestCatalog,
    categories: Arc<Vec<String>>,
}

impl TestApp {
    pub fn new(products: Vec<ProductRecord<ProductData>>) -> Self {
        Self {
            catalog: TestCatalog(Arc::new(products)),
            categories: Arc::new(default_categories()),
        }
    }
}

impl Application for TestApp {
    type ProductData = ProductData;
    type Repository = TestCatalog;

    fn catalog(&self) -> &Self::Repository {
        &self.catalog
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }
}

#[derive(Debug, thiserror::Error)]
#[error("catalog is offline")]
pub struct Offline;

/// A product source that always fails
#[derive(Clone)]
pub struct OfflineCatalog;

impl ProductRepository<ProductData> for OfflineCatalog {
    type Error = Offline;

    async fn list_products(
        &self,
        _limit: usize,
    ) -> Result<Vec<ProductRecord<ProductData>>, Self::Error> {
        Err(Offline)
    }

    async fn get_product(
        &self,
        _product_id: ProductId,
    ) -> Result<Option<ProductRecord<ProductData>>, Self::Error> {
        Err(Offline)
    }
}

#[derive(Clone)]
pub struct OfflineApp;

impl Application for OfflineApp {
    type ProductData = ProductData;
    type Repository = OfflineCatalog;

    fn catalog(&self) -> &Self::Repository {
        &OfflineCatalog
    }

    fn categories(&self) -> &[String] {
        &[]
    }
}

pub fn product(
    id: u64,
    name: &str,
    category: Option<&str>,
    price: f64,
    stock: u32,
) -> ProductRecord<ProductData> {
    ProductRecord {
        id: ProductId(id),
        name: name.to_string(),
        category: category.map(str::to_string),
        data: ProductData {
            price,
            stock,
            images: Vec::new(),
        },
    }
}
