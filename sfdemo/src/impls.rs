//! An in-memory catalog and the application that serves it.

use sf_core::{
    models::{ProductData, ProductId, ProductRecord},
    ports::{Application, ProductRepository},
};
use std::{path::Path, sync::Arc};
use tracing::{Level, event};

use crate::CatalogConfig;

const SAMPLE_CATALOG: &str = include_str!("../data/catalog.json");

/// Errors raised while loading a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// The file that was being read
        path: String,
        /// The underlying error
        source: std::io::Error,
    },
    /// The catalog is not a JSON array of product records
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A read-only product pool held in memory, in file order.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog(Arc<Vec<ProductRecord<ProductData>>>);

impl InMemoryCatalog {
    /// Parse a catalog from a JSON array of product records
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<ProductRecord<ProductData>> = serde_json::from_str(json)?;
        Ok(Self(Arc::new(products)))
    }

    /// Read a catalog file
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The small catalog bundled with the demo
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json(SAMPLE_CATALOG)
    }

    /// The number of products in the catalog
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the catalog has no products
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ProductRepository<ProductData> for InMemoryCatalog {
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

/// The demo application: an in-memory catalog and its canonical categories.
#[derive(Clone)]
pub struct DemoApp {
    catalog: InMemoryCatalog,
    categories: Arc<Vec<String>>,
}

impl DemoApp {
    /// Assemble an application from a loaded catalog
    pub fn new(catalog: InMemoryCatalog, categories: Vec<String>) -> Self {
        Self {
            catalog,
            categories: Arc::new(categories),
        }
    }

    /// Load the configured catalog, falling back to the bundled sample
    pub fn load(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.path {
            Some(path) => InMemoryCatalog::from_path(path)?,
            None => InMemoryCatalog::sample()?,
        };
        event!(
            Level::INFO,
            products = catalog.len(),
            source = config
                .path
                .as_ref()
                .map_or_else(|| "sample".to_string(), |path| path.display().to_string()),
            "loaded catalog"
        );
        Ok(Self::new(catalog, config.categories()))
    }
}

impl Application for DemoApp {
    type ProductData = ProductData;
    type Repository = InMemoryCatalog;

    fn catalog(&self) -> &Self::Repository {
        &self.catalog
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }
}
