//! Application configuration management.
//!
//! This module handles loading and merging configuration from multiple sources
//! with a clear precedence order. Configuration can come from default values,
//! configuration files, environment variables and, for the catalog path, the
//! command line.

use crate::Cli;
use serde::{Deserialize, Serialize};
use sf_core::models::default_categories;
use std::path::PathBuf;

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Web server configuration (bind address, page sizes, pool size, etc.)
    #[serde(default)]
    pub server: sf_axum::config::AxumConfig,

    /// Where products come from and how they are grouped
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Configuration of the in-memory catalog
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CatalogConfig {
    /// A JSON file holding an array of product records. The bundled sample
    /// catalog is served when this is not set.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// The canonical categories, in display priority order. Unset means the
    /// built-in list; a configured list replaces it entirely.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

impl CatalogConfig {
    /// The configured canonical categories, or the built-in list
    pub fn categories(&self) -> Vec<String> {
        self.categories.clone().unwrap_or_else(default_categories)
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. The `--catalog` argument (catalog path only)
    /// 2. Environment variables
    /// 3. Config file given by the CLI
    /// 4. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `APP_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Serve a different catalog
    /// export APP_CATALOG__PATH="/data/products.json"
    ///
    /// # Set server bind address
    /// export APP_SERVER__BIND_ADDRESS="0.0.0.0:3000"
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = &cli.config {
            if path.exists() {
                config = config.add_source(config::File::from(path.as_path()))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        // This maps APP_SERVER__BIND_ADDRESS to server.bind_address
        config = config.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        config = config.set_override_option(
            "catalog.path",
            cli.catalog.as_ref().map(|path| path.display().to_string()),
        )?;

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_defaults() {
        let config = AppConfig::load(&Cli::default()).unwrap();
        assert_eq!(config.server.page_limit, 100);
        assert_eq!(config.catalog.path, None);
        assert_eq!(config.catalog.categories, None);
        assert_eq!(config.catalog.categories(), default_categories());
    }

    #[test]
    fn test_file_and_cli_layers() {
        let path = std::env::temp_dir().join(format!("sfdemo-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\ndefault_page_size = 12\n\n[catalog]\npath = \"from-file.json\"\ncategories = [\"Books\", \"Garden\"]"
        )
        .unwrap();

        let cli = Cli {
            config: Some(path.clone()),
            catalog: Some(PathBuf::from("from-cli.json")),
            schema: None,
        };
        let config = AppConfig::load(&cli).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.server.default_page_size, 12);
        assert_eq!(config.server.page_limit, 100);
        assert_eq!(config.catalog.path, Some(PathBuf::from("from-cli.json")));
        assert_eq!(config.catalog.categories(), vec!["Books", "Garden"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/sfdemo.toml")),
            ..Default::default()
        };
        assert!(AppConfig::load(&cli).is_err());
    }
}
