#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod impls;

mod cli;
pub use cli::Cli;

mod config;
pub use config::{AppConfig, CatalogConfig};
