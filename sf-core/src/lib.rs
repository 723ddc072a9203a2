#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the sf-core crate.
//! [sf_core]: https://docs.rs/sf_core/latest/sf_core/index.html
//! [sf_mixer]: https://docs.rs/sf_mixer/latest/sf_mixer/index.html
//! [sf_axum]: https://docs.rs/sf_axum/latest/sf_axum/index.html
#![doc = include_str!("../README.md")]

/// Core domain models for the storefront listing.
///
/// This module contains the data structures exchanged between the product
/// source, the listing pipeline and the REST layer. They carry little logic
/// beyond validation; the arrangement itself lives in `sf-mixer`.
pub mod models;

/// Interface traits for the storefront listing.
///
/// These traits define the contract between the listing logic and whatever
/// supplies the product pool (an in-memory catalog, an upstream service, ...)
/// without specifying implementation details.
pub mod ports;
