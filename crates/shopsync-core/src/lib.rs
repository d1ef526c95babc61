//! Core contracts shared across Shopsync crates.
//!
//! This crate defines the canonical record types for the three integrated
//! collections, the data source contract, and the shared error type used
//! by the store, ingestion, validation, and reporting crates.

pub mod error;
pub mod record;
pub mod source;

pub use error::{Error, Result};
pub use record::{Customer, Order, Product};
pub use source::{DataSource, Snapshot};
