//! Source-file ingestion into the integration database.
//!
//! Imports the customer SQL dump, the product CSV feed, and the sample
//! order set, reporting per-step counts. Rows a source system got wrong
//! are skipped or clamped with a warning; the validation engine judges
//! whatever lands in the store afterwards.

pub mod products;
pub mod runner;

pub use products::{ProductImportCounts, import_products_csv, import_products_from_reader};
pub use runner::{
    IngestOptions, IngestReport, import_customer_sql, run_integration, seed_sample_orders,
};
