//! Validation and integrity checking for integrated snapshots.
//!
//! The engine is a pure function over a [`Snapshot`](shopsync_core::Snapshot):
//! it reads the three collections, reports every violation it finds in one
//! pass, and never repairs or drops data. Hard domain and referential issues
//! drive the overall verdict; cross-table consistency findings are advisory
//! and never do.

pub mod engine;
pub mod model;

pub use engine::{
    PRICE_TOLERANCE, STOCK_BUFFER, check_consistency, check_foreign_keys, validate_customers,
    validate_orders, validate_products, validate_snapshot,
};
pub use model::{Issue, REPORT_VERSION, Rule, SectionReport, ValidationReport};
