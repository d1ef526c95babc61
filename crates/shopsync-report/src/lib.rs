//! Aggregate reports and ad-hoc queries over an integrated snapshot.
//!
//! All aggregation happens in memory over a
//! [`Snapshot`](shopsync_core::Snapshot); the storage engine is never
//! consulted here. Rendering produces deterministic plain text.

pub mod model;
pub mod query;
pub mod render;
pub mod reports;

pub use model::{
    CategorySummaryRow, CustomerProductRow, ProductSalesRow, QueryTable, TopCustomerRow,
};
pub use query::{Query, run_query};
pub use render::{render_full_report, render_query_table, render_validation_report};
pub use reports::{
    category_summary, customer_product_report, product_sales_report, top_customers_report,
};
