use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{Customer, Order, Product};

/// A fully materialized snapshot of the three integrated collections.
///
/// The validation engine and the reporting layer both operate on a
/// snapshot, never on a live connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty() && self.products.is_empty() && self.orders.is_empty()
    }
}

/// Trait implemented by record sources that can enumerate the integrated
/// collections.
///
/// Both the live store and the built-in fixture data implement this, so
/// callers select a source once at startup and treat them uniformly.
#[async_trait]
pub trait DataSource {
    /// Returns the source identifier (e.g. `sqlite`, `fixture`).
    fn kind(&self) -> &'static str;

    async fn customers(&self) -> Result<Vec<Customer>>;

    async fn products(&self) -> Result<Vec<Product>>;

    async fn orders(&self) -> Result<Vec<Order>>;

    /// Materialize all three collections in one pass.
    async fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            customers: self.customers().await?,
            products: self.products().await?,
            orders: self.orders().await?,
        })
    }
}
