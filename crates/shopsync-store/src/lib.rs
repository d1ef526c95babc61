//! Record store adapters for Shopsync.
//!
//! Two sources implement the [`DataSource`](shopsync_core::DataSource)
//! contract: [`LiveStore`] over a SQLite database and [`FixtureStore`]
//! over the built-in sample dataset. [`AnyStore`] wraps both so callers
//! pick one at startup and treat them uniformly afterwards.

pub mod fixture;
pub mod live;
pub mod schema;

pub use fixture::FixtureStore;
pub use live::LiveStore;
pub use schema::SCHEMA_SQL;

use async_trait::async_trait;
use shopsync_core::{Customer, DataSource, Order, Product, Result};

/// The source selected at startup: live database or fixture data.
pub enum AnyStore {
    Live(LiveStore),
    Fixture(FixtureStore),
}

#[async_trait]
impl DataSource for AnyStore {
    fn kind(&self) -> &'static str {
        match self {
            AnyStore::Live(store) => store.kind(),
            AnyStore::Fixture(store) => store.kind(),
        }
    }

    async fn customers(&self) -> Result<Vec<Customer>> {
        match self {
            AnyStore::Live(store) => store.customers().await,
            AnyStore::Fixture(store) => store.customers().await,
        }
    }

    async fn products(&self) -> Result<Vec<Product>> {
        match self {
            AnyStore::Live(store) => store.products().await,
            AnyStore::Fixture(store) => store.products().await,
        }
    }

    async fn orders(&self) -> Result<Vec<Order>> {
        match self {
            AnyStore::Live(store) => store.orders().await,
            AnyStore::Fixture(store) => store.orders().await,
        }
    }
}
