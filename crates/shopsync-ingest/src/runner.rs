use std::path::{Path, PathBuf};

use shopsync_core::{Error, Result};
use shopsync_store::{LiveStore, fixture};

use crate::products::import_products_csv;

/// Source file locations for a full integration run.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// SQL dump from the Customer Data System.
    pub customer_sql: PathBuf,
    /// CSV feed from the Product Data System.
    pub product_csv: PathBuf,
    /// Seed the built-in sample order set after the imports.
    pub seed_orders: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            customer_sql: PathBuf::from("customer_data.sql"),
            product_csv: PathBuf::from("product_data.csv"),
            seed_orders: true,
        }
    }
}

/// Counts from a full integration run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub customers_loaded: u64,
    pub products_loaded: u64,
    pub products_skipped: u64,
    pub orders_created: u64,
    pub orders_skipped: u64,
}

/// Run the complete integration: schema, customer dump, product feed,
/// and optionally the sample order set.
pub async fn run_integration(store: &LiveStore, options: &IngestOptions) -> Result<IngestReport> {
    store.init_schema().await?;
    tracing::info!(event = "schema_created");

    let customers_loaded = import_customer_sql(store, &options.customer_sql).await?;
    tracing::info!(event = "customers_imported", count = customers_loaded);

    let product_counts = import_products_csv(store, &options.product_csv).await?;
    tracing::info!(
        event = "products_imported",
        inserted = product_counts.inserted,
        skipped = product_counts.skipped
    );

    let (orders_created, orders_skipped) = if options.seed_orders {
        let counts = seed_sample_orders(store).await?;
        tracing::info!(
            event = "orders_seeded",
            created = counts.0,
            skipped = counts.1
        );
        counts
    } else {
        (0, 0)
    };

    Ok(IngestReport {
        customers_loaded,
        products_loaded: product_counts.inserted,
        products_skipped: product_counts.skipped,
        orders_created,
        orders_skipped,
    })
}

/// Execute the customer SQL dump against the store and return the
/// resulting customer count.
pub async fn import_customer_sql(store: &LiveStore, path: &Path) -> Result<u64> {
    let script = std::fs::read_to_string(path).map_err(|err| {
        Error::InvalidSource(format!("customer file not found: {}: {err}", path.display()))
    })?;

    sqlx::raw_sql(&script)
        .execute(store.pool())
        .await
        .map_err(|err| Error::InvalidSource(format!("customer dump failed: {err}")))?;

    store.count("customers").await
}

/// Seed the sample order set, checking each order's foreign keys against
/// the store first. Orders whose customer or product is absent are
/// skipped with a warning, never inserted broken.
pub async fn seed_sample_orders(store: &LiveStore) -> Result<(u64, u64)> {
    let mut created = 0u64;
    let mut skipped = 0u64;

    for order in fixture::sample_orders() {
        let (Some(customer_id), Some(product_id)) = (order.customer_id, order.product_id) else {
            skipped += 1;
            continue;
        };

        if !key_exists(store, "SELECT 1 FROM customers WHERE customer_id = ?", customer_id).await? {
            tracing::warn!(
                event = "order_skipped",
                order_id = order.order_id,
                reason = "unknown customer",
                customer_id
            );
            skipped += 1;
            continue;
        }
        if !key_exists(store, "SELECT 1 FROM products WHERE product_id = ?", product_id).await? {
            tracing::warn!(
                event = "order_skipped",
                order_id = order.order_id,
                reason = "unknown product",
                product_id
            );
            skipped += 1;
            continue;
        }

        sqlx::query(
            "INSERT INTO orders \
             (order_id, customer_id, product_id, order_date, quantity, unit_price, \
              total_amount, status) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(order.order_id)
        .bind(customer_id)
        .bind(product_id)
        .bind(order.order_date)
        .bind(order.quantity)
        .bind(order.unit_price)
        .bind(order.total_amount)
        .bind(order.status.as_deref())
        .execute(store.pool())
        .await
        .map_err(|err| Error::Store(err.to_string()))?;

        created += 1;
    }

    Ok((created, skipped))
}

async fn key_exists(store: &LiveStore, sql: &str, key: i64) -> Result<bool> {
    let row = sqlx::query(sql)
        .bind(key)
        .fetch_optional(store.pool())
        .await
        .map_err(|err| Error::Store(err.to_string()))?;
    Ok(row.is_some())
}
