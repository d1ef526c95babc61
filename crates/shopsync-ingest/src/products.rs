use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use shopsync_core::{Error, Result};
use shopsync_store::LiveStore;

/// One row of the product CSV feed.
#[derive(Debug, Deserialize)]
struct ProductRow {
    product_id: i64,
    product_name: String,
    #[serde(default)]
    description: Option<String>,
    price: f64,
    stock_quantity: i64,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    supplier: Option<String>,
}

/// Counts from a product import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductImportCounts {
    pub inserted: u64,
    pub skipped: u64,
}

/// Import products from the CSV feed at `path`.
pub async fn import_products_csv(store: &LiveStore, path: &Path) -> Result<ProductImportCounts> {
    let file = std::fs::File::open(path).map_err(|err| {
        Error::InvalidSource(format!("product file not found: {}: {err}", path.display()))
    })?;
    import_products_from_reader(store, file).await
}

/// Import products from any CSV reader.
///
/// A row with a negative price is skipped; negative stock is clamped to
/// zero. Rows the CSV decoder rejects are counted as skipped. All three
/// cases emit a warning event.
pub async fn import_products_from_reader(
    store: &LiveStore,
    reader: impl Read,
) -> Result<ProductImportCounts> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut counts = ProductImportCounts::default();
    for (row_idx, result) in csv_reader.deserialize::<ProductRow>().enumerate() {
        let mut row = match result {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(event = "product_row_skipped", row = row_idx + 1, error = %err);
                counts.skipped += 1;
                continue;
            }
        };

        if row.price < 0.0 {
            tracing::warn!(
                event = "product_row_skipped",
                product_id = row.product_id,
                reason = "negative price"
            );
            counts.skipped += 1;
            continue;
        }

        if row.stock_quantity < 0 {
            tracing::warn!(
                event = "product_stock_clamped",
                product_id = row.product_id,
                stock = row.stock_quantity
            );
            row.stock_quantity = 0;
        }

        sqlx::query(
            "INSERT INTO products \
             (product_id, product_name, description, price, stock_quantity, category, supplier) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(row.product_id)
        .bind(row.product_name.trim())
        .bind(row.description.as_deref().map(str::trim))
        .bind(row.price)
        .bind(row.stock_quantity)
        .bind(row.category.as_deref().map(str::trim))
        .bind(row.supplier.as_deref().map(str::trim))
        .execute(store.pool())
        .await
        .map_err(|err| Error::Store(err.to_string()))?;

        counts.inserted += 1;
    }

    Ok(counts)
}
