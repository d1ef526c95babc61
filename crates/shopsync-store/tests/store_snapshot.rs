use shopsync_core::DataSource;
use shopsync_store::{FixtureStore, LiveStore};
use shopsync_validate::validate_snapshot;

#[tokio::test]
async fn fixture_snapshot_is_internally_consistent() {
    let snapshot = FixtureStore.snapshot().await.expect("fixture snapshot");
    assert_eq!(snapshot.customers.len(), 10);
    assert_eq!(snapshot.products.len(), 15);
    assert_eq!(snapshot.orders.len(), 20);

    let report = validate_snapshot(&snapshot);
    assert!(report.overall_valid, "fixture data must pass validation");
    assert!(report.consistency.valid);
}

#[tokio::test]
async fn live_store_roundtrips_records() {
    let store = LiveStore::in_memory().await.expect("open in-memory store");
    store.init_schema().await.expect("init schema");

    sqlx::raw_sql(
        "INSERT INTO customers (customer_id, first_name, last_name, email) \
         VALUES (1, 'John', 'Smith', 'john.smith@email.com');
         INSERT INTO products (product_id, product_name, price, stock_quantity) \
         VALUES (101, 'Laptop Pro 15', 1299.99, 25);
         INSERT INTO orders (order_id, customer_id, product_id, order_date, quantity, \
         unit_price, total_amount, status) \
         VALUES (1, 1, 101, '2024-01-15', 1, 1299.99, 1299.99, 'completed');",
    )
    .execute(store.pool())
    .await
    .expect("insert sample rows");

    let snapshot = store.snapshot().await.expect("snapshot");
    assert_eq!(snapshot.customers.len(), 1);
    assert_eq!(snapshot.customers[0].email.as_deref(), Some("john.smith@email.com"));
    assert_eq!(snapshot.products[0].price, Some(1299.99));
    assert_eq!(
        snapshot.orders[0].order_date.map(|d| d.to_string()),
        Some("2024-01-15".to_string())
    );

    let report = validate_snapshot(&snapshot);
    assert!(report.overall_valid);
}

#[tokio::test]
async fn null_columns_surface_as_missing_fields() {
    let store = LiveStore::in_memory().await.expect("open in-memory store");
    store.init_schema().await.expect("init schema");

    sqlx::raw_sql(
        "INSERT INTO customers (customer_id, first_name, last_name, email) \
         VALUES (1, NULL, 'Smith', NULL);",
    )
    .execute(store.pool())
    .await
    .expect("insert row with nulls");

    let snapshot = store.snapshot().await.expect("snapshot");
    assert_eq!(snapshot.customers[0].first_name, None);
    assert_eq!(snapshot.customers[0].email, None);

    let report = validate_snapshot(&snapshot);
    assert!(!report.customers.valid);
}
