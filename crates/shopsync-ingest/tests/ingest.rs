use shopsync_core::DataSource;
use shopsync_ingest::{import_products_from_reader, seed_sample_orders};
use shopsync_store::LiveStore;
use shopsync_validate::validate_snapshot;

const PRODUCT_CSV: &str = "\
product_id,product_name,description,price,stock_quantity,category,supplier
101,Laptop Pro 15,High-performance laptop,1299.99,25,Electronics,TechCorp Inc.
102,Wireless Mouse,Ergonomic mouse,29.99,150,Electronics,TechCorp Inc.
103,Broken Widget,Should be skipped,-5.00,10,Electronics,TechCorp Inc.
104,Dusty Shelf Unit,Negative stock clamps to zero,79.99,-3,Furniture,ComfortSeating Co.
";

async fn store_with_schema() -> LiveStore {
    let store = LiveStore::in_memory().await.expect("open in-memory store");
    store.init_schema().await.expect("init schema");
    store
}

#[tokio::test]
async fn product_import_skips_negative_prices_and_clamps_stock() {
    let store = store_with_schema().await;

    let counts = import_products_from_reader(&store, PRODUCT_CSV.as_bytes())
        .await
        .expect("import products");
    assert_eq!(counts.inserted, 3);
    assert_eq!(counts.skipped, 1);

    let products = store.products().await.expect("list products");
    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|p| p.product_id != 103));

    let shelf = products
        .iter()
        .find(|p| p.product_id == 104)
        .expect("clamped product present");
    assert_eq!(shelf.stock_quantity, Some(0));
}

#[tokio::test]
async fn malformed_csv_rows_are_counted_as_skipped() {
    let store = store_with_schema().await;
    let csv = "\
product_id,product_name,description,price,stock_quantity,category,supplier
101,Laptop,ok,1299.99,25,Electronics,TechCorp
oops,Not A Number,bad,9.99,1,Electronics,TechCorp
";

    let counts = import_products_from_reader(&store, csv.as_bytes())
        .await
        .expect("import products");
    assert_eq!(counts.inserted, 1);
    assert_eq!(counts.skipped, 1);
}

#[tokio::test]
async fn order_seeding_skips_orders_with_unknown_keys() {
    let store = store_with_schema().await;

    // Only one customer/product pair exists, so only orders referencing
    // customer 1 and product 101 can land.
    sqlx::raw_sql(
        "INSERT INTO customers (customer_id, first_name, last_name, email) \
         VALUES (1, 'John', 'Smith', 'john.smith@email.com');
         INSERT INTO products (product_id, product_name, price, stock_quantity) \
         VALUES (101, 'Laptop Pro 15', 1299.99, 25);",
    )
    .execute(store.pool())
    .await
    .expect("insert parents");

    let (created, skipped) = seed_sample_orders(&store).await.expect("seed orders");
    assert_eq!(created, 1, "only order 1 references a customer/product pair that exists");
    assert_eq!(created + skipped, 20);

    let snapshot = store.snapshot().await.expect("snapshot");
    let report = validate_snapshot(&snapshot);
    assert!(report.foreign_keys.valid, "seeding never inserts orphans");
}
