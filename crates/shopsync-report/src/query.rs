use serde::{Deserialize, Serialize};

use shopsync_core::Snapshot;

use crate::model::QueryTable;
use crate::reports::{customer_product_report, top_customers_report};

/// Ad-hoc query selector: one variant per supported query, dispatched by
/// an explicit match rather than by inspecting a query label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    /// Customer details joined with the products they ordered.
    CustomerOrderDetails,
    /// Order count and total order value per customer.
    OrderValueByCustomer,
    /// Products priced within an inclusive range.
    ProductsInPriceRange { min: f64, max: f64 },
    /// Customers whose total spend exceeds a threshold.
    BigSpenders { threshold: f64 },
}

/// Execute a query against the snapshot and return a renderable table.
pub fn run_query(snapshot: &Snapshot, query: &Query) -> QueryTable {
    match query {
        Query::CustomerOrderDetails => customer_order_details(snapshot),
        Query::OrderValueByCustomer => order_value_by_customer(snapshot),
        Query::ProductsInPriceRange { min, max } => products_in_price_range(snapshot, *min, *max),
        Query::BigSpenders { threshold } => big_spenders(snapshot, *threshold),
    }
}

fn customer_order_details(snapshot: &Snapshot) -> QueryTable {
    let mut table = QueryTable::new(
        "Customer Details with Products Ordered",
        &["customer_id", "customer_name", "email", "product_name", "quantity", "total_spent"],
    );
    for row in customer_product_report(snapshot) {
        table.push_row(vec![
            row.customer_id.to_string(),
            row.customer_name,
            row.email,
            row.product_name,
            row.total_quantity.to_string(),
            format!("{:.2}", row.total_spent),
        ]);
    }
    table
}

fn order_value_by_customer(snapshot: &Snapshot) -> QueryTable {
    let mut table = QueryTable::new(
        "Total Order Value per Customer",
        &["customer_id", "customer_name", "total_orders", "total_order_value"],
    );
    for row in top_customers_report(snapshot, usize::MAX) {
        table.push_row(vec![
            row.customer_id.to_string(),
            row.customer_name,
            row.total_orders.to_string(),
            format!("{:.2}", row.total_revenue),
        ]);
    }
    table
}

fn products_in_price_range(snapshot: &Snapshot, min: f64, max: f64) -> QueryTable {
    let mut table = QueryTable::new(
        format!("Products in Price Range {min:.2}..{max:.2}"),
        &["product_id", "product_name", "category", "price", "stock_quantity"],
    );

    let mut products: Vec<_> = snapshot
        .products
        .iter()
        .filter(|p| p.price.is_some_and(|price| price >= min && price <= max))
        .collect();
    products.sort_by(|a, b| {
        a.price
            .unwrap_or_default()
            .total_cmp(&b.price.unwrap_or_default())
            .then(a.product_id.cmp(&b.product_id))
    });

    for product in products {
        table.push_row(vec![
            product.product_id.to_string(),
            product.product_name.clone().unwrap_or_default(),
            product
                .category
                .clone()
                .unwrap_or_else(|| "Uncategorized".to_string()),
            format!("{:.2}", product.price.unwrap_or_default()),
            product.stock_quantity.unwrap_or_default().to_string(),
        ]);
    }
    table
}

fn big_spenders(snapshot: &Snapshot, threshold: f64) -> QueryTable {
    let mut table = QueryTable::new(
        format!("Customers with Orders Exceeding {threshold:.2}"),
        &["customer_id", "customer_name", "email", "total_spent"],
    );
    for row in top_customers_report(snapshot, usize::MAX) {
        if row.total_revenue > threshold {
            table.push_row(vec![
                row.customer_id.to_string(),
                row.customer_name,
                row.email,
                format!("{:.2}", row.total_revenue),
            ]);
        }
    }
    table
}
