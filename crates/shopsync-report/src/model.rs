use serde::{Deserialize, Serialize};

/// Per-product sales aggregate. Unsold products appear with zero counts
/// (left-join semantics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSalesRow {
    pub product_id: i64,
    pub product_name: String,
    pub category: String,
    pub current_price: f64,
    pub stock_quantity: i64,
    pub total_orders: u64,
    pub total_quantity_sold: i64,
    pub total_revenue: f64,
    pub average_order_value: f64,
}

/// Per-category aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummaryRow {
    pub category: String,
    pub product_count: u64,
    pub total_orders: u64,
    pub total_quantity_sold: i64,
    pub category_revenue: f64,
    pub average_order_value: f64,
}

/// Per-customer aggregate, ordered by revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCustomerRow {
    pub customer_id: i64,
    pub customer_name: String,
    pub email: String,
    pub total_orders: u64,
    pub total_items: i64,
    pub total_revenue: f64,
}

/// One customer/product pairing with order history (inner-join
/// semantics: both sides must resolve).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProductRow {
    pub customer_id: i64,
    pub customer_name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub product_id: i64,
    pub product_name: String,
    pub category: String,
    pub order_count: u64,
    pub total_quantity: i64,
    pub total_spent: f64,
}

/// Generic tabular query result, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl QueryTable {
    pub fn new(title: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            title: title.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}
