use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer record from the Customer Data System dump.
///
/// Fields the validation engine null-checks are `Option` so incomplete
/// rows survive ingestion and can be reported instead of dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

/// A product record from the Product Data System CSV feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub product_name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<i64>,
    pub category: Option<String>,
    pub supplier: Option<String>,
}

/// An order linking a customer to a product.
///
/// `unit_price` is the price recorded at order time; it may legitimately
/// differ from the product's current price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub customer_id: Option<i64>,
    pub product_id: Option<i64>,
    pub order_date: Option<NaiveDate>,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
    pub total_amount: Option<f64>,
    pub status: Option<String>,
}

impl Customer {
    /// Display name assembled from whichever name parts are present.
    pub fn full_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => String::new(),
        }
    }
}

impl Order {
    /// Order revenue: the recorded total when present, otherwise
    /// `quantity * unit_price`, otherwise zero.
    pub fn revenue(&self) -> f64 {
        if let Some(total) = self.total_amount {
            return total;
        }
        match (self.quantity, self.unit_price) {
            (Some(quantity), Some(unit_price)) => quantity as f64 * unit_price,
            _ => 0.0,
        }
    }
}
