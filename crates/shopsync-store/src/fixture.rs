use async_trait::async_trait;
use chrono::NaiveDate;

use shopsync_core::{Customer, DataSource, Order, Product, Result};

/// Built-in sample dataset used when no live database is configured.
///
/// The records mirror the demo feeds so the reporting surface stays
/// functional without a store; the dataset is internally consistent and
/// passes validation.
#[derive(Debug, Default)]
pub struct FixtureStore;

#[async_trait]
impl DataSource for FixtureStore {
    fn kind(&self) -> &'static str {
        "fixture"
    }

    async fn customers(&self) -> Result<Vec<Customer>> {
        Ok(sample_customers())
    }

    async fn products(&self) -> Result<Vec<Product>> {
        Ok(sample_products())
    }

    async fn orders(&self) -> Result<Vec<Order>> {
        Ok(sample_orders())
    }
}

pub fn sample_customers() -> Vec<Customer> {
    vec![
        customer(
            1,
            "John",
            "Smith",
            "john.smith@email.com",
            "555-0101",
            "123 Main Street",
            "New York",
            "NY",
            "10001",
        ),
        customer(
            2,
            "Emily",
            "Johnson",
            "emily.johnson@email.com",
            "555-0102",
            "456 Oak Avenue",
            "Los Angeles",
            "CA",
            "90001",
        ),
        customer(
            3,
            "Michael",
            "Williams",
            "michael.williams@email.com",
            "555-0103",
            "789 Pine Road",
            "Chicago",
            "IL",
            "60601",
        ),
        customer(
            4,
            "Sarah",
            "Brown",
            "sarah.brown@email.com",
            "555-0104",
            "321 Elm Street",
            "Houston",
            "TX",
            "77001",
        ),
        customer(
            5,
            "David",
            "Jones",
            "david.jones@email.com",
            "555-0105",
            "654 Maple Drive",
            "Phoenix",
            "AZ",
            "85001",
        ),
        customer(
            6,
            "Jessica",
            "Garcia",
            "jessica.garcia@email.com",
            "555-0106",
            "987 Cedar Lane",
            "Philadelphia",
            "PA",
            "19101",
        ),
        customer(
            7,
            "Robert",
            "Miller",
            "robert.miller@email.com",
            "555-0107",
            "147 Birch Boulevard",
            "San Antonio",
            "TX",
            "78201",
        ),
        customer(
            8,
            "Amanda",
            "Davis",
            "amanda.davis@email.com",
            "555-0108",
            "258 Spruce Court",
            "San Diego",
            "CA",
            "92101",
        ),
        customer(
            9,
            "James",
            "Rodriguez",
            "james.rodriguez@email.com",
            "555-0109",
            "369 Willow Way",
            "Dallas",
            "TX",
            "75201",
        ),
        customer(
            10,
            "Lisa",
            "Martinez",
            "lisa.martinez@email.com",
            "555-0110",
            "741 Ash Street",
            "San Jose",
            "CA",
            "95101",
        ),
    ]
}

pub fn sample_products() -> Vec<Product> {
    vec![
        product(101, "Laptop Pro 15", 1299.99, 25, "Electronics", "TechCorp Inc."),
        product(102, "Wireless Mouse", 29.99, 150, "Electronics", "TechCorp Inc."),
        product(103, "Mechanical Keyboard", 89.99, 75, "Electronics", "TechCorp Inc."),
        product(104, "Monitor 27\"", 399.99, 40, "Electronics", "DisplayTech Ltd."),
        product(105, "USB-C Hub", 49.99, 200, "Electronics", "TechCorp Inc."),
        product(201, "Office Chair", 299.99, 30, "Furniture", "ComfortSeating Co."),
        product(202, "Desk Lamp", 39.99, 100, "Furniture", "LightWorks Inc."),
        product(203, "Standing Desk", 599.99, 15, "Furniture", "ComfortSeating Co."),
        product(204, "Monitor Stand", 79.99, 60, "Furniture", "ComfortSeating Co."),
        product(205, "Desk Organizer", 24.99, 120, "Furniture", "ComfortSeating Co."),
        product(301, "Notebook Set", 34.99, 80, "Stationery", "WriteWell Supplies"),
        product(302, "Pen Set", 19.99, 200, "Stationery", "WriteWell Supplies"),
        product(303, "Desk Calendar", 12.99, 150, "Stationery", "WriteWell Supplies"),
        product(304, "Sticky Notes", 8.99, 300, "Stationery", "WriteWell Supplies"),
        product(305, "File Folders", 15.99, 250, "Stationery", "WriteWell Supplies"),
    ]
}

pub fn sample_orders() -> Vec<Order> {
    vec![
        order(1, 1, 101, 2024, 1, 15, 1, 1299.99),
        order(2, 1, 102, 2024, 1, 15, 2, 29.99),
        order(3, 2, 201, 2024, 1, 20, 1, 299.99),
        order(4, 2, 202, 2024, 1, 20, 1, 39.99),
        order(5, 3, 103, 2024, 2, 1, 1, 89.99),
        order(6, 3, 104, 2024, 2, 1, 1, 399.99),
        order(7, 4, 301, 2024, 2, 10, 3, 34.99),
        order(8, 4, 302, 2024, 2, 10, 2, 19.99),
        order(9, 5, 203, 2024, 2, 15, 1, 599.99),
        order(10, 5, 204, 2024, 2, 15, 1, 79.99),
        order(11, 6, 105, 2024, 2, 20, 4, 49.99),
        order(12, 7, 101, 2024, 3, 1, 1, 1299.99),
        order(13, 7, 103, 2024, 3, 1, 1, 89.99),
        order(14, 8, 201, 2024, 3, 5, 2, 299.99),
        order(15, 9, 104, 2024, 3, 10, 1, 399.99),
        order(16, 9, 105, 2024, 3, 10, 2, 49.99),
        order(17, 10, 301, 2024, 3, 15, 5, 34.99),
        order(18, 10, 302, 2024, 3, 15, 3, 19.99),
        order(19, 1, 203, 2024, 3, 20, 1, 599.99),
        order(20, 2, 103, 2024, 3, 25, 2, 89.99),
    ]
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: i64,
    first: &str,
    last: &str,
    email: &str,
    phone: &str,
    address: &str,
    city: &str,
    state: &str,
    zip: &str,
) -> Customer {
    Customer {
        customer_id: id,
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
        address: Some(address.to_string()),
        city: Some(city.to_string()),
        state: Some(state.to_string()),
        zip_code: Some(zip.to_string()),
        country: Some("USA".to_string()),
    }
}

fn product(id: i64, name: &str, price: f64, stock: i64, category: &str, supplier: &str) -> Product {
    Product {
        product_id: id,
        product_name: Some(name.to_string()),
        description: None,
        price: Some(price),
        stock_quantity: Some(stock),
        category: Some(category.to_string()),
        supplier: Some(supplier.to_string()),
    }
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: i64,
    customer_id: i64,
    product_id: i64,
    year: i32,
    month: u32,
    day: u32,
    quantity: i64,
    unit_price: f64,
) -> Order {
    Order {
        order_id: id,
        customer_id: Some(customer_id),
        product_id: Some(product_id),
        order_date: NaiveDate::from_ymd_opt(year, month, day),
        quantity: Some(quantity),
        unit_price: Some(unit_price),
        total_amount: Some(quantity as f64 * unit_price),
        status: Some("completed".to_string()),
    }
}
