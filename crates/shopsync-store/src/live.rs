use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};

use shopsync_core::{Customer, DataSource, Error, Order, Product, Result};

use crate::schema::SCHEMA_SQL;

/// Read/write handle to the SQLite integration database.
pub struct LiveStore {
    pool: SqlitePool,
}

impl LiveStore {
    /// Open (creating if necessary) the database at `path`.
    pub async fn connect(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(store_err)?;
        Ok(Self { pool })
    }

    /// Open an in-memory database, used by tests and dry runs.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(store_err)?;
        Ok(Self { pool })
    }

    /// Create the three integrated tables if they do not exist.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::raw_sql(SCHEMA_SQL)
            .execute(&self.pool)
            .await
            .map_err(store_err)?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn count(&self, table: &str) -> Result<u64> {
        let sql = match table {
            "customers" => "SELECT COUNT(*) AS n FROM customers",
            "products" => "SELECT COUNT(*) AS n FROM products",
            "orders" => "SELECT COUNT(*) AS n FROM orders",
            other => return Err(Error::Other(format!("unknown table: {other}"))),
        };
        let row = sqlx::query(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(store_err)?;
        let count: i64 = row.try_get("n").map_err(store_err)?;
        Ok(count as u64)
    }
}

#[async_trait]
impl DataSource for LiveStore {
    fn kind(&self) -> &'static str {
        "sqlite"
    }

    async fn customers(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query(
            "SELECT customer_id, first_name, last_name, email, phone, address, city, state, \
             zip_code, country FROM customers ORDER BY customer_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;
        rows.iter().map(customer_from_row).collect()
    }

    async fn products(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query(
            "SELECT product_id, product_name, description, price, stock_quantity, category, \
             supplier FROM products ORDER BY product_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;
        rows.iter().map(product_from_row).collect()
    }

    async fn orders(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            "SELECT order_id, customer_id, product_id, order_date, quantity, unit_price, \
             total_amount, status FROM orders ORDER BY order_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;
        rows.iter().map(order_from_row).collect()
    }
}

fn customer_from_row(row: &SqliteRow) -> Result<Customer> {
    Ok(Customer {
        customer_id: row.try_get("customer_id").map_err(store_err)?,
        first_name: row.try_get("first_name").map_err(store_err)?,
        last_name: row.try_get("last_name").map_err(store_err)?,
        email: row.try_get("email").map_err(store_err)?,
        phone: row.try_get("phone").map_err(store_err)?,
        address: row.try_get("address").map_err(store_err)?,
        city: row.try_get("city").map_err(store_err)?,
        state: row.try_get("state").map_err(store_err)?,
        zip_code: row.try_get("zip_code").map_err(store_err)?,
        country: row.try_get("country").map_err(store_err)?,
    })
}

fn product_from_row(row: &SqliteRow) -> Result<Product> {
    Ok(Product {
        product_id: row.try_get("product_id").map_err(store_err)?,
        product_name: row.try_get("product_name").map_err(store_err)?,
        description: row.try_get("description").map_err(store_err)?,
        price: row.try_get("price").map_err(store_err)?,
        stock_quantity: row.try_get("stock_quantity").map_err(store_err)?,
        category: row.try_get("category").map_err(store_err)?,
        supplier: row.try_get("supplier").map_err(store_err)?,
    })
}

fn order_from_row(row: &SqliteRow) -> Result<Order> {
    Ok(Order {
        order_id: row.try_get("order_id").map_err(store_err)?,
        customer_id: row.try_get("customer_id").map_err(store_err)?,
        product_id: row.try_get("product_id").map_err(store_err)?,
        order_date: row
            .try_get::<Option<NaiveDate>, _>("order_date")
            .map_err(store_err)?,
        quantity: row.try_get("quantity").map_err(store_err)?,
        unit_price: row.try_get("unit_price").map_err(store_err)?,
        total_amount: row.try_get("total_amount").map_err(store_err)?,
        status: row.try_get("status").map_err(store_err)?,
    })
}

fn store_err(err: sqlx::Error) -> Error {
    Error::Store(err.to_string())
}
