//! SQLite schema for the integration database.

/// Idempotent DDL for the three integrated tables.
pub const SCHEMA_SQL: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS customers (
    customer_id INTEGER PRIMARY KEY,
    first_name  TEXT,
    last_name   TEXT,
    email       TEXT,
    phone       TEXT,
    address     TEXT,
    city        TEXT,
    state       TEXT,
    zip_code    TEXT,
    country     TEXT
);

CREATE TABLE IF NOT EXISTS products (
    product_id     INTEGER PRIMARY KEY,
    product_name   TEXT,
    description    TEXT,
    price          REAL,
    stock_quantity INTEGER,
    category       TEXT,
    supplier       TEXT
);

CREATE TABLE IF NOT EXISTS orders (
    order_id     INTEGER PRIMARY KEY,
    customer_id  INTEGER,
    product_id   INTEGER,
    order_date   TEXT,
    quantity     INTEGER,
    unit_price   REAL,
    total_amount REAL,
    status       TEXT
);
";
