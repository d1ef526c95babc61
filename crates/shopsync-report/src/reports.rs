use std::collections::HashMap;

use shopsync_core::{Order, Snapshot};

use crate::model::{CategorySummaryRow, CustomerProductRow, ProductSalesRow, TopCustomerRow};

/// Total orders and revenue generated per product, revenue descending.
///
/// Every product appears, sold or not; orders whose product does not
/// resolve are ignored here (they are the referential checker's
/// business).
pub fn product_sales_report(snapshot: &Snapshot) -> Vec<ProductSalesRow> {
    let mut orders_by_product: HashMap<i64, Vec<&Order>> = HashMap::new();
    for order in &snapshot.orders {
        if let Some(product_id) = order.product_id {
            orders_by_product.entry(product_id).or_default().push(order);
        }
    }

    let mut rows = Vec::with_capacity(snapshot.products.len());
    for product in &snapshot.products {
        let orders = orders_by_product
            .get(&product.product_id)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let total_orders = orders.len() as u64;
        let total_quantity_sold: i64 = orders.iter().filter_map(|o| o.quantity).sum();
        let total_revenue: f64 = orders.iter().map(|o| o.revenue()).sum();
        let average_order_value = if total_orders > 0 {
            total_revenue / total_orders as f64
        } else {
            0.0
        };

        rows.push(ProductSalesRow {
            product_id: product.product_id,
            product_name: product.product_name.clone().unwrap_or_default(),
            category: product
                .category
                .clone()
                .unwrap_or_else(|| "Uncategorized".to_string()),
            current_price: product.price.unwrap_or_default(),
            stock_quantity: product.stock_quantity.unwrap_or_default(),
            total_orders,
            total_quantity_sold,
            total_revenue,
            average_order_value,
        });
    }

    rows.sort_by(|a, b| {
        b.total_revenue
            .total_cmp(&a.total_revenue)
            .then(a.product_id.cmp(&b.product_id))
    });
    rows
}

/// Summary per product category, revenue descending.
pub fn category_summary(snapshot: &Snapshot) -> Vec<CategorySummaryRow> {
    let sales = product_sales_report(snapshot);

    let mut by_category: HashMap<String, CategorySummaryRow> = HashMap::new();
    for row in sales {
        let entry = by_category
            .entry(row.category.clone())
            .or_insert_with(|| CategorySummaryRow {
                category: row.category.clone(),
                product_count: 0,
                total_orders: 0,
                total_quantity_sold: 0,
                category_revenue: 0.0,
                average_order_value: 0.0,
            });
        entry.product_count += 1;
        entry.total_orders += row.total_orders;
        entry.total_quantity_sold += row.total_quantity_sold;
        entry.category_revenue += row.total_revenue;
    }

    let mut rows: Vec<CategorySummaryRow> = by_category
        .into_values()
        .map(|mut row| {
            row.average_order_value = if row.total_orders > 0 {
                row.category_revenue / row.total_orders as f64
            } else {
                0.0
            };
            row
        })
        .collect();

    rows.sort_by(|a, b| {
        b.category_revenue
            .total_cmp(&a.category_revenue)
            .then(a.category.cmp(&b.category))
    });
    rows
}

/// Top customers by revenue. Customers without orders are omitted.
pub fn top_customers_report(snapshot: &Snapshot, limit: usize) -> Vec<TopCustomerRow> {
    let mut by_customer: HashMap<i64, TopCustomerRow> = HashMap::new();

    for customer in &snapshot.customers {
        by_customer.insert(
            customer.customer_id,
            TopCustomerRow {
                customer_id: customer.customer_id,
                customer_name: customer.full_name(),
                email: customer.email.clone().unwrap_or_default(),
                total_orders: 0,
                total_items: 0,
                total_revenue: 0.0,
            },
        );
    }

    for order in &snapshot.orders {
        let Some(entry) = order.customer_id.and_then(|id| by_customer.get_mut(&id)) else {
            continue;
        };
        entry.total_orders += 1;
        entry.total_items += order.quantity.unwrap_or_default();
        entry.total_revenue += order.revenue();
    }

    let mut rows: Vec<TopCustomerRow> = by_customer
        .into_values()
        .filter(|row| row.total_orders > 0)
        .collect();
    rows.sort_by(|a, b| {
        b.total_revenue
            .total_cmp(&a.total_revenue)
            .then(a.customer_id.cmp(&b.customer_id))
    });
    rows.truncate(limit);
    rows
}

/// Customer/product pairings with order counts and spend. Inner-join
/// semantics: orders whose customer or product does not resolve are
/// skipped.
pub fn customer_product_report(snapshot: &Snapshot) -> Vec<CustomerProductRow> {
    let customers: HashMap<i64, _> = snapshot
        .customers
        .iter()
        .map(|c| (c.customer_id, c))
        .collect();
    let products: HashMap<i64, _> = snapshot
        .products
        .iter()
        .map(|p| (p.product_id, p))
        .collect();

    let mut by_pair: HashMap<(i64, i64), CustomerProductRow> = HashMap::new();
    for order in &snapshot.orders {
        let (Some(customer_id), Some(product_id)) = (order.customer_id, order.product_id) else {
            continue;
        };
        let (Some(customer), Some(product)) =
            (customers.get(&customer_id), products.get(&product_id))
        else {
            continue;
        };

        let entry = by_pair
            .entry((customer_id, product_id))
            .or_insert_with(|| CustomerProductRow {
                customer_id,
                customer_name: customer.full_name(),
                email: customer.email.clone().unwrap_or_default(),
                city: customer.city.clone().unwrap_or_default(),
                state: customer.state.clone().unwrap_or_default(),
                product_id,
                product_name: product.product_name.clone().unwrap_or_default(),
                category: product
                    .category
                    .clone()
                    .unwrap_or_else(|| "Uncategorized".to_string()),
                order_count: 0,
                total_quantity: 0,
                total_spent: 0.0,
            });
        entry.order_count += 1;
        entry.total_quantity += order.quantity.unwrap_or_default();
        entry.total_spent += order.revenue();
    }

    let mut rows: Vec<CustomerProductRow> = by_pair.into_values().collect();
    rows.sort_by(|a, b| {
        a.customer_id
            .cmp(&b.customer_id)
            .then(b.total_spent.total_cmp(&a.total_spent))
            .then(a.product_id.cmp(&b.product_id))
    });
    rows
}
