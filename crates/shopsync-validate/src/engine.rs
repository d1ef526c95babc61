use std::collections::{BTreeMap, HashMap, HashSet};

use shopsync_core::{Customer, Order, Product, Snapshot};

use crate::model::{Issue, REPORT_VERSION, Rule, SectionReport, ValidationReport};

/// Allowed gap between an order's recorded unit price and the product's
/// current price before the pair is reported as drifted. Prices change
/// over time, so drift is advisory, never an error.
pub const PRICE_TOLERANCE: f64 = 0.01;

/// Units an order quantity may exceed current stock by before it is
/// reported as implausible. Stock is resupplied over time, so this is
/// advisory, never an error.
pub const STOCK_BUFFER: i64 = 100;

/// Run the full validation suite over a snapshot.
///
/// Every checker scans independently and all findings are collected in
/// one pass; nothing short-circuits. The result is deterministic for a
/// given snapshot.
pub fn validate_snapshot(snapshot: &Snapshot) -> ValidationReport {
    let customers = validate_customers(&snapshot.customers);
    let products = validate_products(&snapshot.products);
    let orders = validate_orders(&snapshot.orders);
    let foreign_keys = check_foreign_keys(snapshot);
    let consistency = check_consistency(snapshot);

    let overall_valid =
        customers.valid && products.valid && orders.valid && foreign_keys.valid;

    ValidationReport {
        report_version: REPORT_VERSION.to_string(),
        customers,
        products,
        orders,
        foreign_keys,
        consistency,
        overall_valid,
    }
}

/// Domain rules for the customers collection: required fields, email
/// format, duplicate primary keys, duplicate emails.
pub fn validate_customers(customers: &[Customer]) -> SectionReport {
    let mut issues = Vec::new();

    for customer in customers {
        let mut missing = Vec::new();
        if is_blank(customer.first_name.as_deref()) {
            missing.push("first_name");
        }
        if is_blank(customer.last_name.as_deref()) {
            missing.push("last_name");
        }
        if is_blank(customer.email.as_deref()) {
            missing.push("email");
        }
        if !missing.is_empty() {
            issues.push(Issue::new(
                Rule::MissingRequiredField,
                vec![customer.customer_id],
                format!(
                    "customer {} is missing {}",
                    customer.customer_id,
                    missing.join(", ")
                ),
            ));
        }

        if let Some(email) = customer.email.as_deref() {
            if !is_blank(Some(email)) && !is_plausible_email(email) {
                issues.push(Issue::new(
                    Rule::InvalidEmailFormat,
                    vec![customer.customer_id],
                    format!(
                        "customer {} has invalid email '{}'",
                        customer.customer_id, email
                    ),
                ));
            }
        }
    }

    collect_duplicate_keys(
        customers.iter().map(|c| c.customer_id),
        "customer_id",
        &mut issues,
    );

    // Duplicate emails: one issue per duplicated value, naming every
    // customer in the group.
    let mut by_email: BTreeMap<String, Vec<i64>> = BTreeMap::new();
    for customer in customers {
        if let Some(email) = customer.email.as_deref() {
            if !is_blank(Some(email)) {
                by_email
                    .entry(email.to_string())
                    .or_default()
                    .push(customer.customer_id);
            }
        }
    }
    for (email, keys) in by_email {
        if keys.len() > 1 {
            issues.push(Issue::new(
                Rule::DuplicateEmail,
                keys.clone(),
                format!("email '{}' is shared by {} customers", email, keys.len()),
            ));
        }
    }

    SectionReport::from_issues(issues)
}

/// Domain rules for the products collection: required fields, negative
/// price or stock, duplicate primary keys.
pub fn validate_products(products: &[Product]) -> SectionReport {
    let mut issues = Vec::new();

    for product in products {
        let mut missing = Vec::new();
        if is_blank(product.product_name.as_deref()) {
            missing.push("product_name");
        }
        if product.price.is_none() {
            missing.push("price");
        }
        if !missing.is_empty() {
            issues.push(Issue::new(
                Rule::MissingRequiredField,
                vec![product.product_id],
                format!(
                    "product {} is missing {}",
                    product.product_id,
                    missing.join(", ")
                ),
            ));
        }

        if let Some(price) = product.price {
            if price < 0.0 {
                issues.push(Issue::new(
                    Rule::NegativePrice,
                    vec![product.product_id],
                    format!("product {} has negative price {:.2}", product.product_id, price),
                ));
            }
        }

        if let Some(stock) = product.stock_quantity {
            if stock < 0 {
                issues.push(Issue::new(
                    Rule::NegativeStock,
                    vec![product.product_id],
                    format!("product {} has negative stock {}", product.product_id, stock),
                ));
            }
        }
    }

    collect_duplicate_keys(
        products.iter().map(|p| p.product_id),
        "product_id",
        &mut issues,
    );

    SectionReport::from_issues(issues)
}

/// Domain rules for the orders collection: required fields, non-positive
/// quantity, negative unit price.
pub fn validate_orders(orders: &[Order]) -> SectionReport {
    let mut issues = Vec::new();

    for order in orders {
        let mut missing = Vec::new();
        if order.customer_id.is_none() {
            missing.push("customer_id");
        }
        if order.product_id.is_none() {
            missing.push("product_id");
        }
        if order.quantity.is_none() {
            missing.push("quantity");
        }
        if order.unit_price.is_none() {
            missing.push("unit_price");
        }
        if !missing.is_empty() {
            issues.push(Issue::new(
                Rule::MissingRequiredField,
                vec![order.order_id],
                format!("order {} is missing {}", order.order_id, missing.join(", ")),
            ));
        }

        if let Some(quantity) = order.quantity {
            if quantity <= 0 {
                issues.push(Issue::new(
                    Rule::NonPositiveQuantity,
                    vec![order.order_id],
                    format!("order {} has quantity {}", order.order_id, quantity),
                ));
            }
        }

        if let Some(unit_price) = order.unit_price {
            if unit_price < 0.0 {
                issues.push(Issue::new(
                    Rule::NegativePrice,
                    vec![order.order_id],
                    format!(
                        "order {} has negative unit price {:.2}",
                        order.order_id, unit_price
                    ),
                ));
            }
        }
    }

    SectionReport::from_issues(issues)
}

/// Referential integrity: every order's foreign keys must resolve.
///
/// Orders whose foreign-key field is absent are already reported by
/// [`validate_orders`] and are skipped here so one defect yields one
/// finding.
pub fn check_foreign_keys(snapshot: &Snapshot) -> SectionReport {
    let customer_ids: HashSet<i64> = snapshot.customers.iter().map(|c| c.customer_id).collect();
    let product_ids: HashSet<i64> = snapshot.products.iter().map(|p| p.product_id).collect();

    let mut issues = Vec::new();
    for order in &snapshot.orders {
        if let Some(customer_id) = order.customer_id {
            if !customer_ids.contains(&customer_id) {
                issues.push(Issue::new(
                    Rule::UnknownCustomer,
                    vec![order.order_id],
                    format!(
                        "order {} references missing customer {}",
                        order.order_id, customer_id
                    ),
                ));
            }
        }
        if let Some(product_id) = order.product_id {
            if !product_ids.contains(&product_id) {
                issues.push(Issue::new(
                    Rule::UnknownProduct,
                    vec![order.order_id],
                    format!(
                        "order {} references missing product {}",
                        order.order_id, product_id
                    ),
                ));
            }
        }
    }

    SectionReport::from_issues(issues)
}

/// Cross-table consistency observations. These are informational: a
/// drifted price or an implausible quantity is reported but never fails
/// the snapshot.
pub fn check_consistency(snapshot: &Snapshot) -> SectionReport {
    // First occurrence wins; a duplicate product id is already a hard
    // product issue.
    let mut products: HashMap<i64, &Product> = HashMap::new();
    for product in &snapshot.products {
        products.entry(product.product_id).or_insert(product);
    }

    let mut issues = Vec::new();
    for order in &snapshot.orders {
        let Some(product) = order.product_id.and_then(|id| products.get(&id)) else {
            continue;
        };

        if let (Some(unit_price), Some(price)) = (order.unit_price, product.price) {
            if (unit_price - price).abs() > PRICE_TOLERANCE {
                issues.push(Issue::new(
                    Rule::PriceDrift,
                    vec![order.order_id],
                    format!(
                        "order {} recorded unit price {:.2}, product {} currently {:.2} \
                         (may be expected)",
                        order.order_id, unit_price, product.product_id, price
                    ),
                ));
            }
        }

        if let (Some(quantity), Some(stock)) = (order.quantity, product.stock_quantity) {
            if quantity > stock + STOCK_BUFFER {
                issues.push(Issue::new(
                    Rule::StockImplausible,
                    vec![order.order_id],
                    format!(
                        "order {} quantity {} exceeds product {} stock {} beyond the \
                         replenishment buffer",
                        order.order_id, quantity, product.product_id, stock
                    ),
                ));
            }
        }
    }

    SectionReport::from_issues(issues)
}

fn is_blank(value: Option<&str>) -> bool {
    match value {
        Some(value) => value.trim().is_empty(),
        None => true,
    }
}

/// Minimal email heuristic: an `@` with a `.` somewhere after it. This is
/// deliberately permissive, matching the source feeds' own checks, and is
/// not RFC validation.
fn is_plausible_email(value: &str) -> bool {
    match value.find('@') {
        Some(at) => value[at + 1..].contains('.'),
        None => false,
    }
}

fn collect_duplicate_keys(
    keys: impl Iterator<Item = i64>,
    field: &str,
    issues: &mut Vec<Issue>,
) {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    for (key, count) in counts {
        if count > 1 {
            issues.push(Issue::new(
                Rule::DuplicatePrimaryKey,
                vec![key],
                format!("{field} {key} appears {count} times"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::is_plausible_email;

    #[test]
    fn email_heuristic_matches_at_then_dot() {
        assert!(is_plausible_email("john.smith@email.com"));
        assert!(is_plausible_email("a@b.c"));
        // Permissive on purpose: only the @-then-dot shape is required.
        assert!(is_plausible_email("@x."));
        assert!(!is_plausible_email("no-at-sign.com"));
        assert!(!is_plausible_email("dot.before@atsign"));
        assert!(!is_plausible_email("plain"));
    }
}
