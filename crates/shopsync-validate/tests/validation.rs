use shopsync_core::{Customer, Order, Product, Snapshot};
use shopsync_validate::{Rule, validate_snapshot};

fn customer(id: i64, first: &str, last: &str, email: &str) -> Customer {
    Customer {
        customer_id: id,
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        email: Some(email.to_string()),
        ..Customer::default()
    }
}

fn product(id: i64, name: &str, price: f64, stock: i64) -> Product {
    Product {
        product_id: id,
        product_name: Some(name.to_string()),
        price: Some(price),
        stock_quantity: Some(stock),
        ..Product::default()
    }
}

fn order(id: i64, customer_id: i64, product_id: i64, quantity: i64, unit_price: f64) -> Order {
    Order {
        order_id: id,
        customer_id: Some(customer_id),
        product_id: Some(product_id),
        quantity: Some(quantity),
        unit_price: Some(unit_price),
        ..Order::default()
    }
}

fn clean_snapshot() -> Snapshot {
    Snapshot {
        customers: vec![
            customer(1, "John", "Smith", "john.smith@email.com"),
            customer(2, "Emily", "Johnson", "emily.johnson@email.com"),
        ],
        products: vec![
            product(101, "Laptop Pro 15", 1299.99, 25),
            product(102, "Wireless Mouse", 29.99, 150),
        ],
        orders: vec![
            order(1, 1, 101, 1, 1299.99),
            order(2, 2, 102, 2, 29.99),
        ],
    }
}

#[test]
fn clean_snapshot_passes_every_section() {
    let report = validate_snapshot(&clean_snapshot());

    assert!(report.overall_valid);
    for (name, section) in report.hard_sections() {
        assert!(section.valid, "section {name} should be valid");
        assert!(section.issues.is_empty(), "section {name} should be empty");
    }
    assert!(report.consistency.valid);
    assert!(report.consistency.issues.is_empty());
}

#[test]
fn empty_collections_are_trivially_valid() {
    let report = validate_snapshot(&Snapshot::default());

    assert!(report.overall_valid);
    assert!(report.customers.valid);
    assert!(report.products.valid);
    assert!(report.orders.valid);
    assert!(report.foreign_keys.valid);
    assert!(report.consistency.valid);
}

#[test]
fn repeated_runs_yield_identical_reports() {
    let snapshot = Snapshot {
        customers: vec![
            customer(1, "John", "Smith", "shared@email.com"),
            customer(2, "Emily", "Johnson", "shared@email.com"),
        ],
        products: vec![product(101, "Laptop", -5.0, 10)],
        orders: vec![order(1, 99, 101, 1, 10.0)],
    };

    let first = validate_snapshot(&snapshot);
    let second = validate_snapshot(&snapshot);
    assert_eq!(first, second);
}

#[test]
fn duplicate_email_yields_one_issue_naming_both_customers() {
    let snapshot = Snapshot {
        customers: vec![
            customer(1, "John", "Smith", "shared@email.com"),
            customer(2, "Emily", "Johnson", "shared@email.com"),
        ],
        ..Snapshot::default()
    };

    let report = validate_snapshot(&snapshot);
    assert!(!report.customers.valid);

    let duplicates: Vec<_> = report
        .customers
        .issues
        .iter()
        .filter(|issue| issue.rule == Rule::DuplicateEmail)
        .collect();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].affected_keys, vec![1, 2]);
}

#[test]
fn duplicate_primary_keys_are_reported_per_key() {
    let snapshot = Snapshot {
        products: vec![
            product(101, "Laptop", 10.0, 1),
            product(101, "Laptop copy", 10.0, 1),
            product(102, "Mouse", 5.0, 1),
        ],
        ..Snapshot::default()
    };

    let report = validate_snapshot(&snapshot);
    let duplicates: Vec<_> = report
        .products
        .issues
        .iter()
        .filter(|issue| issue.rule == Rule::DuplicatePrimaryKey)
        .collect();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].affected_keys, vec![101]);
}

#[test]
fn negative_price_is_a_product_issue_only() {
    let mut snapshot = clean_snapshot();
    snapshot.products.push(product(103, "Broken", -5.0, 10));

    let report = validate_snapshot(&snapshot);
    assert!(!report.products.valid);
    assert!(
        report
            .products
            .issues
            .iter()
            .any(|issue| issue.rule == Rule::NegativePrice && issue.affected_keys == vec![103])
    );
    // Must not leak into the referential section.
    assert!(report.foreign_keys.valid);
    assert!(report.foreign_keys.issues.is_empty());
    assert!(!report.overall_valid);
}

#[test]
fn orphaned_order_only_fails_the_foreign_key_section() {
    let mut snapshot = clean_snapshot();
    snapshot.orders.push(order(3, 999, 101, 1, 1299.99));

    let report = validate_snapshot(&snapshot);
    assert!(!report.foreign_keys.valid);
    assert!(
        report
            .foreign_keys
            .issues
            .iter()
            .any(|issue| issue.rule == Rule::UnknownCustomer && issue.affected_keys == vec![3])
    );
    assert!(report.customers.valid);
    assert!(report.products.valid);
    assert!(!report.overall_valid);
}

#[test]
fn missing_foreign_key_field_is_not_double_reported() {
    let mut snapshot = clean_snapshot();
    snapshot.orders.push(Order {
        order_id: 3,
        customer_id: None,
        product_id: Some(101),
        quantity: Some(1),
        unit_price: Some(1299.99),
        ..Order::default()
    });

    let report = validate_snapshot(&snapshot);
    assert!(!report.orders.valid);
    assert!(
        report
            .orders
            .issues
            .iter()
            .any(|issue| issue.rule == Rule::MissingRequiredField && issue.affected_keys == vec![3])
    );
    // The referential checker skips absent keys; the domain issue is the
    // single finding.
    assert!(report.foreign_keys.valid);
}

#[test]
fn price_drift_respects_the_tolerance_boundary() {
    let mut within = clean_snapshot();
    within.products[0] = product(101, "Laptop Pro 15", 100.009, 25);
    within.orders[0] = order(1, 1, 101, 1, 100.00);

    let report = validate_snapshot(&within);
    assert!(report.consistency.valid, "diff of 0.009 is within tolerance");

    let mut beyond = clean_snapshot();
    beyond.products[0] = product(101, "Laptop Pro 15", 100.02, 25);
    beyond.orders[0] = order(1, 1, 101, 1, 100.00);

    let report = validate_snapshot(&beyond);
    assert!(!report.consistency.valid);
    assert!(
        report
            .consistency
            .issues
            .iter()
            .any(|issue| issue.rule == Rule::PriceDrift && issue.affected_keys == vec![1])
    );
    // Advisory only: the overall verdict is untouched.
    assert!(report.overall_valid);
}

#[test]
fn stock_check_respects_the_replenishment_buffer() {
    let mut at_buffer = clean_snapshot();
    at_buffer.products[0] = product(101, "Laptop Pro 15", 100.0, 25);
    at_buffer.orders[0] = order(1, 1, 101, 125, 100.0);

    let report = validate_snapshot(&at_buffer);
    assert!(report.consistency.valid, "stock + 100 exactly is not flagged");

    let mut over_buffer = clean_snapshot();
    over_buffer.products[0] = product(101, "Laptop Pro 15", 100.0, 25);
    over_buffer.orders[0] = order(1, 1, 101, 126, 100.0);

    let report = validate_snapshot(&over_buffer);
    assert!(!report.consistency.valid);
    assert!(
        report
            .consistency
            .issues
            .iter()
            .any(|issue| issue.rule == Rule::StockImplausible && issue.affected_keys == vec![1])
    );
    assert!(report.overall_valid);
}

#[test]
fn invalid_and_missing_emails_are_domain_issues() {
    let snapshot = Snapshot {
        customers: vec![
            customer(1, "John", "Smith", "not-an-email"),
            Customer {
                customer_id: 2,
                first_name: Some("Emily".to_string()),
                last_name: Some("Johnson".to_string()),
                email: None,
                ..Customer::default()
            },
        ],
        ..Snapshot::default()
    };

    let report = validate_snapshot(&snapshot);
    assert!(!report.customers.valid);
    assert!(
        report
            .customers
            .issues
            .iter()
            .any(|issue| issue.rule == Rule::InvalidEmailFormat && issue.affected_keys == vec![1])
    );
    assert!(
        report
            .customers
            .issues
            .iter()
            .any(|issue| issue.rule == Rule::MissingRequiredField && issue.affected_keys == vec![2])
    );
}

#[test]
fn non_positive_quantity_is_an_order_issue() {
    let mut snapshot = clean_snapshot();
    snapshot.orders.push(order(3, 1, 101, 0, 10.0));

    let report = validate_snapshot(&snapshot);
    assert!(!report.orders.valid);
    assert!(
        report
            .orders
            .issues
            .iter()
            .any(|issue| issue.rule == Rule::NonPositiveQuantity && issue.affected_keys == vec![3])
    );
}

#[test]
fn report_serializes_with_snake_case_rules() {
    let mut snapshot = clean_snapshot();
    snapshot.products.push(product(103, "Broken", -5.0, 10));

    let report = validate_snapshot(&snapshot);
    let json = serde_json::to_value(&report).expect("serialize report");

    assert_eq!(json["overall_valid"], false);
    assert_eq!(json["products"]["issues"][0]["rule"], "negative_price");
    assert_eq!(json["consistency"]["valid"], true);
}
