use shopsync_core::{Customer, Order, Snapshot};

#[test]
fn serializes_customer_deterministically() {
    let customer = Customer {
        customer_id: 1,
        first_name: Some("John".to_string()),
        last_name: Some("Smith".to_string()),
        email: Some("john.smith@email.com".to_string()),
        ..Customer::default()
    };

    let json = serde_json::to_string_pretty(&customer).expect("serialize customer");
    let expected = r#"{
  "customer_id": 1,
  "first_name": "John",
  "last_name": "Smith",
  "email": "john.smith@email.com",
  "phone": null,
  "address": null,
  "city": null,
  "state": null,
  "zip_code": null,
  "country": null
}"#;
    assert_eq!(json, expected);
}

#[test]
fn snapshot_roundtrips_through_json() {
    let snapshot = Snapshot {
        customers: vec![Customer {
            customer_id: 7,
            email: Some("a@b.c".to_string()),
            ..Customer::default()
        }],
        products: Vec::new(),
        orders: vec![Order {
            order_id: 1,
            customer_id: Some(7),
            quantity: Some(2),
            unit_price: Some(9.99),
            ..Order::default()
        }],
    };

    let json = serde_json::to_string(&snapshot).expect("serialize snapshot");
    let back: Snapshot = serde_json::from_str(&json).expect("deserialize snapshot");
    assert_eq!(back, snapshot);
}

#[test]
fn order_revenue_prefers_recorded_total() {
    let order = Order {
        order_id: 1,
        quantity: Some(3),
        unit_price: Some(10.0),
        total_amount: Some(25.0),
        ..Order::default()
    };
    assert_eq!(order.revenue(), 25.0);

    let derived = Order {
        total_amount: None,
        ..order
    };
    assert_eq!(derived.revenue(), 30.0);
}
