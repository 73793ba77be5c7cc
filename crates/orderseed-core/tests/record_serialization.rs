use chrono::NaiveDate;
use orderseed_core::{Entity, Order, OrderStatus, Record};
use uuid::Uuid;

#[test]
fn serializes_order_with_status_code_and_iso_dates() {
    let order = Order {
        id: Uuid::nil(),
        worker_id: "w-1".to_string(),
        user_id: "u-1".to_string(),
        status: OrderStatus::Canceled,
        deadline: NaiveDate::from_ymd_opt(2024, 4, 12).expect("valid date"),
        address: "7 Elm Street".to_string(),
        creation_date: NaiveDate::from_ymd_opt(2024, 3, 29).expect("valid date"),
        rate: 0,
    };

    let json = serde_json::to_string(&order).expect("serialize order");
    let expected = concat!(
        r#"{"id":"00000000-0000-0000-0000-000000000000","worker_id":"w-1","user_id":"u-1","#,
        r#""status":"4","deadline":"2024-04-12","address":"7 Elm Street","#,
        r#""creation_date":"2024-03-29","rate":0}"#
    );
    assert_eq!(json, expected);

    let parsed: Order = serde_json::from_str(&json).expect("parse order");
    assert_eq!(parsed, order);
}

#[test]
fn every_entity_table_has_matching_field_count() {
    for entity in Entity::ALL {
        let table = entity.table();
        assert!(table.file_name.ends_with("_data.csv"));
        assert_eq!(table.columns[0], "id");
    }

    let order = Order {
        id: Uuid::nil(),
        worker_id: String::new(),
        user_id: String::new(),
        status: OrderStatus::Pending,
        deadline: NaiveDate::default(),
        address: String::new(),
        creation_date: NaiveDate::default(),
        rate: 0,
    };
    assert_eq!(order.fields().len(), Entity::Orders.table().columns.len());
}

#[test]
fn rejects_unknown_status_code() {
    let result: Result<OrderStatus, _> = serde_json::from_str("\"9\"");
    assert!(result.is_err());
}
