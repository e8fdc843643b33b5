// tests/common/mod.rs
//
// Shared fixtures for the integration tests.
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use purchase_report::{OrderItem, Seller};

pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, 6, 1)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

pub fn days_ago(days: i64) -> String {
    (now() - TimeDelta::days(days)).format("%b %d, %Y").to_string()
}

pub fn item(order_id: &str, item_index: u32, purchase_date: &str, price: &str) -> OrderItem {
    OrderItem {
        order_id: order_id.to_string(),
        item_index,
        purchase_date: purchase_date.to_string(),
        price: price.to_string(),
        quantity: "1".into(),
        specs: format!("item {}-{}", order_id, item_index),
        ship_status: String::new(),
        delivery_date: String::new(),
        seller: Seller {
            name: format!("seller-{}", order_id),
            url: format!("https://example.com/usr/seller-{}", order_id),
        },
        thumbnail: None,
        feedback_not_left: true,
    }
}

/// A mixed single-currency history: several dates, sellers, shipped and not.
pub fn history() -> Vec<OrderItem> {
    let mut items = vec![
        item("100", 1, "Mar 01, 2017", "EUR 12.50"),
        item("100", 2, "Mar 01, 2017", "EUR 3.20"),
        item("101", 1, "Mar 05, 2017", "EUR 40.00"),
        item("102", 1, "Mar 09, 2017", "EUR 7.99"),
        item("103", 1, "Apr 02, 2017", "EUR 1.05"),
        item("104", 1, "Apr 20, 2017", "EUR 19.00"),
    ];
    items[0].ship_status = "Mar 03, 2017".into();
    items[2].ship_status = "Mar 15, 2017".into();
    items[2].delivery_date = "Mar 20 - Apr 02, 2017".into();
    items[3].feedback_not_left = false;
    items[4].thumbnail = Some("https://example.com/thumb/103.jpg".into());
    items[5].ship_status = "Apr 22, 2017".into();
    items[5].delivery_date = "May 10 - Jun 20, 2017".into();
    items
}
