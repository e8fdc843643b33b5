// tests/report_request.rs
//
// A report request as the content script sends it, end to end.
mod common;

use common::now;
use purchase_report::table::render_report;
use purchase_report::{HighlightKind, ReportConfiguration, ReportRequest, SortField, process};

const REQUEST: &str = r#"{
    "orders": [
        {"orderId": "9", "itemIndex": 1, "purchaseDate": "Apr 01, 2017", "price": "GBP 4.00",
         "quantity": "1", "specs": "Hex keys", "shipStatus": "", "deliveryDate": "",
         "seller": {"name": "tools-r-us", "url": "https://example.com/usr/tools-r-us"},
         "feedbackNotLeft": true},
        {"orderId": "8", "itemIndex": 1, "purchaseDate": "May 28, 2017", "price": "GBP 16.00",
         "quantity": 2, "specs": "Bike light", "shipStatus": "05/29/2017",
         "deliveryDate": "Jun 02 - Jun 06, 2017",
         "seller": {"name": "bright", "url": "https://example.com/usr/bright"},
         "feedbackNotLeft": true}
    ],
    "sortby": "price",
    "reverseorder": true,
    "filters": [{"label": "Period", "content": "Last 60 days"}],
    "highlight": {"itemNotReceived": {"title": "Overdue"}}
}"#;

#[test]
fn request_drives_sort_highlight_and_rendering() {
    let request = ReportRequest::from_json(REQUEST).unwrap();
    let config = ReportConfiguration::from_options(&request.options);
    assert_eq!(config.sort_by, Some(SortField::Price));
    assert!(config.reverse_order);

    let report = process(&request.orders, &config, now());
    let ids: Vec<&str> = report.items().map(|i| i.order_id.as_str()).collect();
    assert_eq!(ids, ["8", "9"]);
    assert_eq!(report.rows[0].highlight, None);
    assert_eq!(report.rows[1].highlight, Some(HighlightKind::NotReceived));
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.grand_total.as_ref().unwrap().total_value, 20.0);

    let text = render_report("Purchase Report", &report, &config);
    assert!(text.contains("Period : Last 60 days"));
    assert!(text.contains("Item price ▼"));
    assert!(text.contains("[not-received] Overdue"));
    assert!(text.contains("GRAND TOTAL: 20 GBP, 1 shipped, 1 not-shipped (2 items, ~ 10 GBP/item)"));
}

#[test]
fn unknown_sort_field_keeps_natural_order() {
    let json = REQUEST.replace(r#""sortby": "price""#, r#""sortBy": "colour""#);
    let request = ReportRequest::from_json(&json).unwrap();
    let config = ReportConfiguration::from_options(&request.options);
    assert_eq!(config.sort_by, None);

    let report = process(&request.orders, &config, now());
    let ids: Vec<&str> = report.items().map(|i| i.order_id.as_str()).collect();
    assert_eq!(ids, ["9", "8"]);
    // natural order groups by purchase date
    assert_eq!(report.groups.len(), 2);
}

#[test]
fn malformed_request_is_an_error() {
    assert!(ReportRequest::from_json("{\"orders\": 5}").is_err());
}
