// tests/report_properties.rs
//
// Behaviour of the sort/group/classify pipeline across whole item lists.
mod common;

use common::{days_ago, history, item, now};
use purchase_report::highlight::classify;
use purchase_report::{
    HighlightKind, HighlightRules, OrderItem, ReportConfiguration, SortField, process,
};

const SORT_FIELDS: [SortField; 6] = [
    SortField::Seller,
    SortField::PurchaseDate,
    SortField::Price,
    SortField::Quantity,
    SortField::ShipStatus,
    SortField::DeliveryDate,
];

fn keys(items: &[OrderItem]) -> Vec<(String, u32)> {
    let mut keys: Vec<(String, u32)> = items
        .iter()
        .map(|i| (i.order_id.clone(), i.item_index))
        .collect();
    keys.sort();
    keys
}

#[test]
fn sorting_is_a_permutation() {
    let input = history();
    for field in SORT_FIELDS {
        for reverse in [false, true] {
            let config = ReportConfiguration::sorted_by(field, reverse);
            let report = process(&input, &config, now());
            let output: Vec<OrderItem> = report.items().cloned().collect();
            assert_eq!(output.len(), input.len(), "{field} reverse={reverse}");
            assert_eq!(keys(&output), keys(&input), "{field} reverse={reverse}");
        }
    }
}

#[test]
fn reverse_is_exact_mirror_for_distinct_keys() {
    let input = history();
    // distinct prices and purchase dates everywhere except order 100
    let input: Vec<OrderItem> = input.into_iter().filter(|i| i.item_index == 1).collect();

    for field in [SortField::Price, SortField::PurchaseDate, SortField::Seller] {
        let asc = process(&input, &ReportConfiguration::sorted_by(field, false), now());
        let desc = process(&input, &ReportConfiguration::sorted_by(field, true), now());
        let mut asc_ids: Vec<&str> = asc.items().map(|i| i.order_id.as_str()).collect();
        let desc_ids: Vec<&str> = desc.items().map(|i| i.order_id.as_str()).collect();
        asc_ids.reverse();
        assert_eq!(asc_ids, desc_ids, "{field}");
    }
}

#[test]
fn equal_keys_keep_input_order() {
    let input = vec![
        item("b", 1, "Mar 01, 2017", "EUR 5.00"),
        item("a", 1, "Mar 02, 2017", "EUR 5.00"),
        item("c", 1, "Mar 03, 2017", "EUR 1.00"),
    ];
    let report = process(&input, &ReportConfiguration::sorted_by(SortField::Price, false), now());
    let ids: Vec<&str> = report.items().map(|i| i.order_id.as_str()).collect();
    assert_eq!(ids, ["c", "b", "a"]);
}

#[test]
fn subtotals_add_up_to_grand_total() {
    let input = history();
    for field in SORT_FIELDS {
        let report = process(&input, &ReportConfiguration::sorted_by(field, false), now());
        let grand = report.grand_total.as_ref().expect("single currency");
        let sum: f64 = report.groups.iter().map(|g| g.total_value).sum();
        let count: usize = report.groups.iter().map(|g| g.item_count).sum();
        let shipped: usize = report.groups.iter().map(|g| g.shipped_count).sum();
        assert!((sum - grand.total_value).abs() < 1e-9, "{field}");
        assert_eq!(count, grand.item_count);
        assert_eq!(shipped, grand.shipped_count);
        assert_eq!(grand.shipped_count, 3);
    }
}

#[test]
fn groups_are_contiguous_runs() {
    let report = process(&history(), &ReportConfiguration::default(), now());
    let groups: Vec<usize> = report.rows.iter().map(|r| r.group).collect();
    assert!(groups.windows(2).all(|w| w[1] == w[0] || w[1] == w[0] + 1));
    assert_eq!(groups.last().copied(), Some(report.groups.len() - 1));
    // five distinct purchase dates in natural order
    assert_eq!(report.groups.len(), 5);
}

#[test]
fn mixed_currencies_suppress_grand_total() {
    let mut input = history();
    input.push(item("200", 1, "Apr 20, 2017", "USD 9.00"));
    let report = process(&input, &ReportConfiguration::default(), now());
    assert!(report.grand_total.is_none());
    assert_eq!(report.currencies, ["EUR", "USD"]);
    assert_eq!(report.groups.last().unwrap().currency, "USD");
}

#[test]
fn received_always_wins() {
    let rules = HighlightRules::default();
    let mut it = item("1", 1, &days_ago(90), "EUR 1.00");
    it.feedback_not_left = false;
    it.delivery_date = "garbled".into();
    assert_eq!(classify(&it, &rules, now()), Some(HighlightKind::Received));
}

#[test]
fn fifty_day_old_unshipped_item_is_past_due() {
    let it = item("1", 1, &days_ago(50), "EUR 1.00");
    assert_eq!(
        classify(&it, &HighlightRules::default(), now()),
        Some(HighlightKind::NotReceived)
    );
}

#[test]
fn highlights_follow_item_dates() {
    let report = process(&history(), &ReportConfiguration::default(), now());
    let received: Vec<bool> = report
        .rows
        .iter()
        .map(|r| r.highlight == Some(HighlightKind::Received))
        .collect();
    assert_eq!(received.iter().filter(|r| **r).count(), 1);
    // order 104 is estimated for Jun 20, over 40 days after purchase
    let last = report.rows.iter().find(|r| r.item.order_id == "104").unwrap();
    assert_eq!(last.highlight, Some(HighlightKind::NotDelivered));
}

#[test]
fn empty_input_is_a_valid_report() {
    let report = process(&[], &ReportConfiguration::default(), now());
    assert!(report.rows.is_empty());
    assert!(report.groups.is_empty());
    assert!(report.grand_total.is_none());
    assert!(report.currencies.is_empty());
}
