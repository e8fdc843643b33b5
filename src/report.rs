/*
 * SPDX-FileCopyrightText: © 2025 Jinwoo Park (pmnxis@gmail.com)
 *
 * SPDX-License-Identifier: MIT
 */

//! Sort, group and total the order items of one report.
//!
//! A single forward pass over the (sorted) items opens a new group whenever
//! the boundary key changes: the purchase date when sorting by nothing or by a
//! date, the currency always, the seller name when sorting by seller.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::columns::SortField;
use crate::compare;
use crate::config::{HighlightRule, HighlightRules, ReportConfiguration};
use crate::highlight::{self, HighlightKind};
use crate::model::OrderItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TotalKind {
    Subtotal,
    GrandTotal,
}

impl TotalKind {
    pub fn label(self) -> &'static str {
        match self {
            TotalKind::Subtotal => "SUBTOTAL",
            TotalKind::GrandTotal => "GRAND TOTAL",
        }
    }
}

/// Aggregate of one group, or of the whole report for the grand total
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupTotals {
    pub kind: TotalKind,
    pub item_count: usize,
    pub shipped_count: usize,
    pub total_value: f64,
    pub currency: String,
}

impl GroupTotals {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn not_shipped_count(&self) -> usize {
        self.item_count - self.shipped_count
    }

    pub fn average_value(&self) -> Option<f64> {
        (self.item_count > 0).then(|| self.total_value / self.item_count as f64)
    }

    /// "27 EUR, 2 shipped, 1 not-shipped (3 items, ~ 9 EUR/item)"
    pub fn summary(&self) -> String {
        let average = self
            .average_value()
            .map_or_else(|| "-".to_string(), |v| format!("{}", v.round()));
        format!(
            "{} {}, {} shipped, {} not-shipped ({} items, ~ {} {}/item)",
            self.total_value.round(),
            self.currency,
            self.shipped_count,
            self.not_shipped_count(),
            self.item_count,
            average,
            self.currency
        )
    }
}

/// One item in report order
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRow {
    /// 1-based display position
    pub position: usize,
    /// Index into `Report::groups`
    pub group: usize,
    pub highlight: Option<HighlightKind>,
    pub item: OrderItem,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub groups: Vec<GroupTotals>,
    /// Only present when every item shares one currency
    pub grand_total: Option<GroupTotals>,
    /// Distinct currencies in order of first appearance
    pub currencies: Vec<String>,
}

impl Report {
    pub fn items(&self) -> impl Iterator<Item = &OrderItem> {
        self.rows.iter().map(|row| &row.item)
    }

    /// Rows belonging to group `group`, in report order.
    pub fn group_rows(&self, group: usize) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(move |row| row.group == group)
    }

    pub fn legend<'r>(&self, rules: &'r HighlightRules) -> Vec<&'r HighlightRule> {
        highlight::legend(self.rows.iter().filter_map(|row| row.highlight), rules)
    }
}

/// Running totals of the group currently open
#[derive(Debug, Default)]
struct GroupAccumulator {
    item_count: usize,
    shipped_count: usize,
    total_value: f64,
    currency: String,
}

impl GroupAccumulator {
    fn add(&mut self, item: &OrderItem, currency: &str) {
        self.item_count += 1;
        if item.shipped() {
            self.shipped_count += 1;
        }
        self.total_value += item_value(item);
        self.currency = currency.to_string();
    }

    fn close(&mut self, kind: TotalKind) -> GroupTotals {
        let acc = std::mem::take(self);
        GroupTotals {
            kind,
            item_count: acc.item_count,
            shipped_count: acc.shipped_count,
            total_value: acc.total_value,
            currency: acc.currency,
        }
    }
}

/// Boundary key of the previous item
struct BoundaryKey<'a> {
    purchase_date: &'a str,
    currency: String,
    seller: &'a str,
}

impl<'a> BoundaryKey<'a> {
    fn of(item: &'a OrderItem, currency: String) -> Self {
        Self {
            purchase_date: &item.purchase_date,
            currency,
            seller: &item.seller.name,
        }
    }

    /// Empty previous values never open a group.
    fn starts_group(&self, next: &BoundaryKey<'_>, sort_by: Option<SortField>) -> bool {
        let by_date = sort_by.is_none_or(SortField::is_date);
        let date_changed = !self.purchase_date.is_empty() && next.purchase_date != self.purchase_date;
        let currency_changed = !self.currency.is_empty() && next.currency != self.currency;
        let seller_changed = !self.seller.is_empty() && next.seller != self.seller;

        (by_date && date_changed)
            || currency_changed
            || (sort_by == Some(SortField::Seller) && seller_changed)
    }
}

/// A price that does not parse contributes nothing to the totals.
fn item_value(item: &OrderItem) -> f64 {
    match item.price_value() {
        Some(value) => value,
        None => {
            log::debug!(
                "Order {} item {}: price '{}' not parseable, counted as 0",
                item.order_id,
                item.item_index,
                item.price
            );
            0.0
        }
    }
}

/// Order, group, total and classify `items` according to `config`.
pub fn process(items: &[OrderItem], config: &ReportConfiguration, now: NaiveDateTime) -> Report {
    let mut ordered = items.to_vec();
    if let Some(field) = config.sort_by {
        compare::sort_items(&mut ordered, field, config.reverse_order);
    }

    let mut report = Report::default();
    let mut current = GroupAccumulator::default();
    let mut grand = GroupAccumulator::default();
    let mut previous: Option<BoundaryKey<'_>> = None;

    for item in &ordered {
        let currency = item.currency();
        let key = BoundaryKey::of(item, currency.clone());

        if let Some(prev) = &previous
            && prev.starts_group(&key, config.sort_by)
        {
            report.groups.push(current.close(TotalKind::Subtotal));
        }

        current.add(item, &currency);
        grand.add(item, &currency);
        if !report.currencies.contains(&currency) {
            report.currencies.push(currency);
        }

        report.rows.push(ReportRow {
            position: report.rows.len() + 1,
            group: report.groups.len(),
            highlight: highlight::classify(item, &config.highlight, now),
            item: item.clone(),
        });
        previous = Some(key);
    }

    if current.item_count > 0 {
        report.groups.push(current.close(TotalKind::Subtotal));
    }

    if report.currencies.len() == 1 {
        report.grand_total = Some(grand.close(TotalKind::GrandTotal));
    }

    log::info!(
        "Report: {} items in {} groups, currencies {:?}",
        report.rows.len(),
        report.groups.len(),
        report.currencies
    );

    report
}

/// `process` against the local wall clock.
pub fn process_now(items: &[OrderItem], config: &ReportConfiguration) -> Report {
    process(items, config, chrono::Local::now().naive_local())
}
