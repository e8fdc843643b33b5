/*
 * SPDX-FileCopyrightText: © 2025 Jinwoo Park (pmnxis@gmail.com)
 *
 * SPDX-License-Identifier: MIT
 */

//! Field-aware item comparison: numeric for prices, by timestamp for date
//! fields, plain text for everything else.

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::columns::SortField;
use crate::model::OrderItem;
use crate::parser;

/// Comparable value extracted from one item for one field
#[derive(Clone, Debug, PartialEq)]
pub enum SortKey<'a> {
    Text(&'a str),
    Number(Option<f64>),
    Date(Option<NaiveDateTime>),
}

impl<'a> SortKey<'a> {
    pub fn of(field: SortField, item: &'a OrderItem) -> Self {
        match field {
            SortField::Price => SortKey::Number(parser::price_value(&item.price)),
            SortField::PurchaseDate => {
                SortKey::Date(parser::parse_trailing_date(&item.purchase_date))
            }
            SortField::ShipStatus => SortKey::Date(parser::parse_trailing_date(&item.ship_status)),
            SortField::DeliveryDate => {
                SortKey::Date(parser::parse_trailing_date(&item.delivery_date))
            }
            SortField::Seller => SortKey::Text(&item.seller.name),
            SortField::Quantity => SortKey::Text(&item.quantity),
        }
    }

    /// `None` when either side failed to parse: the pair is unordered.
    pub fn partial_cmp_key(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => Some(a.cmp(b)),
            (SortKey::Number(Some(a)), SortKey::Number(Some(b))) => a.partial_cmp(b),
            (SortKey::Date(Some(a)), SortKey::Date(Some(b))) => Some(a.cmp(b)),
            _ => None,
        }
    }

    fn parsed(&self) -> bool {
        !matches!(self, SortKey::Number(None) | SortKey::Date(None))
    }
}

/// Compare two items on `field`. `None` means the pair has no defined order
/// because a price or date did not parse.
pub fn partial_compare(field: SortField, a: &OrderItem, b: &OrderItem) -> Option<Ordering> {
    SortKey::of(field, a).partial_cmp_key(&SortKey::of(field, b))
}

/// Build a comparator for `field`; `reverse` flips the result.
///
/// `sort_by` needs a total order, so values that fail to parse are all equal
/// to each other and placed after every parsed value (before them when
/// reversed).
pub fn compare(field: SortField, reverse: bool) -> impl Fn(&OrderItem, &OrderItem) -> Ordering {
    move |a: &OrderItem, b: &OrderItem| {
        let ka = SortKey::of(field, a);
        let kb = SortKey::of(field, b);
        let ord = match ka.partial_cmp_key(&kb) {
            Some(ord) => ord,
            None => kb.parsed().cmp(&ka.parsed()),
        };
        if reverse { ord.reverse() } else { ord }
    }
}

/// Stable in-place sort of the items on `field`.
pub fn sort_items(items: &mut [OrderItem], field: SortField, reverse: bool) {
    let unparsed = items
        .iter()
        .filter(|item| !SortKey::of(field, item).parsed())
        .count();
    if unparsed > 0 {
        log::debug!(
            "{} of {} items have no parseable '{}', sorting them last",
            unparsed,
            items.len(),
            field
        );
    }
    items.sort_by(compare(field, reverse));
}
