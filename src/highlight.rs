/*
 * SPDX-FileCopyrightText: © 2025 Jinwoo Park (pmnxis@gmail.com)
 *
 * SPDX-License-Identifier: MIT
 */

//! Shipment/delivery health of an order item, judged from its purchase,
//! ship and delivery dates relative to a reference "now".

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::{HighlightRule, HighlightRules};
use crate::model::OrderItem;
use crate::parser::{self, days_between};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightKind {
    NotDelivered,
    DelayedShipment,
    NotReceived,
    Received,
}

impl HighlightKind {
    /// Evaluation order for items not yet received; a later match wins.
    pub const PRIORITY: [HighlightKind; 3] = [
        HighlightKind::NotDelivered,
        HighlightKind::DelayedShipment,
        HighlightKind::NotReceived,
    ];
}

/// Dates of one item, resolved against `now`
#[derive(Clone, Copy, Debug)]
struct Timeline {
    now: NaiveDateTime,
    purchased: NaiveDateTime,
    shipped: Option<NaiveDateTime>,
    delivery: Option<NaiveDateTime>,
}

impl Timeline {
    fn of(item: &OrderItem, now: NaiveDateTime) -> Option<Self> {
        let Some(purchased) = parser::parse_trailing_date(&item.purchase_date) else {
            log::debug!(
                "Order {} item {}: purchase date '{}' not parseable, no highlight",
                item.order_id,
                item.item_index,
                item.purchase_date
            );
            return None;
        };
        Some(Self {
            now,
            purchased,
            shipped: parser::parse_trailing_date(&item.ship_status),
            delivery: parser::parse_trailing_date(&item.delivery_date),
        })
    }

    fn days_since_purchase(&self) -> f64 {
        days_between(self.now, self.purchased)
    }

    /// Without a ship date the item counts as shipping "today".
    fn shipped_after_days(&self) -> f64 {
        match self.shipped {
            Some(shipped) => days_between(shipped, self.purchased),
            None => self.days_since_purchase(),
        }
    }

    /// Unknown delivery estimates fall back to `now`.
    fn delivery_or_now(&self) -> NaiveDateTime {
        self.delivery.unwrap_or(self.now)
    }

    /// An unknown delivery estimate is treated as already due.
    fn past_due(&self) -> bool {
        match self.delivery {
            Some(delivery) => days_between(self.now, delivery) > 0.0,
            None => true,
        }
    }

    fn matches(&self, kind: HighlightKind, rules: &HighlightRules) -> bool {
        match kind {
            HighlightKind::NotDelivered => {
                days_between(self.delivery_or_now(), self.purchased)
                    > rules.not_delivered.threshold()
            }
            HighlightKind::DelayedShipment => {
                self.shipped_after_days() > rules.delayed_shipment.threshold()
            }
            HighlightKind::NotReceived => self.past_due(),
            HighlightKind::Received => false,
        }
    }
}

/// Classify one item. Received items are always `Received`; otherwise the
/// rules run in `HighlightKind::PRIORITY` order and the last match wins.
pub fn classify(
    item: &OrderItem,
    rules: &HighlightRules,
    now: NaiveDateTime,
) -> Option<HighlightKind> {
    if item.received() {
        return Some(HighlightKind::Received);
    }

    let timeline = Timeline::of(item, now)?;
    HighlightKind::PRIORITY
        .into_iter()
        .rev()
        .find(|kind| timeline.matches(*kind, rules))
}

/// Legend entries for the categories that occur, first occurrence first,
/// one entry per category class.
pub fn legend<I>(kinds: I, rules: &HighlightRules) -> Vec<&HighlightRule>
where
    I: IntoIterator<Item = HighlightKind>,
{
    let mut entries: Vec<&HighlightRule> = Vec::new();
    for kind in kinds {
        let rule = rules.rule(kind);
        if !entries.iter().any(|e| e.class == rule.class) {
            entries.push(rule);
        }
    }
    entries
}
