/*
 * SPDX-FileCopyrightText: © 2025 Jinwoo Park (pmnxis@gmail.com)
 *
 * SPDX-License-Identifier: MIT
 */

use serde::{Deserialize, Deserializer, Serialize};

use crate::parser;

/// One line item of a purchase history order, as emitted by the page scraper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Shared by every line item of the same order
    pub order_id: String,
    /// 1-based position within the order
    pub item_index: u32,
    pub purchase_date: String,
    /// Currency token plus amount, e.g. "EUR 12.50" or "US $4.99"
    pub price: String,
    #[serde(deserialize_with = "string_or_number")]
    pub quantity: String,
    pub specs: String,
    #[serde(default)]
    pub ship_status: String,
    #[serde(default)]
    pub delivery_date: String,
    pub seller: Seller,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub feedback_not_left: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl Seller {
    /// Sub-field by wire name, as named in a link column definition.
    pub fn field(&self, name: &str) -> &str {
        match name {
            "url" => &self.url,
            _ => &self.name,
        }
    }
}

impl OrderItem {
    /// An item counts as received once feedback has been left for it.
    pub fn received(&self) -> bool {
        !self.feedback_not_left
    }

    /// Shipped means the ship status carries a date (any digit).
    pub fn shipped(&self) -> bool {
        parser::contains_digit(&self.ship_status)
    }

    pub fn price_value(&self) -> Option<f64> {
        parser::price_value(&self.price)
    }

    pub fn currency(&self) -> String {
        parser::currency_token(&self.price)
    }

    /// Quantity as a number; the scraper may hand over text like "Qty: 2".
    pub fn quantity_count(&self) -> Option<u32> {
        parser::digits_only(&self.quantity).parse().ok()
    }
}

/// Scrapers emit quantity either as a JSON string or a bare number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
pub(crate) fn sample_item(order_id: &str, item_index: u32) -> OrderItem {
    OrderItem {
        order_id: order_id.to_string(),
        item_index,
        purchase_date: "Mar 12, 2017".into(),
        price: "EUR 10.00".into(),
        quantity: "1".into(),
        specs: "USB cable".into(),
        ship_status: String::new(),
        delivery_date: String::new(),
        seller: Seller {
            name: "cable-shop".into(),
            url: "https://example.com/usr/cable-shop".into(),
        },
        thumbnail: None,
        feedback_not_left: true,
    }
}
