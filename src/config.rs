/*
 * SPDX-FileCopyrightText: © 2025 Jinwoo Park (pmnxis@gmail.com)
 *
 * SPDX-License-Identifier: MIT
 */

//! Report configuration.
//!
//! `ReportOptions` is what callers hand over (every field optional, spelled
//! the way report requests spell them). `ReportConfiguration` is the immutable
//! value the engine runs on, built once per report.

use serde::{Deserialize, Serialize};

use crate::columns::SortField;
use crate::highlight::HighlightKind;
use crate::model::OrderItem;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HighlightRule {
    pub title: String,
    /// Category key, doubles as the CSS class of highlighted rows
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
}

impl HighlightRule {
    fn new(title: &str, class: &str, days: Option<u32>) -> Self {
        Self {
            title: title.to_string(),
            class: class.to_string(),
            days,
        }
    }

    fn merged(mut self, patch: Option<&RuleOverride>) -> Self {
        if let Some(patch) = patch {
            if let Some(title) = &patch.title {
                self.title = title.clone();
            }
            if let Some(class) = &patch.class {
                self.class = class.trim().to_string();
            }
            if patch.days.is_some() {
                self.days = patch.days;
            }
        }
        self
    }

    /// Threshold in days; a rule without one never triggers on a day count.
    pub fn threshold(&self) -> f64 {
        self.days.map_or(f64::INFINITY, f64::from)
    }
}

/// One rule per highlight category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightRules {
    pub delayed_shipment: HighlightRule,
    pub not_delivered: HighlightRule,
    pub item_not_received: HighlightRule,
    pub item_received: HighlightRule,
}

impl Default for HighlightRules {
    fn default() -> Self {
        Self {
            delayed_shipment: HighlightRule::new(
                "Shipped after 5 days",
                "delayed-shipment",
                Some(5),
            ),
            not_delivered: HighlightRule::new(
                "Not delivered within 40 days",
                "not-delivered",
                Some(40),
            ),
            item_not_received: HighlightRule::new("Not received yet", "not-received", None),
            item_received: HighlightRule::new("Item received", "received", None),
        }
    }
}

impl HighlightRules {
    pub fn from_overrides(overrides: &HighlightOverrides) -> Self {
        let defaults = Self::default();
        Self {
            delayed_shipment: defaults
                .delayed_shipment
                .merged(overrides.delayed_shipment.as_ref()),
            not_delivered: defaults
                .not_delivered
                .merged(overrides.not_delivered.as_ref()),
            item_not_received: defaults
                .item_not_received
                .merged(overrides.item_not_received.as_ref()),
            item_received: defaults
                .item_received
                .merged(overrides.item_received.as_ref()),
        }
    }

    pub fn rule(&self, kind: HighlightKind) -> &HighlightRule {
        match kind {
            HighlightKind::NotDelivered => &self.not_delivered,
            HighlightKind::DelayedShipment => &self.delayed_shipment,
            HighlightKind::NotReceived => &self.item_not_received,
            HighlightKind::Received => &self.item_received,
        }
    }
}

/// Partial rule as supplied by a caller; unset fields keep the default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleOverride {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub days: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightOverrides {
    #[serde(default)]
    pub delayed_shipment: Option<RuleOverride>,
    #[serde(default)]
    pub not_delivered: Option<RuleOverride>,
    #[serde(default)]
    pub item_not_received: Option<RuleOverride>,
    #[serde(default)]
    pub item_received: Option<RuleOverride>,
}

/// Label/content pair shown above the report. Display only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub label: String,
    pub content: String,
}

/// Raw report options as received from the caller.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOptions {
    #[serde(default, alias = "sortby")]
    pub sort_by: Option<String>,
    #[serde(default, alias = "reverseorder")]
    pub reverse_order: bool,
    #[serde(default)]
    pub filters: Vec<ReportFilter>,
    #[serde(default)]
    pub highlight: HighlightOverrides,
}

/// A full report request: the scraped items plus the options to render them with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub orders: Vec<OrderItem>,
    #[serde(flatten)]
    pub options: ReportOptions,
}

impl ReportRequest {
    pub fn from_json(json: &str) -> Result<Self, crate::ReportError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportConfiguration {
    /// `None` keeps the natural (scraped) order and groups by purchase date
    pub sort_by: Option<SortField>,
    pub reverse_order: bool,
    pub filters: Vec<ReportFilter>,
    pub highlight: HighlightRules,
}

impl ReportConfiguration {
    pub fn from_options(options: &ReportOptions) -> Self {
        let sort_by = match options.sort_by.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(key) => {
                let field = SortField::from_key(key);
                if field.is_none() {
                    log::warn!("Unknown sort field '{}', keeping natural order", key);
                }
                field
            }
        };

        Self {
            sort_by,
            reverse_order: options.reverse_order,
            filters: options.filters.clone(),
            highlight: HighlightRules::from_overrides(&options.highlight),
        }
    }

    pub fn sorted_by(sort_by: SortField, reverse_order: bool) -> Self {
        Self {
            sort_by: Some(sort_by),
            reverse_order,
            ..Self::default()
        }
    }
}
