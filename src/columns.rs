/*
 * SPDX-FileCopyrightText: © 2025 Jinwoo Park (pmnxis@gmail.com)
 *
 * SPDX-License-Identifier: MIT
 */

//! Declarative column table for the report plus the field allow-list used by
//! the exporters.

use serde::{Deserialize, Serialize};

use crate::model::OrderItem;

/// Sub-fields of a link column: which value is the href, which the text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkFields {
    pub url: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    /// Wire key, as used in `sortBy`
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub link: Option<LinkFields>,
}

pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef {
        key: "index",
        label: "#",
        sortable: false,
        link: None,
    },
    ColumnDef {
        key: "seller",
        label: "Seller",
        sortable: true,
        link: Some(LinkFields {
            url: "url",
            text: "name",
        }),
    },
    ColumnDef {
        key: "purchaseDate",
        label: "Purchase date",
        sortable: true,
        link: None,
    },
    ColumnDef {
        key: "price",
        label: "Item price",
        sortable: true,
        link: None,
    },
    ColumnDef {
        key: "quantity",
        label: "Quantity",
        sortable: true,
        link: None,
    },
    ColumnDef {
        key: "shipStatus",
        label: "Shipping status",
        sortable: true,
        link: None,
    },
    ColumnDef {
        key: "deliveryDate",
        label: "Estimated delivery",
        sortable: true,
        link: None,
    },
    ColumnDef {
        key: "specs",
        label: "Item description",
        sortable: false,
        link: None,
    },
];

pub fn column(key: &str) -> Option<&'static ColumnDef> {
    COLUMNS.iter().find(|c| c.key == key)
}

/// Fields a report can be sorted by. Only sortable registry columns map here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Seller,
    PurchaseDate,
    Price,
    Quantity,
    ShipStatus,
    DeliveryDate,
}

impl SortField {
    /// Look up a sort field by wire key. Unknown or non-sortable keys give `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        let def = column(key.trim())?;
        if !def.sortable {
            return None;
        }
        match def.key {
            "seller" => Some(SortField::Seller),
            "purchaseDate" => Some(SortField::PurchaseDate),
            "price" => Some(SortField::Price),
            "quantity" => Some(SortField::Quantity),
            "shipStatus" => Some(SortField::ShipStatus),
            "deliveryDate" => Some(SortField::DeliveryDate),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SortField::Seller => "seller",
            SortField::PurchaseDate => "purchaseDate",
            SortField::Price => "price",
            SortField::Quantity => "quantity",
            SortField::ShipStatus => "shipStatus",
            SortField::DeliveryDate => "deliveryDate",
        }
    }

    pub fn is_date(self) -> bool {
        matches!(
            self,
            SortField::PurchaseDate | SortField::ShipStatus | SortField::DeliveryDate
        )
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Record fields that leave the engine through an export, in output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportField {
    OrderId,
    ItemIndex,
    PurchaseDate,
    Price,
    Quantity,
    Specs,
    DeliveryDate,
    ShipStatus,
    Seller,
    Thumbnail,
    FeedbackNotLeft,
}

pub const EXPORT_FIELDS: &[ExportField] = &[
    ExportField::OrderId,
    ExportField::ItemIndex,
    ExportField::PurchaseDate,
    ExportField::Price,
    ExportField::Quantity,
    ExportField::Specs,
    ExportField::DeliveryDate,
    ExportField::ShipStatus,
    ExportField::Seller,
    ExportField::Thumbnail,
    ExportField::FeedbackNotLeft,
];

impl ExportField {
    pub fn name(self) -> &'static str {
        match self {
            ExportField::OrderId => "orderId",
            ExportField::ItemIndex => "itemIndex",
            ExportField::PurchaseDate => "purchaseDate",
            ExportField::Price => "price",
            ExportField::Quantity => "quantity",
            ExportField::Specs => "specs",
            ExportField::DeliveryDate => "deliveryDate",
            ExportField::ShipStatus => "shipStatus",
            ExportField::Seller => "seller",
            ExportField::Thumbnail => "thumbnail",
            ExportField::FeedbackNotLeft => "feedbackNotLeft",
        }
    }

    /// Flat text value; the seller collapses to its name.
    pub fn value(self, item: &OrderItem) -> String {
        match self {
            ExportField::OrderId => item.order_id.clone(),
            ExportField::ItemIndex => item.item_index.to_string(),
            ExportField::PurchaseDate => item.purchase_date.clone(),
            ExportField::Price => item.price.clone(),
            ExportField::Quantity => item.quantity.clone(),
            ExportField::Specs => item.specs.clone(),
            ExportField::DeliveryDate => item.delivery_date.clone(),
            ExportField::ShipStatus => item.ship_status.clone(),
            ExportField::Seller => item.seller.name.clone(),
            ExportField::Thumbnail => item.thumbnail.clone().unwrap_or_default(),
            ExportField::FeedbackNotLeft => item.feedback_not_left.to_string(),
        }
    }
}
