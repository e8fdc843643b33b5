/*
 * SPDX-FileCopyrightText: © 2025 Jinwoo Park (pmnxis@gmail.com)
 *
 * SPDX-License-Identifier: MIT
 */

//! Export order items as JSON, tab-separated text or XML.
//!
//! All three are written from the same item list. JSON is the lossless dump;
//! the tab-separated table and the XML document only carry the fields in
//! `columns::EXPORT_FIELDS`.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::ReportError;
use crate::columns::{EXPORT_FIELDS, ExportField};
use crate::model::OrderItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    /// Tab separated; keeps the historical `csv` name and extension
    Csv,
    Xml,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Xml];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xml => "xml",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Xml => "application/xml",
        }
    }

    /// Download name offered for this format, e.g. `data.csv`
    pub fn file_name(self) -> String {
        format!("data.{}", self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" | "tsv" => Ok(ExportFormat::Csv),
            "xml" => Ok(ExportFormat::Xml),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Identity written into the XML `<generator>` element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorInfo {
    pub kind: String,
    pub alias: String,
    pub name: String,
    pub version: String,
    pub author: String,
    pub homepage: String,
    pub description: String,
}

impl GeneratorInfo {
    /// Metadata taken from this crate's own package manifest.
    pub fn from_package() -> Self {
        Self {
            kind: "Application".into(),
            alias: env!("CARGO_PKG_NAME").into(),
            name: "Purchase Report".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            author: env!("CARGO_PKG_AUTHORS").into(),
            homepage: env!("CARGO_PKG_HOMEPAGE").into(),
            description: env!("CARGO_PKG_DESCRIPTION").into(),
        }
    }
}

impl Default for GeneratorInfo {
    fn default() -> Self {
        Self::from_package()
    }
}

/// Serialize `items` in `format`. The XML signature is stamped with `generated_at`.
pub fn export(
    items: &[OrderItem],
    format: ExportFormat,
    generator: &GeneratorInfo,
    generated_at: DateTime<Utc>,
) -> Result<String, ReportError> {
    match format {
        ExportFormat::Json => to_json(items),
        ExportFormat::Csv => Ok(to_delimited(items)),
        ExportFormat::Xml => to_xml(items, generator, generated_at),
    }
}

// --- JSON ---

pub fn to_json(items: &[OrderItem]) -> Result<String, ReportError> {
    Ok(serde_json::to_string(items)?)
}

pub fn from_json(text: &str) -> Result<Vec<OrderItem>, ReportError> {
    Ok(serde_json::from_str(text)?)
}

// --- Tab separated ---

/// Header row plus one row per item, `\n` terminated. No items, no header.
pub fn to_delimited(items: &[OrderItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let header: Vec<&str> = EXPORT_FIELDS.iter().map(|f| f.name()).collect();
    out.push_str(&header.join("\t"));
    out.push('\n');

    for item in items {
        let line: Vec<String> = EXPORT_FIELDS
            .iter()
            .map(|f| flatten_cell(&f.value(item)))
            .collect();
        out.push_str(&line.join("\t"));
        out.push('\n');
    }
    out
}

/// Tabs and line breaks inside a value would break the table layout.
fn flatten_cell(value: &str) -> String {
    value
        .chars()
        .map(|c| if matches!(c, '\t' | '\n' | '\r') { ' ' } else { c })
        .collect()
}

// --- XML ---

const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;

/// Fields carried on `<order>` rather than on each `<item>`
const ORDER_FIELDS: &[ExportField] = &[
    ExportField::OrderId,
    ExportField::PurchaseDate,
    ExportField::Seller,
];

/// Items grouped under their `<order>`, ordered by (orderId, itemIndex)
/// regardless of the order they were passed in.
pub fn to_xml(
    items: &[OrderItem],
    generator: &GeneratorInfo,
    generated_at: DateTime<Utc>,
) -> Result<String, ReportError> {
    let mut sorted: Vec<&OrderItem> = items.iter().collect();
    sorted.sort_by(|a, b| {
        a.order_id
            .cmp(&b.order_id)
            .then(a.item_index.cmp(&b.item_index))
    });

    let mut out = String::with_capacity(256 + items.len() * 256);
    write_xml(&mut out, &sorted, generator, generated_at)?;
    Ok(out)
}

fn write_xml(
    out: &mut String,
    items: &[&OrderItem],
    generator: &GeneratorInfo,
    generated_at: DateTime<Utc>,
) -> std::fmt::Result {
    macro_rules! w {
        ($($arg:tt)*) => { write!(out, $($arg)*)? }
    }

    w!("{}<orders>", XML_PROLOG);
    w!(
        r#"<generator type="{}" datetime="{}" alias="{}" name="{}" version="{}" author="{}" homepage="{}" description="{}"/>"#,
        xml_escape(&generator.kind),
        generated_at.format("%a, %d %b %Y %H:%M:%S GMT"),
        xml_escape(&generator.alias),
        xml_escape(&generator.name),
        xml_escape(&generator.version),
        xml_escape(&generator.author),
        xml_escape(&generator.homepage),
        xml_escape(&generator.description),
    );

    let mut open_order: Option<&str> = None;
    for item in items {
        if open_order != Some(item.order_id.as_str()) {
            if open_order.is_some() {
                w!("</items></order>");
            }
            w!(
                r#"<order id="{}" purchaseDate="{}" seller="{}" sellerUrl="{}"><items>"#,
                xml_escape(&item.order_id),
                xml_escape(&item.purchase_date),
                xml_escape(&item.seller.name),
                xml_escape(&item.seller.url),
            );
            open_order = Some(item.order_id.as_str());
        }

        w!("<item");
        for field in EXPORT_FIELDS.iter().filter(|f| !ORDER_FIELDS.contains(f)) {
            if *field == ExportField::Thumbnail && item.thumbnail.is_none() {
                continue;
            }
            w!(r#" {}="{}""#, field.name(), xml_escape(&field.value(item)));
        }
        w!("/>");
    }

    if open_order.is_some() {
        w!("</items></order>");
    }
    w!("</orders>");
    Ok(())
}

/// Replace the five XML-reserved characters with their named entities.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            c => out.push(c),
        }
    }
    out
}
