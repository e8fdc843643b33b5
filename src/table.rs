/*
 * SPDX-FileCopyrightText: © 2025 Jinwoo Park (pmnxis@gmail.com)
 *
 * SPDX-License-Identifier: MIT
 */

//! Plain-text rendering of a report: filters, column header with sort
//! arrow, item rows, SUBTOTAL / GRAND TOTAL lines and the legend.

use crate::columns::{COLUMNS, ColumnDef};
use crate::config::ReportConfiguration;
use crate::report::{GroupTotals, Report, ReportRow};

const SEPARATOR: &str = " | ";

pub fn render_report(title: &str, report: &Report, config: &ReportConfiguration) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    for filter in &config.filters {
        out.push_str(&format!("{} : {}\n", filter.label, filter.content));
    }
    out.push('\n');

    let header: Vec<String> = COLUMNS
        .iter()
        .map(|col| header_label(col, config))
        .collect();
    let body: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| COLUMNS.iter().map(|col| cell(col, row)).collect())
        .collect();
    let widths = column_widths(&header, &body);

    let header_line = pad_row(&header, &widths);
    out.push_str(&header_line);
    out.push('\n');
    out.push_str(&"-".repeat(header_line.chars().count()));
    out.push('\n');

    for (group, totals) in report.groups.iter().enumerate() {
        for (row, cells) in report.rows.iter().zip(&body) {
            if row.group != group {
                continue;
            }
            out.push_str(&pad_row(cells, &widths));
            if let Some(kind) = row.highlight {
                out.push_str(&format!("  [{}]", config.highlight.rule(kind).class));
            }
            out.push('\n');
        }
        out.push_str(&total_line(totals));
    }

    if let Some(grand) = &report.grand_total {
        out.push_str(&"=".repeat(header_line.chars().count()));
        out.push('\n');
        out.push_str(&total_line(grand));
    }

    let legend = report.legend(&config.highlight);
    if !legend.is_empty() {
        out.push_str("\nLegend:\n");
        for rule in legend {
            out.push_str(&format!("  [{}] {}\n", rule.class, rule.title));
        }
    }

    out
}

fn header_label(col: &ColumnDef, config: &ReportConfiguration) -> String {
    let arrow = match config.sort_by {
        Some(field) if col.sortable && field.key() == col.key => {
            if config.reverse_order { " ▼" } else { " ▲" }
        }
        _ => "",
    };
    format!("{}{}", col.label, arrow)
}

fn cell(col: &ColumnDef, row: &ReportRow) -> String {
    let item = &row.item;
    match col.key {
        "index" => row.position.to_string(),
        // link columns show their text sub-field
        "seller" => match col.link {
            Some(link) => item.seller.field(link.text).to_string(),
            None => item.seller.name.clone(),
        },
        "purchaseDate" => item.purchase_date.clone(),
        "price" => item.price.clone(),
        "quantity" => item
            .quantity_count()
            .map_or_else(|| item.quantity.clone(), |n| n.to_string()),
        "shipStatus" => item.ship_status.clone(),
        "deliveryDate" => item.delivery_date.clone(),
        "specs" => item.specs.clone(),
        _ => String::new(),
    }
}

fn column_widths(header: &[String], body: &[Vec<String>]) -> Vec<usize> {
    header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            body.iter()
                .filter_map(|cells| cells.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn pad_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{:<width$}", c, width = *w))
        .collect();
    padded.join(SEPARATOR).trim_end().to_string()
}

fn total_line(totals: &GroupTotals) -> String {
    format!("{}: {}\n", totals.label(), totals.summary())
}
