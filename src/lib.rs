/*
 * SPDX-FileCopyrightText: © 2025 Jinwoo Park (pmnxis@gmail.com)
 *
 * SPDX-License-Identifier: MIT
 */

//! Purchase history report engine.
//!
//! Takes the order items scraped off a purchase history page and turns them
//! into a sorted, grouped, highlighted and totalled report, plus JSON,
//! tab-separated and XML exports of the same items.

pub mod columns;
pub mod compare;
pub mod config;
pub mod error;
pub mod export;
pub mod highlight;
pub mod model;
pub mod parser;
pub mod report;
pub mod table;

pub use columns::SortField;
pub use config::{HighlightRule, HighlightRules, ReportConfiguration, ReportOptions, ReportRequest};
pub use error::ReportError;
pub use export::{ExportFormat, GeneratorInfo};
pub use highlight::{HighlightKind, classify};
pub use model::{OrderItem, Seller};
pub use report::{GroupTotals, Report, ReportRow, TotalKind, process, process_now};
