/*
 * SPDX-FileCopyrightText: © 2025 Jinwoo Park (pmnxis@gmail.com)
 *
 * SPDX-License-Identifier: MIT
 */

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use purchase_report::ExportFormat;

#[derive(Parser, Debug, Clone)]
#[command(name = "purchase-report")]
#[command(about = "Sort, group, highlight and export a scraped purchase history")]
#[command(version)]
pub struct CliArgs {
    /// Report request JSON: {"orders": [...], "sortBy": ..., "reverseOrder": ..., "filters": [...], "highlight": {...}}
    #[arg(value_name = "REQUEST")]
    pub input: PathBuf,

    /// Sort by this column (seller, purchaseDate, price, quantity, shipStatus, deliveryDate)
    #[arg(long, short = 's', value_name = "FIELD")]
    pub sort_by: Option<String>,

    /// Reverse the sort order
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Write an export (json, csv/tsv, xml) instead of the text report
    #[arg(long, short = 'f', value_name = "FORMAT")]
    pub format: Option<ExportFormat>,

    /// Output file (default: stdout)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write data.csv, data.json and data.xml into this directory
    #[arg(long, value_name = "DIR", conflicts_with_all = ["format", "output"])]
    pub export_dir: Option<PathBuf>,

    /// Reference date for highlights (YYYY-MM-DD); defaults to today
    #[arg(long, value_name = "DATE")]
    pub now: Option<NaiveDate>,
}
