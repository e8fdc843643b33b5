/*
 * SPDX-FileCopyrightText: © 2025 Jinwoo Park (pmnxis@gmail.com)
 *
 * SPDX-License-Identifier: MIT
 */

mod cli;

use std::fs;

use chrono::{NaiveTime, Utc};
use clap::Parser;

use purchase_report::export::{self, ExportFormat, GeneratorInfo};
use purchase_report::{OrderItem, ReportConfiguration, ReportError, ReportRequest, report, table};

fn main() {
    env_logger::init();

    let args = cli::CliArgs::parse();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &cli::CliArgs) -> Result<(), ReportError> {
    let text = fs::read_to_string(&args.input)?;
    let mut request = ReportRequest::from_json(&text)?;

    // command line wins over the request file
    if let Some(sort_by) = &args.sort_by {
        request.options.sort_by = Some(sort_by.clone());
    }
    if args.reverse {
        request.options.reverse_order = true;
    }
    let config = ReportConfiguration::from_options(&request.options);

    let report = match args.now {
        Some(date) => report::process(&request.orders, &config, date.and_time(NaiveTime::MIN)),
        None => report::process_now(&request.orders, &config),
    };
    let items: Vec<OrderItem> = report.items().cloned().collect();
    let generator = GeneratorInfo::from_package();

    if let Some(dir) = &args.export_dir {
        fs::create_dir_all(dir)?;
        for format in ExportFormat::ALL {
            let path = dir.join(format.file_name());
            fs::write(&path, export::export(&items, format, &generator, Utc::now())?)?;
            log::info!("Wrote {} ({})", path.display(), format.mime_type());
        }
        return Ok(());
    }

    let output = match args.format {
        Some(format) => export::export(&items, format, &generator, Utc::now())?,
        None => table::render_report(&generator.name, &report, &config),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{}", output),
    }
    Ok(())
}
