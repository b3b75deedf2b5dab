pub mod completions;
pub mod demo;
pub mod export;
pub mod init;
pub mod report;
pub mod status;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::error::{Result, TillError};
use crate::loader;
use crate::models::FilterParams;
use crate::settings::{load_settings, shellexpand_path};

/// Turns the raw filter flags into typed filter parameters. Dates on the
/// command line must parse; garbage here is an error, not a coerced value.
pub(crate) fn parse_filter_params(
    from_date: Option<&str>,
    to_date: Option<&str>,
    categories: Vec<String>,
    statuses: Vec<String>,
) -> Result<FilterParams> {
    Ok(FilterParams {
        from: parse_date_bound(from_date)?,
        to: parse_date_bound(to_date)?,
        categories,
        statuses,
    })
}

fn parse_date_bound(raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(s) => loader::parse_date(s).map(Some).ok_or_else(|| {
            TillError::Other(format!("Unrecognized date: {s} (expected YYYY-MM-DD)"))
        }),
    }
}

/// `--file` wins; otherwise the configured dataset from `till init`.
pub(crate) fn resolve_data_file(file: Option<&str>) -> Result<PathBuf> {
    if let Some(f) = file {
        return Ok(PathBuf::from(shellexpand_path(f)));
    }
    let settings = load_settings();
    if settings.data_file.is_empty() {
        return Err(TillError::Other(
            "No dataset configured. Pass --file or run `till init --file <csv>`.".to_string(),
        ));
    }
    Ok(PathBuf::from(settings.data_file))
}

#[derive(Parser)]
#[command(name = "till", about = "Sales analytics CLI for retail order exports.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up till: remember the dataset path and currency symbol.
    Init {
        /// Path to the order export CSV
        #[arg(long)]
        file: Option<String>,
        /// Currency symbol shown in money columns
        #[arg(long)]
        currency: Option<String>,
    },
    /// Show the configured dataset and its cleaning diagnostics.
    Status {
        /// Path to the order export CSV (overrides the configured one)
        #[arg(long)]
        file: Option<String>,
    },
    /// Generate reports over the filtered dataset.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Write the filtered view back out as CSV.
    Export {
        /// Path to the order export CSV (overrides the configured one)
        #[arg(long)]
        file: Option<String>,
        /// Start date: YYYY-MM-DD (inclusive)
        #[arg(long = "from")]
        from_date: Option<String>,
        /// End date: YYYY-MM-DD (inclusive)
        #[arg(long = "to")]
        to_date: Option<String>,
        /// Keep only this category (repeatable)
        #[arg(long)]
        category: Vec<String>,
        /// Keep only this order status (repeatable)
        #[arg(long)]
        status: Vec<String>,
        /// Output path (default: till-export-YYYYMMDD.csv)
        #[arg(long)]
        output: Option<String>,
    },
    /// Write a sample order export to explore till.
    Demo {
        /// Output path (default: demo-orders.csv)
        #[arg(long)]
        output: Option<String>,
        /// Months of history to generate
        #[arg(long, default_value = "6")]
        months: u32,
    },
    /// Generate shell completions.
    Completions {
        /// Shell to generate for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// KPI summary: revenue, orders, average order value, quantity sold.
    Summary {
        /// Path to the order export CSV (overrides the configured one)
        #[arg(long)]
        file: Option<String>,
        /// Start date: YYYY-MM-DD (inclusive)
        #[arg(long = "from")]
        from_date: Option<String>,
        /// End date: YYYY-MM-DD (inclusive)
        #[arg(long = "to")]
        to_date: Option<String>,
        /// Keep only this category (repeatable)
        #[arg(long)]
        category: Vec<String>,
        /// Keep only this order status (repeatable)
        #[arg(long)]
        status: Vec<String>,
    },
    /// Revenue by day.
    Trend {
        #[arg(long)]
        file: Option<String>,
        #[arg(long = "from")]
        from_date: Option<String>,
        #[arg(long = "to")]
        to_date: Option<String>,
        #[arg(long)]
        category: Vec<String>,
        #[arg(long)]
        status: Vec<String>,
    },
    /// Revenue by category with share of total.
    Categories {
        #[arg(long)]
        file: Option<String>,
        #[arg(long = "from")]
        from_date: Option<String>,
        #[arg(long = "to")]
        to_date: Option<String>,
        #[arg(long)]
        category: Vec<String>,
        #[arg(long)]
        status: Vec<String>,
    },
    /// Top cities by revenue.
    Cities {
        #[arg(long)]
        file: Option<String>,
        #[arg(long = "from")]
        from_date: Option<String>,
        #[arg(long = "to")]
        to_date: Option<String>,
        #[arg(long)]
        category: Vec<String>,
        #[arg(long)]
        status: Vec<String>,
        /// How many cities to show
        #[arg(long, default_value = "10")]
        top: usize,
    },
    /// Order counts by fulfilment channel.
    Fulfilment {
        #[arg(long)]
        file: Option<String>,
        #[arg(long = "from")]
        from_date: Option<String>,
        #[arg(long = "to")]
        to_date: Option<String>,
        #[arg(long)]
        category: Vec<String>,
        #[arg(long)]
        status: Vec<String>,
    },
    /// Transaction detail: the first rows of the filtered view.
    Orders {
        #[arg(long)]
        file: Option<String>,
        #[arg(long = "from")]
        from_date: Option<String>,
        #[arg(long = "to")]
        to_date: Option<String>,
        #[arg(long)]
        category: Vec<String>,
        #[arg(long)]
        status: Vec<String>,
        /// How many rows to show
        #[arg(long, default_value = "100")]
        limit: usize,
    },
    /// Every report section from a single load.
    All {
        #[arg(long)]
        file: Option<String>,
        #[arg(long = "from")]
        from_date: Option<String>,
        #[arg(long = "to")]
        to_date: Option<String>,
        #[arg(long)]
        category: Vec<String>,
        #[arg(long)]
        status: Vec<String>,
    },
}
