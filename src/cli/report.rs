use std::collections::BTreeMap;

use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::{parse_filter_params, resolve_data_file};
use crate::dataset::{filter, Dataset};
use crate::error::Result;
use crate::fmt::{count, money, money_whole};
use crate::models::{FilterParams, Transaction};
use crate::reports;
use crate::settings::load_settings;

// ---------------------------------------------------------------------------
// Data-fetching wrappers (used by dispatch)
// ---------------------------------------------------------------------------

fn load_dataset_and_params(
    file: Option<String>,
    from_date: Option<String>,
    to_date: Option<String>,
    category: Vec<String>,
    status: Vec<String>,
) -> Result<(Dataset, FilterParams)> {
    let path = resolve_data_file(file.as_deref())?;
    let dataset = Dataset::load(&path)?;
    let params = parse_filter_params(from_date.as_deref(), to_date.as_deref(), category, status)?;
    Ok((dataset, params))
}

pub fn summary(
    file: Option<String>,
    from_date: Option<String>,
    to_date: Option<String>,
    category: Vec<String>,
    status: Vec<String>,
) -> Result<()> {
    let currency = load_settings().currency;
    let (dataset, params) = load_dataset_and_params(file, from_date, to_date, category, status)?;
    let view = filter(&dataset, &params);
    let data = reports::get_summary(&view);
    println!("{}", format_summary(&data, &currency));
    Ok(())
}

pub fn trend(
    file: Option<String>,
    from_date: Option<String>,
    to_date: Option<String>,
    category: Vec<String>,
    status: Vec<String>,
) -> Result<()> {
    let currency = load_settings().currency;
    let (dataset, params) = load_dataset_and_params(file, from_date, to_date, category, status)?;
    let view = filter(&dataset, &params);
    let days = reports::revenue_by_day(&view);
    println!("{}", format_trend(&days, &currency));
    Ok(())
}

pub fn categories(
    file: Option<String>,
    from_date: Option<String>,
    to_date: Option<String>,
    category: Vec<String>,
    status: Vec<String>,
) -> Result<()> {
    let currency = load_settings().currency;
    let (dataset, params) = load_dataset_and_params(file, from_date, to_date, category, status)?;
    let view = filter(&dataset, &params);
    let rows = reports::get_categories(&view);
    println!("{}", format_categories(&rows, &currency));
    Ok(())
}

pub fn cities(
    file: Option<String>,
    from_date: Option<String>,
    to_date: Option<String>,
    category: Vec<String>,
    status: Vec<String>,
    top: usize,
) -> Result<()> {
    let currency = load_settings().currency;
    let (dataset, params) = load_dataset_and_params(file, from_date, to_date, category, status)?;
    let view = filter(&dataset, &params);
    let rows = reports::get_top_cities(&view, top);
    println!("{}", format_cities(&rows, top, &currency));
    Ok(())
}

pub fn fulfilment(
    file: Option<String>,
    from_date: Option<String>,
    to_date: Option<String>,
    category: Vec<String>,
    status: Vec<String>,
) -> Result<()> {
    let (dataset, params) = load_dataset_and_params(file, from_date, to_date, category, status)?;
    let view = filter(&dataset, &params);
    let rows = reports::get_fulfilment_counts(&view);
    println!("{}", format_fulfilment(&rows));
    Ok(())
}

pub fn orders(
    file: Option<String>,
    from_date: Option<String>,
    to_date: Option<String>,
    category: Vec<String>,
    status: Vec<String>,
    limit: usize,
) -> Result<()> {
    let currency = load_settings().currency;
    let (dataset, params) = load_dataset_and_params(file, from_date, to_date, category, status)?;
    let view = filter(&dataset, &params);
    let rows = reports::get_orders(&view, limit);
    println!("{}", format_orders(&rows, view.len(), &currency));
    Ok(())
}

/// Every section off one load and one filter pass.
pub fn all(
    file: Option<String>,
    from_date: Option<String>,
    to_date: Option<String>,
    category: Vec<String>,
    status: Vec<String>,
) -> Result<()> {
    let currency = load_settings().currency;
    let (dataset, params) = load_dataset_and_params(file, from_date, to_date, category, status)?;
    let view = filter(&dataset, &params);

    let summary = reports::get_summary(&view);
    let days = reports::revenue_by_day(&view);
    let categories = reports::get_categories(&view);
    let cities = reports::get_top_cities(&view, 10);
    let mix = reports::get_fulfilment_counts(&view);
    let detail = reports::get_orders(&view, 100);

    println!("{}", format_summary(&summary, &currency));
    println!();
    println!("{}", format_trend(&days, &currency));
    println!();
    println!("{}", format_categories(&categories, &currency));
    println!();
    println!("{}", format_cities(&cities, 10, &currency));
    println!();
    println!("{}", format_fulfilment(&mix));
    println!();
    println!("{}", format_orders(&detail, view.len(), &currency));
    Ok(())
}

// ---------------------------------------------------------------------------
// Pure formatting functions (report data → String)
// ---------------------------------------------------------------------------

pub fn format_summary(data: &reports::SummaryReport, currency: &str) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Total Revenue"),
        Cell::new(money_whole(data.total_revenue, currency).green().bold().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Total Orders"),
        Cell::new(count(data.orders as i64)),
    ]);
    table.add_row(vec![
        Cell::new("Avg Order Value"),
        Cell::new(money(data.average_order_value, currency)),
    ]);
    table.add_row(vec![
        Cell::new("Quantity Sold"),
        Cell::new(count(data.quantity_sold)),
    ]);
    format!("Sales Summary\n{table}")
}

pub fn format_trend(days: &BTreeMap<NaiveDate, f64>, currency: &str) -> String {
    if days.is_empty() {
        return "No orders in range.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Date", "Revenue"]);
    for (date, revenue) in days {
        table.add_row(vec![
            Cell::new(date.to_string()),
            Cell::new(money(*revenue, currency)),
        ]);
    }
    format!("Revenue Trend ({} days)\n{table}", days.len())
}

pub fn format_categories(rows: &[reports::CategoryRow], currency: &str) -> String {
    if rows.is_empty() {
        return "No orders in range.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Category", "Revenue", "%"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.category),
            Cell::new(money(row.revenue, currency)),
            Cell::new(format!("{:.1}%", row.share_pct)),
        ]);
    }
    format!("Sales by Category\n{table}")
}

pub fn format_cities(rows: &[reports::CityRow], top: usize, currency: &str) -> String {
    if rows.is_empty() {
        return "No orders in range.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["City", "Revenue"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.city),
            Cell::new(money(row.revenue, currency)),
        ]);
    }
    format!("Top {top} Cities by Revenue\n{table}")
}

pub fn format_fulfilment(rows: &[reports::FulfilmentRow]) -> String {
    if rows.is_empty() {
        return "No orders in range.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Channel", "Orders"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.fulfilment),
            Cell::new(count(row.orders as i64)),
        ]);
    }
    format!("Fulfilment Mix\n{table}")
}

pub fn format_orders(rows: &[&Transaction], total: usize, currency: &str) -> String {
    if rows.is_empty() {
        return "No orders in range.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec![
        "Row", "Order ID", "Date", "Status", "Category", "Size", "Amount", "City",
    ]);
    for t in rows {
        table.add_row(vec![
            Cell::new(t.row_id),
            Cell::new(&t.order_id),
            Cell::new(t.date.to_string()),
            Cell::new(&t.status),
            Cell::new(&t.category),
            Cell::new(&t.size),
            Cell::new(money(t.amount, currency)),
            Cell::new(&t.ship_city),
        ]);
    }
    format!("Transaction Detail ({} of {total} orders)\n{table}", rows.len())
}
