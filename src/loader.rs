use std::collections::HashSet;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{Result, TillError};
use crate::models::{CleanSummary, Transaction};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Canonical form of a header cell: trimmed, hyphens and spaces to underscores.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().replace('-', "_").replace(' ', "_")
}

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const ISO_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const MDY_DATE_FORMATS: &[&str] = &["%m-%d-%y", "%m/%d/%y", "%m/%d/%Y", "%m-%d-%Y"];

/// chrono's `%Y` accepts 2-digit years, so the ISO trials are gated on a
/// literal 4-digit year; "06-10-23" belongs to the month-first formats.
fn has_iso_year_prefix(raw: &str) -> bool {
    let b = raw.as_bytes();
    b.len() >= 8 && b[..4].iter().all(u8::is_ascii_digit) && b[4] == b'-'
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if has_iso_year_prefix(raw) {
        if let Ok(date) = NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT) {
            return Some(date);
        }
        for fmt in ISO_DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Some(dt.date());
            }
        }
    }
    for fmt in MDY_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }
    None
}

/// Strict numeric parse. Thousands separators and currency symbols do not
/// survive export pipelines consistently, so "1,234" is treated as garbage.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

pub fn parse_quantity(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    // Some exports write quantities as "2.0"; truncate toward zero.
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v as i64)
}

/// Title-case with word boundaries at every non-letter, so "kurta & dupatta
/// set" becomes "Kurta & Dupatta Set" and "WFH-SET" becomes "Wfh-Set".
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

fn clean_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "Unknown".to_string();
    }
    title_case(trimmed)
}

fn clean_status(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "Unknown".to_string();
    }
    trimmed.to_string()
}

fn find_column(normalized: &[String], name: &str) -> Result<usize> {
    normalized
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| TillError::MissingColumn(name.to_string()))
}

// ---------------------------------------------------------------------------
// load_and_clean
// ---------------------------------------------------------------------------

/// Reads a raw order export and produces the cleaned transaction set.
///
/// Rows with unparseable dates are dropped; unparseable amounts and
/// quantities become 0 instead. The asymmetry is intentional: a row without
/// a date cannot participate in date filtering, a row without an amount
/// still counts toward order volume.
pub fn load_and_clean(path: &Path) -> Result<(Vec<Transaction>, CleanSummary)> {
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(std::io::BufReader::new(file));

    let normalized: Vec<String> = rdr.headers()?.iter().map(normalize_header).collect();
    let idx_order_id = find_column(&normalized, "Order_ID")?;
    let idx_date = find_column(&normalized, "Date")?;
    let idx_status = find_column(&normalized, "Status")?;
    let idx_fulfilment = find_column(&normalized, "Fulfilment")?;
    let idx_city = find_column(&normalized, "ship_city")?;
    let idx_category = find_column(&normalized, "Category")?;
    let idx_size = find_column(&normalized, "Size")?;
    let idx_qty = find_column(&normalized, "Qty")?;
    let idx_amount = find_column(&normalized, "Amount")?;

    let mut summary = CleanSummary::default();
    let mut seen = HashSet::new();
    let mut transactions: Vec<Transaction> = Vec::new();

    for result in rdr.records() {
        summary.rows_read += 1;
        let Ok(record) = result else {
            summary.unreadable_rows_dropped += 1;
            continue;
        };

        let Some(date) = parse_date(record.get(idx_date).unwrap_or("")) else {
            summary.bad_dates_dropped += 1;
            continue;
        };

        let amount = match parse_amount(record.get(idx_amount).unwrap_or("")) {
            Some(v) if v >= 0.0 => v,
            _ => {
                summary.amounts_zero_filled += 1;
                0.0
            }
        };
        let quantity = match parse_quantity(record.get(idx_qty).unwrap_or("")) {
            Some(v) if v >= 0 => v,
            _ => {
                summary.quantities_zero_filled += 1;
                0
            }
        };

        let order_id = record.get(idx_order_id).unwrap_or("").to_string();
        let category = clean_category(record.get(idx_category).unwrap_or(""));
        let status = clean_status(record.get(idx_status).unwrap_or(""));
        let fulfilment = record.get(idx_fulfilment).unwrap_or("").to_string();
        let ship_city = record.get(idx_city).unwrap_or("").to_string();
        let size = record.get(idx_size).unwrap_or("").to_string();

        // Duplicate identity covers every cleaned field, so two rows that
        // differ only in raw formatting still collapse to one.
        let key = (
            order_id.clone(),
            date,
            amount.to_bits(),
            quantity,
            category.clone(),
            status.clone(),
            fulfilment.clone(),
            ship_city.clone(),
            size.clone(),
        );
        if !seen.insert(key) {
            summary.duplicates_dropped += 1;
            continue;
        }

        let row_id = transactions.len() as u64 + 1;
        transactions.push(Transaction {
            row_id,
            order_id,
            date,
            amount,
            quantity,
            category,
            status,
            fulfilment,
            ship_city,
            size,
        });
    }

    if transactions.is_empty() {
        return Err(TillError::EmptyDataset(path.display().to_string()));
    }

    Ok((transactions, summary))
}
