use std::path::{Path, PathBuf};

use chrono::{Duration, Local, Months};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::settings::{load_settings, save_settings, shellexpand_path};

struct DemoCategory {
    name: &'static str,
    min_price: i64,
    max_price: i64,
}

const CATEGORIES: &[DemoCategory] = &[
    DemoCategory { name: "kurta", min_price: 329, max_price: 899 },
    DemoCategory { name: "kurta set", min_price: 549, max_price: 1499 },
    DemoCategory { name: "western dress", min_price: 499, max_price: 1399 },
    DemoCategory { name: "top", min_price: 249, max_price: 699 },
    DemoCategory { name: "set", min_price: 599, max_price: 1699 },
    DemoCategory { name: "blouse", min_price: 199, max_price: 499 },
    DemoCategory { name: "saree", min_price: 399, max_price: 1299 },
    DemoCategory { name: "ethnic dress", min_price: 549, max_price: 1349 },
];

const SIZES: &[&str] = &["XS", "S", "M", "L", "XL", "XXL", "3XL"];

const CITIES: &[&str] = &[
    "MUMBAI",
    "BENGALURU",
    "NEW DELHI",
    "CHENNAI",
    "HYDERABAD",
    "PUNE",
    "KOLKATA",
    "LUCKNOW",
    "AHMEDABAD",
    "JAIPUR",
    "SURAT",
    "NOIDA",
    "GURUGRAM",
];

/// Weighted by repetition: most orders ship, a few cancel or bounce.
const STATUSES: &[&str] = &[
    "Shipped",
    "Shipped",
    "Shipped - Delivered to Buyer",
    "Shipped - Delivered to Buyer",
    "Shipped - Delivered to Buyer",
    "Shipped - Returned to Seller",
    "Cancelled",
    "Pending",
];

const FULFILMENTS: &[&str] = &["Amazon", "Amazon", "Merchant"];

#[derive(Clone)]
struct DemoRow {
    order_id: String,
    date: String,
    status: String,
    fulfilment: String,
    city: String,
    category: String,
    size: String,
    qty: String,
    amount: String,
}

/// Build `months` months of demo orders ending today. The RNG is seeded, so
/// two runs on the same day produce the same file. A small share of rows
/// carries broken dates, garbage amounts, blank labels, and duplicates on
/// purpose; the cleaning pass is expected to absorb them.
fn generate_rows(months: u32) -> Vec<DemoRow> {
    let mut rng = StdRng::seed_from_u64(2022);
    let today = Local::now().date_naive();
    let start = today.checked_sub_months(Months::new(months)).unwrap_or(today);
    let total_days = (today - start).num_days().max(1);

    let mut rows: Vec<DemoRow> = Vec::new();
    let mut n = 0usize;
    for offset in 0..total_days {
        let date = start + Duration::days(offset);
        let per_day = rng.gen_range(3..=8);
        for _ in 0..per_day {
            n += 1;
            let cat = CATEGORIES.choose(&mut rng).unwrap_or(&CATEGORIES[0]);
            let price = rng.gen_range(cat.min_price..=cat.max_price);

            let date_text = if n % 37 == 0 {
                // unparseable on purpose; the loader drops these rows
                if n % 2 == 0 {
                    String::new()
                } else {
                    "04-31-22".to_string()
                }
            } else {
                date.format("%m-%d-%y").to_string()
            };
            let amount = if n % 23 == 0 {
                if n % 2 == 0 {
                    String::new()
                } else {
                    "N/A".to_string()
                }
            } else {
                format!("{price}.00")
            };
            let qty = if n % 61 == 0 {
                "1.0".to_string()
            } else {
                rng.gen_range(1..=3).to_string()
            };
            let category = if n % 41 == 0 {
                String::new()
            } else {
                cat.name.to_string()
            };
            let status = if n % 29 == 0 {
                String::new()
            } else {
                STATUSES.choose(&mut rng).copied().unwrap_or("Shipped").to_string()
            };

            let row = DemoRow {
                order_id: format!(
                    "{:03}-{:07}-{:07}",
                    rng.gen_range(100..=408),
                    rng.gen_range(0..10_000_000u32),
                    rng.gen_range(0..10_000_000u32)
                ),
                date: date_text,
                status,
                fulfilment: FULFILMENTS.choose(&mut rng).copied().unwrap_or("Amazon").to_string(),
                city: CITIES.choose(&mut rng).copied().unwrap_or("MUMBAI").to_string(),
                category,
                size: SIZES.choose(&mut rng).copied().unwrap_or("M").to_string(),
                qty,
                amount,
            };
            let dup = if n % 50 == 0 { Some(row.clone()) } else { None };
            rows.push(row);
            if let Some(d) = dup {
                rows.push(d);
            }
        }
    }
    rows
}

fn write_demo_csv(rows: &[DemoRow], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut wtr = csv::Writer::from_writer(file);
    // Raw header shapes on purpose; the loader normalizes them.
    wtr.write_record([
        "Order ID",
        "Date",
        "Status",
        "Fulfilment",
        "ship-city",
        "Category",
        "Size",
        "Qty",
        "Amount",
    ])?;
    for r in rows {
        wtr.write_record([
            r.order_id.as_str(),
            r.date.as_str(),
            r.status.as_str(),
            r.fulfilment.as_str(),
            r.city.as_str(),
            r.category.as_str(),
            r.size.as_str(),
            r.qty.as_str(),
            r.amount.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn run(output: Option<String>, months: u32) -> Result<()> {
    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("demo-orders.csv"));
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let rows = generate_rows(months);
    write_demo_csv(&rows, &path)?;

    // Point settings at the demo file so reports work immediately.
    let mut settings = load_settings();
    settings.data_file = shellexpand_path(&path.display().to_string());
    save_settings(&settings)?;

    println!("Demo data written!");
    println!("  File:   {}", path.display());
    println!("  Rows:   {}", rows.len());
    println!("  Months: {months}");
    println!();
    println!("Try these next:");
    println!("  till status");
    println!("  till report summary");
    println!("  till report cities --top 5");
    println!("  till export --status Cancelled");

    Ok(())
}
