use std::collections::HashSet;
use std::path::PathBuf;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::fmt::format_bytes;
use crate::settings::{load_settings, shellexpand_path};

pub fn run(file: Option<String>) -> Result<()> {
    let settings = load_settings();

    println!(
        "Data file:  {}",
        if settings.data_file.is_empty() {
            "(not set)"
        } else {
            &settings.data_file
        }
    );
    println!("Currency:   {}", settings.currency);

    let path = match file {
        Some(f) => PathBuf::from(shellexpand_path(&f)),
        None => {
            if settings.data_file.is_empty() {
                println!();
                println!("No dataset configured. Run `till init --file <csv>` to set up.");
                return Ok(());
            }
            PathBuf::from(&settings.data_file)
        }
    };

    if !path.exists() {
        println!();
        println!("Dataset not found at {}.", path.display());
        return Ok(());
    }

    let dataset = Dataset::load(&path)?;
    let size = std::fs::metadata(&dataset.source)?.len();
    println!("File size:  {}", format_bytes(size));

    let s = dataset.summary;

    println!();
    println!("Rows read:                {}", s.rows_read);
    println!("Clean rows:               {}", dataset.transactions.len());
    println!("Unreadable rows dropped:  {}", s.unreadable_rows_dropped);
    println!("Bad dates dropped:        {}", s.bad_dates_dropped);
    println!("Duplicates dropped:       {}", s.duplicates_dropped);
    println!("Amounts zero-filled:      {}", s.amounts_zero_filled);
    println!("Quantities zero-filled:   {}", s.quantities_zero_filled);

    let categories: HashSet<&str> = dataset
        .transactions
        .iter()
        .map(|t| t.category.as_str())
        .collect();
    let statuses: HashSet<&str> = dataset
        .transactions
        .iter()
        .map(|t| t.status.as_str())
        .collect();
    let cities: HashSet<&str> = dataset
        .transactions
        .iter()
        .map(|t| t.ship_city.as_str())
        .collect();

    println!();
    if let Some((min, max)) = dataset.date_range() {
        println!("Date range:  {min} to {max}");
    }
    println!("Categories:  {}", categories.len());
    println!("Statuses:    {}", statuses.len());
    println!("Cities:      {}", cities.len());

    Ok(())
}
