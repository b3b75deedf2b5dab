use std::path::Path;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path, shellexpand_path};

pub fn run(file: Option<String>, currency: Option<String>) -> Result<()> {
    let mut settings = load_settings();

    if let Some(f) = &file {
        let expanded = shellexpand_path(f);
        // Load once up front so a bad path or broken file fails here, not on
        // the first report.
        let dataset = Dataset::load(Path::new(&expanded))?;
        let s = dataset.summary;
        println!(
            "Dataset OK: {} clean rows ({} read, {} dropped)",
            dataset.transactions.len(),
            s.rows_read,
            s.unreadable_rows_dropped + s.bad_dates_dropped + s.duplicates_dropped
        );
        settings.data_file = expanded;
    }

    if let Some(c) = currency {
        settings.currency = c;
    }

    save_settings(&settings)?;
    println!("Settings saved to {}", settings_path().display());

    if settings.data_file.is_empty() {
        println!();
        println!("No data file set yet. Re-run with --file <csv>, or pass --file to any command.");
    } else {
        println!();
        println!("Try these next:");
        println!("  till status");
        println!("  till report summary");
        println!("  till report all");
    }

    Ok(())
}
