use std::path::PathBuf;

use crate::cli::{parse_filter_params, resolve_data_file};
use crate::dataset::{filter, Dataset};
use crate::error::Result;
use crate::exporter;

fn default_path() -> PathBuf {
    let date = chrono::Local::now().format("%Y%m%d").to_string();
    PathBuf::from(format!("till-export-{date}.csv"))
}

pub fn run(
    file: Option<String>,
    from_date: Option<String>,
    to_date: Option<String>,
    category: Vec<String>,
    status: Vec<String>,
    output: Option<String>,
) -> Result<()> {
    let path = resolve_data_file(file.as_deref())?;
    let dataset = Dataset::load(&path)?;
    let params = parse_filter_params(from_date.as_deref(), to_date.as_deref(), category, status)?;
    let view = filter(&dataset, &params);

    let out = output.map(PathBuf::from).unwrap_or_else(default_path);
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    exporter::export_to_path(&view, &out)?;
    println!("Wrote {} rows to {}", view.len(), out.display());
    Ok(())
}
