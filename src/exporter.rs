use std::io::Write;
use std::path::Path;

use crate::dataset::FilteredView;
use crate::error::Result;

pub const EXPORT_COLUMNS: &[&str] = &[
    "Order_ID",
    "Date",
    "Status",
    "Fulfilment",
    "ship_city",
    "Category",
    "Size",
    "Qty",
    "Amount",
];

/// Serializes a view as CSV with the canonical column set. Dates are ISO,
/// amounts use the shortest round-trip float form, so loading the export
/// back yields the same record set.
pub fn write_filtered<W: Write>(view: &FilteredView, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(EXPORT_COLUMNS)?;
    for t in &view.rows {
        let date = t.date.to_string();
        let qty = t.quantity.to_string();
        let amount = t.amount.to_string();
        wtr.write_record([
            t.order_id.as_str(),
            date.as_str(),
            t.status.as_str(),
            t.fulfilment.as_str(),
            t.ship_city.as_str(),
            t.category.as_str(),
            t.size.as_str(),
            qty.as_str(),
            amount.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_to_path(view: &FilteredView, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_filtered(view, file)
}
