use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::Result;
use crate::loader;
use crate::models::{CleanSummary, FilterParams, Transaction};

/// The cleaned transaction set. Loaded once per invocation and immutable
/// thereafter; every report and export works from a view over it.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub source: PathBuf,
    pub transactions: Vec<Transaction>,
    pub summary: CleanSummary,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let (transactions, summary) = loader::load_and_clean(path)?;
        Ok(Self {
            source: path.to_path_buf(),
            transactions,
            summary,
        })
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.transactions.iter().map(|t| t.date).min()?;
        let max = self.transactions.iter().map(|t| t.date).max()?;
        Some((min, max))
    }
}

/// A read-only selection over a dataset. Holds references into the base set,
/// in base order; it owns no row data of its own.
#[derive(Debug)]
pub struct FilteredView<'a> {
    pub rows: Vec<&'a Transaction>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Selects rows inside the inclusive date bounds whose category and status
/// appear in the given sets. An empty set places no restriction on that
/// dimension. A start bound after the end bound yields an empty view, not
/// an error.
pub fn filter<'a>(dataset: &'a Dataset, params: &FilterParams) -> FilteredView<'a> {
    if let (Some(from), Some(to)) = (params.from, params.to) {
        if from > to {
            return FilteredView { rows: Vec::new() };
        }
    }
    let rows = dataset
        .transactions
        .iter()
        .filter(|t| {
            if let Some(from) = params.from {
                if t.date < from {
                    return false;
                }
            }
            if let Some(to) = params.to {
                if t.date > to {
                    return false;
                }
            }
            if !params.categories.is_empty()
                && !params.categories.iter().any(|c| c.eq_ignore_ascii_case(&t.category))
            {
                return false;
            }
            if !params.statuses.is_empty()
                && !params.statuses.iter().any(|s| s.eq_ignore_ascii_case(&t.status))
            {
                return false;
            }
            true
        })
        .collect();
    FilteredView { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(row_id: u64, date: &str, amount: f64, category: &str, status: &str) -> Transaction {
        Transaction {
            row_id,
            order_id: format!("ORD-{row_id:03}"),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            amount,
            quantity: 1,
            category: category.to_string(),
            status: status.to_string(),
            fulfilment: "Amazon".to_string(),
            ship_city: "Mumbai".to_string(),
            size: "M".to_string(),
        }
    }

    fn seed_dataset() -> Dataset {
        Dataset {
            source: PathBuf::from("/tmp/orders.csv"),
            transactions: vec![
                txn(1, "2023-06-01", 649.0, "Kurta", "Shipped"),
                txn(2, "2023-06-10", 1200.0, "Western Dress", "Shipped"),
                txn(3, "2023-06-10", 0.0, "Kurta", "Cancelled"),
                txn(4, "2023-06-20", 450.0, "Top", "Shipped"),
                txn(5, "2023-07-01", 800.0, "Kurta", "Shipped"),
            ],
            summary: CleanSummary::default(),
        }
    }

    #[test]
    fn test_filter_no_constraints_returns_everything_in_order() {
        let ds = seed_dataset();
        let view = filter(&ds, &FilterParams::default());
        assert_eq!(view.len(), 5);
        let ids: Vec<u64> = view.rows.iter().map(|t| t.row_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_date_bounds_are_inclusive() {
        let ds = seed_dataset();
        let day = NaiveDate::from_ymd_opt(2023, 6, 10).unwrap();
        let params = FilterParams {
            from: Some(day),
            to: Some(day),
            ..Default::default()
        };
        let view = filter(&ds, &params);
        assert_eq!(view.len(), 2);
        assert!(view.rows.iter().all(|t| t.date == day));
    }

    #[test]
    fn test_filter_inverted_range_yields_empty_view() {
        let ds = seed_dataset();
        let params = FilterParams {
            from: Some(NaiveDate::from_ymd_opt(2023, 7, 1).unwrap()),
            to: Some(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()),
            ..Default::default()
        };
        let view = filter(&ds, &params);
        assert!(view.is_empty());
    }

    #[test]
    fn test_filter_by_category_set() {
        let ds = seed_dataset();
        let params = FilterParams {
            categories: vec!["Kurta".to_string(), "Top".to_string()],
            ..Default::default()
        };
        let view = filter(&ds, &params);
        let ids: Vec<u64> = view.rows.iter().map(|t| t.row_id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_filter_by_status_set() {
        let ds = seed_dataset();
        let params = FilterParams {
            statuses: vec!["Cancelled".to_string()],
            ..Default::default()
        };
        let view = filter(&ds, &params);
        assert_eq!(view.len(), 1);
        assert_eq!(view.rows[0].row_id, 3);
    }

    #[test]
    fn test_filter_combines_all_dimensions() {
        let ds = seed_dataset();
        let params = FilterParams {
            from: Some(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()),
            to: Some(NaiveDate::from_ymd_opt(2023, 6, 30).unwrap()),
            categories: vec!["Kurta".to_string()],
            statuses: vec!["Shipped".to_string()],
        };
        let view = filter(&ds, &params);
        assert_eq!(view.len(), 1);
        assert_eq!(view.rows[0].row_id, 1);
    }

    #[test]
    fn test_filter_labels_match_case_insensitively() {
        let ds = seed_dataset();
        let params = FilterParams {
            categories: vec!["kurta".to_string()],
            ..Default::default()
        };
        let view = filter(&ds, &params);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_date_range_spans_min_to_max() {
        let ds = seed_dataset();
        let (min, max) = ds.date_range().unwrap();
        assert_eq!(min, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(max, NaiveDate::from_ymd_opt(2023, 7, 1).unwrap());
    }

    #[test]
    fn test_single_day_filter_matches_source_format_dates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        std::fs::write(
            &path,
            "Order_ID,Date,Status,Fulfilment,ship_city,Category,Size,Qty,Amount\n\
             A1,06-10-23,Shipped,Amazon,Mumbai,Kurta,M,1,649.00\n",
        )
        .unwrap();
        let ds = Dataset::load(&path).unwrap();
        let day = NaiveDate::from_ymd_opt(2023, 6, 10).unwrap();
        assert_eq!(ds.transactions[0].date, day);

        let params = FilterParams {
            from: Some(day),
            to: Some(day),
            ..Default::default()
        };
        assert_eq!(filter(&ds, &params).len(), 1);
    }

    #[test]
    fn test_load_records_source_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        std::fs::write(
            &path,
            "Order_ID,Date,Status,Fulfilment,ship_city,Category,Size,Qty,Amount\n\
             A1,04-30-22,Shipped,Amazon,Mumbai,Kurta,M,1,649.00\n\
             A2,bogus,Shipped,Amazon,Delhi,Kurta,M,1,500.00\n",
        )
        .unwrap();
        let ds = Dataset::load(&path).unwrap();
        assert_eq!(ds.source, path);
        assert_eq!(ds.transactions.len(), 1);
        assert_eq!(ds.summary.rows_read, 2);
        assert_eq!(ds.summary.bad_dates_dropped, 1);
    }
}
