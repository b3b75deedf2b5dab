use chrono::NaiveDate;

/// One cleaned row of a sales export.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// 1-based position in the cleaned set, assigned after deduplication.
    pub row_id: u64,
    pub order_id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub quantity: i64,
    pub category: String,
    pub status: String,
    pub fulfilment: String,
    pub ship_city: String,
    pub size: String,
}

/// User-selected constraints on the cleaned set. `None` bounds are
/// unbounded; empty label lists mean no restriction on that dimension.
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub categories: Vec<String>,
    pub statuses: Vec<String>,
}

/// What the cleaning pass dropped or repaired on the way in.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanSummary {
    pub rows_read: usize,
    pub unreadable_rows_dropped: usize,
    pub bad_dates_dropped: usize,
    pub duplicates_dropped: usize,
    pub amounts_zero_filled: usize,
    pub quantities_zero_filled: usize,
}
