use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::dataset::FilteredView;
use crate::models::Transaction;

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

pub struct SummaryReport {
    pub orders: usize,
    pub total_revenue: f64,
    pub average_order_value: f64,
    pub quantity_sold: i64,
}

pub fn get_summary(view: &FilteredView) -> SummaryReport {
    SummaryReport {
        orders: view.len(),
        total_revenue: total_revenue(view),
        average_order_value: average_order_value(view),
        quantity_sold: view.rows.iter().map(|t| t.quantity).sum(),
    }
}

pub fn total_revenue(view: &FilteredView) -> f64 {
    view.rows.iter().map(|t| t.amount).sum()
}

/// Mean order amount. Defined as 0 for an empty view; the naive division
/// would otherwise put NaN in every downstream display.
pub fn average_order_value(view: &FilteredView) -> f64 {
    if view.is_empty() {
        return 0.0;
    }
    total_revenue(view) / view.len() as f64
}

// ---------------------------------------------------------------------------
// Revenue trend
// ---------------------------------------------------------------------------

pub fn revenue_by_day(view: &FilteredView) -> BTreeMap<NaiveDate, f64> {
    let mut days: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for t in &view.rows {
        *days.entry(t.date).or_default() += t.amount;
    }
    days
}

// ---------------------------------------------------------------------------
// Category breakdown
// ---------------------------------------------------------------------------

pub struct CategoryRow {
    pub category: String,
    pub revenue: f64,
    pub share_pct: f64,
}

/// Revenue per category, labels ascending.
pub fn get_categories(view: &FilteredView) -> Vec<CategoryRow> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for t in &view.rows {
        *totals.entry(t.category.as_str()).or_default() += t.amount;
    }
    let grand_total: f64 = totals.values().sum();
    totals
        .into_iter()
        .map(|(category, revenue)| CategoryRow {
            category: category.to_string(),
            revenue,
            share_pct: if grand_total > 0.0 {
                revenue / grand_total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Top cities
// ---------------------------------------------------------------------------

pub struct CityRow {
    pub city: String,
    pub revenue: f64,
}

/// Top `n` cities by revenue, highest first. The grouping underneath is
/// label-ascending and the sort is stable, so revenue ties resolve toward
/// the earlier label.
pub fn get_top_cities(view: &FilteredView, n: usize) -> Vec<CityRow> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for t in &view.rows {
        *totals.entry(t.ship_city.as_str()).or_default() += t.amount;
    }
    let mut cities: Vec<CityRow> = totals
        .into_iter()
        .map(|(city, revenue)| CityRow {
            city: city.to_string(),
            revenue,
        })
        .collect();
    cities.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    cities.truncate(n);
    cities
}

// ---------------------------------------------------------------------------
// Fulfilment mix
// ---------------------------------------------------------------------------

pub struct FulfilmentRow {
    pub fulfilment: String,
    pub orders: usize,
}

/// Order counts per fulfilment channel, largest first.
pub fn get_fulfilment_counts(view: &FilteredView) -> Vec<FulfilmentRow> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for t in &view.rows {
        *counts.entry(t.fulfilment.as_str()).or_default() += 1;
    }
    let mut rows: Vec<FulfilmentRow> = counts
        .into_iter()
        .map(|(fulfilment, orders)| FulfilmentRow {
            fulfilment: fulfilment.to_string(),
            orders,
        })
        .collect();
    rows.sort_by(|a, b| b.orders.cmp(&a.orders));
    rows
}

// ---------------------------------------------------------------------------
// Order detail
// ---------------------------------------------------------------------------

/// First `limit` rows of the view, base order preserved.
pub fn get_orders<'a>(view: &FilteredView<'a>, limit: usize) -> Vec<&'a Transaction> {
    view.rows.iter().take(limit).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(date: &str, amount: f64, category: &str, city: &str, fulfilment: &str) -> Transaction {
        Transaction {
            row_id: 0,
            order_id: String::new(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            amount,
            quantity: 2,
            category: category.to_string(),
            status: "Shipped".to_string(),
            fulfilment: fulfilment.to_string(),
            ship_city: city.to_string(),
            size: "M".to_string(),
        }
    }

    fn view_of(rows: &[Transaction]) -> FilteredView<'_> {
        FilteredView {
            rows: rows.iter().collect(),
        }
    }

    #[test]
    fn test_summary_kpis() {
        let rows = vec![
            txn("2023-06-01", 100.0, "Kurta", "Mumbai", "Amazon"),
            txn("2023-06-02", 300.0, "Top", "Delhi", "Merchant"),
        ];
        let summary = get_summary(&view_of(&rows));
        assert_eq!(summary.orders, 2);
        assert_eq!(summary.total_revenue, 400.0);
        assert_eq!(summary.average_order_value, 200.0);
        assert_eq!(summary.quantity_sold, 4);
    }

    #[test]
    fn test_empty_view_yields_zero_not_nan() {
        let rows: Vec<Transaction> = Vec::new();
        let view = view_of(&rows);
        assert_eq!(total_revenue(&view), 0.0);
        assert_eq!(average_order_value(&view), 0.0);
        let summary = get_summary(&view);
        assert_eq!(summary.orders, 0);
        assert_eq!(summary.quantity_sold, 0);
    }

    #[test]
    fn test_revenue_by_day_keys_ascending() {
        let rows = vec![
            txn("2023-06-10", 50.0, "Kurta", "Mumbai", "Amazon"),
            txn("2023-06-01", 100.0, "Kurta", "Mumbai", "Amazon"),
            txn("2023-06-10", 25.0, "Top", "Delhi", "Amazon"),
        ];
        let days = revenue_by_day(&view_of(&rows));
        let entries: Vec<(NaiveDate, f64)> = days.into_iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(entries[0].1, 100.0);
        assert_eq!(entries[1].0, NaiveDate::from_ymd_opt(2023, 6, 10).unwrap());
        assert_eq!(entries[1].1, 75.0);
    }

    #[test]
    fn test_categories_labels_ascending_with_share() {
        let rows = vec![
            txn("2023-06-01", 300.0, "Kurta", "Mumbai", "Amazon"),
            txn("2023-06-02", 100.0, "Blouse", "Delhi", "Amazon"),
            txn("2023-06-03", 100.0, "Kurta", "Pune", "Amazon"),
        ];
        let cats = get_categories(&view_of(&rows));
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[0].category, "Blouse");
        assert_eq!(cats[0].revenue, 100.0);
        assert_eq!(cats[0].share_pct, 20.0);
        assert_eq!(cats[1].category, "Kurta");
        assert_eq!(cats[1].revenue, 400.0);
        assert_eq!(cats[1].share_pct, 80.0);
    }

    #[test]
    fn test_category_share_guarded_when_total_is_zero() {
        let rows = vec![txn("2023-06-01", 0.0, "Kurta", "Mumbai", "Amazon")];
        let cats = get_categories(&view_of(&rows));
        assert_eq!(cats[0].share_pct, 0.0);
    }

    #[test]
    fn test_top_cities_caps_and_sorts_descending() {
        let rows = vec![
            txn("2023-06-01", 100.0, "Kurta", "Pune", "Amazon"),
            txn("2023-06-02", 500.0, "Kurta", "Mumbai", "Amazon"),
            txn("2023-06-03", 300.0, "Kurta", "Delhi", "Amazon"),
            txn("2023-06-04", 200.0, "Kurta", "Mumbai", "Amazon"),
        ];
        let view = view_of(&rows);
        let cities = get_top_cities(&view, 2);
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].city, "Mumbai");
        assert_eq!(cities[0].revenue, 700.0);
        assert_eq!(cities[1].city, "Delhi");
        assert!(cities.iter().all(|c| {
            view.rows.iter().any(|t| t.ship_city == c.city)
        }));
    }

    #[test]
    fn test_top_cities_ties_resolve_to_earlier_label() {
        let rows = vec![
            txn("2023-06-01", 100.0, "Kurta", "Surat", "Amazon"),
            txn("2023-06-02", 100.0, "Kurta", "Agra", "Amazon"),
            txn("2023-06-03", 100.0, "Kurta", "Noida", "Amazon"),
        ];
        let cities = get_top_cities(&view_of(&rows), 2);
        assert_eq!(cities[0].city, "Agra");
        assert_eq!(cities[1].city, "Noida");
    }

    #[test]
    fn test_fulfilment_counts_largest_first() {
        let rows = vec![
            txn("2023-06-01", 100.0, "Kurta", "Mumbai", "Merchant"),
            txn("2023-06-02", 100.0, "Kurta", "Delhi", "Amazon"),
            txn("2023-06-03", 100.0, "Kurta", "Pune", "Amazon"),
        ];
        let mix = get_fulfilment_counts(&view_of(&rows));
        assert_eq!(mix.len(), 2);
        assert_eq!(mix[0].fulfilment, "Amazon");
        assert_eq!(mix[0].orders, 2);
        assert_eq!(mix[1].fulfilment, "Merchant");
        assert_eq!(mix[1].orders, 1);
    }

    #[test]
    fn test_orders_respects_limit_and_order() {
        let rows = vec![
            txn("2023-06-01", 1.0, "Kurta", "Mumbai", "Amazon"),
            txn("2023-06-02", 2.0, "Kurta", "Delhi", "Amazon"),
            txn("2023-06-03", 3.0, "Kurta", "Pune", "Amazon"),
        ];
        let view = view_of(&rows);
        let first_two = get_orders(&view, 2);
        let amounts: Vec<f64> = first_two.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![1.0, 2.0]);
        assert_eq!(get_orders(&view, 100).len(), 3);
    }
}
