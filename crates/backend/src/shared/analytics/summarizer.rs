use contracts::dashboards::d402_sales_analytics::{SalesRecord, SalesSummary, NOT_AVAILABLE};
use std::collections::BTreeSet;

use super::aggregator::{group_count, top_entry};
use super::fields::{category_key, region_key, KeyFn};

/// Summary card for one year.
///
/// An unknown year is not an error: it yields the same zeroed summary as a
/// year without records.
pub fn summarize<'r, I>(records: I, year: i32) -> SalesSummary
where
    I: IntoIterator<Item = &'r SalesRecord>,
{
    let yearly: Vec<&SalesRecord> = records.into_iter().filter(|r| r.year == year).collect();

    if yearly.is_empty() {
        return SalesSummary::empty(year);
    }

    let total_sales: f64 = yearly.iter().map(|r| r.amount).sum();
    let total_orders = yearly.len();

    SalesSummary {
        year,
        total_sales,
        total_orders,
        average_order_value: round2(total_sales / total_orders as f64),
        top_category: most_frequent(&yearly, category_key),
        top_region: most_frequent(&yearly, region_key),
    }
}

/// Summaries for the given years, in the given order
pub fn summarize_years(records: &[SalesRecord], years: &[i32]) -> Vec<SalesSummary> {
    years.iter().map(|&year| summarize(records, year)).collect()
}

/// One summary per year present in `records`, years ascending
pub fn summarize_all(records: &[SalesRecord]) -> Vec<SalesSummary> {
    let years: Vec<i32> = available_years(records);
    summarize_years(records, &years)
}

/// Distinct years, ascending
pub fn available_years(records: &[SalesRecord]) -> Vec<i32> {
    records
        .iter()
        .map(|r| r.year)
        .collect::<BTreeSet<i32>>()
        .into_iter()
        .collect()
}

/// Key with the most records; first-seen wins ties
fn most_frequent(records: &[&SalesRecord], key: KeyFn) -> String {
    let counts = group_count(records.iter().copied(), key);
    top_entry(&counts)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
