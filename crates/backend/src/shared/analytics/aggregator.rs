use contracts::dashboards::d402_sales_analytics::{AggregatedPoint, SalesRecord};
use contracts::shared::analytics::{GroupDimension, Measure};
use indexmap::{IndexMap, IndexSet};
use std::cmp::Ordering;

use super::fields::{self, FieldSource};

/// How each group is reduced
pub enum Reduction<'a, R: ?Sized> {
    /// Number of records in the group
    Count,
    /// Sum of the extracted value; records without a value are skipped
    Sum(&'a dyn Fn(&R) -> Option<f64>),
}

/// Group records by `key` and reduce every group.
///
/// Groups are emitted in first-seen order: the order in which distinct keys
/// first appear while scanning `records` once. Records whose key resolves to
/// `None` are skipped and never create a group.
pub fn group_and_reduce<'r, R, I, K>(
    records: I,
    key: K,
    reduction: Reduction<'_, R>,
) -> Vec<AggregatedPoint>
where
    R: ?Sized + 'r,
    I: IntoIterator<Item = &'r R>,
    K: Fn(&R) -> Option<String>,
{
    let mut groups: IndexMap<String, f64> = IndexMap::new();

    for record in records {
        let Some(name) = key(record) else {
            continue;
        };
        let contribution = match &reduction {
            Reduction::Count => 1.0,
            Reduction::Sum(value) => match value(record) {
                Some(v) => v,
                None => continue,
            },
        };
        *groups.entry(name).or_insert(0.0) += contribution;
    }

    groups
        .into_iter()
        .map(|(name, value)| AggregatedPoint { name, value })
        .collect()
}

pub fn group_count<'r, R, I, K>(records: I, key: K) -> Vec<AggregatedPoint>
where
    R: ?Sized + 'r,
    I: IntoIterator<Item = &'r R>,
    K: Fn(&R) -> Option<String>,
{
    group_and_reduce(records, key, Reduction::Count)
}

pub fn group_sum<'r, R, I, K, V>(records: I, key: K, value: V) -> Vec<AggregatedPoint>
where
    R: ?Sized + 'r,
    I: IntoIterator<Item = &'r R>,
    K: Fn(&R) -> Option<String>,
    V: Fn(&R) -> Option<f64>,
{
    group_and_reduce(records, key, Reduction::Sum(&value))
}

/// Group sales records by one of the supported dimensions
pub fn aggregate_by_dimension<'r, I>(
    records: I,
    dimension: GroupDimension,
    measure: Measure,
) -> Vec<AggregatedPoint>
where
    I: IntoIterator<Item = &'r SalesRecord>,
{
    let key = fields::dimension_key(dimension);
    match measure {
        Measure::Amount => group_sum(records, key, fields::amount),
        Measure::Count => group_count(records, key),
    }
}

/// Group by a field chosen by name, e.g. "City" or "Payment"
pub fn group_by_field<'r, R, I>(
    records: I,
    field: &str,
    reduction: Reduction<'_, R>,
) -> Vec<AggregatedPoint>
where
    R: FieldSource + 'r,
    I: IntoIterator<Item = &'r R>,
{
    group_and_reduce(records, |r: &R| r.field(field).as_key(), reduction)
}

/// Distinct values of a field in first-seen order
pub fn distinct_values<'r, R, I>(records: I, field: &str) -> Vec<String>
where
    R: FieldSource + 'r,
    I: IntoIterator<Item = &'r R>,
{
    records
        .into_iter()
        .filter_map(|r| r.field(field).as_key())
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

/// Entry with the highest value; the earliest entry wins ties
pub fn top_entry(points: &[AggregatedPoint]) -> Option<&AggregatedPoint> {
    let mut best: Option<&AggregatedPoint> = None;
    for point in points {
        match best {
            Some(current) if point.value <= current.value => {}
            _ => best = Some(point),
        }
    }
    best
}

/// Highest `n` points, descending; ties keep their original order
pub fn top_n(points: &[AggregatedPoint], n: usize) -> Vec<AggregatedPoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    sorted.truncate(n);
    sorted
}

/// Keep points whose value reaches `threshold`, preserving order.
///
/// Returns the kept points and the number of points dropped.
pub fn apply_threshold(
    points: Vec<AggregatedPoint>,
    threshold: f64,
) -> (Vec<AggregatedPoint>, usize) {
    let before = points.len();
    let kept: Vec<AggregatedPoint> = points
        .into_iter()
        .filter(|p| p.value >= threshold)
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}
