use contracts::dashboards::d402_sales_analytics::{SalesFilter, SalesRecord};

use super::fields::FieldSource;

/// Check a record against every criterion present in the filter
pub fn matches(record: &SalesRecord, filter: &SalesFilter) -> bool {
    if let Some(year) = filter.year {
        if record.year != year {
            return false;
        }
    }
    if !label_matches(&record.category, filter.category.as_deref()) {
        return false;
    }
    if !label_matches(&record.region, filter.region.as_deref()) {
        return false;
    }
    if !label_matches(&record.product, filter.product.as_deref()) {
        return false;
    }
    if let (Some(field), Some(expected)) = (filter.field.as_deref(), filter.value.as_deref()) {
        // A record without the field never matches
        if record.field(field).as_key().as_deref() != Some(expected) {
            return false;
        }
    }
    true
}

/// Records passing the filter, in input order
pub fn apply_filter<'r, I>(records: I, filter: &SalesFilter) -> Vec<&'r SalesRecord>
where
    I: IntoIterator<Item = &'r SalesRecord>,
{
    if filter.is_empty() {
        return records.into_iter().collect();
    }
    records
        .into_iter()
        .filter(|r| matches(r, filter))
        .collect()
}

fn label_matches(actual: &str, expected: Option<&str>) -> bool {
    expected.map_or(true, |e| actual == e)
}
