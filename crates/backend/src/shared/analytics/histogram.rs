use contracts::dashboards::d402_sales_analytics::HistogramBucket;

use super::fields::FieldSource;

/// Bucket extracted values into `bin_count` equal-width ranges.
///
/// Bucket `i` covers `[min + i*size, min + (i+1)*size)`; the last bucket is
/// closed so the maximum lands in it. Every bucket is emitted, empty ones
/// included. Returns an empty vector when there is nothing to bucket: no
/// bins, no numeric values, or a zero-width range.
pub fn build_histogram<'r, R, I, V>(records: I, value: V, bin_count: usize) -> Vec<HistogramBucket>
where
    R: ?Sized + 'r,
    I: IntoIterator<Item = &'r R>,
    V: Fn(&R) -> Option<f64>,
{
    if bin_count == 0 {
        return Vec::new();
    }

    let values: Vec<f64> = records
        .into_iter()
        .filter_map(|r| value(r))
        .filter(|v| v.is_finite())
        .collect();

    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let bin_size = if span.is_finite() {
        span / bin_count as f64
    } else {
        // Range wider than f64::MAX
        max / bin_count as f64 - min / bin_count as f64
    };

    if bin_size <= 0.0 {
        return Vec::new();
    }

    let mut counts = vec![0usize; bin_count];
    for &v in &values {
        let index = offset_in_bins(v, min, bin_size).floor() as usize;
        counts[index.min(bin_count - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let low = bucket_edge(min, bin_size, i);
            let high = bucket_edge(min, bin_size, i + 1);
            HistogramBucket {
                range: format!("{:.1}-{:.1}", low, high),
                count,
            }
        })
        .collect()
}

/// `(value - min) / bin_size`, computed on halves when the difference overflows
fn offset_in_bins(value: f64, min: f64, bin_size: f64) -> f64 {
    let offset = value - min;
    if offset.is_finite() {
        offset / bin_size
    } else {
        (value / 2.0 - min / 2.0) / (bin_size / 2.0)
    }
}

/// Lower edge of bucket `index`
fn bucket_edge(min: f64, bin_size: f64, index: usize) -> f64 {
    let edge = min + index as f64 * bin_size;
    if edge.is_finite() {
        edge
    } else {
        (min / 2.0 + index as f64 * (bin_size / 2.0)) * 2.0
    }
}

/// Histogram of a field selected by name; non-numeric values are ignored
pub fn build_histogram_by_field<'r, R, I>(
    records: I,
    field: &str,
    bin_count: usize,
) -> Vec<HistogramBucket>
where
    R: FieldSource + 'r,
    I: IntoIterator<Item = &'r R>,
{
    build_histogram(records, |r: &R| r.field(field).as_f64(), bin_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::fields::tests::{record, RawRow};
    use contracts::dashboards::d402_sales_analytics::SalesRecord;
    use contracts::shared::analytics::CellValue;
    use proptest::prelude::*;

    fn rows(field: &str, values: &[CellValue]) -> Vec<RawRow> {
        values
            .iter()
            .map(|v| RawRow::new([(field, v.clone())]))
            .collect()
    }

    fn ints(values: &[i64]) -> Vec<CellValue> {
        values.iter().map(|&v| CellValue::Integer(v)).collect()
    }

    #[test]
    fn test_two_bins_clamp_max() {
        let data = rows("r", &ints(&[1, 2, 3, 4, 5]));
        let buckets = build_histogram_by_field(&data, "r", 2);
        assert_eq!(
            buckets,
            vec![
                HistogramBucket { range: "1.0-3.0".to_string(), count: 2 },
                HistogramBucket { range: "3.0-5.0".to_string(), count: 3 },
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let data: Vec<SalesRecord> = vec![];
        assert!(build_histogram_by_field(&data, "amount", 5).is_empty());
    }

    #[test]
    fn test_degenerate_inputs() {
        let same = rows("r", &ints(&[4, 4, 4]));
        assert!(build_histogram_by_field(&same, "r", 3).is_empty());

        let text = rows("r", &[CellValue::from("a"), CellValue::from("b")]);
        assert!(build_histogram_by_field(&text, "r", 3).is_empty());

        let data = rows("r", &ints(&[1, 2]));
        assert!(build_histogram_by_field(&data, "missing", 3).is_empty());
        assert!(build_histogram_by_field(&data, "r", 0).is_empty());
    }

    #[test]
    fn test_empty_buckets_are_emitted() {
        let data = rows("Rating", &[CellValue::Number(4.0), CellValue::Number(10.0)]);
        let buckets = build_histogram_by_field(&data, "Rating", 3);
        let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 0, 1]);
        assert_eq!(buckets[1].range, "6.0-8.0");
    }

    #[test]
    fn test_non_numeric_values_excluded() {
        let data = rows(
            "r",
            &[
                CellValue::Integer(0),
                CellValue::from("10"),
                CellValue::Null,
                CellValue::Number(f64::NAN),
                CellValue::Integer(10),
            ],
        );
        let buckets = build_histogram_by_field(&data, "r", 2);
        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_sales_amounts() {
        let records = vec![
            record("2024-01-01", "Audio", "Europe", 100.0, 2024),
            record("2024-01-02", "Audio", "Europe", 600.0, 2024),
            record("2024-01-03", "Audio", "Europe", 1100.0, 2024),
            record("2024-01-04", "Audio", "Europe", 2100.0, 2024),
        ];
        let buckets = build_histogram_by_field(&records, "amount", 4);
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0].range, "100.0-600.0");
        assert_eq!(buckets[3].range, "1600.0-2100.0");
        let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_range_wider_than_f64_max() {
        let data = rows("v", &[CellValue::Number(-1e308), CellValue::Number(1e308)]);
        let buckets = build_histogram_by_field(&data, "v", 2);

        let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 1]);
        assert!(buckets[1].range.starts_with("0.0-"));
        assert!(!buckets.iter().any(|b| b.range.contains("inf")));
    }

    #[test]
    fn test_idempotent() {
        let data = rows("r", &ints(&[3, 9, 1, 7, 7, 2]));
        assert_eq!(
            build_histogram_by_field(&data, "r", 4),
            build_histogram_by_field(&data, "r", 4)
        );
    }

    proptest! {
        #[test]
        fn prop_buckets_partition_numeric_values(
            values in proptest::collection::vec(-1000.0f64..1000.0, 2..300),
            bins in 1usize..20,
        ) {
            let data: Vec<RawRow> = values
                .iter()
                .map(|&v| RawRow::new([("v", CellValue::Number(v))]))
                .collect();

            let buckets = build_histogram_by_field(&data, "v", bins);
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            if max > min {
                prop_assert_eq!(buckets.len(), bins);
                let total: usize = buckets.iter().map(|b| b.count).sum();
                prop_assert_eq!(total, values.len());
            } else {
                prop_assert!(buckets.is_empty());
            }
        }
    }
}
