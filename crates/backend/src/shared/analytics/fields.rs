use contracts::dashboards::d402_sales_analytics::SalesRecord;
use contracts::shared::analytics::{month_abbreviation, CellValue, GroupDimension};

/// Access to record fields by name.
///
/// Implemented per record type with an explicit match over the known
/// columns, so a field chosen at request time (histogram field, city
/// selector) resolves without any reflection.
pub trait FieldSource {
    /// Value of `name`, `CellValue::Null` when the record has no such field
    fn field(&self, name: &str) -> CellValue;
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, name: &str) -> CellValue {
        (**self).field(name)
    }
}

impl FieldSource for SalesRecord {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => CellValue::Text(self.id.clone()),
            "date" => CellValue::Text(self.date.clone()),
            "product" => CellValue::Text(self.product.clone()),
            "category" => CellValue::Text(self.category.clone()),
            "region" => CellValue::Text(self.region.clone()),
            "amount" => CellValue::Number(self.amount),
            "year" => CellValue::Integer(self.year as i64),
            "month" => month_key(self).map(CellValue::Text).unwrap_or(CellValue::Null),
            other => self
                .extra
                .get(other)
                .map(CellValue::from)
                .unwrap_or(CellValue::Null),
        }
    }
}

/// Key extractor for a typed grouping dimension
pub type KeyFn = fn(&SalesRecord) -> Option<String>;

/// Dispatch table from dimension to key extractor
pub fn dimension_key(dimension: GroupDimension) -> KeyFn {
    match dimension {
        GroupDimension::Category => category_key,
        GroupDimension::Region => region_key,
        GroupDimension::Product => product_key,
        GroupDimension::Month => month_key,
        GroupDimension::Year => year_key,
    }
}

pub fn category_key(record: &SalesRecord) -> Option<String> {
    label(&record.category)
}

pub fn region_key(record: &SalesRecord) -> Option<String> {
    label(&record.region)
}

pub fn product_key(record: &SalesRecord) -> Option<String> {
    label(&record.product)
}

/// "Jan".."Dec" from the record date; the year is ignored
pub fn month_key(record: &SalesRecord) -> Option<String> {
    record
        .month()
        .and_then(month_abbreviation)
        .map(str::to_string)
}

pub fn year_key(record: &SalesRecord) -> Option<String> {
    Some(record.year.to_string())
}

/// Sale amount, `None` when not a finite number
pub fn amount(record: &SalesRecord) -> Option<f64> {
    record.amount.is_finite().then_some(record.amount)
}

fn label(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
