use serde::{Deserialize, Serialize};

/// Month labels used as group keys, independent of locale
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Supported grouping dimensions for chart series and top lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupDimension {
    Category,
    Region,
    Product,
    /// Calendar month of the record date; years collapse into one bucket
    #[serde(alias = "monthly")]
    Month,
    Year,
}

impl GroupDimension {
    /// Field identifier as used in record JSON
    pub fn id(&self) -> &'static str {
        match self {
            GroupDimension::Category => "category",
            GroupDimension::Region => "region",
            GroupDimension::Product => "product",
            GroupDimension::Month => "month",
            GroupDimension::Year => "year",
        }
    }

    /// Display label for table headers
    pub fn label(&self) -> &'static str {
        match self {
            GroupDimension::Category => "Category",
            GroupDimension::Region => "Region",
            GroupDimension::Product => "Product",
            GroupDimension::Month => "Monthly",
            GroupDimension::Year => "Year",
        }
    }
}

/// What a group reduces to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// Sum of `amount`
    #[default]
    Amount,
    /// Number of records
    Count,
}

/// Abbreviation for a 1-based month number
pub fn month_abbreviation(month: u32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTH_ABBREVIATIONS[(month - 1) as usize])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_abbreviation() {
        assert_eq!(month_abbreviation(1), Some("Jan"));
        assert_eq!(month_abbreviation(12), Some("Dec"));
        assert_eq!(month_abbreviation(0), None);
        assert_eq!(month_abbreviation(13), None);
    }

    #[test]
    fn test_dimension_serde() {
        let dim: GroupDimension = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(dim, GroupDimension::Month);
        let dim: GroupDimension = serde_json::from_str("\"region\"").unwrap();
        assert_eq!(dim, GroupDimension::Region);
        assert_eq!(serde_json::to_string(&GroupDimension::Month).unwrap(), "\"month\"");
    }
}
