use contracts::dashboards::d402_sales_analytics::SalesRecord;
use std::path::PathBuf;
use thiserror::Error;

/// Ошибки источника записей
#[derive(Debug, Error)]
pub enum RecordSourceError {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of records, got {0}")]
    NotAnArray(&'static str),
}

/// Supplier of sales records
pub trait RecordSource {
    fn load(&self) -> Result<Vec<SalesRecord>, RecordSourceError>;
}

/// Records stored as a JSON array in a file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<SalesRecord>, RecordSourceError> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|source| RecordSourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        let records = parse_records(&contents)?;
        tracing::info!(
            "Loaded {} sales records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

/// Parse a JSON array of records.
///
/// Elements that do not match the record shape are skipped with a warning;
/// one bad element never rejects the whole batch. Records without an `id`
/// get a generated one.
pub fn parse_records(json: &str) -> Result<Vec<SalesRecord>, RecordSourceError> {
    let root: serde_json::Value = serde_json::from_str(json)?;
    let items = match root {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(_) => return Err(RecordSourceError::NotAnArray("object")),
        serde_json::Value::Null => return Err(RecordSourceError::NotAnArray("null")),
        _ => return Err(RecordSourceError::NotAnArray("scalar")),
    };

    let total = items.len();
    let mut records = Vec::with_capacity(total);
    let mut skipped = 0usize;

    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<SalesRecord>(item) {
            Ok(mut record) => {
                if record.id.trim().is_empty() {
                    record.id = uuid::Uuid::new_v4().to_string();
                }
                records.push(record);
            }
            Err(e) => {
                skipped += 1;
                tracing::warn!("Skipping sales record #{}: {}", index, e);
            }
        }
    }

    if skipped > 0 {
        tracing::warn!("Skipped {} of {} sales records", skipped, total);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records() {
        let json = r#"[
            {"id": "2022-1", "date": "2022-07-14", "product": "Mouse", "category": "Accessories",
             "amount": 150, "region": "Europe", "year": 2022},
            {"id": "2022-2", "date": "2022-08-01", "product": "Tablet", "category": "Mobile",
             "amount": 820.5, "region": "Middle East", "year": 2022, "City": "Yangon"}
        ]"#;

        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].amount, 150.0);
        assert_eq!(records[1].extra.get("City"), Some(&serde_json::json!("Yangon")));
    }

    #[test]
    fn test_malformed_elements_are_skipped() {
        let json = r#"[
            {"id": "a", "date": "2024-01-01", "category": "Audio", "amount": 10, "region": "Europe", "year": 2024},
            {"id": "b", "date": "2024-01-02", "category": "Audio", "amount": "ten", "region": "Europe", "year": 2024},
            {"id": "c", "date": "2024-01-03", "category": "Audio", "region": "Europe", "year": 2024},
            42
        ]"#;

        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "a");
    }

    #[test]
    fn test_missing_id_is_generated() {
        let records = parse_records(r#"[{"amount": 1, "year": 2023}]"#).unwrap();
        assert!(!records[0].id.is_empty());
    }

    #[test]
    fn test_root_must_be_array() {
        assert!(matches!(
            parse_records(r#"{"records": []}"#),
            Err(RecordSourceError::NotAnArray("object"))
        ));
        assert!(matches!(
            parse_records("not json"),
            Err(RecordSourceError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let source = JsonFileSource::new("definitely/not/here.json");
        assert!(matches!(
            source.load(),
            Err(RecordSourceError::Io { .. })
        ));
    }
}
