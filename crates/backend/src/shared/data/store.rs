use contracts::dashboards::d402_sales_analytics::SalesRecord;
use std::sync::Arc;

use super::record_source::{RecordSource, RecordSourceError};

/// Immutable in-memory set of sales records shared by all handlers
#[derive(Debug, Clone, Default)]
pub struct SalesStore {
    records: Arc<Vec<SalesRecord>>,
}

impl SalesStore {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    /// Load every record from the source once
    pub fn load(source: &dyn RecordSource) -> Result<Self, RecordSourceError> {
        Ok(Self::new(source.load()?))
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
