pub mod handlers;

use crate::shared::config::DashboardConfig;
use crate::shared::data::store::SalesStore;

/// Shared state of the HTTP handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: SalesStore,
    pub settings: DashboardConfig,
}

impl AppState {
    pub fn new(store: SalesStore, settings: DashboardConfig) -> Self {
        Self { store, settings }
    }
}
