use std::sync::Arc;

use crate::config::Config;
use crate::search::{FtsStore, SearchAggregator};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<FtsStore>,
    pub search: Arc<SearchAggregator>,
}

impl AppState {
    /// Wire the store into the aggregator. The store itself is not opened
    /// until the first search or health check.
    pub fn new(config: Config) -> Self {
        let store = Arc::new(FtsStore::new(config.db_path.clone()));
        let search = Arc::new(SearchAggregator::new(
            store.clone(),
            config.site_routes.clone(),
        ));

        Self {
            config,
            store,
            search,
        }
    }
}
