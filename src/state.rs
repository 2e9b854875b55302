use std::sync::Arc;

use crate::catalog::{ServiceCatalog, StaticCatalog};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub clock: Arc<dyn Clock>,
    pub catalog: Arc<dyn ServiceCatalog>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
            catalog: Arc::new(StaticCatalog),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn ServiceCatalog>) -> Self {
        self.catalog = catalog;
        self
    }
}
