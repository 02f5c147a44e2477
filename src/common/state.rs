use std::sync::Arc;

use crate::config::Config;
use crate::opensensemap::OsemClient;
use crate::registry::BoxRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub osem_client: Arc<OsemClient>,
    pub registry: Arc<BoxRegistry>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, osem_client: OsemClient, registry: BoxRegistry) -> Self {
        Self {
            config: Arc::new(config),
            osem_client: Arc::new(osem_client),
            registry: Arc::new(registry),
        }
    }
}
