use std::sync::Arc;

use crate::config::AppConfig;
use crate::fetch::SnapshotSource;
use crate::storage::StateStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<StateStore>,
    pub source: Arc<dyn SnapshotSource>,
}
