use crate::config::Config;
use crate::service::RecordService;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub records: RecordService,
    pub config: Arc<Config>,
}
