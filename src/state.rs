use crate::config::Config;
use crate::service::CustomerService;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: CustomerService,
    pub config: Arc<Config>,
}
