use std::sync::Arc;

use crate::config::Config;
use crate::database::AccountRepository;

/// Shared, read-only request context: the account store and the start-up configuration.
pub struct AppState {
    pub db: Arc<dyn AccountRepository>,
    pub config: Config,
}

impl AppState {
    pub fn new(db: Arc<dyn AccountRepository>, config: Config) -> Self {
        Self { db, config }
    }
}
