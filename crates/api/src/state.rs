//! Application state

use common::Config;
use store::{Accounts, MemoryRepository, Profiles};

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub accounts: Accounts,
    pub profiles: Profiles<MemoryRepository>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            accounts: Accounts::new(),
            profiles: Profiles::new(MemoryRepository::new()),
        }
    }
}
