pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod seed;
pub mod store;

use std::sync::Arc;
use config::Config;
use store::SummaryStore;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn SummaryStore>,
}

impl AppState {
    pub fn new(config: Config, store: impl SummaryStore + 'static) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }
}

/// Sets up `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
