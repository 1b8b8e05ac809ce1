//! Application state for the timesheet report API.

use std::sync::Arc;

use crate::config::{ConfigLoader, ReportConfig};

/// Shared application state.
///
/// Holds the loaded report configuration, shared read-only across all
/// request handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the report configuration.
    pub fn config(&self) -> &ReportConfig {
        self.config.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_config() {
        let state = AppState::new(ConfigLoader::default());
        let other = state.clone();
        assert!(std::ptr::eq(state.config(), other.config()));
    }
}
