//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{config::Config, rules::RuleRegistry, services::OrderLookup};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Order lookup used by rule checks
    orders: Arc<dyn OrderLookup>,

    /// Rule registry, read-only once the server starts
    registry: Arc<RuleRegistry>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(orders: Arc<dyn OrderLookup>, registry: Arc<RuleRegistry>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                orders,
                registry,
                config,
            }),
        }
    }

    /// Get a reference to the order lookup
    pub fn orders(&self) -> &dyn OrderLookup {
        self.inner.orders.as_ref()
    }

    /// Get a reference to the rule registry
    pub fn registry(&self) -> &RuleRegistry {
        &self.inner.registry
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
