//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default tracing filter when neither `RUST_LOG` nor config provide one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Request timeout applied by the transport layer, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum accepted request body size (64 KB)
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Default wait for a pooled connection, in seconds
pub const DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// RULES
// =============================================================================

/// Names of the built-in rules
pub mod rule_names {
    pub const MIN_TOTAL_100: &str = "min_total_100";
    pub const MIN_ITEMS_2: &str = "min_items_2";
    pub const DIVISIBLE_BY_5: &str = "divisible_by_5";
}

/// Maximum number of rule names accepted in a single check request
pub const MAX_RULES_PER_REQUEST: u64 = 64;

// =============================================================================
// API
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
