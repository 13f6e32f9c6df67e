//! Business logic services

pub mod order_lookup;
pub mod rule_service;

pub use order_lookup::{InMemoryOrderLookup, OrderLookup};
pub use rule_service::RuleService;
