//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod evaluation;
pub mod order;

pub use evaluation::*;
pub use order::*;
