//! Rule check handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Rule routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/check", post(handler::check_rules))
        .route("/rules", get(handler::list_rules))
}
