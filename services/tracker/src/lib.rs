//! Exercise tracker service
//!
//! Records users and their exercise log entries behind a small JSON API.

pub mod config;
pub mod dates;
pub mod error;
pub mod extract;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;

pub use routes::create_router;
pub use state::AppState;
