//! HTTP surface of the condition monitoring dashboard.
//!
//! The binary only reads configuration and serves [`app::build_router`];
//! integration tests drive the same router in-process.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod routes;
pub mod state;
