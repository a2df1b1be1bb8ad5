//! Item Service - item CRUD over Postgres with a Redis read-through cache
//!
//! Reads are answered from Redis when possible and populate it on a miss;
//! updates overwrite and deletes remove the cached entry.

pub mod api;
pub mod bootstrap;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod telemetry;

pub use api::{create_router, AppState};
pub use config::Config;
pub use service::ItemService;
