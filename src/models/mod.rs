//! Item model plus request and response DTOs for the HTTP API
//!
//! This module defines the domain record stored in Postgres and the
//! Data Transfer Objects used for serializing/deserializing HTTP bodies.

pub mod item;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use item::{Item, ItemView};
pub use requests::{ItemRequest, MAX_DESC_LENGTH, MAX_NAME_LENGTH};
pub use responses::{DeleteResponse, ErrorResponse, HealthResponse, StatsResponse};
