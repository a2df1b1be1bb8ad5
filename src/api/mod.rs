//! API Module
//!
//! HTTP handlers, routing and request logging for the item REST API.
//!
//! # Endpoints
//! - `POST /items/` - Create an item
//! - `GET /items/{item_id}` - Read an item (cache first)
//! - `PUT /items/{item_id}` - Update an item
//! - `DELETE /items/{item_id}` - Delete an item
//! - `GET /stats` - Read-through cache statistics
//! - `GET /health` - Database and cache health

pub mod handlers;
pub mod logging;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
