//! Response DTOs for the item API
//!
//! Defines the structure of outgoing HTTP response bodies. Create, read and
//! update answer with [`super::ItemView`].

use serde::Serialize;

use crate::cache::StatsSnapshot;

/// Confirmation message returned by DELETE /items/{item_id}
pub const DELETE_MESSAGE: &str = "Item Deleted Successfully";

/// Response body for the DELETE operation (DELETE /items/{item_id})
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
}

impl DeleteResponse {
    /// Creates the standard delete confirmation
    pub fn deleted() -> Self {
        Self {
            message: DELETE_MESSAGE.to_string(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Reads answered from the cache
    pub hits: u64,
    /// Reads that had to go to the database
    pub misses: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<StatsSnapshot> for StatsResponse {
    fn from(snapshot: StatsSnapshot) -> Self {
        Self {
            hits: snapshot.hits,
            misses: snapshot.misses,
            hit_rate: snapshot.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// "healthy" when both stores answer, "degraded" otherwise
    pub status: String,
    /// Whether Postgres answered the ping
    pub database: bool,
    /// Whether Redis answered the ping
    pub cache: bool,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn new(database: bool, cache: bool) -> Self {
        let status = if database && cache {
            "healthy"
        } else {
            "degraded"
        };
        Self {
            status: status.to_string(),
            database,
            cache,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.database && self.cache
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
