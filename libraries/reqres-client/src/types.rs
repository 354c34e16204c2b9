//! Types for ReqRes users API requests and responses.

use serde::{Deserialize, Serialize};

/// Production endpoint of the ReqRes API.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

/// Configuration for connecting to the users API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://reqres.in/api")
    pub base_url: String,
}

impl ClientConfig {
    /// Create a config pointing at a custom base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

// =============================================================================
// Query Types
// =============================================================================

/// Pagination parameters for the users listing.
///
/// Values are passed through to the server unchanged; there is no
/// client-side upper bound.
#[derive(Debug, Clone)]
pub struct UserQuery {
    /// 1-based page number
    pub page: u32,
    /// Number of users per page
    pub per_page: u32,
}

impl UserQuery {
    /// Create a query for a specific page and page size.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }
}

impl Default for UserQuery {
    /// First page, twelve users per page.
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 12,
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// A user as returned by the API.
///
/// All fields are required at decode time; extra fields on the wire are
/// ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

/// Envelope for the users listing response.
///
/// Only `data` is decoded; pagination metadata in the envelope is ignored.
#[derive(Debug, Deserialize)]
pub struct UserPage {
    pub data: Vec<User>,
}
