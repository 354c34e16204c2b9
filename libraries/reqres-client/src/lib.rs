//! ReqRes Users Client
//!
//! HTTP client library for the paginated users listing of the ReqRes API.
//!
//! # Example
//!
//! ```ignore
//! use reqres_client::{ClientConfig, UserApiClient, UserQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client against the production endpoint
//!     let client = UserApiClient::new(ClientConfig::default())?;
//!
//!     // First page, twelve users per page
//!     let users = client.fetch_users(UserQuery::default()).await?;
//!     for user in &users {
//!         println!("{} {} <{}>", user.first_name, user.last_name, user.email);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

// Re-export main types
pub use client::UserApiClient;
pub use error::{Result, UserApiError};
pub use types::{ClientConfig, User, UserQuery};
