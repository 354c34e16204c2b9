//! Main users API client.

use crate::error::{Result, UserApiError};
use crate::types::{ClientConfig, User, UserPage, UserQuery};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for the ReqRes users API.
///
/// The client is stateless: it holds an immutable configuration and a
/// connection pool, so it can be shared and called concurrently without
/// synchronization.
///
/// # Example
///
/// ```ignore
/// use reqres_client::{ClientConfig, UserApiClient, UserQuery};
///
/// let client = UserApiClient::new(ClientConfig::default())?;
/// let users = client.fetch_users(UserQuery::new(2, 6)).await?;
/// println!("Got {} users", users.len());
/// ```
#[derive(Debug)]
pub struct UserApiClient {
    http: Client,
    config: ClientConfig,
}

impl UserApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate URL
        if config.base_url.is_empty() {
            return Err(UserApiError::InvalidUrl("URL cannot be empty".into()));
        }

        let parsed =
            Url::parse(&config.base_url).map_err(|e| UserApiError::InvalidUrl(e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(UserApiError::InvalidUrl(format!(
                    "unsupported scheme {scheme}, expected http:// or https://"
                )));
            }
        }

        let normalized_config = ClientConfig {
            base_url: config.base_url.trim_end_matches('/').to_string(),
        };

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("reqres-client/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(UserApiError::Connection)?;

        Ok(Self {
            http,
            config: normalized_config,
        })
    }

    /// Get the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch one page of users.
    ///
    /// Returns the users in the same order as the server's `data` array.
    /// The list may be empty if the requested page is past the last one.
    ///
    /// A response with any status other than 200 is a
    /// [`UserApiError::Status`]; transport failures and bodies that fail to
    /// decode are a [`UserApiError::Connection`]. No partial result is
    /// returned: one malformed entry fails the whole page.
    pub async fn fetch_users(&self, query: UserQuery) -> Result<Vec<User>> {
        let url = format!(
            "{}/users?page={}&per_page={}",
            self.config.base_url, query.page, query.per_page
        );
        debug!(url = %url, "Fetching users");

        let response = self.http.get(&url).send().await?;

        let status = response.status();

        if status != StatusCode::OK {
            return Err(UserApiError::Status {
                status: status.as_u16(),
            });
        }

        let page: UserPage = response.json().await?;

        debug!(users = page.data.len(), page = query.page, "Fetched users");

        Ok(page.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(UserApiClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(UserApiClient::new(ClientConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(UserApiClient::new(ClientConfig::new("")).is_err());
        assert!(UserApiClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(UserApiClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client =
            UserApiClient::new(ClientConfig::new("https://example.com/")).expect("valid url");

        // URL should have trailing slash removed
        assert_eq!(client.base_url(), "https://example.com");
    }

    #[test]
    fn test_default_config_targets_production() {
        let client = UserApiClient::new(ClientConfig::default()).expect("valid url");
        assert_eq!(client.base_url(), "https://reqres.in/api");
    }
}
