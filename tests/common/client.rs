//! HTTP client for end-to-end tests
//!
//! When routes change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

/// HTTP test client for the directory routes
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /
    pub async fn get_welcome(&self) -> Response {
        self.get_path("/").await
    }

    /// GET /pets/{id}
    pub async fn get_pet(&self, id: i64) -> Response {
        self.get_path(&format!("/pets/{}", id)).await
    }

    /// GET /owner/{id}
    pub async fn get_owner(&self, id: i64) -> Response {
        self.get_path(&format!("/owner/{}", id)).await
    }

    /// GET an arbitrary path
    pub async fn get_path(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Request failed")
    }
}
