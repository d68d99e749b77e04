// GitHub API HTTP client.
// Handles authentication, rate limit tracking and throttling, and response status mapping.

use std::time::Duration;

use chrono::Utc;
use reqwest::{
    Client, RequestBuilder, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::{debug, warn};

use crate::error::{Result, TrackerError};

use super::types::RateLimit;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const HEADER_LIMIT: &str = "x-ratelimit-limit";
const HEADER_REMAINING: &str = "x-ratelimit-remaining";
const HEADER_RESET: &str = "x-ratelimit-reset";

/// GitHub API client with optional authentication and rate limit tracking.
///
/// Rate limit state is owned by the instance and updated after every response.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    rate_limit: RateLimit,
}

impl GitHubClient {
    /// Create a new client against the public GitHub API.
    ///
    /// Without a token requests are anonymous and get the much lower
    /// unauthenticated rate limit.
    pub fn new(token: Option<&str>) -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE, token)
    }

    /// Create a client against a different API root (GitHub Enterprise, test servers).
    pub fn with_base_url(base_url: &str, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| TrackerError::InvalidToken)?,
            );
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("follow-tracker"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limit: RateLimit::default(),
        })
    }

    /// Get the last observed rate limit information (all zero before any request).
    pub fn rate_limit(&self) -> &RateLimit {
        &self.rate_limit
    }

    /// Make a GET request to the GitHub API.
    pub async fn get(&mut self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let request = self.client.get(&url);
        self.send(request).await
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &mut self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let request = self.client.get(&url).query(params);
        self.send(request).await
    }

    /// Send a prepared request, honouring the throttle and recording rate limit headers.
    async fn send(&mut self, request: RequestBuilder) -> Result<Response> {
        self.throttle().await;

        let response = request.send().await?;
        debug!(url = %response.url(), status = %response.status(), "GET");

        self.update_rate_limit(&response);
        check_response(response).await
    }

    /// Wait for the rate limit window to reset when the remaining quota is nearly spent.
    async fn throttle(&self) {
        let now = Utc::now().timestamp().max(0) as u64;
        if let Some(delay) = self.rate_limit.throttle_delay(now) {
            warn!(
                remaining = self.rate_limit.remaining,
                wait_secs = delay.as_secs(),
                "Rate limit almost reached, waiting for reset"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&mut self, response: &Response) {
        let headers = response.headers();

        if let Some(limit) = header_u64(headers, HEADER_LIMIT) {
            self.rate_limit.limit = limit;
        }

        if let Some(remaining) = header_u64(headers, HEADER_REMAINING) {
            self.rate_limit.remaining = remaining;
        }

        if let Some(reset) = header_u64(headers, HEADER_RESET) {
            self.rate_limit.reset = reset;
        }
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::NOT_FOUND => Err(TrackerError::NotFound(response.url().path().to_string())),
        StatusCode::FORBIDDEN if header_u64(response.headers(), HEADER_REMAINING) == Some(0) => {
            let reset_at = header_u64(response.headers(), HEADER_RESET).unwrap_or_default();
            Err(TrackerError::RateLimited { reset_at })
        }
        status => Err(TrackerError::RequestFailed {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_starts_with_zeroed_rate_limit() {
        let client = GitHubClient::new(None).unwrap();
        assert_eq!(*client.rate_limit(), RateLimit::default());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = GitHubClient::with_base_url("http://localhost:8080/", Some("abc")).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_invalid_token_rejected() {
        let result = GitHubClient::new(Some("bad\ntoken"));
        assert!(matches!(result, Err(TrackerError::InvalidToken)));
    }

    #[test]
    fn test_header_u64_parses_and_ignores_garbage() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_LIMIT, HeaderValue::from_static("5000"));
        headers.insert(HEADER_REMAINING, HeaderValue::from_static("many"));

        assert_eq!(header_u64(&headers, HEADER_LIMIT), Some(5000));
        assert_eq!(header_u64(&headers, HEADER_REMAINING), None);
        assert_eq!(header_u64(&headers, HEADER_RESET), None);
    }
}
