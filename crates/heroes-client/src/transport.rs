//! The HTTP seam between the data-access layer and the network.
//!
//! [`HeroTransport`] moves one request to the server and hands back the raw
//! status and body. It knows nothing about heroes: status checks, decoding,
//! logging and fallbacks all live in [`HeroService`](crate::service::HeroService).
//! [`HttpTransport`] is the `reqwest` implementation used in production.

use std::future::Future;

use crate::config::ClientConfig;
use crate::error::HeroError;

/// HTTP verbs the hero API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl ApiMethod {
    const fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One request against the hero API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb.
    pub method: ApiMethod,
    /// Path relative to the API base URL, e.g. `api/heroes/12`.
    pub path: String,
    /// Query-string pairs, URL-encoded by the transport.
    pub query: Vec<(String, String)>,
    /// JSON body; sent with `Content-Type: application/json`.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// A bodiless request.
    pub fn new(method: ApiMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append a query-string pair.
    #[must_use]
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_owned(), value.to_owned()));
        self
    }
}

/// Raw response: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, possibly empty.
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends [`ApiRequest`]s and returns [`ApiResponse`]s.
///
/// Only transport-level problems (connect, timeout, reading the body) are
/// errors here; a 404 is a successful exchange with a 404 response.
pub trait HeroTransport: Send + Sync {
    /// Perform one request.
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, HeroError>> + Send;
}

/// `reqwest`-backed transport against a real server.
pub struct HttpTransport {
    client: reqwest::Client,
    api_url: String,
}

impl HttpTransport {
    /// Build a transport with the configured base URL and request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the `reqwest` client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Base URL requests are resolved against.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

impl HeroTransport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, HeroError> {
        let url = self.url_for(&request.path);

        let mut builder = self.client.request(request.method.as_reqwest(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .json(body);
        }

        let method = request.method.as_reqwest();
        let response = builder
            .send()
            .await
            .map_err(|e| HeroError::Transport(format!("{method} {url} failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| HeroError::Transport(format!("reading response body failed: {e}")))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let config = ClientConfig {
            api_url: String::from("http://127.0.0.1:8080/"),
            timeout: Duration::from_secs(1),
        };
        let Ok(transport) = HttpTransport::new(&config) else {
            return;
        };
        assert_eq!(transport.api_url(), "http://127.0.0.1:8080");
        assert_eq!(
            transport.url_for("/api/heroes/12"),
            "http://127.0.0.1:8080/api/heroes/12"
        );
    }

    #[test]
    fn request_builders() {
        let request = ApiRequest::new(ApiMethod::Get, "api/heroes/")
            .with_query("name", "ma")
            .with_body(serde_json::json!({"name": "Magma"}));
        assert_eq!(request.query, vec![(String::from("name"), String::from("ma"))]);
        assert!(request.body.is_some());
    }

    #[test]
    fn success_range() {
        let ok = ApiResponse {
            status: 204,
            body: String::new(),
        };
        let missing = ApiResponse {
            status: 404,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!missing.is_success());
    }
}
