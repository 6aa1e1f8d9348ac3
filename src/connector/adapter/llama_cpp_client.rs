use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::{CompletionClient, CompletionError};
use crate::domain::CompletionRequest;

/// Default target: a llama.cpp server running locally on its standard port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
const COMPLETION_PATH: &str = "/completion";

#[derive(Deserialize)]
struct CompletionResponse {
    content: String,
}

/// HTTP client for the llama.cpp `/completion` endpoint.
///
/// Every call is bounded by the configured timeout, set on the request itself,
/// so an unresponsive server surfaces as [`CompletionError::Timeout`] instead
/// of hanging the chat turn.
pub struct LlamaCppClient {
    client: reqwest::Client,
    /// Full endpoint URL (base + COMPLETION_PATH).
    url: String,
    timeout: Duration,
}

impl LlamaCppClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, timeout)
    }

    /// Reuses an existing HTTP client (connection pool, proxy settings).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETION_PATH);
        Self {
            client,
            url,
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn classify(err: reqwest::Error) -> CompletionError {
        if err.is_timeout() {
            CompletionError::Timeout
        } else if err.is_connect() {
            CompletionError::Connection(err.to_string())
        } else if err.is_decode() {
            CompletionError::MalformedBody(err.to_string())
        } else {
            CompletionError::Transport(err.to_string())
        }
    }
}

impl Default for LlamaCppClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl CompletionClient for LlamaCppClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let response = self
            .client
            .post(&self.url)
            .timeout(self.timeout)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(Self::classify)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LlamaCppClient: server returned {status}: {body}");
            return Err(CompletionError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(Self::classify)?;
        let parsed: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::MalformedBody(e.to_string()))?;

        debug!("LlamaCppClient raw completion: {:?}", parsed.content);
        Ok(parsed.content)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> CompletionRequest {
        CompletionRequest::for_classification("Classez: bonjour")
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = LlamaCppClient::new("http://llm:8080/", DEFAULT_TIMEOUT);
        assert_eq!(client.url(), "http://llm:8080/completion");
        assert_eq!(LlamaCppClient::default().url(), "http://localhost:8080/completion");
    }

    #[tokio::test]
    async fn test_posts_request_and_returns_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/completion"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .and(body_partial_json(serde_json::json!({
                "prompt": "Classez: bonjour",
                "max_tokens": 15,
                "stop": ["\n", "###", "<|endoftext|>"],
                "echo": false
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"content": " salutation", "stop": true})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = LlamaCppClient::new(server.uri(), DEFAULT_TIMEOUT);
        let content = client.complete(&request()).await.unwrap();

        assert_eq!(content, " salutation");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("loading model"))
            .mount(&server)
            .await;

        let client = LlamaCppClient::new(server.uri(), DEFAULT_TIMEOUT);
        let err = client.complete(&request()).await.unwrap_err();

        assert_eq!(err, CompletionError::Status { status: 503 });
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = LlamaCppClient::new(server.uri(), DEFAULT_TIMEOUT);
        let err = client.complete(&request()).await.unwrap_err();

        assert!(matches!(err, CompletionError::MalformedBody(_)));
    }

    #[tokio::test]
    async fn test_missing_content_field_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"text": "x"})))
            .mount(&server)
            .await;

        let client = LlamaCppClient::new(server.uri(), DEFAULT_TIMEOUT);
        let err = client.complete(&request()).await.unwrap_err();

        assert!(matches!(err, CompletionError::MalformedBody(_)));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"content": "salutation"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = LlamaCppClient::new(server.uri(), Duration::from_millis(50));
        let err = client.complete(&request()).await.unwrap_err();

        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_timeout_applies_to_shared_client() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"content": "salutation"}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let shared = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap();
        let client = LlamaCppClient::with_client(shared, server.uri(), Duration::from_millis(50));

        let started = std::time::Instant::now();
        let err = client.complete(&request()).await.unwrap_err();

        assert!(err.is_timeout());
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Bind then drop a listener so the port is known to be closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = LlamaCppClient::new(format!("http://{}", addr), DEFAULT_TIMEOUT);
        let err = client.complete(&request()).await.unwrap_err();

        assert!(matches!(err, CompletionError::Connection(_)));
    }
}
