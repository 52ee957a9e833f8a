use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::models::{ApiConfig, ErrorResponse};

const PDF_MIME: &str = "application/pdf";
const HTML_MIME: &str = "text/html";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Non-success status; `message` is what the user gets to see.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// GET /health
    /// Returns the decoded JSON body of a successful probe
    pub async fn health(&self) -> Result<Value> {
        let url = self.config.endpoint("health");
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: format!("Error {}", status.as_u16()),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("JSON decode error: {}", e)))
    }

    /// POST /convert
    /// Uploads the document as the multipart field `file` and returns the PDF bytes
    pub async fn convert(&self, file_name: &str, content: Bytes) -> Result<Bytes> {
        let length = content.len() as u64;
        let part = Part::stream_with_length(content, length)
            .file_name(file_name.to_string())
            .mime_str(HTML_MIME)?;
        let form = Form::new().part("file", part);

        let url = self.config.endpoint("convert");
        let response = self
            .http
            .post(&url)
            .header(ACCEPT, PDF_MIME)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = rejection_message(response).await;
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?)
    }
}

/// Prefer the JSON `detail` of an error body, else "Error {status}".
async fn rejection_message(response: Response) -> String {
    let status = response.status().as_u16();
    let fallback = format!("Error {}", status);

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));
    if !is_json {
        return fallback;
    }

    match response.json::<ErrorResponse>().await {
        Ok(body) => body.message().unwrap_or(fallback),
        Err(e) => {
            debug!(status, error = %e, "unreadable error body");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> ApiClient {
        ApiClient::new(ApiConfig::new(server.url()))
    }

    #[tokio::test]
    async fn test_health_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/health")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"ok"}"#)
            .create_async()
            .await;

        let body = client_for(&server).health().await.unwrap();
        assert_eq!(body["status"], "ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_health_rejects_non_success() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/health")
            .with_status(503)
            .create_async()
            .await;

        let err = client_for(&server).health().await.unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_health_malformed_json() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/health")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = client_for(&server).health().await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_convert_posts_multipart_and_returns_bytes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/convert")
            .match_header("accept", PDF_MIME)
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".to_string()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="file"; filename="page.html""#.to_string()),
                Matcher::Regex("<h1>hi</h1>".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", PDF_MIME)
            .with_body(b"%PDF-1.7 fake")
            .create_async()
            .await;

        let pdf = client_for(&server)
            .convert("page.html", Bytes::from_static(b"<h1>hi</h1>"))
            .await
            .unwrap();

        assert_eq!(pdf, Bytes::from_static(b"%PDF-1.7 fake"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_convert_uses_json_detail() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/convert")
            .with_status(422)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail":"bad markup"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .convert("page.html", Bytes::from_static(b"<p>"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Rejected { status: 422, .. }));
        assert_eq!(err.to_string(), "bad markup");
    }

    #[tokio::test]
    async fn test_convert_without_json_falls_back_to_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/convert")
            .with_status(500)
            .with_header("content-type", "text/plain")
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let err = client_for(&server)
            .convert("page.html", Bytes::from_static(b"<p>"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error 500");
    }

    #[tokio::test]
    async fn test_convert_malformed_json_falls_back_to_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/convert")
            .with_status(413)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body("{oops")
            .create_async()
            .await;

        let err = client_for(&server)
            .convert("page.html", Bytes::from_static(b"<p>"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error 413");
    }

    #[tokio::test]
    async fn test_convert_network_failure() {
        // Nothing listens on port 9 (discard) in the test environment
        let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9"));
        let err = client
            .convert("page.html", Bytes::from_static(b"<p>"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::RequestError(_)));
    }
}
