//! Exa search API client
//!
//! Talks to `POST {base_url}/search` with the key in the `x-api-key` header.

use super::traits::{ProviderError, SearchProvider};
use super::types::{SearchRequest, SearchResponse};
use crate::config::{ExaSettings, OutgoingSettings, Settings};
use crate::network::{HttpClient, HttpResponse};
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// Exa API client
#[derive(Clone)]
pub struct ExaClient {
    http: HttpClient,
    api_key: String,
    endpoint: String,
}

impl ExaClient {
    pub fn new(exa: &ExaSettings, outgoing: &OutgoingSettings) -> Result<Self> {
        Ok(Self {
            http: HttpClient::with_settings(outgoing)?,
            api_key: exa.api_key.clone(),
            endpoint: format!("{}/search", exa.base_url.trim_end_matches('/')),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.exa, &settings.outgoing)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Turn a non-2xx response into an API error, preferring Exa's own message
    fn api_error(response: &HttpResponse) -> ProviderError {
        let message = response
            .json::<serde_json::Value>()
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| response.text.trim().to_string());

        ProviderError::Api {
            status: response.status,
            message,
        }
    }
}

#[async_trait]
impl SearchProvider for ExaClient {
    fn name(&self) -> &str {
        "exa"
    }

    async fn search_and_contents(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, ProviderError> {
        debug!("POST {} for query {:?}", self.endpoint, request.query);

        let response = self
            .http
            .post_json(&self.endpoint, &[("x-api-key", self.api_key.as_str())], request)
            .await?;

        if !response.is_success() {
            return Err(Self::api_error(&response));
        }

        let parsed: SearchResponse = response.json()?;
        debug!("Exa returned {} results", parsed.results.len());
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ExaClient {
        let exa = ExaSettings {
            api_key: "test-key".to_string(),
            base_url: format!("{}/", server.uri()),
            ..Default::default()
        };
        ExaClient::new(&exa, &OutgoingSettings::default()).unwrap()
    }

    #[tokio::test]
    async fn test_endpoint_from_base_url() {
        let client = ExaClient::from_settings(&Settings::default()).unwrap();
        assert_eq!(client.endpoint(), "https://api.exa.ai/search");
    }

    #[tokio::test]
    async fn test_search_sends_key_and_parses_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("x-api-key", "test-key"))
            .and(body_partial_json(json!({"query": "topological insulators", "type": "auto"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "requestId": "r1",
                "results": [
                    {"url": "https://arxiv.org/abs/1", "title": "First"},
                    {"url": "https://arxiv.org/abs/2", "title": "Second"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client
            .search_and_contents(&SearchRequest::new("topological insulators"))
            .await
            .unwrap();

        assert_eq!(response.request_id.as_deref(), Some("r1"));
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[1].title.as_deref(), Some("Second"));
    }

    #[tokio::test]
    async fn test_api_error_uses_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid API key"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .search_and_contents(&SearchRequest::new("anything"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert!(matches!(
            err,
            ProviderError::Api { ref message, .. } if message == "Invalid API key"
        ));
    }

    #[tokio::test]
    async fn test_api_error_falls_back_to_body_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable\n"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .search_and_contents(&SearchRequest::new("anything"))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "search provider returned 503: upstream unavailable"
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .search_and_contents(&SearchRequest::new("anything"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Decode(_)));
    }
}
