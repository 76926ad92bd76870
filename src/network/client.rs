//! HTTP client for making requests to the search provider

use crate::config::OutgoingSettings;
use anyhow::{anyhow, Result};
use reqwest::{Client, Response};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

/// HTTP response with the body already read
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl HttpResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.text)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client wrapper configured from outgoing settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
    extra_headers: HashMap<String, String>,
}

impl HttpClient {
    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let timeout = Duration::try_from_secs_f64(settings.request_timeout).map_err(|e| {
            anyhow!(
                "request timeout of {} seconds is not usable: {}",
                settings.request_timeout,
                e
            )
        })?;

        let mut builder = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true);

        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            user_agent: settings
                .user_agent
                .clone()
                .unwrap_or_else(default_user_agent),
            extra_headers: settings.extra_headers.clone(),
        })
    }

    /// POST a JSON body
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &B,
    ) -> reqwest::Result<HttpResponse> {
        let mut req_builder = self
            .client
            .post(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json");

        for (key, value) in &self.extra_headers {
            req_builder = req_builder.header(key, value);
        }
        for (key, value) in headers {
            req_builder = req_builder.header(*key, *value);
        }

        let response = req_builder.json(body).send().await?;

        Self::parse_response(response).await
    }

    async fn parse_response(response: Response) -> reqwest::Result<HttpResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(HttpResponse { status, text })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn default_user_agent() -> String {
    format!("exa-research/{}", crate::VERSION)
}
