//! Research paper search tool

use super::text::unescape_backslashes;
use super::window::LookbackWindow;
use crate::config::{ExaSettings, Settings};
use crate::provider::{
    Contents, ExaClient, ProviderError, SearchProvider, SearchRequest, SearchResponse, SearchType,
};
use crate::status::{Notifier, StatusReporter};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Category every search is restricted to
pub const CATEGORY: &str = "research paper";

/// Maximum number of results requested per search
pub const NUM_RESULTS: u32 = 15;

/// Tool metadata advertised to host runtimes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: String,
    /// JSON schema of the tool arguments
    pub parameters: serde_json::Value,
}

/// Searches recent research papers through a provider and reports progress.
///
/// The provider is built once and shared by every call. It holds no mutable
/// state, so calls stay independent of each other.
pub struct PaperSearch {
    settings: ExaSettings,
    provider: Arc<dyn SearchProvider>,
}

impl PaperSearch {
    /// Build the tool with an Exa client made from `settings`
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let provider = ExaClient::from_settings(settings)?;
        Ok(Self {
            settings: settings.exa.clone(),
            provider: Arc::new(provider),
        })
    }

    /// Build the tool around an existing provider
    pub fn with_provider(settings: ExaSettings, provider: Arc<dyn SearchProvider>) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings, provider })
    }

    pub fn settings(&self) -> &ExaSettings {
        &self.settings
    }

    pub fn info(&self) -> ToolInfo {
        ToolInfo {
            id: "exa_research_search".to_string(),
            name: "Exa Research Search".to_string(),
            description: "Search recent research papers with Exa. Use for mathematics, \
                          physics and other scientific questions."
                .to_string(),
            version: crate::VERSION.to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Web query used in the search engine"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    /// Search for papers published within the configured lookback window.
    ///
    /// Returns the serialized results after backslash cleanup, or
    /// `{"error": "<message>"}` when the provider call fails. Exactly one
    /// in-progress event is emitted before the provider call and exactly one
    /// terminal event after it. Other failures, including errors from the
    /// notifier, are returned as `Err`.
    pub async fn search(&self, query: &str, notifier: &dyn Notifier) -> Result<String> {
        if query.trim().is_empty() {
            bail!("search query must not be empty");
        }

        let window = LookbackWindow::until_now(self.settings.years)?;
        let request = self.build_request(query, &window);
        let reporter = StatusReporter::new(notifier);

        reporter
            .progress(format!("Initiating Exa search for research papers: {}", query))
            .await?;

        info!(
            "Searching {} for {:?} published since {}",
            self.provider.name(),
            query,
            request.start_published_date.as_deref().unwrap_or_default()
        );

        match self.provider.search_and_contents(&request).await {
            Ok(response) => {
                let text = render(&response)?;
                info!("Retrieved {} papers for {:?}", response.results.len(), query);
                reporter
                    .complete(format!(
                        "Exa search completed. Retrieved {} research papers.",
                        response.results.len()
                    ))
                    .await?;
                Ok(text)
            }
            Err(e) => {
                warn!("Search for {:?} failed: {}", query, e);
                reporter
                    .error(format!("Error during Exa search: {}", e))
                    .await?;
                Ok(error_payload(&e))
            }
        }
    }

    fn build_request(&self, query: &str, window: &LookbackWindow) -> SearchRequest {
        SearchRequest {
            query: query.to_string(),
            search_type: SearchType::Auto,
            category: Some(CATEGORY.to_string()),
            start_published_date: Some(window.start_published_date()),
            end_published_date: Some(window.end_published_date()),
            num_results: NUM_RESULTS,
            contents: Contents { highlights: true },
        }
    }
}

/// Serialize the provider response and undo one level of backslash escaping
fn render(response: &SearchResponse) -> Result<String> {
    let raw = serde_json::to_string_pretty(response)?;
    Ok(unescape_backslashes(&raw))
}

/// `{"error": "<message>"}` with the message JSON-escaped and non-ASCII
/// characters written as `\uXXXX` escapes
fn error_payload(error: &ProviderError) -> String {
    let quoted = serde_json::Value::String(error.to_string()).to_string();
    format!("{{\"error\": {}}}", escape_non_ascii(&quoted))
}

/// Replace every character outside printable ASCII with UTF-16 `\uXXXX` escapes
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if (c as u32) <= 0x7e {
            out.push(c);
            continue;
        }
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
            out.push_str(&format!("\\u{:04x}", unit));
        }
    }
    out
}
