use serde::Deserialize;

use crate::errors::{BotError, BotResult};

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";

/// A single resolved video from the search provider
#[derive(Debug, Clone)]
pub struct VideoCandidate {
    pub video_id: String,
    pub title: String,
}

impl VideoCandidate {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: SearchItemSnippet,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct SearchItemSnippet {
    title: String,
}

/// Client for the YouTube Data API v3 search endpoint
pub struct SearchClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl SearchClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            endpoint: SEARCH_ENDPOINT.to_string(),
        }
    }

    #[cfg(test)]
    fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Resolve a free-text query to the single best-matching video. One
    /// request, first item taken verbatim. `Ok(None)` means the provider
    /// returned no results, which is not an error.
    pub async fn resolve(&self, query: &str) -> BotResult<Option<VideoCandidate>> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("maxResults", "1"),
                ("type", "video"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let payload: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| BotError::search_error(format!("malformed search response: {}", e)))?;

        Ok(payload.items.into_iter().next().map(|item| VideoCandidate {
            video_id: item.id.video_id,
            title: item.snippet.title,
        }))
    }
}
