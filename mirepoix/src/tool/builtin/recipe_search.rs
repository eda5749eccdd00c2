//! Recipe search tool backed by the Exa web-search API.

use crate::{
    error::{AgentError, Result},
    tool::Tool,
    types::SearchHit,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const EXA_BASE_URL: &str = "https://api.exa.ai";

/// Default number of results per search
pub const DEFAULT_NUM_RESULTS: usize = 5;

/// Thin client for the Exa `/search` endpoint
#[derive(Debug, Clone)]
pub struct ExaSearchClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    query: &'a str,
    num_results: usize,
    contents: ContentsRequest,
}

#[derive(Debug, Serialize)]
struct ContentsRequest {
    highlights: bool,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    title: Option<String>,
    url: String,
    #[serde(default)]
    highlights: Vec<String>,
}

impl ExaSearchClient {
    /// Create a client for the public Exa endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: EXA_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Run a search and return the decoded hits.
    ///
    /// Snippets come from the first highlight of each result; results
    /// without highlights get an empty snippet.
    pub async fn search(&self, query: &str, num_results: usize) -> Result<Vec<SearchHit>> {
        let request = SearchRequest {
            query,
            num_results,
            contents: ContentsRequest { highlights: true },
        };

        let response = self
            .http
            .post(format!("{}/search", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;
        Ok(body.results.into_iter().map(SearchResult::into_hit).collect())
    }
}

impl SearchResult {
    fn into_hit(self) -> SearchHit {
        let snippet = self.highlights.into_iter().next().unwrap_or_default();
        SearchHit::new(self.title.unwrap_or_default(), self.url, snippet)
    }
}

/// Searches the web for recipes and cooking details.
///
/// The raw Action input is used verbatim as the search query.
#[derive(Debug, Clone)]
pub struct RecipeSearchTool {
    client: ExaSearchClient,
    num_results: usize,
}

impl RecipeSearchTool {
    /// Create a recipe search tool with the default result count
    pub fn new(client: ExaSearchClient) -> Self {
        Self {
            client,
            num_results: DEFAULT_NUM_RESULTS,
        }
    }

    /// Override the number of results fetched per search
    #[must_use]
    pub fn with_num_results(mut self, num_results: usize) -> Self {
        self.num_results = num_results;
        self
    }

    /// Render hits as numbered observation text
    pub(crate) fn render_hits(hits: &[SearchHit]) -> String {
        if hits.is_empty() {
            return "No results found.".to_string();
        }
        hits.iter()
            .enumerate()
            .map(|(i, hit)| {
                if hit.snippet.is_empty() {
                    format!("{}. {} ({})", i + 1, hit.title, hit.url)
                } else {
                    format!("{}. {} ({}) - {}", i + 1, hit.title, hit.url, hit.snippet)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl Tool for RecipeSearchTool {
    fn name(&self) -> &str {
        "search_recipes"
    }

    fn description(&self) -> &str {
        "Search for relevant recipes or cooking details given a user's query"
    }

    async fn call(&self, input: &str) -> Result<String> {
        let query = input.trim();
        if query.is_empty() {
            return Err(AgentError::tool(self.name(), "empty search query"));
        }

        let hits = self.client.search(query, self.num_results).await?;
        tracing::debug!(query, hits = hits.len(), "recipe search completed");
        Ok(Self::render_hits(&hits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_search_response() {
        let json = r#"{
            "results": [
                {
                    "title": "Perfect Risotto",
                    "url": "https://example.com/risotto",
                    "highlights": ["stir constantly", "warm stock"]
                },
                {
                    "title": null,
                    "url": "https://example.com/untitled"
                }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let hits: Vec<SearchHit> = response.results.into_iter().map(SearchResult::into_hit).collect();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Perfect Risotto");
        assert_eq!(hits[0].snippet, "stir constantly");
        assert_eq!(hits[1].title, "");
        assert_eq!(hits[1].snippet, "");
    }

    #[test]
    fn test_render_hits() {
        let hits = vec![
            SearchHit::new("Perfect Risotto", "https://example.com/risotto", "stir constantly"),
            SearchHit::new("Plain Rice", "https://example.com/rice", ""),
        ];

        let rendered = RecipeSearchTool::render_hits(&hits);
        assert_eq!(
            rendered,
            "1. Perfect Risotto (https://example.com/risotto) - stir constantly\n\
             2. Plain Rice (https://example.com/rice)"
        );
    }

    #[test]
    fn test_render_no_hits() {
        assert_eq!(RecipeSearchTool::render_hits(&[]), "No results found.");
    }

    #[test]
    fn test_request_body_shape() {
        let request = SearchRequest {
            query: "risotto",
            num_results: 3,
            contents: ContentsRequest { highlights: true },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["query"], "risotto");
        assert_eq!(json["numResults"], 3);
        assert_eq!(json["contents"]["highlights"], true);
    }
}
