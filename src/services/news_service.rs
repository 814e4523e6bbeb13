//! NewsAPI client
//!
//! Fetches recent articles mentioning a company from the NewsAPI
//! "everything" endpoint and reshapes them into the simplified schema.
//! API docs: https://newsapi.org/docs/endpoints/everything

use reqwest::Client;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{CompanyNews, NewsArticle};

const NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

/// Fixed result cap; the upstream truncates, not us.
const PAGE_SIZE: &str = "10";

/// Client for the news provider.
pub struct NewsService {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl NewsService {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, NEWS_API_URL.to_string())
    }

    /// Same as `new` but against a custom endpoint; used by tests to point
    /// the client at a local mock server.
    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Latest articles mentioning `company_name`, newest first, capped at 10.
    ///
    /// The name is wrapped in double quotes so the upstream treats it as an
    /// exact phrase; URL encoding is left to the HTTP client, so quotes and
    /// slashes inside the name are safe.
    pub async fn company_news(&self, company_name: &str) -> Result<CompanyNews, ApiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ApiError::MissingApiKey("NEWS_API_KEY"))?;

        let phrase = format!("\"{}\"", company_name);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", phrase.as_str()),
                ("sortBy", "publishedAt"),
                ("pageSize", PAGE_SIZE),
                ("apiKey", api_key),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data: Value = response.json().await?;

        let news = data["articles"]
            .as_array()
            .map(|articles| articles.iter().map(map_article).collect())
            .unwrap_or_default();

        Ok(CompanyNews {
            company_name: company_name.to_string(),
            total_results: data["totalResults"].as_u64().unwrap_or(0),
            news,
        })
    }
}

/// Map one upstream article object into the simplified schema.
///
/// Absent fields become empty strings, except the summary which falls back
/// to a fixed placeholder. The publish timestamp is truncated to its date
/// portion by splitting on the ISO date/time separator.
fn map_article(article: &Value) -> NewsArticle {
    NewsArticle {
        title: article["title"].as_str().unwrap_or("").to_string(),
        source: article["source"]["name"].as_str().unwrap_or("").to_string(),
        date: article["publishedAt"]
            .as_str()
            .unwrap_or("")
            .split('T')
            .next()
            .unwrap_or("")
            .to_string(),
        summary: article["description"]
            .as_str()
            .unwrap_or("No summary available")
            .to_string(),
        url: article["url"].as_str().unwrap_or("").to_string(),
        image_url: article["urlToImage"].as_str().map(String::from),
    }
}
