//! News data models
//!
//! Simplified article schema served to the frontend. Field names are
//! camelCase on the wire to match the original API contract.

use serde::{Deserialize, Serialize};

/// One news article, reshaped from a NewsAPI article object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    /// Article headline
    pub title: String,
    /// Publishing outlet name
    pub source: String,
    /// Publish date (ISO date, time of day dropped)
    pub date: String,
    /// Article description, or "No summary available"
    pub summary: String,
    /// Link to the article
    pub url: String,
    /// Lead image, if the outlet provided one
    pub image_url: Option<String>,
}

/// Response payload for the company-news route.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyNews {
    /// The queried company name, echoed verbatim
    pub company_name: String,
    /// Total matches reported by the upstream, not the length of `news`
    pub total_results: u64,
    pub news: Vec<NewsArticle>,
}
