//! Alpha Vantage client
//!
//! Two functions of the same query endpoint are used: OVERVIEW for company
//! metadata and SYMBOL_SEARCH for resolving a company name to a ticker.
//! API docs: https://www.alphavantage.co/documentation/

use reqwest::Client;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{AnnualReport, CompanyInfo, SymbolMatch};

const ALPHA_VANTAGE_URL: &str = "https://www.alphavantage.co/query";

/// Client for the market-data provider.
pub struct MarketService {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl MarketService {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, ALPHA_VANTAGE_URL.to_string())
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

    async fn query(&self, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ApiError::MissingApiKey("ALPHA_VANTAGE_KEY"))?;

        let response = self
            .client
            .get(&self.base_url)
            .query(params)
            .query(&[("apikey", api_key)])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Company overview for `symbol` (uppercased before querying).
    ///
    /// Alpha Vantage reports quota exhaustion as a 200 response carrying a
    /// `Note` field, and an unknown symbol as an empty object; both cases
    /// surface as `RateLimitOrInvalidSymbol`.
    pub async fn company_overview(&self, symbol: &str) -> Result<CompanyInfo, ApiError> {
        let upper = symbol.to_uppercase();
        let data = self
            .query(&[("function", "OVERVIEW"), ("symbol", upper.as_str())])
            .await?;

        let name = data["Name"].as_str().unwrap_or("");
        if data.get("Note").is_some() || name.is_empty() {
            return Err(ApiError::RateLimitOrInvalidSymbol);
        }

        Ok(map_overview(&data, symbol))
    }

    /// Best match for a free-text company name, or `None` when the upstream
    /// match list is empty. Upstream ordering is trusted; no re-ranking.
    pub async fn symbol_search(&self, company_name: &str) -> Result<Option<SymbolMatch>, ApiError> {
        let data = self
            .query(&[("function", "SYMBOL_SEARCH"), ("keywords", company_name)])
            .await?;

        let top_match = data["bestMatches"]
            .as_array()
            .and_then(|matches| matches.first());

        Ok(top_match.map(map_symbol_match))
    }
}

/// Map an OVERVIEW payload into the simplified schema.
///
/// The annual-report block is synthesized from a fixed SEC full-text-search
/// template over the symbol as requested (not uppercased), and only when the
/// upstream record resolves a symbol. The year is a hardcoded placeholder.
fn map_overview(data: &Value, requested_symbol: &str) -> CompanyInfo {
    let name = data["Name"].as_str().unwrap_or("");

    let annual_report = data["Symbol"]
        .as_str()
        .filter(|s| !s.is_empty())
        .map(|_| AnnualReport {
            year: "2023".to_string(),
            title: format!("{} Annual Report 2023", name),
            url: format!(
                "https://www.sec.gov/edgar/search/#/q={}&dateRange=custom&category=form&forms=10-K",
                requested_symbol
            ),
            report_type: "SEC 10-K Filing".to_string(),
        });

    CompanyInfo {
        name: name.to_string(),
        symbol: data["Symbol"].as_str().unwrap_or("").to_string(),
        sector: data["Sector"].as_str().unwrap_or("").to_string(),
        industry: data["Industry"].as_str().unwrap_or("").to_string(),
        market_cap: data["MarketCapitalization"].as_str().unwrap_or("").to_string(),
        description: data["Description"].as_str().unwrap_or("").to_string(),
        annual_report,
    }
}

/// Map one SYMBOL_SEARCH entry (Alpha Vantage's numbered keys) into the
/// simplified schema.
fn map_symbol_match(entry: &Value) -> SymbolMatch {
    SymbolMatch {
        symbol: entry["1. symbol"].as_str().unwrap_or("").to_string(),
        name: entry["2. name"].as_str().unwrap_or("").to_string(),
        match_type: entry["3. type"].as_str().unwrap_or("").to_string(),
        region: entry["4. region"].as_str().unwrap_or("").to_string(),
        currency: entry["8. currency"].as_str().unwrap_or("").to_string(),
    }
}
