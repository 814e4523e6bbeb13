//! Company data models
//!
//! Shapes for the company-info and search-symbol routes, mapped from
//! Alpha Vantage OVERVIEW and SYMBOL_SEARCH payloads.

use serde::{Deserialize, Serialize};

/// Pointer to the company's latest annual report filing.
///
/// Synthesized locally from a fixed SEC full-text-search template; no
/// upstream source provides this record. Known placeholder: the year is
/// hardcoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualReport {
    pub year: String,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub report_type: String,
}

/// Company overview, reshaped from the Alpha Vantage OVERVIEW function.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    pub symbol: String,
    pub sector: String,
    pub industry: String,
    /// Market capitalization, passed through as the upstream's string
    pub market_cap: String,
    pub description: String,
    /// Present only when the upstream record resolves a symbol
    pub annual_report: Option<AnnualReport>,
}

/// Best symbol match, reshaped from the first SYMBOL_SEARCH entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct SymbolMatch {
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type")]
    pub match_type: String,
    pub region: String,
    pub currency: String,
}

/// Sentinel payload returned (with HTTP 200) when the search yields no match.
#[derive(Debug, Serialize, Deserialize)]
pub struct NoSymbolMatch {
    /// Always null; lets clients key off the same field as a hit
    pub symbol: Option<String>,
    pub message: String,
}

impl Default for NoSymbolMatch {
    fn default() -> Self {
        Self {
            symbol: None,
            message: "No matching stock symbol found".to_string(),
        }
    }
}
