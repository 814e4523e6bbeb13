//! Upstream service clients
//!
//! One client per third-party provider; each call is a single outbound
//! request followed by field remapping.

pub mod market_service; // Alpha Vantage: company overview and symbol search
pub mod news_service;   // NewsAPI: company news search

pub use market_service::MarketService;
pub use news_service::NewsService;
