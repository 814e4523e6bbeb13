//! Company News API backend
//!
//! Thin HTTP gateway over two third-party data providers:
//! NewsAPI for company news, Alpha Vantage for company metadata and
//! symbol search. Each route is one upstream call plus field remapping.

mod config;   // environment-sourced configuration
mod error;    // typed service errors
mod handlers; // HTTP request handlers
mod models;   // request/response shapes
mod services; // upstream clients and response mapping

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use crate::config::AppConfig;
use crate::services::{MarketService, NewsService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();

    if config.news_api_key.is_none() {
        log::warn!("NEWS_API_KEY not found in environment variables; /api/company-news will fail");
    }
    if config.alpha_vantage_key.is_none() {
        log::warn!(
            "ALPHA_VANTAGE_KEY not found in environment variables; company-info and search-symbol will fail"
        );
    }

    log::info!("Company News API server running on http://{}", config.bind_addr());

    // Upstream clients are built once and shared read-only across workers.
    let news = web::Data::new(NewsService::new(config.news_api_key.clone()));
    let market = web::Data::new(MarketService::new(config.alpha_vantage_key.clone()));

    let bind_addr = config.bind_addr();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive()) // browser frontend lives on another origin
            .app_data(news.clone())
            .app_data(market.clone())
            .configure(handlers::config)
    })
    .bind(bind_addr)?
    .run()
    .await
}
