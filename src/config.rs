//! Configuration module
//!
//! All configuration comes from environment variables (a `.env` file is
//! honored via dotenv) and is read exactly once at startup. The resulting
//! value is immutable and handed to the services by injection.

use std::env;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// NewsAPI key (company news route)
    pub news_api_key: Option<String>,
    /// Alpha Vantage key (company info and symbol search routes)
    pub alpha_vantage_key: Option<String>,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// Missing keys are kept as `None` rather than failing startup; the
    /// affected routes report the missing key per request.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or_else(default_port);
        let host = env::var("HOST").unwrap_or_else(|_| default_host());

        Self {
            host,
            port,
            news_api_key: env::var("NEWS_API_KEY").ok().filter(|k| !k.is_empty()),
            alpha_vantage_key: env::var("ALPHA_VANTAGE_KEY").ok().filter(|k| !k.is_empty()),
        }
    }

    /// Server bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            news_api_key: None,
            alpha_vantage_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..AppConfig::default()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn defaults_match_original_deployment() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3001");
        assert!(config.news_api_key.is_none());
        assert!(config.alpha_vantage_key.is_none());
    }
}
