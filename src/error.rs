//! Service error types
//!
//! Every data route fails in one of three ways, each mapped to a distinct
//! HTTP response at the handler call site.

use actix_web::HttpResponse;
use thiserror::Error;

use crate::models::ErrorBody;

/// Errors produced by the upstream service layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required API key is not configured; no outbound call was made.
    #[error("{0} not configured")]
    MissingApiKey(&'static str),

    /// The outbound call failed: network error, timeout, or non-2xx status.
    #[error(transparent)]
    Upstream(#[from] reqwest::Error),

    /// The upstream answered 200 but signaled a quota limit, or could not
    /// resolve the requested symbol.
    #[error("API rate limit reached or invalid symbol")]
    RateLimitOrInvalidSymbol,
}

impl ApiError {
    /// Convert into the JSON error response for a route.
    ///
    /// `context` is the route-specific failure message used for upstream
    /// errors ("Failed to fetch company news", ...).
    pub fn to_response(&self, context: &str) -> HttpResponse {
        match self {
            ApiError::MissingApiKey(_) => {
                HttpResponse::InternalServerError().json(ErrorBody::new(self.to_string()))
            }
            ApiError::Upstream(e) => HttpResponse::InternalServerError()
                .json(ErrorBody::new(context).with_details(e.to_string())),
            ApiError::RateLimitOrInvalidSymbol => HttpResponse::TooManyRequests().json(
                ErrorBody::new(self.to_string())
                    .with_suggestion("Try again in a minute or check the stock symbol"),
            ),
        }
    }
}
