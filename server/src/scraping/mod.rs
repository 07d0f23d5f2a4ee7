//! Glue between the scrape endpoints and the pipeline: host policy, error
//! translation, and persistence of scraped recipes.

mod persist;

pub use persist::save_parsed_recipe;

use crate::api::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pantry_core::FetchError;
use std::env;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScrapeError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Host not allowed: {0}")]
    HostNotAllowed(String),
}

/// A URL that cannot be requested at all fails the same way a transport
/// error does. Only the allowlist is a client-side rejection.
impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        match self {
            ScrapeError::InvalidUrl(reason) => {
                fetch_error_response(&FetchError::Request(format!("Invalid URL: {}", reason)))
            }
            ScrapeError::HostNotAllowed(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    detail: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

/// Check if a URL's host is allowed for scraping.
/// If SCRAPE_ALLOWED_HOSTS is set, only those hosts are allowed.
/// If not set, all hosts are allowed (production mode).
pub fn is_host_allowed(url: &str) -> Result<(), ScrapeError> {
    check_host(url, env::var("SCRAPE_ALLOWED_HOSTS").ok().as_deref())
}

fn check_host(url: &str, allowed: Option<&str>) -> Result<(), ScrapeError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| ScrapeError::InvalidUrl(e.to_string()))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| ScrapeError::InvalidUrl("No host in URL".to_string()))?;

    if let Some(allowed) = allowed {
        let allowed_hosts: Vec<&str> = allowed.split(',').map(|s| s.trim()).collect();
        // Include port if present
        let host_with_port = if let Some(port) = parsed.port() {
            format!("{}:{}", host, port)
        } else {
            host.to_string()
        };

        if !allowed_hosts
            .iter()
            .any(|&h| h == host_with_port || h == host)
        {
            return Err(ScrapeError::HostNotAllowed(host_with_port));
        }
    }

    Ok(())
}

/// Translate a fetch failure into the endpoint's error response. An upstream
/// status is mirrored as-is; transport failures are a 500.
pub fn fetch_error_response(err: &FetchError) -> Response {
    let status = match err {
        FetchError::Status { status } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        FetchError::Request(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            detail: err.to_string(),
        }),
    )
        .into_response()
}
