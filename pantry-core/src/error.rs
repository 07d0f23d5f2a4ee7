use thiserror::Error;

/// Why a page could not be fetched.
///
/// The two variants are the only failure classes the scrape pipeline
/// distinguishes: the upstream server answered with an error status, or no
/// usable answer arrived at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server responded, but with a non-2xx status.
    #[error("Failed to fetch URL: {status}")]
    Status { status: u16 },

    /// DNS, connect, TLS, timeout, redirect loop, or body read failure.
    #[error("Request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if err.is_status() => FetchError::Status {
                status: status.as_u16(),
            },
            _ => FetchError::Request(describe(&err)),
        }
    }
}

/// Flatten a reqwest error and its source chain into one line.
/// reqwest's own Display stops at "error sending request for url (...)".
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
