//! Outbound HTTP for the scrape pipeline.
//!
//! Every page fetch goes through [`HttpClient`] so handlers and tests can swap
//! the network for canned responses.

mod client;

pub use client::{HttpClient, MockClient, MockResponse, ReqwestClient, ReqwestClientBuilder};

/// Browser signature sent on every outbound request. Many recipe sites serve
/// a bot wall to unknown agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default number of redirects followed before giving up.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;
