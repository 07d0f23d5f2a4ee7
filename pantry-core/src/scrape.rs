//! The scrape pipeline: fetch, parse, normalize.

use std::sync::Arc;

use crate::error::FetchError;
use crate::extract::{RecipeParser, SchemaOrgParser};
use crate::http::{HttpClient, ReqwestClient};
use crate::normalize::normalize;
use crate::types::ParsedRecipe;

/// Fetches a page and turns its recipe markup into a [`ParsedRecipe`].
///
/// Both collaborators are injected so tests can swap in canned pages or a
/// stub parser. One `Scraper` is meant to be shared across requests.
#[derive(Clone)]
pub struct Scraper {
    client: Arc<dyn HttpClient>,
    parser: Arc<dyn RecipeParser>,
}

impl Scraper {
    pub fn new(client: Arc<dyn HttpClient>, parser: Arc<dyn RecipeParser>) -> Self {
        Self { client, parser }
    }

    /// A scraper backed by [`ReqwestClient`] and [`SchemaOrgParser`].
    pub fn with_defaults() -> Result<Self, FetchError> {
        Ok(Self::new(
            Arc::new(ReqwestClient::new()?),
            Arc::new(SchemaOrgParser),
        ))
    }

    /// Fetch `url` and parse it. Only the fetch can fail; a page without
    /// usable markup yields a recipe with every field `None`.
    pub async fn scrape(&self, url: &str) -> Result<ParsedRecipe, FetchError> {
        tracing::info!(url, "scraping recipe");
        let html = self.client.fetch_html(url).await?;
        Ok(self.scrape_html(&html, url))
    }

    /// Parse already-fetched HTML as if it came from `url`.
    pub fn scrape_html(&self, html: &str, url: &str) -> ParsedRecipe {
        let fields = self.parser.parse(html, url);
        tracing::debug!(url, keys = fields.len(), "parser returned fields");
        normalize(fields)
    }
}
