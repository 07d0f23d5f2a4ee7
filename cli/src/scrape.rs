use anyhow::{Context, Result};
use pantry_core::{ParsedRecipe, ReqwestClient, SchemaOrgParser, Scraper};
use std::sync::Arc;
use std::time::Duration;

fn build_scraper(timeout_secs: Option<u64>) -> Result<Scraper> {
    let mut builder = ReqwestClient::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build().context("Failed to build HTTP client")?;
    Ok(Scraper::new(Arc::new(client), Arc::new(SchemaOrgParser)))
}

pub async fn scrape_url(url: &str, timeout_secs: Option<u64>) -> Result<ParsedRecipe> {
    let scraper = build_scraper(timeout_secs)?;
    let recipe = scraper
        .scrape(url)
        .await
        .with_context(|| format!("Failed to scrape {}", url))?;
    Ok(recipe)
}

/// Fetch and parse a URL, printing the recipe as JSON.
pub async fn scrape(url: &str, timeout_secs: Option<u64>) -> Result<()> {
    let recipe = scrape_url(url, timeout_secs).await?;
    println!("{}", serde_json::to_string_pretty(&recipe)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_scrape_url_against_local_server() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<script type="application/ld+json">{"@type": "Recipe", "name": "Served Stew", "recipeYield": 4}</script>"#,
            ))
            .mount(&server)
            .await;

        let recipe = scrape_url(&server.uri(), Some(5)).await.unwrap();
        assert_eq!(recipe.title.as_deref(), Some("Served Stew"));
        assert_eq!(recipe.yields.as_deref(), Some("4 servings"));
    }

    #[tokio::test]
    async fn test_upstream_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = scrape_url(&server.uri(), None).await.unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to fetch URL: 500"));
    }
}
