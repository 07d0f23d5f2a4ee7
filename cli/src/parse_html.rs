use anyhow::{Context, Result};
use pantry_core::{ParsedRecipe, Scraper};
use std::fs;
use std::path::Path;

/// Run the parse half of the pipeline over a saved page.
pub fn parse_file(file: &Path, source_url: &str) -> Result<ParsedRecipe> {
    let html = fs::read_to_string(file)
        .with_context(|| format!("Failed to read HTML file: {}", file.display()))?;

    let scraper = Scraper::with_defaults().context("Failed to build scraper")?;
    Ok(scraper.scrape_html(&html, source_url))
}

/// Parse a recipe from an HTML file and print it as JSON.
pub fn parse_html(file: &Path, source_url: &str) -> Result<()> {
    let recipe = parse_file(file, source_url)?;
    println!("{}", serde_json::to_string_pretty(&recipe)?);
    Ok(())
}
