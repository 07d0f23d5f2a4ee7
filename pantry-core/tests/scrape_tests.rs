//! End-to-end pipeline runs: canned or locally served pages through the
//! default parser.

use std::sync::Arc;

use pantry_core::{MockClient, ReqwestClient, SchemaOrgParser, Scraper};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RECIPE_PAGE: &str = r#"
<!DOCTYPE html>
<html lang="en-US">
<head>
    <title>Weeknight Chili | Example Kitchen</title>
    <meta property="og:site_name" content="Example Kitchen">
    <meta property="og:image" content="https://example.com/og-chili.jpg">
    <script type="application/ld+json">
    {
        "@context": "https://schema.org",
        "@graph": [
            {"@type": "Organization", "name": "Example Kitchen"},
            {
                "@type": "Recipe",
                "name": "Weeknight Chili",
                "author": [{"@type": "Person", "name": "Sam Cook"}],
                "image": {"@type": "ImageObject", "url": "https://example.com/chili.jpg"},
                "recipeIngredient": ["1 lb ground beef", "1 onion, diced", "2 cans beans"],
                "recipeInstructions": [
                    {"@type": "HowToStep", "text": "Brown the beef."},
                    {"@type": "HowToStep", "text": "Add everything else and simmer."}
                ],
                "totalTime": "PT45M",
                "recipeYield": ["6", "6 bowls"],
                "suitableForDiet": ["https://schema.org/GlutenFreeDiet"]
            }
        ]
    }
    </script>
</head>
<body>
    <a href="https://example.com/">Home</a>
</body>
</html>
"#;

#[tokio::test]
async fn test_scrape_served_page_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chili"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RECIPE_PAGE))
        .mount(&server)
        .await;

    let scraper = Scraper::new(
        Arc::new(ReqwestClient::new().unwrap()),
        Arc::new(SchemaOrgParser),
    );
    let url = format!("{}/chili", server.uri());
    let recipe = scraper.scrape(&url).await.unwrap();

    assert_eq!(recipe.title.as_deref(), Some("Weeknight Chili"));
    assert_eq!(recipe.author.as_deref(), Some("Sam Cook"));
    assert_eq!(recipe.image.as_deref(), Some("https://example.com/chili.jpg"));
    assert_eq!(recipe.site_name.as_deref(), Some("Example Kitchen"));
    assert_eq!(recipe.language.as_deref(), Some("en-US"));
    assert_eq!(recipe.canonical_url.as_deref(), Some(url.as_str()));
    assert_eq!(recipe.host.as_deref(), Some("127.0.0.1"));
    assert_eq!(recipe.total_time, Some(45));
    assert_eq!(recipe.yields.as_deref(), Some("6 servings"));
    assert_eq!(
        recipe.dietary_restrictions,
        Some(vec!["Gluten Free".to_string()])
    );
    assert_eq!(recipe.ingredients.as_ref().map(Vec::len), Some(3));

    let groups = recipe.ingredient_groups.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].purpose, None);
    assert_eq!(groups[0].ingredients.len(), 3);

    assert_eq!(
        recipe.instructions.as_deref(),
        Some("Brown the beef.\nAdd everything else and simmer.")
    );
    assert_eq!(recipe.links.unwrap().len(), 1);
}

#[tokio::test]
async fn test_page_without_recipe_markup_is_not_an_error() {
    let url = "https://www.example.com/about";
    let scraper = Scraper::new(
        Arc::new(MockClient::new().with_html(url, "<html><body><p>About us</p></body></html>")),
        Arc::new(SchemaOrgParser),
    );

    let recipe = scraper.scrape(url).await.unwrap();

    assert_eq!(recipe.title, None);
    assert_eq!(recipe.ingredients, None);
    assert_eq!(recipe.instructions, None);
    assert_eq!(recipe.host.as_deref(), Some("example.com"));
}
